//! The renderer side of the zero-copy hand-off.

/// A consumer that displays text straight from a character block.
///
/// Implementations treat `block[..len]` as the text and must not read past
/// `len`. The block is only borrowed for the duration of the call.
pub trait TextSink {
    /// Replace whatever the sink currently displays with `block[..len]`.
    fn set_chars(&mut self, block: &[char], len: usize);
}

/// Copies the active characters into the string, replacing its content.
///
/// Reuses the string's allocation when it is already large enough.
impl TextSink for String {
    fn set_chars(&mut self, block: &[char], len: usize) {
        self.clear();
        self.extend(&block[..len]);
    }
}
