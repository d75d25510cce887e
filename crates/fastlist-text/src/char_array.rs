//! Character buffer with in-place number formatting.

use std::fmt;
use std::ops::{Deref, DerefMut};

use fastlist_core::FastList;

use crate::sink::TextSink;

/// An append-only text buffer built on [`FastList<char>`].
///
/// Dereferences to the underlying list, so every list operation is
/// available too. The buffer never shrinks itself; call
/// [`clear`](FastList::clear) to start over while keeping the capacity.
///
/// ```
/// use fastlist_text::CharArray;
///
/// let mut label = CharArray::new();
/// label.append_str("hp ");
/// label.append_i32(7, 3);
/// label.append_char('/');
/// label.append_f32(12.5, 1);
/// assert_eq!(label.to_text(), "hp 007/12.5");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CharArray {
    chars: FastList<char>,
}

impl CharArray {
    /// Capacity used by [`CharArray::new`].
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Glyph for each decimal digit value.
    pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

    /// Create an empty buffer with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
    /// slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty buffer with room for `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: FastList::with_capacity(capacity),
        }
    }

    /// Create a buffer holding `text`, with room for twice its length.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_capacity(text, text.chars().count() * 2)
    }

    /// Create a buffer holding `text` with an explicit starting capacity.
    ///
    /// The buffer still grows if `capacity` is smaller than the text.
    pub fn from_text_with_capacity(text: &str, capacity: usize) -> Self {
        let mut buffer = Self::with_capacity(capacity);
        buffer.append_str(text);
        buffer
    }

    /// Append every character of `text` in order.
    pub fn append_str(&mut self, text: &str) {
        for c in text.chars() {
            self.chars.add(c);
        }
    }

    /// Append a single character.
    #[inline]
    pub fn append_char(&mut self, c: char) {
        self.chars.add(c);
    }

    /// Append the decimal form of `value`, left-padding the digits with
    /// zeros to at least `min_len_pad_left`.
    ///
    /// The sign is not counted towards the padding: `append_i32(-5, 3)`
    /// appends `"-005"`.
    pub fn append_i32(&mut self, value: i32, min_len_pad_left: usize) {
        if value < 0 {
            self.chars.add('-');
        }
        self.append_magnitude(u64::from(value.unsigned_abs()), min_len_pad_left);
    }

    /// 64-bit form of [`append_i32`](Self::append_i32).
    pub fn append_i64(&mut self, value: i64, min_len_pad_left: usize) {
        if value < 0 {
            self.chars.add('-');
        }
        self.append_magnitude(value.unsigned_abs(), min_len_pad_left);
    }

    /// Append `value` with exactly `digits_after_decimal` fractional digits.
    ///
    /// The fraction is truncated, not rounded, and is computed as
    /// `(value - trunc(value)) * 10^digits`. For negative non-integers that
    /// term is negative too and keeps its sign: `append_f32(-2.5, 1)`
    /// appends `"-2.-5"`. With `digits_after_decimal == 0` only the
    /// truncated integer part is written.
    pub fn append_f32(&mut self, value: f32, digits_after_decimal: u32) {
        // Truncates toward zero; out-of-range values saturate.
        let whole = value as i32;
        self.append_i32(whole, 0);

        if digits_after_decimal > 0 {
            self.chars.add('.');
            let scale = 10i64.saturating_pow(digits_after_decimal);
            let fraction = f64::from(value - whole as f32) * scale as f64;
            self.append_i64(fraction as i64, digits_after_decimal as usize);
        }
    }

    /// Copy the active characters into a new `String`.
    ///
    /// The one operation on this type that always allocates.
    pub fn to_text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Hand the backing block and active length to `sink` without copying.
    pub fn expose_for_rendering<S: TextSink + ?Sized>(&self, sink: &mut S) {
        let view = self.chars.raw_view();
        sink.set_chars(view.block(), view.len());
    }

    /// Give up the wrapper and return the underlying list.
    pub fn into_list(self) -> FastList<char> {
        self.chars
    }

    /// Write the digits of `magnitude` least-significant first, pad, then
    /// reverse the run in place.
    fn append_magnitude(&mut self, mut magnitude: u64, min_len_pad_left: usize) {
        let number_start = self.chars.len();
        let mut digit_count = 1;
        self.chars.add(Self::DIGITS[(magnitude % 10) as usize]);

        while magnitude > 9 {
            magnitude /= 10;
            self.chars.add(Self::DIGITS[(magnitude % 10) as usize]);
            digit_count += 1;
        }
        while digit_count < min_len_pad_left {
            self.chars.add('0');
            digit_count += 1;
        }

        self.chars.as_mut_slice()[number_start..].reverse();
    }
}

impl Default for CharArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for CharArray {
    type Target = FastList<char>;

    fn deref(&self) -> &FastList<char> {
        &self.chars
    }
}

impl DerefMut for CharArray {
    fn deref_mut(&mut self) -> &mut FastList<char> {
        &mut self.chars
    }
}

impl From<&str> for CharArray {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<FastList<char>> for CharArray {
    fn from(chars: FastList<char>) -> Self {
        Self { chars }
    }
}

impl fmt::Display for CharArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        for &c in self.chars.iter() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CharArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharArray")
            .field("text", &self.to_text())
            .field("capacity", &self.chars.capacity())
            .finish()
    }
}

/// Lets `write!` append into the buffer. Never fails.
impl fmt::Write for CharArray {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.append_char(c);
        Ok(())
    }
}
