//! Decoding of four-digit hexadecimal `\uXXXX` escapes.
//!
//! Each escape yields one UTF-16 code unit. A high surrogate is held until the
//! following escape supplies its low half; any other pairing is
//! [`ParseError::InvalidUnicode`].

use crate::ParseError;

/// Accumulates hex digits and decodes them to a `char`.
///
/// ```rust
/// use textmodem::UnicodeEscape;
///
/// let mut escape = UnicodeEscape::new();
/// let mut decoded = None;
/// for c in "D83DDE00".chars() {
///     decoded = escape.feed(c).unwrap();
/// }
/// assert_eq!(decoded, Some('😀'));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeEscape {
    unit: u16,
    digits: u8,
    high_surrogate: Option<u16>,
}

impl UnicodeEscape {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any partial escape, including a pending high surrogate.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a high surrogate waits for its low half.
    #[must_use]
    pub fn awaiting_low_surrogate(&self) -> bool {
        self.high_surrogate.is_some() && self.digits == 0
    }

    /// Feeds one hex digit.
    ///
    /// Returns `Ok(Some(c))` when a complete code point has been decoded,
    /// `Ok(None)` while more digits (or a low surrogate escape) are needed.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidUnicode`] for a non-hex digit, a lone low
    /// surrogate, or a high surrogate followed by anything but a low one. The
    /// decoder is reset afterwards.
    pub fn feed(&mut self, c: char) -> Result<Option<char>, ParseError> {
        let Some(digit) = c.to_digit(16) else {
            self.reset();
            return Err(ParseError::InvalidUnicode);
        };

        // Four hex digits always fit in a u16.
        self.unit = (self.unit << 4) | u16::try_from(digit).unwrap_or_default();
        self.digits += 1;
        if self.digits < 4 {
            return Ok(None);
        }

        let unit = self.unit;
        self.unit = 0;
        self.digits = 0;

        let decoded = match (self.high_surrogate.take(), unit) {
            (Some(high), 0xDC00..=0xDFFF) => {
                let scalar = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
                char::from_u32(scalar)
            }
            (None, 0xD800..=0xDBFF) => {
                self.high_surrogate = Some(unit);
                return Ok(None);
            }
            (Some(_), _) | (None, 0xDC00..=0xDFFF) => None,
            (None, unit) => char::from_u32(u32::from(unit)),
        };

        match decoded {
            Some(c) => Ok(Some(c)),
            None => {
                self.reset();
                Err(ParseError::InvalidUnicode)
            }
        }
    }
}
