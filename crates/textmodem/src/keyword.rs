//! Matching fixed keywords (`null`, `true`, ...) against the cursor.

use crate::{Cursor, ParseError};

/// What happened after feeding one more code point into the matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Matched, but the keyword is not finished yet.
    NeedMore,
    /// Matched the final code point of the keyword.
    Done,
    /// Did not match the expected code point.
    Reject,
}

/// Tracks how much of a keyword is still expected.
///
/// ```rust
/// use textmodem::{Cursor, KeywordMatcher, ParseError};
///
/// let mut cursor = Cursor::new();
/// cursor.extend("trux".chars());
/// cursor.advance().unwrap();
/// assert_eq!(
///     KeywordMatcher::new("true").match_at(&mut cursor),
///     Err(ParseError::UnexpectedKeyword { line: 0, character: 4 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatcher<'k> {
    rest: &'k str,
}

impl<'k> KeywordMatcher<'k> {
    #[must_use]
    pub fn new(keyword: &'k str) -> Self {
        Self { rest: keyword }
    }

    /// The part of the keyword not matched yet.
    #[must_use]
    pub fn rest(&self) -> &'k str {
        self.rest
    }

    /// Feeds the next code point. A rejected code point leaves the matcher
    /// unchanged.
    pub fn step(&mut self, c: char) -> Step {
        let mut chars = self.rest.chars();
        match chars.next() {
            Some(expected) if expected == c => {
                self.rest = chars.as_str();
                if self.rest.is_empty() {
                    Step::Done
                } else {
                    Step::NeedMore
                }
            }
            _ => Step::Reject,
        }
    }

    /// Matches the rest of the keyword starting at the cursor's current code
    /// point. On success the cursor is left just past the keyword, which may
    /// be the end of input.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnexpectedKeyword`] at the first code point that does
    ///   not match.
    /// - [`ParseError::EndOfFile`] if the input ends inside the keyword.
    pub fn match_at(mut self, cursor: &mut Cursor) -> Result<(), ParseError> {
        if self.rest.is_empty() {
            return Ok(());
        }

        loop {
            let c = cursor.current().ok_or(ParseError::EndOfFile)?;
            match self.step(c) {
                Step::NeedMore => {
                    cursor.advance()?;
                }
                Step::Done => {
                    // Running off the end right after a keyword is fine.
                    let _ = cursor.advance();
                    return Ok(());
                }
                Step::Reject => return Err(cursor.unexpected_keyword()),
            }
        }
    }
}
