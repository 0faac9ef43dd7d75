use core::fmt;

use thiserror::Error;

/// A zero-based line and a character counter within that line.
///
/// `character` counts advances since the last line terminator, so the first
/// code point of the input sits at `0:1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Every failure the cursor engine, or a grammar built on it, can report.
///
/// The set is closed and flat. Variants that point at an offending code point
/// carry its position; the rest describe the input as a whole.
///
/// [`ParseError::EndOfFile`] is overloaded: while streaming it only means the
/// buffered input ran out, at finalize time it means the document ended
/// mid-structure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("unknown parse error")]
    Unknown,
    #[error("empty input")]
    EmptyInput,
    #[error("unexpected character at {line}:{character}")]
    UnexpectedCharacter { line: usize, character: usize },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid unicode escape sequence")]
    InvalidUnicode,
    #[error("unexpected keyword at {line}:{character}")]
    UnexpectedKeyword { line: usize, character: usize },
    #[error("invalid number at {line}:{character}")]
    InvalidNumber { line: usize, character: usize },
    #[error("unexpected end of input")]
    EndOfFile,
}

impl ParseError {
    /// The source position carried by this error, if any.
    ///
    /// ```rust
    /// use textmodem::{ParseError, Position};
    ///
    /// let err = ParseError::InvalidNumber { line: 2, character: 7 };
    /// assert_eq!(err.position(), Some(Position::new(2, 7)));
    /// assert_eq!(ParseError::EndOfFile.position(), None);
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match *self {
            Self::UnexpectedCharacter { line, character }
            | Self::UnexpectedKeyword { line, character }
            | Self::InvalidNumber { line, character } => Some(Position { line, character }),
            Self::Unknown
            | Self::EmptyInput
            | Self::UnterminatedString
            | Self::InvalidUnicode
            | Self::EndOfFile => None,
        }
    }

    /// Returns `true` for [`ParseError::EndOfFile`].
    ///
    /// Streaming callers use this to tell "feed me more" apart from a real
    /// failure.
    #[must_use]
    pub fn is_end_of_file(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}
