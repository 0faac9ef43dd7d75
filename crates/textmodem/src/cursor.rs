//! The code-point cursor that grammars drive.
//!
//! A [`Cursor`] owns the unconsumed input and the source position of the code
//! point it currently sits on. Grammars inspect [`current`](Cursor::current),
//! move with [`advance`](Cursor::advance), and build positioned errors with
//! the helper constructors so every format reports locations the same way.

use alloc::{rc::Rc, string::String};
use core::cell::RefCell;

use tracing::trace;

use crate::{
    ParseError, ParserOptions, Position, ProgressReport, buffer::Buffer,
    progress::ProgressHandle,
};

/// Cursor over a code-point stream delivered in chunks.
///
/// Before the first advance there is no current code point and the position
/// is `0:0`. Each successful advance bumps [`index`](Cursor::index) and
/// [`character`](Cursor::character); crossing a line terminator resets
/// `character` to `0` and bumps [`line`](Cursor::line).
///
/// ```rust
/// use textmodem::{Cursor, ParseError, Position};
///
/// let mut cursor = Cursor::new();
/// cursor.extend("a\rb".chars());
/// assert_eq!(cursor.advance(), Ok('a'));
/// assert_eq!(cursor.advance(), Ok('\r'));
/// assert_eq!(cursor.position(), Position::new(1, 0));
/// assert_eq!(cursor.advance(), Ok('b'));
/// assert_eq!(cursor.position(), Position::new(1, 1));
/// assert_eq!(cursor.advance(), Err(ParseError::EndOfFile));
/// assert_eq!(cursor.current(), None);
/// ```
#[derive(Debug)]
pub struct Cursor {
    buffer: Buffer,
    current: Option<char>,

    index: usize,
    line: usize,
    character: usize,

    /// Total code points ever handed to `extend`.
    ingested: usize,

    line_terminator: fn(char) -> bool,
    expected_len: Option<u64>,
    progress: ProgressHandle,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::with_options(&ParserOptions::default())
    }
}

impl Cursor {
    /// Creates an empty cursor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_options(options: &ParserOptions) -> Self {
        Self {
            buffer: Buffer::new(),
            current: None,
            index: 0,
            line: 0,
            character: 0,
            ingested: 0,
            line_terminator: options.line_terminator,
            expected_len: options.expected_len,
            progress: ProgressHandle::default(),
        }
    }

    /// Evicts the visited prefix and appends `chunk`, without advancing.
    ///
    /// The current code point, if any, survives compaction, so neither it nor
    /// the position counters change. Returns the number of code points added.
    pub fn extend<I>(&mut self, chunk: I) -> usize
    where
        I: IntoIterator<Item = char>,
    {
        let evicted = self.buffer.compact(self.current.is_some());
        let added = self.buffer.push(chunk);
        self.ingested += added;

        trace!(
            added,
            evicted,
            retained = self.buffer.len(),
            "extended cursor input"
        );

        self.report_progress(
            self.ingested as u64,
            self.expected_len.unwrap_or_default(),
        );
        added
    }

    /// Moves to the next code point and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EndOfFile`] once the retained input is exhausted;
    /// the current code point is then cleared and the counters stay put.
    #[inline]
    pub fn advance(&mut self) -> Result<char, ParseError> {
        let Some(c) = self.buffer.next() else {
            self.current = None;
            return Err(ParseError::EndOfFile);
        };

        self.current = Some(c);
        self.index += 1;
        self.character += 1;
        if (self.line_terminator)(c) {
            self.character = 0;
            self.line += 1;
            trace!(line = self.line, "crossed line terminator");
        }
        Ok(c)
    }

    /// Advances once if no code point is current and input is waiting.
    ///
    /// # Errors
    ///
    /// [`ParseError::EndOfFile`] if nothing is current and nothing is left.
    pub(crate) fn prime(&mut self) -> Result<(), ParseError> {
        if self.current.is_none() {
            let c = self.advance()?;
            trace!(?c, index = self.index, "primed cursor");
        }
        Ok(())
    }

    /// Copies the current code point and every following one that satisfies
    /// `predicate` into `dst`, leaving the cursor on the first one that does
    /// not (or past the end). Returns the number copied.
    pub fn advance_while<F>(&mut self, dst: &mut String, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut copied = 0;
        while let Some(c) = self.current.filter(|&c| predicate(c)) {
            dst.push(c);
            copied += 1;
            if self.advance().is_err() {
                break;
            }
        }
        copied
    }

    /// Like [`advance_while`](Cursor::advance_while) but discards what it
    /// passes over.
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut skipped = 0;
        while self.current.is_some_and(&mut predicate) {
            skipped += 1;
            if self.advance().is_err() {
                break;
            }
        }
        skipped
    }

    /// The code point the cursor sits on.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// The code point the next [`advance`](Cursor::advance) would return.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.buffer.peek()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            character: self.character,
        }
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn character(&self) -> usize {
        self.character
    }

    /// Number of successful advances so far.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total code points received across all chunks.
    #[must_use]
    pub fn ingested(&self) -> usize {
        self.ingested
    }

    /// Code points currently held in memory, the current one included.
    #[must_use]
    pub fn retained(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` when nothing is current and nothing is left to visit.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none() && self.buffer.remaining() == 0
    }

    /// [`ParseError::UnexpectedCharacter`] at the current position.
    #[must_use]
    pub fn unexpected_character(&self) -> ParseError {
        ParseError::UnexpectedCharacter {
            line: self.line,
            character: self.character,
        }
    }

    /// [`ParseError::UnexpectedKeyword`] at the current position.
    #[must_use]
    pub fn unexpected_keyword(&self) -> ParseError {
        ParseError::UnexpectedKeyword {
            line: self.line,
            character: self.character,
        }
    }

    /// [`ParseError::InvalidNumber`] at the current position.
    #[must_use]
    pub fn invalid_number(&self) -> ParseError {
        ParseError::InvalidNumber {
            line: self.line,
            character: self.character,
        }
    }

    /// Forwards a progress report to the attached delegate, if it is still
    /// alive. Reports with a smaller `processed` than the last delivered one
    /// are dropped.
    pub fn report_progress(&mut self, processed: u64, expected_total: u64) {
        self.progress.report(processed, expected_total);
    }

    pub(crate) fn attach_progress(&mut self, delegate: &Rc<RefCell<dyn ProgressReport>>) {
        self.progress.attach(delegate);
    }

    pub(crate) fn detach_progress(&mut self) {
        self.progress.detach();
    }
}
