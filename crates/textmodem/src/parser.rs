//! The streaming cursor engine.
//!
//! [`StreamingParser`] accepts code points in arbitrarily sized chunks and
//! hands them to a [`Grammar`] once the caller declares the input complete.
//!
//! # Examples
//!
//! Streaming a document in pieces:
//!
//! ```rust
//! use textmodem::{Cursor, Grammar, ParseError, StreamingParser, TreeAssembler, Value};
//!
//! /// Collects every code point into an array of one-character strings.
//! struct Chars;
//!
//! impl Grammar for Chars {
//!     fn finish<A: TreeAssembler>(
//!         &mut self,
//!         cursor: &mut Cursor,
//!         assembler: &mut A,
//!     ) -> Result<(), ParseError> {
//!         assembler.start_root(Value::empty_array());
//!         while let Some(c) = cursor.current() {
//!             assembler.child_produced(Value::String(c.into()), None);
//!             if cursor.advance().is_err() {
//!                 break;
//!             }
//!         }
//!         assembler.complete_root();
//!         Ok(())
//!     }
//! }
//!
//! let mut parser = StreamingParser::with_grammar(Chars);
//! parser.ingest_str("a").unwrap();
//! parser.ingest_str("bc").unwrap();
//! assert_eq!(
//!     parser.finalize().unwrap().to_string(),
//!     r#"["a","b","c"]"#
//! );
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;

use tracing::debug;

use crate::{
    Cursor, Grammar, grammar, NoGrammar, ParseError, ParserOptions, ProgressReport, TreeAssembler,
    ValueAssembler,
};

/// A streaming session: any number of [`ingest`](StreamingParser::ingest)
/// calls followed by exactly one [`finalize`](StreamingParser::finalize).
///
/// `G` supplies the completion step and `A` receives the structural events;
/// by default events are folded into a [`Value`](crate::Value) by
/// [`ValueAssembler`].
#[derive(Debug)]
pub struct StreamingParser<G = NoGrammar, A = ValueAssembler> {
    cursor: Cursor,
    grammar: G,
    assembler: A,

    #[cfg(any(test, feature = "fuzzing"))]
    panic_on_error: bool,
}

impl Default for StreamingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingParser {
    /// Creates a parser without a grammar.
    ///
    /// It can ingest and advance, but finalizing it panics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    #[must_use]
    pub fn with_options(options: ParserOptions) -> Self {
        Self::with_grammar_and_options(NoGrammar, options)
    }
}

impl<G: Grammar> StreamingParser<G> {
    #[must_use]
    pub fn with_grammar(grammar: G) -> Self {
        Self::with_grammar_and_options(grammar, ParserOptions::default())
    }

    #[must_use]
    pub fn with_grammar_and_options(grammar: G, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::with_options(&options),
            grammar,
            assembler: ValueAssembler::new(),
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: options.panic_on_error,
        }
    }
}

impl<G: Grammar, A: TreeAssembler> StreamingParser<G, A> {
    /// Replaces the tree-assembly delegate.
    ///
    /// The assembler is owned by the parser until
    /// [`finalize`](StreamingParser::finalize) returns its output.
    #[must_use]
    pub fn with_assembler<B: TreeAssembler>(self, assembler: B) -> StreamingParser<G, B> {
        StreamingParser {
            cursor: self.cursor,
            grammar: self.grammar,
            assembler,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: self.panic_on_error,
        }
    }

    /// Attaches a progress delegate. Only a weak reference is kept.
    pub fn set_progress_delegate(&mut self, delegate: &Rc<RefCell<dyn ProgressReport>>) {
        self.cursor.attach_progress(delegate);
    }

    pub fn clear_progress_delegate(&mut self) {
        self.cursor.detach_progress();
    }

    /// Delivers one chunk of input.
    ///
    /// Already visited code points are evicted first, then `chunk` is
    /// appended. If no code point is current yet (first delivery, or the
    /// cursor ran off the end of the previous chunks) the cursor advances onto
    /// the first new one.
    ///
    /// # Errors
    ///
    /// Only [`ParseError::EndOfFile`], meaning everything delivered so far has
    /// been consumed. Streaming callers treat it as "need more input".
    pub fn ingest<I>(&mut self, chunk: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = char>,
    {
        self.cursor.extend(chunk);
        self.cursor.prime()
    }

    /// [`ingest`](StreamingParser::ingest) for string slices.
    ///
    /// # Errors
    ///
    /// See [`ingest`](StreamingParser::ingest).
    pub fn ingest_str(&mut self, chunk: &str) -> Result<(), ParseError> {
        self.ingest(chunk.chars())
    }

    /// Advances the cursor by one code point.
    ///
    /// # Errors
    ///
    /// [`ParseError::EndOfFile`] once the ingested input is exhausted.
    pub fn advance(&mut self) -> Result<char, ParseError> {
        self.cursor.advance()
    }

    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Ends the session: runs the grammar over the remaining input and returns
    /// what the assembler built.
    ///
    /// # Errors
    ///
    /// - [`ParseError::EmptyInput`] if no code point was ever ingested.
    /// - Whatever the grammar reports, including [`ParseError::EndOfFile`]
    ///   when the document ended mid-structure.
    /// - [`ParseError::Unknown`] if the grammar succeeded without starting a
    ///   root.
    ///
    /// # Panics
    ///
    /// When the parser has no grammar ([`NoGrammar`]).
    pub fn finalize(self) -> Result<A::Output, ParseError> {
        assert!(!G::PLACEHOLDER, "{}", grammar::NO_GRAMMAR);

        #[cfg(any(test, feature = "fuzzing"))]
        let panic_on_error = self.panic_on_error;

        let Self {
            mut cursor,
            mut grammar,
            mut assembler,
            ..
        } = self;

        debug!(
            ingested = cursor.ingested(),
            position = %cursor.position(),
            "finalizing"
        );

        let result = if cursor.ingested() == 0 {
            Err(ParseError::EmptyInput)
        } else {
            match grammar.finish(&mut cursor, &mut assembler) {
                Ok(()) => assembler.into_output().ok_or(ParseError::Unknown),
                Err(err) => Err(err),
            }
        };

        if let Err(err) = &result {
            debug!(%err, position = %cursor.position(), "finalize failed");
            #[cfg(any(test, feature = "fuzzing"))]
            assert!(!panic_on_error, "parse failed at {}: {err}", cursor.position());
        }

        result
    }

    /// One-shot convenience: ingests `input` as a single chunk and finalizes.
    ///
    /// # Errors
    ///
    /// See [`finalize`](StreamingParser::finalize).
    ///
    /// # Panics
    ///
    /// When the parser has no grammar ([`NoGrammar`]).
    pub fn parse<I>(mut self, input: I) -> Result<A::Output, ParseError>
    where
        I: IntoIterator<Item = char>,
    {
        match self.ingest(input) {
            Ok(()) | Err(ParseError::EndOfFile) => {}
            Err(err) => return Err(err),
        }
        self.finalize()
    }
}
