//! The grammar-specific completion step.

use crate::{Cursor, ParseError, TreeAssembler};

/// Token-level recognition for one textual format.
///
/// [`StreamingParser::finalize`](crate::StreamingParser::finalize) hands the
/// grammar a cursor seated on the first unconsumed code point. The grammar
/// consumes what it needs through [`Cursor::advance`], reports each root to
/// `assembler` as `start_root`, `child_produced`..., `complete_root`, and
/// returns once the document is complete.
///
/// Failures use the shared [`ParseError`] taxonomy. Running out of input
/// mid-structure surfaces as [`ParseError::EndOfFile`]; syntax errors carry
/// the cursor's current position, e.g. via [`Cursor::unexpected_character`].
///
/// ```rust
/// use textmodem::{Cursor, Grammar, ParseError, StreamingParser, TreeAssembler, Value};
///
/// /// Accepts a single `x` and produces `null`.
/// struct Ex;
///
/// impl Grammar for Ex {
///     fn finish<A: TreeAssembler>(
///         &mut self,
///         cursor: &mut Cursor,
///         assembler: &mut A,
///     ) -> Result<(), ParseError> {
///         if cursor.current() != Some('x') {
///             return Err(cursor.unexpected_character());
///         }
///         assembler.start_root(Value::Null);
///         assembler.complete_root();
///         Ok(())
///     }
/// }
///
/// let parser = StreamingParser::with_grammar(Ex);
/// assert_eq!(parser.parse("x".chars()), Ok(Value::Null));
/// ```
pub trait Grammar {
    /// `true` only for [`NoGrammar`]; finalizing with a placeholder panics.
    #[doc(hidden)]
    const PLACEHOLDER: bool = false;

    /// Drives the grammar to completion over the remaining input.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`]; no partial tree is produced on failure.
    fn finish<A: TreeAssembler>(
        &mut self,
        cursor: &mut Cursor,
        assembler: &mut A,
    ) -> Result<(), ParseError>;
}

pub(crate) const NO_GRAMMAR: &str =
    "StreamingParser finalized without a grammar; attach one with `with_grammar`";

/// Placeholder used by parsers built without a grammar.
///
/// Such a parser can ingest input and be advanced by hand, but finalizing it
/// is a programming error and panics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGrammar;

impl Grammar for NoGrammar {
    const PLACEHOLDER: bool = true;

    fn finish<A: TreeAssembler>(
        &mut self,
        _cursor: &mut Cursor,
        _assembler: &mut A,
    ) -> Result<(), ParseError> {
        panic!("{NO_GRAMMAR}");
    }
}
