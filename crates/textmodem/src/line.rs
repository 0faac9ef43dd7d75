//! Line terminators recognized by the cursor.
//!
//! Only carriage return and form feed advance the line counter; a bare line
//! feed does not. Carriage-return/line-feed pairs therefore count as one line.
//! Callers that want line feeds counted install their own predicate through
//! [`ParserOptions::line_terminator`](crate::ParserOptions::line_terminator).

/// U+000D CARRIAGE RETURN.
pub const CARRIAGE_RETURN: char = '\r';
/// U+000C FORM FEED.
pub const FORM_FEED: char = '\u{0C}';
/// U+000A LINE FEED. Not a terminator under [`is_line_terminator`].
pub const LINE_FEED: char = '\n';

/// The default line-terminator predicate.
///
/// ```rust
/// use textmodem::line::is_line_terminator;
///
/// assert!(is_line_terminator('\r'));
/// assert!(is_line_terminator('\u{0C}'));
/// assert!(!is_line_terminator('\n'));
/// ```
#[inline]
#[must_use]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, CARRIAGE_RETURN | FORM_FEED)
}

/// A predicate that also counts line feeds, for callers that want the common
/// newline convention.
#[inline]
#[must_use]
pub fn is_line_terminator_or_line_feed(c: char) -> bool {
    c == LINE_FEED || is_line_terminator(c)
}
