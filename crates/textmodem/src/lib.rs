//! A streaming, incremental cursor engine for text-format parsers.
//!
//! Input arrives as Unicode code points in arbitrarily sized chunks. The
//! [`StreamingParser`] keeps only what has not been consumed yet, tracks the
//! line and character of the current code point, and, once the caller asks
//! for a result, lets a format-specific [`Grammar`] consume the input and
//! report structural events to a [`TreeAssembler`].
//!
//! ```rust
//! use textmodem::{Cursor, Grammar, ParseError, StreamingParser, TreeAssembler, Value};
//!
//! /// `key=value` pairs separated by `;`, parsed into an object.
//! struct Pairs;
//!
//! impl Grammar for Pairs {
//!     fn finish<A: TreeAssembler>(
//!         &mut self,
//!         cursor: &mut Cursor,
//!         assembler: &mut A,
//!     ) -> Result<(), ParseError> {
//!         assembler.start_root(Value::empty_object());
//!         while cursor.current().is_some() {
//!             let mut key = String::new();
//!             cursor.advance_while(&mut key, |c| c != '=');
//!             if cursor.current().is_none() {
//!                 return Err(ParseError::EndOfFile);
//!             }
//!             cursor.advance()?;
//!             let mut value = String::new();
//!             cursor.advance_while(&mut value, |c| c != ';');
//!             assembler.child_produced(Value::String(value), Some(key));
//!             if cursor.current() == Some(';') {
//!                 cursor.advance()?;
//!             }
//!         }
//!         assembler.complete_root();
//!         Ok(())
//!     }
//! }
//!
//! let mut parser = StreamingParser::with_grammar(Pairs);
//! parser.ingest_str("a=1;b").unwrap();
//! parser.ingest_str("=2").unwrap();
//! assert_eq!(parser.finalize().unwrap().to_string(), r#"{"a":"1","b":"2"}"#);
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod assembler;
mod buffer;
mod chunk_utils;
mod cursor;
mod error;
mod escape;
mod grammar;
mod keyword;
pub mod line;
mod options;
mod parser;
mod progress;
mod value;

#[cfg(test)]
mod tests;

pub use assembler::{ChildKey, TreeAssembler, ValueAssembler};
pub use chunk_utils::{produce_chunks, produce_prefixes, split_by_lengths};
pub use cursor::Cursor;
pub use error::{ParseError, Position};
pub use escape::UnicodeEscape;
pub use grammar::{Grammar, NoGrammar};
pub use keyword::{KeywordMatcher, Step};
pub use options::ParserOptions;
pub use parser::StreamingParser;
pub use progress::ProgressReport;
pub use value::{Array, Map, Value};
