use alloc::{format, string::String, vec::Vec};

use crate::{Cursor, Grammar, ParseError, TreeAssembler, Value};

/// Test grammar that records every code point together with the position the
/// cursor reported for it.
///
/// `!` is a syntax error and `(` must be closed by `)` before the input ends,
/// so truncated input surfaces as [`ParseError::EndOfFile`].
#[derive(Debug, Default)]
pub(crate) struct Transcript;

impl Grammar for Transcript {
    fn finish<A: TreeAssembler>(
        &mut self,
        cursor: &mut Cursor,
        assembler: &mut A,
    ) -> Result<(), ParseError> {
        assembler.start_root(Value::empty_array());

        let mut depth = 0usize;
        while let Some(c) = cursor.current() {
            match c {
                '!' => return Err(cursor.unexpected_character()),
                '(' => depth += 1,
                ')' if depth == 0 => return Err(cursor.unexpected_character()),
                ')' => depth -= 1,
                _ => {}
            }
            assembler.child_produced(
                Value::String(format!("{c:?}@{}", cursor.position())),
                None,
            );
            if cursor.advance().is_err() {
                break;
            }
        }

        if depth > 0 {
            return Err(ParseError::EndOfFile);
        }
        assembler.complete_root();
        Ok(())
    }
}

/// Assembler that logs the events it receives.
#[derive(Debug, Default)]
pub(crate) struct EventLog(pub(crate) Vec<String>);

impl TreeAssembler for EventLog {
    type Output = Vec<String>;

    fn start_root(&mut self, template: Value) {
        self.0.push(format!("start {template}"));
    }

    fn child_produced(&mut self, node: Value, key: crate::ChildKey) {
        match key {
            Some(key) => self.0.push(format!("child {key}={node}")),
            None => self.0.push(format!("child {node}")),
        }
    }

    fn complete_root(&mut self) {
        self.0.push("complete".into());
    }

    fn into_output(self) -> Option<Vec<String>> {
        Some(self.0)
    }
}

/// Number of quickcheck cases, scaled up on CI.
pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
