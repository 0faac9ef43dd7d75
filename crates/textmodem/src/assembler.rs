//! Structural events and the consumers that fold them into a tree.
//!
//! A grammar reports each root it recognizes as exactly one
//! [`start_root`](TreeAssembler::start_root), zero or more
//! [`child_produced`](TreeAssembler::child_produced) in document order, and
//! exactly one [`complete_root`](TreeAssembler::complete_root). The calls may be
//! spread across several chunk deliveries, so implementations must not assume
//! they all arrive before control returns to the caller.

use alloc::string::String;

use tracing::trace;

use crate::Value;

/// The key carried by a child event: `Some` for object members, `None` for
/// array elements and for the single value of a scalar root.
pub type ChildKey = Option<String>;

/// Capability implemented by consumers of structural events.
pub trait TreeAssembler {
    /// What the consumer hands back once the root is complete.
    type Output;

    /// Announces the kind of root about to be built. For arrays and objects
    /// `template` is an empty instance; for scalars it is the scalar itself.
    fn start_root(&mut self, template: Value);

    /// Delivers one direct child of the current root.
    fn child_produced(&mut self, node: Value, key: ChildKey);

    /// Signals that the root has no further children.
    fn complete_root(&mut self);

    /// Hands over whatever was assembled, or `None` if no root was started.
    fn into_output(self) -> Option<Self::Output>
    where
        Self: Sized;
}

/// The default [`TreeAssembler`]: keeps a single output [`Value`].
///
/// Keyed children are inserted into object roots and unkeyed children are
/// appended to array roots. Any other combination is dropped and logged at
/// trace level.
///
/// ```rust
/// use textmodem::{TreeAssembler, Value, ValueAssembler};
///
/// let mut assembler = ValueAssembler::new();
/// assembler.start_root(Value::empty_array());
/// assembler.child_produced(Value::Number(1.0), None);
/// assembler.child_produced(Value::Number(2.0), None);
/// assembler.complete_root();
/// assert_eq!(
///     assembler.into_output(),
///     Some(Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]))
/// );
/// ```
#[derive(Debug, Default)]
pub struct ValueAssembler {
    output: Option<Value>,
}

impl ValueAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root assembled so far.
    #[must_use]
    pub fn output(&self) -> Option<&Value> {
        self.output.as_ref()
    }

    /// Takes the assembled root, leaving the assembler empty for the next one.
    pub fn take_output(&mut self) -> Option<Value> {
        self.output.take()
    }
}

impl TreeAssembler for ValueAssembler {
    type Output = Value;

    fn start_root(&mut self, template: Value) {
        self.output = Some(template);
    }

    fn child_produced(&mut self, node: Value, key: ChildKey) {
        match (&mut self.output, key) {
            (Some(Value::Object(map)), Some(key)) => {
                map.insert(key, node);
            }
            (Some(Value::Array(array)), None) => {
                array.push(node);
            }
            (output, key) => {
                trace!(
                    keyed = key.is_some(),
                    root = ?output.as_ref().map(root_kind),
                    "dropping child event that does not fit the root"
                );
            }
        }
    }

    fn complete_root(&mut self) {}

    fn into_output(self) -> Option<Value> {
        self.output
    }
}

fn root_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Boolean(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
