//! Column mutations produced by UPDATE assignments.

use super::term::{Term, Value};
use std::fmt;

/// A single mutation applied to one column.
///
/// Delta variants carry the right-hand operand as written: a collection
/// literal, or a bind marker standing for a whole collection. The variant
/// is chosen from the literal's syntax; a bare term or bind marker after
/// `+`/`-` is read as a counter delta.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `col = value`
    Set(Value),
    /// `col = col + n`
    CounterIncrement(Term),
    /// `col = col - n`; the term holds the magnitude.
    CounterDecrement(Term),
    /// `col = col + [..]`
    ListAppend(Value),
    /// `col = [..] + col`
    ListPrepend(Value),
    /// `col = col - [..]`
    ListDiscard(Value),
    /// `col[i] = value` with an integer index.
    ListSetIndex { index: Value, value: Value },
    /// `col = col + {..}`
    SetAdd(Value),
    /// `col = col - {..}`
    SetDiscard(Value),
    /// `col[key] = value`
    MapPut { key: Value, value: Value },
    /// `col = col + {k: v, ..}`
    MapPutAll(Value),
}

impl Operation {
    /// True for the two counter forms.
    pub fn is_counter(&self) -> bool {
        matches!(
            self,
            Operation::CounterIncrement(_) | Operation::CounterDecrement(_)
        )
    }

    /// Right-hand operand of a delta or a plain set.
    pub fn operand(&self) -> Option<&Value> {
        match self {
            Operation::Set(v)
            | Operation::ListAppend(v)
            | Operation::ListPrepend(v)
            | Operation::ListDiscard(v)
            | Operation::SetAdd(v)
            | Operation::SetDiscard(v)
            | Operation::MapPutAll(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the operation, used in diagnostics and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Set(_) => "set",
            Operation::CounterIncrement(_) => "counter increment",
            Operation::CounterDecrement(_) => "counter decrement",
            Operation::ListAppend(_) => "list append",
            Operation::ListPrepend(_) => "list prepend",
            Operation::ListDiscard(_) => "list discard",
            Operation::ListSetIndex { .. } => "list set index",
            Operation::SetAdd(_) => "set add",
            Operation::SetDiscard(_) => "set discard",
            Operation::MapPut { .. } => "map put",
            Operation::MapPutAll(_) => "map put all",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
