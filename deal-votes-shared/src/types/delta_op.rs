use std::fmt;

use serde::{Deserialize, Serialize};

/// A signed unit change applied to a remote aggregate score.
///
/// The remote endpoint only accepts `+1` and `-1`, so larger adjustments are
/// expressed as several operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DeltaOp {
    Increment,
    Decrement,
}

impl DeltaOp {
    /// The signed value sent over the wire.
    pub fn value(self) -> i32 {
        match self {
            DeltaOp::Increment => 1,
            DeltaOp::Decrement => -1,
        }
    }
}

impl fmt::Display for DeltaOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.value())
    }
}
