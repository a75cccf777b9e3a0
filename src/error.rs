use std::error;
use std::fmt;
use std::result;

/// A structural invariant violation reported by `validate`.
///
/// Every variant indicates a defect in a balancing engine or a comparator that is not a
/// strict total order. Successful operations never leave a tree in such a state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key at in-order position `position` does not compare greater than its
    /// predecessor.
    OrderViolation { position: usize },
    /// A child does not point back at its parent, or the root has a parent.
    BrokenLink,
    /// A node's stored height disagrees with the heights of its children.
    HeightMismatch,
    /// The heights of a node's subtrees differ by more than one.
    Unbalanced,
    /// The root of a color-balanced tree is red.
    RedRoot,
    /// A red node has a red child.
    RedViolation,
    /// Two downward paths from the same node cross a different number of black nodes.
    BlackHeightMismatch,
    /// The stored length differs from the number of reachable nodes.
    LengthMismatch { expected: usize, actual: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OrderViolation { position } => {
                write!(f, "key at in-order position {} is out of order", position)
            },
            Error::BrokenLink => write!(f, "parent and child links disagree"),
            Error::HeightMismatch => write!(f, "stored height does not match subtree heights"),
            Error::Unbalanced => write!(f, "subtree heights differ by more than one"),
            Error::RedRoot => write!(f, "root is red"),
            Error::RedViolation => write!(f, "red node has a red child"),
            Error::BlackHeightMismatch => write!(f, "black heights of sibling subtrees differ"),
            Error::LengthMismatch { expected, actual } => write!(
                f,
                "stored length is {} but {} nodes are reachable",
                expected, actual,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
