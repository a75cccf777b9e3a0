//! Binary search tree machinery shared by the balanced maps and sets.
//!
//! A `TreeMap` owns a node store and a comparator and delegates structural repair to a
//! `Balance` engine after every insertion and removal.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{NodeInfo, TreeMap, TreeMapIntoIter, TreeMapIter, TreeMapIterMut, TreeMapPreOrder};
pub use self::node::{Link, Node, Side};
pub use self::set::{TreeSet, TreeSetIntoIter, TreeSetIter};
pub use self::tree::Tree;

use crate::arena::Handle;
use crate::error::Result;
use std::fmt;

/// What is left of a node after it has been spliced out of a tree.
#[derive(Clone, Copy, Debug)]
pub struct Removed<M> {
    /// The balancing tag the spliced node carried.
    pub tag: M,
    /// The child that took the place of the spliced node.
    pub child: Link,
    /// The former parent of the spliced node.
    pub parent: Link,
}

mod private {
    pub trait Sealed {}
}

pub(crate) use self::private::Sealed;

/// A strategy that keeps a binary search tree balanced.
///
/// Engines see the tree only after a structural edit: once a new leaf has been attached, or
/// once a node with at most one child has been spliced out. They repair their invariant by
/// rotating and retagging nodes on the path towards the root. This trait is sealed; it is
/// implemented by `HeightBalance` and `ColorBalance`.
pub trait Balance: Sealed {
    /// The per-node balancing metadata.
    type Tag: Copy + fmt::Debug + PartialEq + 'static;

    /// Returns the tag of a freshly attached leaf.
    fn leaf_tag() -> Self::Tag;

    /// Restores the invariant after `node` was attached as a leaf.
    fn after_insert<T, U>(tree: &mut Tree<T, U, Self::Tag>, node: Handle);

    /// Restores the invariant after a node was spliced out.
    fn after_remove<T, U>(tree: &mut Tree<T, U, Self::Tag>, removed: Removed<Self::Tag>);

    /// Returns the height of the tree if the engine tracks it, or `None` if it has to be
    /// measured by a walk.
    fn height<T, U>(_tree: &Tree<T, U, Self::Tag>) -> Option<usize> {
        None
    }

    /// Checks the invariant of the engine over the whole tree.
    fn validate<T, U>(tree: &Tree<T, U, Self::Tag>) -> Result<()>;
}
