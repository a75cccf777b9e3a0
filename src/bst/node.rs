use crate::arena::Handle;
use crate::entry::Entry;

/// A link to another node. `None` is the absent child or absent parent.
pub type Link = Option<Handle>;

/// The side of a node on which a child hangs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a binary search tree.
///
/// `tag` holds the balancing metadata of the engine that owns the tree.
#[derive(Clone)]
pub struct Node<T, U, M> {
    pub(crate) entry: Entry<T, U>,
    pub tag: M,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<T, U, M> Node<T, U, M> {
    pub(crate) fn new(key: T, value: U, tag: M) -> Self {
        Node {
            entry: Entry::new(key, value),
            tag,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// Returns the key of the node.
    pub fn key(&self) -> &T {
        &self.entry.key
    }

    /// Returns the value of the node.
    pub fn value(&self) -> &U {
        &self.entry.value
    }

    pub fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }
}
