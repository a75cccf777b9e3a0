use crate::arena::{Arena, Handle};
use crate::bst::node::{Link, Node, Side};
use crate::compare::Compare;
use crate::error::{Error, Result};
use log::trace;
use std::cmp::Ordering;

/// The outcome of a comparator-guided descent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Search {
    /// A node with an equal key.
    Found(Handle),
    /// The key is absent. Holds the last visited node and the side on which the key would be
    /// attached, or `None` if the tree is empty.
    Vacant(Option<(Handle, Side)>),
}

/// The node store shared by every balancing engine.
///
/// All nodes live in an arena and refer to each other by handle. Rotations and splices only
/// rewrite links, so a handle keeps naming the same entry until that entry's node is taken
/// out of the tree.
#[derive(Clone)]
pub struct Tree<T, U, M> {
    arena: Arena<Node<T, U, M>>,
    root: Link,
}

impl<T, U, M> Tree<T, U, M> {
    pub(crate) fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> Link {
        self.root
    }

    /// Returns the node behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to a node of this tree.
    pub fn node(&self, handle: Handle) -> &Node<T, U, M> {
        &self.arena[handle]
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<T, U, M> {
        &mut self.arena[handle]
    }

    pub fn parent(&self, handle: Handle) -> Link {
        self.arena[handle].parent
    }

    pub fn child(&self, handle: Handle, side: Side) -> Link {
        self.arena[handle].child(side)
    }

    /// Returns the side of its parent on which a node hangs, or `None` for the root.
    pub fn side_of(&self, handle: Handle) -> Option<Side> {
        self.parent(handle).map(|parent| {
            if self.arena[parent].left == Some(handle) {
                Side::Left
            } else {
                Side::Right
            }
        })
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub(crate) fn search<C>(&self, key: &T, comparator: &C) -> Search
    where
        C: Compare<T>,
    {
        let mut position = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = &self.arena[handle];
            let side = match comparator.compare(key, &node.entry.key) {
                Ordering::Equal => return Search::Found(handle),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            position = Some((handle, side));
            current = node.child(side);
        }
        Search::Vacant(position)
    }

    /// Links a detached node into the vacant position found by `search`.
    pub(crate) fn attach(&mut self, position: Option<(Handle, Side)>, mut node: Node<T, U, M>) -> Handle {
        node.parent = position.map(|(parent, _)| parent);
        node.left = None;
        node.right = None;
        let handle = self.arena.allocate(node);
        match position {
            None => self.root = Some(handle),
            Some((parent, side)) => self.arena[parent].set_child(side, Some(handle)),
        }
        handle
    }

    /// Unlinks a node by putting its only child (if any) in its place. Returns the child and
    /// the former parent of the node. The node itself stays allocated until it is taken.
    pub(crate) fn splice(&mut self, handle: Handle) -> (Link, Link) {
        let (child, parent) = {
            let node = &self.arena[handle];
            debug_assert!(node.left.is_none() || node.right.is_none());
            (node.left.or(node.right), node.parent)
        };
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
        self.replace_child(parent, handle, child);
        let node = &mut self.arena[handle];
        node.parent = None;
        node.left = None;
        node.right = None;
        (child, parent)
    }

    /// Frees a node that has already been spliced out.
    pub(crate) fn take(&mut self, handle: Handle) -> Node<T, U, M> {
        self.arena.free(handle)
    }

    fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    /// Returns the leftmost node of the subtree rooted at `handle`.
    pub fn min_node(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.arena[handle].left {
            handle = left;
        }
        handle
    }

    /// Returns the rightmost node of the subtree rooted at `handle`.
    pub fn max_node(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.arena[handle].right {
            handle = right;
        }
        handle
    }

    /// Rotates the subtree rooted at `handle` towards `direction` and returns the new root of
    /// the subtree. A left rotation lifts the right child; a right rotation lifts the left
    /// child. Only links are rewritten; balancing tags are left to the caller.
    ///
    /// ```text
    ///     x                y
    ///    / \     left     / \
    ///   a   y   ----->   x   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    pub(crate) fn rotate(&mut self, handle: Handle, direction: Side) -> Handle {
        trace!("rotating {:?} at {:?}", direction, handle);
        let lifted = self.arena[handle]
            .child(direction.opposite())
            .expect("Expected child node to rotate into place.");
        let inner = self.arena[lifted].child(direction);
        let parent = self.arena[handle].parent;

        self.arena[handle].set_child(direction.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(handle);
        }

        self.arena[lifted].parent = parent;
        self.replace_child(parent, handle, Some(lifted));

        self.arena[lifted].set_child(direction, Some(handle));
        self.arena[handle].parent = Some(lifted);
        lifted
    }

    pub(crate) fn floor<C>(&self, key: &T, comparator: &C) -> Link
    where
        C: Compare<T>,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = &self.arena[handle];
            match comparator.compare(key, &node.entry.key) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => current = node.left,
                Ordering::Greater => {
                    best = Some(handle);
                    current = node.right;
                },
            }
        }
        best
    }

    pub(crate) fn ceil<C>(&self, key: &T, comparator: &C) -> Link
    where
        C: Compare<T>,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = &self.arena[handle];
            match comparator.compare(key, &node.entry.key) {
                Ordering::Equal => return Some(handle),
                Ordering::Greater => current = node.right,
                Ordering::Less => {
                    best = Some(handle);
                    current = node.left;
                },
            }
        }
        best
    }

    /// Checks that every child points back at its parent and that the root has no parent.
    /// Returns the number of reachable nodes.
    pub(crate) fn check_links(&self) -> Result<usize> {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            if self.arena.get(root).map_or(true, |node| node.parent.is_some()) {
                return Err(Error::BrokenLink);
            }
            stack.push(root);
        }

        let mut count = 0;
        while let Some(handle) = stack.pop() {
            count += 1;
            let node = &self.arena[handle];
            for child in node.left.iter().chain(node.right.iter()) {
                match self.arena.get(*child) {
                    Some(child_node) if child_node.parent == Some(handle) => stack.push(*child),
                    _ => return Err(Error::BrokenLink),
                }
            }
        }
        Ok(count)
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Arena<Node<T, U, M>> {
        &mut self.arena
    }
}

#[cfg(test)]
mod tests {
    use super::{Search, Tree};
    use crate::bst::node::{Node, Side};
    use crate::compare::Natural;

    fn build(keys: &[u32]) -> Tree<u32, (), ()> {
        let mut tree = Tree::new();
        for key in keys {
            match tree.search(key, &Natural) {
                Search::Vacant(position) => {
                    tree.attach(position, Node::new(*key, (), ()));
                },
                Search::Found(_) => panic!("duplicate key"),
            }
        }
        tree
    }

    fn pre_order(tree: &Tree<u32, (), ()>) -> Vec<u32> {
        let mut ret = Vec::new();
        let mut stack: Vec<_> = tree.root().into_iter().collect();
        while let Some(handle) = stack.pop() {
            let node = tree.node(handle);
            ret.push(*node.key());
            stack.extend(node.right);
            stack.extend(node.left);
        }
        ret
    }

    fn in_order(tree: &Tree<u32, (), ()>) -> Vec<u32> {
        let mut ret = Vec::new();
        let mut stack = Vec::new();
        let mut current = tree.root();
        while current.is_some() || !stack.is_empty() {
            while let Some(handle) = current {
                stack.push(handle);
                current = tree.node(handle).left;
            }
            if let Some(handle) = stack.pop() {
                ret.push(*tree.node(handle).key());
                current = tree.node(handle).right;
            }
        }
        ret
    }

    #[test]
    fn test_search() {
        let tree = build(&[2, 1, 3]);
        let root = tree.root().unwrap();
        assert_eq!(tree.search(&2, &Natural), Search::Found(root));
        assert_eq!(tree.search(&4, &Natural), Search::Vacant(Some((tree.child(root, Side::Right).unwrap(), Side::Right))));
        assert_eq!(build(&[]).search(&4, &Natural), Search::Vacant(None));
    }

    #[test]
    fn test_rotate_left() {
        let mut tree = build(&[2, 1, 4, 3, 5]);
        let root = tree.root().unwrap();
        let new_root = tree.rotate(root, Side::Left);
        assert_eq!(tree.root(), Some(new_root));
        assert_eq!(pre_order(&tree), vec![4, 2, 1, 3, 5]);
        assert_eq!(tree.parent(root), Some(new_root));
        assert_eq!(tree.check_links(), Ok(5));
    }

    #[test]
    fn test_rotate_inverse() {
        let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
        let original = pre_order(&tree);
        let sorted = in_order(&tree);

        let left = tree.child(tree.root().unwrap(), Side::Left).unwrap();
        let lifted = tree.rotate(left, Side::Left);
        assert_ne!(pre_order(&tree), original);
        tree.rotate(lifted, Side::Right);

        assert_eq!(pre_order(&tree), original);
        assert_eq!(in_order(&tree), sorted);
        assert_eq!(tree.check_links(), Ok(7));
    }

    #[test]
    fn test_splice() {
        let mut tree = build(&[2, 1, 4, 3]);
        let four = match tree.search(&4, &Natural) {
            Search::Found(handle) => handle,
            _ => panic!("missing key"),
        };
        let (child, parent) = tree.splice(four);
        assert_eq!(parent, tree.root());
        assert_eq!(tree.parent(child.unwrap()), parent);
        assert_eq!(*tree.take(four).key(), 4);
        assert_eq!(pre_order(&tree), vec![2, 1, 3]);
        assert_eq!(tree.check_links(), Ok(3));
    }

    #[test]
    fn test_floor_ceil() {
        let tree = build(&[3, 1, 5]);
        let key = |link: Option<_>| link.map(|handle| *tree.node(handle).key());
        assert_eq!(key(tree.floor(&0, &Natural)), None);
        assert_eq!(key(tree.floor(&4, &Natural)), Some(3));
        assert_eq!(key(tree.ceil(&4, &Natural)), Some(5));
        assert_eq!(key(tree.ceil(&6, &Natural)), None);
    }

    #[test]
    fn test_min_max_node() {
        let tree = build(&[3, 1, 5, 4]);
        let root = tree.root().unwrap();
        assert_eq!(*tree.node(tree.min_node(root)).key(), 1);
        assert_eq!(*tree.node(tree.max_node(root)).key(), 5);
    }
}
