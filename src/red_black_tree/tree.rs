use crate::arena::Handle;
use crate::bst::{Link, Removed, Side, Tree};
use crate::error::{Error, Result};
use crate::red_black_tree::node::{is_red, set_color, Color};
use log::trace;

fn flip_colors<T, U>(tree: &mut Tree<T, U, Color>, handle: Handle) {
    let node = tree.node_mut(handle);
    node.tag = node.tag.flip();
}

/// Restores the red black invariants after `node` was attached as a red leaf.
pub fn insert_fixup<T, U>(tree: &mut Tree<T, U, Color>, node: Handle) {
    let mut current = node;
    while let Some(parent) = tree.parent(current).filter(|parent| is_red(tree, Some(*parent))) {
        // a red node is never the root, so the grandparent exists
        let grandparent = tree
            .parent(parent)
            .expect("Expected a red node to have a parent.");
        let side = tree
            .side_of(parent)
            .expect("Expected a red node to have a parent.");
        let uncle = tree.child(grandparent, side.opposite());

        if let Some(uncle) = uncle.filter(|uncle| is_red(tree, Some(*uncle))) {
            trace!("recoloring around {:?}", grandparent);
            flip_colors(tree, parent);
            flip_colors(tree, uncle);
            flip_colors(tree, grandparent);
            current = grandparent;
            continue;
        }

        // a zig-zag is first straightened at the parent
        if tree.side_of(current) == Some(side.opposite()) {
            trace!("straightening {:?} under {:?}", current, parent);
            current = parent;
            tree.rotate(current, side);
        }

        let parent = tree
            .parent(current)
            .expect("Expected a red node to have a parent.");
        let grandparent = tree
            .parent(parent)
            .expect("Expected a red node to have a parent.");
        trace!("rotating {:?} towards {:?}", grandparent, side.opposite());
        set_color(tree, Some(parent), Color::Black);
        set_color(tree, Some(grandparent), Color::Red);
        tree.rotate(grandparent, side.opposite());
    }
    let root = tree.root();
    set_color(tree, root, Color::Black);
}

/// Restores the red black invariants after a node was spliced out. Only removing a black node
/// shortens a path; the replacement child then carries an extra black that is pushed up or
/// resolved by rotations at its sibling.
pub fn remove_fixup<T, U>(tree: &mut Tree<T, U, Color>, removed: Removed<Color>) {
    if removed.tag == Color::Red {
        return;
    }

    let mut current = removed.child;
    let mut parent = removed.parent;
    while current != tree.root() && !is_red(tree, current) {
        let handle = match parent {
            Some(handle) => handle,
            None => break,
        };
        let side = if tree.child(handle, Side::Left) == current {
            Side::Left
        } else {
            Side::Right
        };
        let mut sibling = tree
            .child(handle, side.opposite())
            .expect("Expected a doubly black node to have a sibling.");

        if is_red(tree, Some(sibling)) {
            trace!("rotating red sibling {:?} above {:?}", sibling, handle);
            set_color(tree, Some(sibling), Color::Black);
            set_color(tree, Some(handle), Color::Red);
            tree.rotate(handle, side);
            sibling = tree
                .child(handle, side.opposite())
                .expect("Expected a doubly black node to have a sibling.");
        }

        let near = tree.child(sibling, side);
        let far = tree.child(sibling, side.opposite());
        if !is_red(tree, near) && !is_red(tree, far) {
            trace!("pushing extra black from {:?} to {:?}", current, handle);
            set_color(tree, Some(sibling), Color::Red);
            current = Some(handle);
            parent = tree.parent(handle);
            continue;
        }

        if !is_red(tree, far) {
            trace!("straightening {:?} under {:?}", near, sibling);
            set_color(tree, near, Color::Black);
            set_color(tree, Some(sibling), Color::Red);
            tree.rotate(sibling, side.opposite());
            sibling = tree
                .child(handle, side.opposite())
                .expect("Expected a doubly black node to have a sibling.");
        }

        trace!("rotating {:?} towards {:?}", handle, side);
        let color = tree.node(handle).tag;
        set_color(tree, Some(sibling), color);
        set_color(tree, Some(handle), Color::Black);
        let far = tree.child(sibling, side.opposite());
        set_color(tree, far, Color::Black);
        tree.rotate(handle, side);
        current = tree.root();
        parent = None;
    }
    set_color(tree, current, Color::Black);
}

/// Returns the number of black nodes on every path from `link` down to an absent link.
pub fn check<T, U>(tree: &Tree<T, U, Color>, link: Link) -> Result<usize> {
    let handle = match link {
        None => return Ok(1),
        Some(handle) => handle,
    };
    let node = tree.node(handle);
    if node.tag == Color::Red && (is_red(tree, node.left) || is_red(tree, node.right)) {
        return Err(Error::RedViolation);
    }
    let left_height = check(tree, node.left)?;
    let right_height = check(tree, node.right)?;
    if left_height != right_height {
        return Err(Error::BlackHeightMismatch);
    }
    match node.tag {
        Color::Red => Ok(left_height),
        Color::Black => Ok(left_height + 1),
    }
}
