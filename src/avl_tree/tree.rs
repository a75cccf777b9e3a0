use crate::arena::Handle;
use crate::bst::{Link, Side, Tree};
use crate::error::{Error, Result};
use log::trace;
use std::cmp;

/// The height of a subtree. An absent subtree has a height of zero.
pub fn height<T, U>(tree: &Tree<T, U, usize>, link: Link) -> usize {
    match link {
        None => 0,
        Some(handle) => tree.node(handle).tag,
    }
}

fn update<T, U>(tree: &mut Tree<T, U, usize>, handle: Handle) {
    let node = tree.node(handle);
    let new_height = cmp::max(height(tree, node.left), height(tree, node.right)) + 1;
    tree.node_mut(handle).tag = new_height;
}

pub fn balance<T, U>(tree: &Tree<T, U, usize>, handle: Handle) -> i32 {
    let node = tree.node(handle);
    (height(tree, node.left) as i32) - (height(tree, node.right) as i32)
}

// Ties go to the child on the same side as the node hangs from its own parent, so a zig-zig
// is preferred over a zig-zag whenever both restore balance. A root ties to the right.
fn taller_child<T, U>(tree: &Tree<T, U, usize>, handle: Handle) -> Side {
    let node = tree.node(handle);
    let left_height = height(tree, node.left);
    let right_height = height(tree, node.right);
    if left_height > right_height {
        Side::Left
    } else if right_height > left_height {
        Side::Right
    } else {
        match tree.side_of(handle) {
            Some(Side::Left) => Side::Left,
            _ => Side::Right,
        }
    }
}

fn rotate<T, U>(tree: &mut Tree<T, U, usize>, handle: Handle, direction: Side) -> Handle {
    let lifted = tree.rotate(handle, direction);
    update(tree, handle);
    update(tree, lifted);
    lifted
}

/// Walks from `start` to the root, refreshing heights and rotating every node whose subtrees
/// differ in height by more than one.
pub fn rebalance<T, U>(tree: &mut Tree<T, U, usize>, start: Link) {
    let mut current = start;
    while let Some(handle) = current {
        update(tree, handle);
        if balance(tree, handle).abs() > 1 {
            let outer = taller_child(tree, handle);
            let child = tree
                .child(handle, outer)
                .expect("Expected the taller child of an unbalanced node to exist.");
            let inner = taller_child(tree, child);
            trace!("rebalancing {:?} at {:?}: {:?}-{:?}", handle, child, outer, inner);

            // a zig-zag is first straightened at the child
            if inner != outer {
                rotate(tree, child, outer);
            }
            rotate(tree, handle, outer.opposite());
        }
        current = tree.parent(handle);
    }
}

/// Recomputes the height of every node and compares it with the stored one.
pub fn check<T, U>(tree: &Tree<T, U, usize>, link: Link) -> Result<usize> {
    let handle = match link {
        None => return Ok(0),
        Some(handle) => handle,
    };
    let node = tree.node(handle);
    let left_height = check(tree, node.left)?;
    let right_height = check(tree, node.right)?;
    if node.tag != cmp::max(left_height, right_height) + 1 {
        return Err(Error::HeightMismatch);
    }
    if (left_height as i64 - right_height as i64).abs() > 1 {
        return Err(Error::Unbalanced);
    }
    Ok(node.tag)
}
