//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod tree;

use crate::arena::Handle;
use crate::bst::{Balance, Removed, Sealed, Tree, TreeMap, TreeSet};
use crate::compare::Natural;
use crate::error::Result;

/// Balancing engine that stores the height of every subtree in its root.
///
/// After an edit the engine walks from the parent of the edited position up to the root,
/// recomputing heights and applying a single or double rotation wherever the heights of two
/// sibling subtrees differ by more than one. The walk never stops early: a removal may need a
/// rotation at every level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeightBalance;

impl Sealed for HeightBalance {}

impl Balance for HeightBalance {
    type Tag = usize;

    fn leaf_tag() -> usize {
        1
    }

    fn after_insert<T, U>(tree: &mut Tree<T, U, usize>, node: Handle) {
        let parent = tree.parent(node);
        tree::rebalance(tree, parent);
    }

    fn after_remove<T, U>(tree: &mut Tree<T, U, usize>, removed: Removed<usize>) {
        tree::rebalance(tree, removed.parent);
    }

    fn height<T, U>(tree: &Tree<T, U, usize>) -> Option<usize> {
        Some(tree::height(tree, tree.root()))
    }

    fn validate<T, U>(tree: &Tree<T, U, usize>) -> Result<()> {
        tree::check(tree, tree.root()).map(|_| ())
    }
}

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
///
/// ```
/// use balanced_collections::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.remove(&0), Some(1));
/// assert_eq!(map.remove(&1), None);
/// ```
pub type AvlMap<T, U, C = Natural> = TreeMap<T, U, HeightBalance, C>;

/// An ordered set implemented using an avl tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
/// ```
pub type AvlSet<T, C = Natural> = TreeSet<T, HeightBalance, C>;

#[cfg(test)]
mod tests {
    use super::AvlMap;

    fn shape(map: &AvlMap<u32, ()>) -> Vec<(u32, usize)> {
        map.pre_order().map(|info| (*info.key, info.tag)).collect()
    }

    #[test]
    fn test_left_left() {
        let map: AvlMap<u32, ()> = vec![3, 2, 1].into_iter().map(|key| (key, ())).collect();
        assert_eq!(shape(&map), vec![(2, 2), (1, 1), (3, 1)]);
    }

    #[test]
    fn test_left_right() {
        let map: AvlMap<u32, ()> = vec![3, 1, 2].into_iter().map(|key| (key, ())).collect();
        assert_eq!(shape(&map), vec![(2, 2), (1, 1), (3, 1)]);
    }

    #[test]
    fn test_right_right() {
        let map: AvlMap<u32, ()> = vec![1, 2, 3].into_iter().map(|key| (key, ())).collect();
        assert_eq!(shape(&map), vec![(2, 2), (1, 1), (3, 1)]);
    }

    #[test]
    fn test_right_left() {
        let map: AvlMap<u32, ()> = vec![1, 3, 2].into_iter().map(|key| (key, ())).collect();
        assert_eq!(shape(&map), vec![(2, 2), (1, 1), (3, 1)]);
    }

    #[test]
    fn test_remove_tie_prefers_single_rotation() {
        // removing 1 leaves 4 with two children of equal height; 4 hangs right of 2, so the
        // right grandchild 5 wins the tie and a single left rotation follows
        let mut map: AvlMap<u32, ()> = vec![2, 1, 4, 3, 5]
            .into_iter()
            .map(|key| (key, ()))
            .collect();
        map.remove(&1);
        assert_eq!(shape(&map), vec![(4, 3), (2, 2), (3, 1), (5, 1)]);
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn test_scenario() {
        let mut map = AvlMap::new();
        for key in &[30, 20, 40, 10, 25, 35, 50, 5, 15, 27] {
            map.insert(*key, format!("v{}", key));
            assert_eq!(map.validate(), Ok(()));
        }
        for key in &[26, 28] {
            map.insert(*key, format!("v{}", key));
            assert_eq!(map.validate(), Ok(()));
        }
        for key in &[10, 30, 20, 27] {
            assert_eq!(map.remove(key), Some(format!("v{}", key)));
            assert_eq!(map.validate(), Ok(()));
        }

        assert_eq!(map.len(), 8);
        assert_eq!(
            map.keys().cloned().collect::<Vec<u32>>(),
            vec![5, 15, 25, 26, 28, 35, 40, 50],
        );
        assert!(map.height() <= 4);
    }

    #[test]
    fn test_sequential_insert_is_perfect() {
        let map: AvlMap<u32, ()> = (0..15).map(|key| (key, ())).collect();
        assert_eq!(map.height(), 4);
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn test_height_matches_walk() {
        let mut map: AvlMap<u32, ()> = AvlMap::new();
        assert_eq!(map.height(), 0);
        for key in 0..100 {
            map.insert(key, ());
        }
        for key in (0..100).step_by(7) {
            map.remove(&key);
        }
        let walked = map.pre_order().map(|info| info.depth + 1).max();
        assert_eq!(Some(map.height()), walked);
    }

    #[test]
    fn test_remove_all() {
        let mut map: AvlMap<u32, u32> = (0..64).map(|key| (key, key)).collect();
        for key in (0..64).rev().step_by(3) {
            assert_eq!(map.remove(&key), Some(key));
            assert_eq!(map.validate(), Ok(()));
        }
        for key in 0..64 {
            map.remove(&key);
            assert_eq!(map.validate(), Ok(()));
        }
        assert!(map.is_empty());
        assert_eq!(map.validate(), Ok(()));
    }
}
