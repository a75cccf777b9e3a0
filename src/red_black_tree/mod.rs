//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.

mod node;
mod tree;

pub use self::node::Color;

use crate::arena::Handle;
use crate::bst::{Balance, Removed, Sealed, Tree, TreeMap, TreeSet};
use crate::compare::Natural;
use crate::error::{Error, Result};

/// Balancing engine that colors every node red or black.
///
/// The root is black, a red node never has a red child, and every path from a node down to an
/// absent link passes through the same number of black nodes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ColorBalance;

impl Sealed for ColorBalance {}

impl Balance for ColorBalance {
    type Tag = Color;

    fn leaf_tag() -> Color {
        Color::Red
    }

    fn after_insert<T, U>(tree: &mut Tree<T, U, Color>, node: Handle) {
        tree::insert_fixup(tree, node);
    }

    fn after_remove<T, U>(tree: &mut Tree<T, U, Color>, removed: Removed<Color>) {
        tree::remove_fixup(tree, removed);
    }

    fn validate<T, U>(tree: &Tree<T, U, Color>) -> Result<()> {
        if node::is_red(tree, tree.root()) {
            return Err(Error::RedRoot);
        }
        tree::check(tree, tree.root()).map(|_| ())
    }
}

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that keeps the longest path from the
/// root to a leaf at most twice as long as the shortest one.
///
/// # Examples
///
/// ```
/// use balanced_collections::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// assert_eq!(map.remove(&0), Some(1));
/// assert_eq!(map.remove(&1), None);
/// ```
pub type RedBlackMap<T, U, C = Natural> = TreeMap<T, U, ColorBalance, C>;

/// An ordered set implemented using a red black tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.floor(&2), Some(&0));
/// ```
pub type RedBlackSet<T, C = Natural> = TreeSet<T, ColorBalance, C>;

#[cfg(test)]
mod tests {
    use super::{Color, RedBlackMap};

    fn shape(map: &RedBlackMap<u32, ()>) -> Vec<(u32, Color)> {
        map.pre_order().map(|info| (*info.key, info.tag)).collect()
    }

    fn from_keys(keys: &[u32]) -> RedBlackMap<u32, ()> {
        keys.iter().map(|key| (*key, ())).collect()
    }

    #[test]
    fn test_single_is_black() {
        let map = from_keys(&[1]);
        assert_eq!(shape(&map), vec![(1, Color::Black)]);
    }

    #[test]
    fn test_straight_rotation() {
        let map = from_keys(&[1, 2, 3]);
        assert_eq!(
            shape(&map),
            vec![(2, Color::Black), (1, Color::Red), (3, Color::Red)],
        );
    }

    #[test]
    fn test_zig_zag_rotation() {
        let map = from_keys(&[3, 1, 2]);
        assert_eq!(
            shape(&map),
            vec![(2, Color::Black), (1, Color::Red), (3, Color::Red)],
        );
    }

    #[test]
    fn test_recolor() {
        let map = from_keys(&[2, 1, 3, 4]);
        assert_eq!(
            shape(&map),
            vec![
                (2, Color::Black),
                (1, Color::Black),
                (3, Color::Black),
                (4, Color::Red),
            ],
        );
    }

    #[test]
    fn test_remove_black_leaf() {
        let mut map = from_keys(&[2, 1, 3, 4]);
        map.remove(&1);
        assert_eq!(
            shape(&map),
            vec![(3, Color::Black), (2, Color::Black), (4, Color::Black)],
        );
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn test_scenario() {
        let mut map = RedBlackMap::new();
        for key in &[10, 20, 30, 15, 25, 5, 1, 6, 18, 28] {
            map.insert(*key, key * 2);
            assert_eq!(map.validate(), Ok(()));
        }
        for key in &[20, 10, 5, 30] {
            assert_eq!(map.remove(key), Some(key * 2));
            assert_eq!(map.validate(), Ok(()));
        }

        assert_eq!(map.len(), 6);
        assert_eq!(
            map.keys().cloned().collect::<Vec<u32>>(),
            vec![1, 6, 15, 18, 25, 28],
        );
        assert_eq!(map.pre_order().next().map(|info| info.tag), Some(Color::Black));
    }

    #[test]
    fn test_sequential_height() {
        let map: RedBlackMap<u32, ()> = (0..1023).map(|key| (key, ())).collect();
        assert_eq!(map.validate(), Ok(()));
        assert!(map.height() <= 20);
    }

    #[test]
    fn test_remove_all() {
        let mut map: RedBlackMap<u32, u32> = (0..64).map(|key| (key, key)).collect();
        for key in (0..64).step_by(3) {
            assert_eq!(map.remove(&key), Some(key));
            assert_eq!(map.validate(), Ok(()));
        }
        for key in (0..64).rev() {
            map.remove(&key);
            assert_eq!(map.validate(), Ok(()));
        }
        assert!(map.is_empty());
        assert_eq!(map.validate(), Ok(()));
    }
}
