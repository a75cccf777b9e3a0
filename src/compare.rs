//! Total orders used to arrange keys inside a tree.

use std::cmp::Ordering;

/// A strict total order over keys of type `T`.
///
/// The trees rely on the order being transitive and antisymmetric. An implementation that
/// breaks either property leaves the tree in an unspecified (but memory-safe) shape.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator, so a closure can be passed wherever a
/// `Compare<T>` is expected.
///
/// # Examples
///
/// ```
/// use balanced_collections::{AvlMap, Compare, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let mut map = AvlMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
/// map.insert(1, "a");
/// map.insert(2, "b");
/// assert_eq!(map.min(), Some(&2));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// The natural order of a key type, as given by its `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
