use crate::bst::map::{TreeMap, TreeMapIntoIter, TreeMapIter};
use crate::bst::Balance;
use crate::compare::{Compare, Natural};
use crate::error::Result;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

/// An ordered set implemented using a self-balancing binary search tree.
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
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct TreeSet<T, B, C = Natural>
where
    B: Balance,
{
    map: TreeMap<T, (), B, C>,
}

impl<T, B> TreeSet<T, B, Natural>
where
    T: Ord,
    B: Balance,
{
    /// Constructs a new, empty set ordered by the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        TreeSet {
            map: TreeMap::new(),
        }
    }
}

impl<T, B, C> TreeSet<T, B, C>
where
    B: Balance,
{
    /// Constructs a new, empty set ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.iter().collect::<Vec<&i32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        TreeSet {
            map: TreeMap::with_comparator(comparator),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreeSetIter<'_, T, B> {
        TreeSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T, B, C> TreeSet<T, B, C>
where
    B: Balance,
    C: Compare<T>,
{
    /// Inserts a key into the set. Returns `false` if an equal key was already present, in
    /// which case the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.map.insert(key, ()).is_none()
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns the stored key. Returns `None` if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, key: &T) -> Option<T> {
        self.map.remove_entry(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.map.contains_key(key)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.map.ceil(key)
    }

    /// Checks every structural invariant of the underlying tree.
    pub fn validate(&self) -> Result<()> {
        self.map.validate()
    }
}

impl<T, B, C> IntoIterator for TreeSet<T, B, C>
where
    B: Balance,
{
    type Item = T;
    type IntoIter = TreeSetIntoIter<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T, B, C> IntoIterator for &'a TreeSet<T, B, C>
where
    T: 'a,
    B: Balance,
{
    type Item = &'a T;
    type IntoIter = TreeSetIter<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreeSet<T, B, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct TreeSetIntoIter<T, B>
where
    B: Balance,
{
    map_iter: TreeMapIntoIter<T, (), B>,
}

impl<T, B> Iterator for TreeSetIntoIter<T, B>
where
    B: Balance,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `TreeSet<T, B, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct TreeSetIter<'a, T, B>
where
    T: 'a,
    B: Balance,
{
    map_iter: TreeMapIter<'a, T, (), B>,
}

impl<'a, T, B> Iterator for TreeSetIter<'a, T, B>
where
    T: 'a,
    B: Balance,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<T, B, C> Default for TreeSet<T, B, C>
where
    B: Balance,
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, B, C> Clone for TreeSet<T, B, C>
where
    T: Clone,
    B: Balance,
    C: Clone,
{
    fn clone(&self) -> Self {
        TreeSet {
            map: self.map.clone(),
        }
    }
}

impl<T, B, C> PartialEq for TreeSet<T, B, C>
where
    T: PartialEq,
    B: Balance,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T, B, C> Eq for TreeSet<T, B, C>
where
    T: Eq,
    B: Balance,
{
}

impl<T, B, C> fmt::Debug for TreeSet<T, B, C>
where
    T: fmt::Debug,
    B: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, B, C> Extend<T> for TreeSet<T, B, C>
where
    B: Balance,
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, B, C> FromIterator<T> for TreeSet<T, B, C>
where
    B: Balance,
    C: Compare<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, B, C> Serialize for TreeSet<T, B, C>
where
    T: Serialize,
    B: Balance,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

struct TreeSetVisitor<T, B, C> {
    marker: PhantomData<fn() -> (T, B, C)>,
}

impl<'de, T, B, C> Visitor<'de> for TreeSetVisitor<T, B, C>
where
    T: Deserialize<'de>,
    B: Balance,
    C: Compare<T> + Default,
{
    type Value = TreeSet<T, B, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = TreeSet::default();
        while let Some(key) = access.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T, B, C> Deserialize<'de> for TreeSet<T, B, C>
where
    T: Deserialize<'de>,
    B: Balance,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeSetVisitor {
            marker: PhantomData,
        })
    }
}
