use crate::arena::Handle;
use crate::bst::node::{Link, Node};
use crate::bst::tree::{Search, Tree};
use crate::bst::{Balance, Removed};
use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};
use log::debug;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a self-balancing binary search tree.
///
/// The balancing strategy is selected by `B` and the key order by `C`. Most code uses one of
/// the aliases `AvlMap` or `RedBlackMap`, which fix `B` and default `C` to the natural order of
/// the keys.
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
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some(2));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct TreeMap<T, U, B, C = Natural>
where
    B: Balance,
{
    tree: Tree<T, U, B::Tag>,
    len: usize,
    comparator: C,
}

impl<T, U, B> TreeMap<T, U, B, Natural>
where
    T: Ord,
    B: Balance,
{
    /// Constructs a new, empty map ordered by the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, U, B, C> TreeMap<T, U, B, C>
where
    B: Balance,
{
    /// Constructs a new, empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        TreeMap {
            tree: Tree::new(),
            len: 0,
            comparator,
        }
    }

    /// Returns a reference to the comparator of the map.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree
            .root()
            .map(|root| self.tree.node(self.tree.min_node(root)).key())
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree
            .root()
            .map(|root| self.tree.node(self.tree.max_node(root)).key())
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty map
    /// has a height of zero.
    ///
    /// Height-balanced maps read the height off the root in `O(1)`. Other maps walk every node,
    /// which takes `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = (0..7).map(|key| (key, key)).collect();
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        match B::height(&self.tree) {
            Some(height) => height,
            None => self.pre_order().map(|info| info.depth + 1).max().unwrap_or(0),
        }
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreeMapIter<'_, T, U, B> {
        TreeMapIter {
            tree: &self.tree,
            current: self.tree.root(),
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> TreeMapIterMut<'_, T, U, B> {
        let current = self.tree.root();
        TreeMapIterMut {
            slots: self.tree.arena_mut().slots_mut(),
            current,
            stack: Vec::new(),
        }
    }

    /// Returns an iterator over the keys of the map in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = vec![(2, 0), (1, 0)].into_iter().collect();
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|pair| pair.0)
    }

    /// Returns an iterator over the values of the map, ordered by their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = vec![(2, 20), (1, 10)].into_iter().collect();
    /// assert_eq!(map.values().collect::<Vec<&u32>>(), vec![&10, &20]);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &U> {
        self.iter().map(|pair| pair.1)
    }

    /// Returns an iterator that visits every node in pre-order along with its depth and
    /// balancing tag. This is the view a tree renderer or debugger consumes.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let map: AvlMap<u32, ()> = vec![(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// let nodes: Vec<(u32, usize, usize)> = map
    ///     .pre_order()
    ///     .map(|info| (*info.key, info.depth, info.tag))
    ///     .collect();
    /// assert_eq!(nodes, vec![(2, 0, 2), (1, 1, 1), (3, 1, 1)]);
    /// ```
    pub fn pre_order(&self) -> TreeMapPreOrder<'_, T, U, B> {
        TreeMapPreOrder {
            tree: &self.tree,
            stack: self.tree.root().map(|root| (root, 0)).into_iter().collect(),
        }
    }
}

impl<T, U, B, C> TreeMap<T, U, B, C>
where
    B: Balance,
    C: Compare<T>,
{
    /// Inserts a key-value pair into the map. If the key already exists in the map, its value
    /// is replaced and the old value is returned. The stored key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U> {
        match self.tree.search(&key, &self.comparator) {
            Search::Found(handle) => {
                Some(mem::replace(&mut self.tree.node_mut(handle).entry.value, value))
            },
            Search::Vacant(position) => {
                let handle = self.tree.attach(position, Node::new(key, value, B::leaf_tag()));
                self.len += 1;
                B::after_insert(&mut self.tree, handle);
                None
            },
        }
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated value. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some(1));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<U> {
        self.remove_entry(key).map(|pair| pair.1)
    }

    /// Removes a key-value pair from the map and returns the stored key along with its value.
    /// Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove_entry(&1), Some((1, 1)));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry(&mut self, key: &T) -> Option<(T, U)> {
        let target = match self.tree.search(key, &self.comparator) {
            Search::Found(handle) => handle,
            Search::Vacant(_) => return None,
        };

        // a node with two children trades places with its in-order successor, which has no
        // left child
        let victim = match (self.tree.node(target).left, self.tree.node(target).right) {
            (Some(_), Some(right)) => self.tree.min_node(right),
            _ => target,
        };
        debug!("removing {:?} by splicing out {:?}", target, victim);

        let (child, parent) = self.tree.splice(victim);
        let Node { entry, tag, .. } = self.tree.take(victim);
        B::after_remove(&mut self.tree, Removed { tag, child, parent });
        self.len -= 1;

        let entry = if victim == target {
            entry
        } else {
            mem::replace(&mut self.tree.node_mut(target).entry, entry)
        };
        Some(entry.into_pair())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &T) -> Option<&U> {
        self.find(key).map(|handle| self.tree.node(handle).value())
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Option<&mut U> {
        match self.find(key) {
            Some(handle) => Some(&mut self.tree.node_mut(handle).entry.value),
            None => None,
        }
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.tree
            .floor(key, &self.comparator)
            .map(|handle| self.tree.node(handle).key())
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.tree
            .ceil(key, &self.comparator)
            .map(|handle| self.tree.node(handle).key())
    }

    /// Checks every structural invariant of the map: parent links, strict key order, the
    /// stored length, and the invariant of the balancing engine. Returns the first violation
    /// found.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = (0..100).map(|key| (key, key)).collect();
    /// assert_eq!(map.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()> {
        let reachable = self.tree.check_links()?;
        if reachable != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: reachable,
            });
        }

        let mut prev = None;
        for (position, key) in self.keys().enumerate() {
            if let Some(prev) = prev {
                if self.comparator.compare(prev, key) != Ordering::Less {
                    return Err(Error::OrderViolation { position });
                }
            }
            prev = Some(key);
        }

        B::validate(&self.tree)
    }

    fn find(&self, key: &T) -> Link {
        match self.tree.search(key, &self.comparator) {
            Search::Found(handle) => Some(handle),
            Search::Vacant(_) => None,
        }
    }
}

impl<T, U, B, C> IntoIterator for TreeMap<T, U, B, C>
where
    B: Balance,
{
    type IntoIter = TreeMapIntoIter<T, U, B>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        let current = self.tree.root();
        Self::IntoIter {
            tree: self.tree,
            current,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U, B, C> IntoIterator for &'a TreeMap<T, U, B, C>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    type IntoIter = TreeMapIter<'a, T, U, B>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U, B, C> IntoIterator for &'a mut TreeMap<T, U, B, C>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    type IntoIter = TreeMapIterMut<'a, T, U, B>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `TreeMap<T, U, B, C>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct TreeMapIntoIter<T, U, B>
where
    B: Balance,
{
    tree: Tree<T, U, B::Tag>,
    current: Link,
    stack: Vec<Handle>,
}

impl<T, U, B> Iterator for TreeMapIntoIter<T, U, B>
where
    B: Balance,
{
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.tree.node(handle).left;
        }
        self.stack.pop().map(|handle| {
            let Node { entry, right, .. } = self.tree.take(handle);
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `TreeMap<T, U, B, C>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct TreeMapIter<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    tree: &'a Tree<T, U, B::Tag>,
    current: Link,
    stack: Vec<Handle>,
}

impl<'a, T, U, B> Iterator for TreeMapIter<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.tree.node(handle).left;
        }
        let tree = self.tree;
        self.stack.pop().map(|handle| {
            let node = tree.node(handle);
            self.current = node.right;
            (node.key(), node.value())
        })
    }
}

/// A mutable iterator for `TreeMap<T, U, B, C>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct TreeMapIterMut<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    slots: Vec<Option<&'a mut Node<T, U, B::Tag>>>,
    current: Link,
    stack: Vec<Handle>,
}

impl<'a, T, U, B> Iterator for TreeMapIterMut<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.slots[handle.index()]
                .as_ref()
                .expect("Expected an unvisited node.")
                .left;
        }
        let handle = self.stack.pop()?;
        let node = self.slots[handle.index()]
            .take()
            .expect("Expected an unvisited node.");
        self.current = node.right;
        Some((&node.entry.key, &mut node.entry.value))
    }
}

/// A node visited by `TreeMapPreOrder`.
#[derive(Debug)]
pub struct NodeInfo<'a, T, U, M>
where
    T: 'a,
    U: 'a,
{
    /// The key stored in the node.
    pub key: &'a T,
    /// The value stored in the node.
    pub value: &'a U,
    /// The balancing tag of the node: its height or its color.
    pub tag: M,
    /// The number of edges between the node and the root.
    pub depth: usize,
}

/// A pre-order iterator over the nodes of a `TreeMap<T, U, B, C>`.
pub struct TreeMapPreOrder<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    tree: &'a Tree<T, U, B::Tag>,
    stack: Vec<(Handle, usize)>,
}

impl<'a, T, U, B> Iterator for TreeMapPreOrder<'a, T, U, B>
where
    T: 'a,
    U: 'a,
    B: Balance,
{
    type Item = NodeInfo<'a, T, U, B::Tag>;

    fn next(&mut self) -> Option<Self::Item> {
        let (handle, depth) = self.stack.pop()?;
        let node = self.tree.node(handle);
        if let Some(right) = node.right {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = node.left {
            self.stack.push((left, depth + 1));
        }
        Some(NodeInfo {
            key: node.key(),
            value: node.value(),
            tag: node.tag,
            depth,
        })
    }
}

impl<T, U, B, C> Default for TreeMap<T, U, B, C>
where
    B: Balance,
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, U, B, C> Clone for TreeMap<T, U, B, C>
where
    T: Clone,
    U: Clone,
    B: Balance,
    C: Clone,
{
    fn clone(&self) -> Self {
        TreeMap {
            tree: self.tree.clone(),
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, U, B, C> PartialEq for TreeMap<T, U, B, C>
where
    T: PartialEq,
    U: PartialEq,
    B: Balance,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U, B, C> Eq for TreeMap<T, U, B, C>
where
    T: Eq,
    U: Eq,
    B: Balance,
{
}

impl<T, U, B, C> fmt::Debug for TreeMap<T, U, B, C>
where
    T: fmt::Debug,
    U: fmt::Debug,
    B: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U, B, C> Extend<(T, U)> for TreeMap<T, U, B, C>
where
    B: Balance,
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U, B, C> FromIterator<(T, U)> for TreeMap<T, U, B, C>
where
    B: Balance,
    C: Compare<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a, T, U, B, C> Index<&'a T> for TreeMap<T, U, B, C>
where
    B: Balance,
    C: Compare<T>,
{
    type Output = U;

    fn index(&self, key: &T) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, B, C> IndexMut<&'a T> for TreeMap<T, U, B, C>
where
    B: Balance,
    C: Compare<T>,
{
    fn index_mut(&mut self, key: &T) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<T, U, B, C> Serialize for TreeMap<T, U, B, C>
where
    T: Serialize,
    U: Serialize,
    B: Balance,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct TreeMapVisitor<T, U, B, C> {
    marker: PhantomData<fn() -> (T, U, B, C)>,
}

impl<'de, T, U, B, C> Visitor<'de> for TreeMapVisitor<T, U, B, C>
where
    T: Deserialize<'de>,
    U: Deserialize<'de>,
    B: Balance,
    C: Compare<T> + Default,
{
    type Value = TreeMap<T, U, B, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = TreeMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T, U, B, C> Deserialize<'de> for TreeMap<T, U, B, C>
where
    T: Deserialize<'de>,
    U: Deserialize<'de>,
    B: Balance,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TreeMapVisitor {
            marker: PhantomData,
        })
    }
}
