use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use crate::splay_tree::{Result, SplayStrategy};
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::result;

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree. Every mutating operation first "splays"
/// the accessed key to the root of the tree through a sequence of rotations, or the last key on
/// its search path if the key does not exist, and then edits the tree at the root. Recently
/// accessed keys are therefore cheap to access again, and a sequence of operations costs
/// amortized `O(log n)` per operation. No worst-case height bound is maintained.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.root(), Some(&3));
///
/// assert!(set.search(&0));
/// assert_eq!(set.root(), Some(&0));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct SplaySet<T> {
    tree: tree::Tree<T>,
    len: usize,
    strategy: SplayStrategy,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>` that splays recursively.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_strategy(SplayStrategy::default())
    }

    /// Constructs a new, empty `SplaySet<T>` that splays using `strategy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::{SplaySet, SplayStrategy};
    ///
    /// let set: SplaySet<u32> = SplaySet::with_strategy(SplayStrategy::TopDown);
    /// assert_eq!(set.strategy(), SplayStrategy::TopDown);
    /// ```
    pub fn with_strategy(strategy: SplayStrategy) -> Self {
        SplaySet {
            tree: None,
            len: 0,
            strategy,
        }
    }

    /// Rebuilds a set from the preorder traversal of a binary search tree, recreating the exact
    /// shape of that tree. Returns an error if `keys` contains a duplicate or is not the preorder
    /// traversal of any binary search tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::{Error, SplaySet, SplayStrategy};
    ///
    /// let set = SplaySet::from_preorder(vec![2, 1, 3], SplayStrategy::Recursive).unwrap();
    /// assert_eq!(set.preorder().collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    ///
    /// let res = SplaySet::from_preorder(vec![2, 3, 1], SplayStrategy::Recursive);
    /// assert_eq!(res.err(), Some(Error::OutOfOrder(2)));
    /// ```
    pub fn from_preorder<I>(keys: I, strategy: SplayStrategy) -> Result<Self>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let keys: Vec<T> = keys.into_iter().collect();
        let len = keys.len();
        let tree = tree::from_preorder(keys)?;
        Ok(SplaySet {
            tree,
            len,
            strategy,
        })
    }

    /// Returns the strategy used to splay the set.
    pub fn strategy(&self) -> SplayStrategy {
        self.strategy
    }

    /// Inserts a key into the set and splays it to the root. Returns `false` and leaves the set
    /// unchanged if the key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.insert(1));
    /// assert!(set.insert(2));
    /// assert_eq!(set.root(), Some(&2));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.root(), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = tree::insert(&mut self.tree, key, self.strategy);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Checks if a key exists in the set. The key, or the last key on its search path if it does
    /// not exist, is splayed to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert!(set.search(&1));
    /// assert_eq!(set.root(), Some(&1));
    /// assert!(!set.search(&4));
    /// assert_eq!(set.root(), Some(&3));
    /// ```
    pub fn search<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key, self.strategy)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None`. The set is splayed on the key in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let removed = tree::remove(&mut self.tree, key, self.strategy);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a key exists in the set. Note that `contains` does not splay the tree in order to
    /// use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.root(), Some(&2));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::contains(&self.tree, key)
    }

    /// Returns the key at the root of the tree, which is the most recently splayed key.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.root(), None);
    /// set.insert(1);
    /// assert_eq!(set.root(), Some(&1));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty. Note that `min`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty. Note that `max`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield keys using preorder traversal,
    /// visiting each node before its left subtree and its left subtree before its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// set.insert(2);
    ///
    /// let mut iterator = set.preorder();
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn preorder(&self) -> Preorder<T> {
        Preorder {
            stack: self.tree.iter().map(|node| &**node).collect(),
            remaining: self.len,
        }
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in preorder and yields immutable references.
pub struct Preorder<'a, T>
where
    T: 'a,
{
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Preorder<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            if let Some(ref right) = node.right {
                self.stack.push(right);
            }
            if let Some(ref left) = node.left {
                self.stack.push(left);
            }
            self.remaining -= 1;
            &node.key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Preorder<'a, T> where T: 'a {}

impl<T> Drop for SplaySet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.preorder()).finish()
    }
}

impl<T> Extend<T> for SplaySet<T>
where
    T: Ord,
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

impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        set.extend(iter);
        set
    }
}

impl<T> Serialize for SplaySet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for key in self.preorder() {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

struct SplaySetVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for SplaySetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = SplaySet<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of keys in preorder")
    }

    fn visit_seq<A>(self, mut seq: A) -> result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // The length hint comes from untrusted input.
        let mut keys = Vec::with_capacity(cmp::min(seq.size_hint().unwrap_or(0), 4096));
        while let Some(key) = seq.next_element()? {
            keys.push(key);
        }
        SplaySet::from_preorder(keys, SplayStrategy::default()).map_err(de::Error::custom)
    }
}

impl<'de, T> Deserialize<'de> for SplaySet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SplaySetVisitor {
            marker: PhantomData,
        })
    }
}
