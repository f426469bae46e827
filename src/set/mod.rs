//! A mathematical set with value and identity membership.
//!
//! This module provides [`Set`], a mutable collection that keeps one member
//! per [`HashKey`]. Scalars (numbers, booleans, strings, null) are members by
//! value; shared references are members by identity.
//!
//! # Overview
//!
//! - `add`, `remove`, `update` and `clear` mutate in place and return `&mut Self`
//! - `union`, `intersection`, `difference`, `complement` and
//!   `symmetric_difference` return new sets and never alias the operands
//! - every binary operation accepts a set, a sequence or a scalar; anything
//!   that is not a set is first wrapped into one
//!
//! # Order
//!
//! Members are traversed in insertion order. Removing a member keeps the
//! relative order of the rest. Results of binary operations list members of
//! `self` first, then members of `other`. Equality never depends on order.
//!
//! # Examples
//!
//! ```rust
//! use refset::set;
//!
//! let left = set![[1, 2, 3]];
//! let right = set![[3, 4, 5]];
//!
//! assert!(left.union(&right).equals([1, 2, 3, 4, 5]));
//! assert!(left.intersection(&right).equals(3));
//! assert!(left.difference(&right).equals([1, 2]));
//! assert!(left.complement(&right).equals([4, 5]));
//! assert!(left.symmetric_difference(&right).equals([1, 2, 4, 5]));
//! assert_eq!(left.to_string(), "Set([1, 2, 3])");
//! ```

mod insertable;
mod iter;
mod set_macro;

pub use insertable::Insertable;
pub use iter::{IntoIter, Iter, Keys};

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use indexmap::IndexMap;

use crate::key::{HashKey, Hashable};

#[cfg(feature = "fxhash")]
type MemberHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type MemberHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type MemberHasher = std::hash::RandomState;

type Members<T> = IndexMap<HashKey, T, MemberHasher>;

// =============================================================================
// Set Definition
// =============================================================================

/// A set of members keyed by [`HashKey`].
///
/// `len()` always equals the number of stored members. The "no value"
/// sentinel ([`HashKey::Missing`]) is never stored.
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `contains`, `add`      | O(1)       |
/// | `remove`               | O(n)       |
/// | `len`, `is_empty`      | O(1)       |
/// | `copy`                 | O(n)       |
/// | `union`                | O(n + m)   |
/// | `intersection`         | O(n)       |
/// | `difference`           | O(n)       |
/// | `complement`           | O(m)       |
/// | `symmetric_difference` | O(n + m)   |
///
/// `remove` is linear because it preserves traversal order.
///
/// # Examples
///
/// ```rust
/// use refset::Set;
///
/// let mut set: Set<i32> = Set::new();
/// set.add(1).add(2).add(2);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&1));
/// assert!(!set.contains(&true));
/// assert!(!set.contains("1"));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    members: Members<T>,
}

// Static assertions: sets of plain data are thread-safe, sets of `Value` are not
static_assertions::assert_impl_all!(Set<i32>: Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Set<crate::value::Value>: Send, Sync);

impl<T> Set<T> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.to_string(), "Set([])");
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: IndexMap::with_hasher(MemberHasher::default()),
        }
    }

    /// Returns the number of members.
    #[doc(alias = "size")]
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if a member with the same key as `value` is present.
    ///
    /// `value` may be of any [`Hashable`] type, so a `Set<Value>` can be
    /// queried with plain integers or string slices. The "no value"
    /// sentinel is never contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::{set, Value};
    ///
    /// let set = set![[1, 2], true, Value::Null];
    /// assert!(set.contains(&1));
    /// assert!(set.contains(&true));
    /// assert!(set.contains(&Value::Null));
    /// assert!(!set.contains(&Value::Missing));
    /// assert!(!set.contains("1"));
    /// ```
    #[must_use]
    pub fn contains<Q: Hashable + ?Sized>(&self, value: &Q) -> bool {
        self.members.contains_key(&value.hash_key())
    }

    /// Removes the member with the same key as `value`, if any.
    ///
    /// Removing an absent value, or the "no value" sentinel, does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::set;
    ///
    /// let mut set = set![[1, 2, 3]];
    /// set.remove(&2).remove(&4);
    /// assert!(set.equals([1, 3]));
    /// ```
    pub fn remove<Q: Hashable + ?Sized>(&mut self, value: &Q) -> &mut Self {
        self.members.shift_remove(&value.hash_key());
        self
    }

    /// Removes every member.
    pub fn clear(&mut self) -> &mut Self {
        self.members.clear();
        self
    }

    /// Returns an iterator over the members in traversal order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.members.values(),
        }
    }

    /// Returns an iterator over the member keys in traversal order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, T> {
        Keys {
            inner: self.members.keys(),
        }
    }

    /// Calls `function` with each member, its position, and the set itself.
    ///
    /// Positions count up from 0 in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::{set, Value};
    ///
    /// let set = set![1, 2, 3];
    /// set.for_each(|member, index, owner| {
    ///     assert_eq!(*member, Value::from(index + 1));
    ///     assert!(std::ptr::eq(owner, &set));
    /// });
    /// ```
    pub fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (index, member) in self.members.values().enumerate() {
            function(member, index, self);
        }
    }

    /// Like [`for_each`](Self::for_each), but stops at the first error and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_for_each<E, F>(&self, mut function: F) -> Result<(), E>
    where
        F: FnMut(&T, usize, &Self) -> Result<(), E>,
    {
        for (index, member) in self.members.values().enumerate() {
            function(member, index, self)?;
        }
        Ok(())
    }

    #[inline]
    fn contains_key(&self, key: &HashKey) -> bool {
        self.members.contains_key(key)
    }

    fn insert_keyed(&mut self, key: HashKey, value: T) {
        if !key.is_missing() {
            self.members.entry(key).or_insert(value);
        }
    }
}

impl<T: Hashable> Set<T> {
    /// Adds `value` as a single member.
    ///
    /// Adding a value that is already present, or the "no value" sentinel,
    /// does nothing. Sequences and sets are added as-is, not expanded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::{Set, Value};
    ///
    /// let mut set: Set<Value> = Set::new();
    /// set.add(3).add(Value::Missing).add(vec![1, 2, 3]);
    ///
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.equals([1, 2, 3]));
    /// ```
    pub fn add(&mut self, value: impl Into<T>) -> &mut Self {
        let value = value.into();
        self.insert_keyed(value.hash_key(), value);
        self
    }
}

impl<T: Hashable + Clone> Set<T> {
    /// Creates a set from a list of arguments, as if each was passed to
    /// [`update`](Self::update).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::{Insertable, Set, Value};
    ///
    /// let inner: Set<Value> = Set::from([1, 2, 3].map(Value::from));
    /// let set: Set<Value> = Set::from_args([Insertable::from(1), Insertable::from(&inner)]);
    ///
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn from_args<'a, I>(arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Insertable<'a, T>>,
        T: 'a,
    {
        let mut set = Self::new();
        set.update_all(arguments);
        set
    }

    /// Adds the members described by one argument.
    ///
    /// - a sequence is expanded one level, each element added individually
    /// - a set is merged member for member, reusing its keys
    /// - anything else is added as a single member
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::{set, Value};
    ///
    /// let mut set = set![[1, 2, 3]];
    /// set.update([1, 2, 3, 4, 5, 6]);
    /// set.update(&set![7]);
    /// set.update(Value::Null);
    ///
    /// assert_eq!(set.len(), 8);
    /// ```
    pub fn update<'a>(&mut self, argument: impl Into<Insertable<'a, T>>) -> &mut Self
    where
        T: 'a,
    {
        match argument.into() {
            Insertable::Scalar(value) => {
                self.add(value);
            }
            Insertable::Sequence(values) => {
                for value in values {
                    self.add(value);
                }
            }
            Insertable::Set(other) => {
                for (key, value) in &other.members {
                    if !self.contains_key(key) {
                        self.members.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        self
    }

    /// Applies [`update`](Self::update) to each argument in turn.
    pub fn update_all<'a, I>(&mut self, arguments: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Insertable<'a, T>>,
        T: 'a,
    {
        for argument in arguments {
            self.update(argument);
        }
        self
    }

    /// Returns a shallow copy of the set.
    ///
    /// Members are cloned; shared handles keep their identity.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the members in traversal order.
    #[doc(alias = "to_array")]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.members.values().cloned().collect()
    }

    /// Returns `true` if both sets have exactly the same member keys.
    ///
    /// `other` may be a set, a sequence or a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::{set, Set, Value};
    ///
    /// assert!(set![[1, 2, 3]].equals([3, 2, 1]));
    /// assert!(set![4].equals(4));
    /// assert!(!Set::<Value>::new().equals(4));
    /// ```
    #[must_use]
    pub fn equals<'a>(&self, other: impl Into<Insertable<'a, T>>) -> bool
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        self.len() == other.len() && self.keys().all(|key| other.contains_key(key))
    }

    /// Returns a new set with the members of both `self` and `other`.
    #[must_use]
    pub fn union<'a>(&self, other: impl Into<Insertable<'a, T>>) -> Self
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        let mut union = self.clone();
        for (key, value) in &other.members {
            if !union.contains_key(key) {
                union.members.insert(key.clone(), value.clone());
            }
        }
        union
    }

    /// Returns a new set with the members present in both `self` and `other`.
    #[must_use]
    pub fn intersection<'a>(&self, other: impl Into<Insertable<'a, T>>) -> Self
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        self.filtered(|key| other.contains_key(key))
    }

    /// Returns a new set with the members of `self` that are not in `other`.
    #[must_use]
    pub fn difference<'a>(&self, other: impl Into<Insertable<'a, T>>) -> Self
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        self.filtered(|key| !other.contains_key(key))
    }

    /// Returns a new set with the members of `other` that are not in `self`.
    ///
    /// This is the relative complement of `self` in `other`: the operands are
    /// reversed with respect to [`difference`](Self::difference).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::set;
    ///
    /// let left = set![[1, 2, 3]];
    /// assert!(left.complement([3, 4, 5]).equals([4, 5]));
    /// assert!(left.difference([3, 4, 5]).equals([1, 2]));
    /// ```
    #[must_use]
    pub fn complement<'a>(&self, other: impl Into<Insertable<'a, T>>) -> Self
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        other.filtered(|key| !self.contains_key(key))
    }

    /// Returns a new set with the members in exactly one of `self` and `other`.
    #[must_use]
    pub fn symmetric_difference<'a>(&self, other: impl Into<Insertable<'a, T>>) -> Self
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        let mut result = self.filtered(|key| !other.contains_key(key));
        for (key, value) in &other.members {
            if !self.contains_key(key) {
                result.members.insert(key.clone(), value.clone());
            }
        }
        result
    }

    /// Returns `true` if `self` and `other` have no members in common.
    #[must_use]
    pub fn is_disjoint<'a>(&self, other: impl Into<Insertable<'a, T>>) -> bool
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        let (smaller, larger) = if self.len() <= other.len() {
            (self, &*other)
        } else {
            (&*other, self)
        };
        !smaller.keys().any(|key| larger.contains_key(key))
    }

    /// Returns `true` if every member of `self` is also a member of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::set;
    ///
    /// let small = set![[1, 2]];
    /// let large = set![[1, 2, 3, 4]];
    /// assert!(small.is_subset(&large));
    /// assert!(large.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset<'a>(&self, other: impl Into<Insertable<'a, T>>) -> bool
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        self.is_subset_of(&other)
    }

    /// Returns `true` if `self` is a subset of `other` and smaller than it.
    #[must_use]
    pub fn is_proper_subset<'a>(&self, other: impl Into<Insertable<'a, T>>) -> bool
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        self.len() < other.len() && self.is_subset_of(&other)
    }

    /// Returns `true` if every member of `other` is also a member of `self`.
    #[must_use]
    pub fn is_superset<'a>(&self, other: impl Into<Insertable<'a, T>>) -> bool
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        other.is_subset_of(self)
    }

    /// Returns `true` if `self` is a superset of `other` and larger than it.
    #[must_use]
    pub fn is_proper_superset<'a>(&self, other: impl Into<Insertable<'a, T>>) -> bool
    where
        T: 'a,
    {
        let other = Self::coerce(other);
        other.len() < self.len() && other.is_subset_of(self)
    }

    /// Borrows a set operand; wraps anything else into a new set.
    fn coerce<'a>(other: impl Into<Insertable<'a, T>>) -> Cow<'a, Self>
    where
        T: 'a,
    {
        match other.into() {
            Insertable::Set(set) => Cow::Borrowed(set),
            argument => Cow::Owned(Self::from_args([argument])),
        }
    }

    fn is_subset_of(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.keys().all(|key| other.contains_key(key))
    }

    fn filtered<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&HashKey) -> bool,
    {
        let mut result = Self::new();
        for (key, value) in &self.members {
            if predicate(key) {
                result.members.insert(key.clone(), value.clone());
            }
        }
        result
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hashable> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hashable> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Hashable> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Hashable, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.members.into_values(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sets are equal when their member keys are equal, in any order.
impl<T> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.keys().all(|key| other.contains_key(key))
    }
}

impl<T> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Lists member keys, not values: `Set([1, "a", null])`.
impl<T> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Set([")?;
        let mut first = true;
        for key in self.keys() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "])")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Hashable + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, other: &Set<T>) -> Set<T> {
        self.union(other)
    }
}

impl<T: Hashable + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, other: &Set<T>) -> Set<T> {
        self.intersection(other)
    }
}

impl<T: Hashable + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, other: &Set<T>) -> Set<T> {
        self.difference(other)
    }
}

impl<T: Hashable + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, other: &Set<T>) -> Set<T> {
        self.symmetric_difference(other)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for member in self {
            seq.serialize_element(member)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Hashable,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Set::new();
        while let Some(member) = seq.next_element::<T>()? {
            set.add(member);
        }
        Ok(set)
    }
}

/// Duplicate members collapse and the "no value" sentinel is dropped.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Hashable,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
