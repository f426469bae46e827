//! Dynamic values for heterogeneous sets.
//!
//! [`Value`] lets one [`Set`] hold members of any kind: numbers, booleans,
//! strings, `null`, and shared reference values ([`Array`], [`Object`],
//! [`SetHandle`]). Scalars are members by value; the handles are members by
//! identity, so two structurally equal objects are different members.
//!
//! # Examples
//!
//! ```rust
//! use refset::set;
//! use refset::value::{Object, Value};
//!
//! let object = Object::new();
//! object.insert("test", "yes");
//!
//! let members = set![1, "1", true, Value::Null, object.clone()];
//! assert_eq!(members.len(), 5);
//! assert!(members.contains(&object));
//! assert!(!members.contains(&Object::new()));
//! ```
//!
//! [`Set`]: crate::set::Set

mod error;

pub use error::TypeMismatchError;

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::key::{HashKey, Hashable, NumberKey, identity_tag};
use crate::set::Set;

// =============================================================================
// Value Definition
// =============================================================================

/// A dynamically typed set member.
///
/// Cloning a `Value` clones scalars and aliases handles: a cloned
/// [`Value::Object`] still refers to the same object.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The "no value" sentinel. Sets never store it.
    #[default]
    Missing,
    /// The null value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A number. Integral numbers of any Rust type map onto this variant.
    Number(f64),
    /// A string.
    String(String),
    /// A shared array.
    Array(Array),
    /// A shared object.
    Object(Object),
    /// A shared set.
    Set(SetHandle),
}

impl Value {
    /// Returns the name of this value's type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::value::Value;
    ///
    /// assert_eq!(Value::Missing.type_name(), "undefined");
    /// assert_eq!(Value::from(1.5).type_name(), "number");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Missing => "undefined",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Set(_) => "set",
        }
    }

    /// Returns `true` for the "no value" sentinel.
    #[inline]
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the number, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    /// Returns the array handle, if this is an array.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the object handle, if this is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the set handle, if this is a set.
    #[must_use]
    pub const fn as_set(&self) -> Option<&SetHandle> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }
}

impl Hashable for Value {
    fn hash_key(&self) -> HashKey {
        match self {
            Self::Missing => HashKey::Missing,
            Self::Null => HashKey::Null,
            Self::Boolean(boolean) => HashKey::Boolean(*boolean),
            Self::Number(number) => HashKey::Number(NumberKey::from_float(*number)),
            Self::String(string) => HashKey::String(string.clone()),
            Self::Array(array) => array.hash_key(),
            Self::Object(object) => object.hash_key(),
            Self::Set(set) => set.hash_key(),
        }
    }
}

/// Scalars compare by value (NaN equals NaN), handles by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Missing, Self::Missing) | (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => {
                NumberKey::from_float(*left) == NumberKey::from_float(*right)
            }
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Set(left), Self::Set(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
            Self::Number(number) => write!(formatter, "{}", NumberKey::from_float(*number)),
            Self::String(string) => formatter.write_str(string),
            Self::Array(_) => formatter.write_str("[object Array]"),
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Set(set) => match set.0.try_borrow() {
                Ok(set) => write!(formatter, "{set}"),
                Err(_) => formatter.write_str("Set(<borrowed>)"),
            },
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_lossless_number {
    ($($number:ty),*) => {
        $(
            impl From<$number> for Value {
                #[inline]
                fn from(number: $number) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_lossless_number!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! impl_from_wide_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Value {
                /// Integers beyond 2^53 lose precision, as every number is an `f64`.
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn from(number: $integer) -> Self {
                    Self::Number(number as f64)
                }
            }
        )*
    };
}

impl_from_wide_integer!(i64, u64, isize, usize);

impl From<bool> for Value {
    #[inline]
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<char> for Value {
    fn from(character: char) -> Self {
        Self::String(character.to_string())
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(string.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(string: String) -> Self {
        Self::String(string)
    }
}

/// `None` becomes [`Value::Null`].
impl<U: Into<Self>> From<Option<U>> for Value {
    fn from(option: Option<U>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

/// Builds a fresh [`Array`] holding the elements.
impl<U: Into<Self>> From<Vec<U>> for Value {
    fn from(elements: Vec<U>) -> Self {
        Self::Array(elements.into_iter().collect())
    }
}

impl From<Array> for Value {
    #[inline]
    fn from(array: Array) -> Self {
        Self::Array(array)
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<SetHandle> for Value {
    #[inline]
    fn from(set: SetHandle) -> Self {
        Self::Set(set)
    }
}

/// Moves the set behind a fresh [`SetHandle`].
impl From<Set<Self>> for Value {
    fn from(set: Set<Self>) -> Self {
        Self::Set(SetHandle::new(set))
    }
}

impl TryFrom<&Value> for f64 {
    type Error = TypeMismatchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_number().ok_or(TypeMismatchError {
            expected: "number",
            found: value.type_name(),
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = TypeMismatchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or(TypeMismatchError {
            expected: "boolean",
            found: value.type_name(),
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = TypeMismatchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_str().map(str::to_owned).ok_or(TypeMismatchError {
            expected: "string",
            found: value.type_name(),
        })
    }
}

// =============================================================================
// Array
// =============================================================================

/// A shared, mutable array of values.
///
/// Cloning an `Array` aliases it. Equality is identity.
///
/// # Examples
///
/// ```rust
/// use refset::value::{Array, Value};
///
/// let array = Array::from_iter([1, 2, 3]);
/// let alias = array.clone();
/// alias.push(4);
///
/// assert_eq!(array.len(), 4);
/// assert_eq!(array.get(3), Some(Value::from(4)));
/// assert_ne!(array, Array::from_iter([1, 2, 3, 4]));
/// ```
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Appends an element.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Returns a clone of the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Returns a clone of the elements.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Immutably borrows the elements.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    /// Mutably borrows the elements.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.0.borrow_mut()
    }
}

impl<U: Into<Value>> FromIterator<U> for Array {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        Self(Rc::new(RefCell::new(iter.into_iter().map(Into::into).collect())))
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Array {}

impl Hashable for Array {
    fn hash_key(&self) -> HashKey {
        HashKey::Object(identity_tag(&self.0))
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Array");
        if let Ok(elements) = self.0.try_borrow() {
            debug.field("len", &elements.len());
        }
        debug.finish_non_exhaustive()
    }
}

// =============================================================================
// Object
// =============================================================================

/// A shared, mutable map from property names to values.
///
/// Cloning an `Object` aliases it. Equality is identity.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<BTreeMap<String, Value>>>);

impl Object {
    /// Creates an object with no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning its previous value.
    pub fn insert(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(name.into(), value.into())
    }

    /// Returns a clone of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().get(name).cloned()
    }

    /// Removes a property, returning its value.
    pub fn remove(&self, name: &str) -> Option<Value> {
        self.0.borrow_mut().remove(name)
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the object has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns the property names in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Immutably borrows the properties.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, BTreeMap<String, Value>> {
        self.0.borrow()
    }
}

impl<K: Into<String>, U: Into<Value>> FromIterator<(K, U)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, U)>>(iter: I) -> Self {
        let properties = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self(Rc::new(RefCell::new(properties)))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Object {}

impl Hashable for Object {
    fn hash_key(&self) -> HashKey {
        HashKey::Object(identity_tag(&self.0))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Object");
        if let Ok(properties) = self.0.try_borrow() {
            debug.field("keys", &properties.keys().collect::<Vec<_>>());
        }
        debug.finish_non_exhaustive()
    }
}

// =============================================================================
// SetHandle
// =============================================================================

/// A shared set, usable as a member of another set.
///
/// A set stored inside another set is a member by identity, exactly like an
/// object. Cloning a `SetHandle` aliases it.
///
/// # Examples
///
/// ```rust
/// use refset::set;
/// use refset::value::SetHandle;
///
/// let inner = SetHandle::new(set![[1, 2, 3]]);
/// let outer = set![inner.clone()];
///
/// assert!(outer.contains(&inner));
/// assert!(!outer.contains(&SetHandle::new(set![[1, 2, 3]])));
/// assert_eq!(outer.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct SetHandle(Rc<RefCell<Set<Value>>>);

impl SetHandle {
    /// Moves a set behind a new handle.
    #[must_use]
    pub fn new(set: Set<Value>) -> Self {
        Self(Rc::new(RefCell::new(set)))
    }

    /// Immutably borrows the set.
    ///
    /// # Panics
    ///
    /// Panics if the set is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Set<Value>> {
        self.0.borrow()
    }

    /// Mutably borrows the set.
    ///
    /// # Panics
    ///
    /// Panics if the set is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, Set<Value>> {
        self.0.borrow_mut()
    }
}

impl PartialEq for SetHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SetHandle {}

impl Hashable for SetHandle {
    fn hash_key(&self) -> HashKey {
        HashKey::Object(identity_tag(&self.0))
    }
}

impl fmt::Debug for SetHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("SetHandle");
        if let Ok(set) = self.0.try_borrow() {
            debug.field("len", &set.len());
        }
        debug.finish_non_exhaustive()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serializes a value.
///
/// A handle that is mutably borrowed fails with a serializer error instead of
/// panicking. Cyclic structures are not supported: a set or array that
/// contains itself recurses without bound.
#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{Error, SerializeMap, SerializeSeq};

        /// Largest integer an `f64` represents exactly.
        const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

        match self {
            Self::Missing | Self::Null => serializer.serialize_unit(),
            Self::Boolean(boolean) => serializer.serialize_bool(*boolean),
            #[allow(clippy::cast_possible_truncation)]
            Self::Number(number) if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*number as i64)
            }
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::String(string) => serializer.serialize_str(string),
            Self::Array(array) => {
                let elements = array
                    .0
                    .try_borrow()
                    .map_err(|_| S::Error::custom("array is mutably borrowed"))?;
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Self::Object(object) => {
                let properties = object
                    .0
                    .try_borrow()
                    .map_err(|_| S::Error::custom("object is mutably borrowed"))?;
                let mut map = serializer.serialize_map(Some(properties.len()))?;
                for (name, value) in properties.iter() {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Self::Set(set) => {
                let set = set
                    .0
                    .try_borrow()
                    .map_err(|_| S::Error::custom("set is mutably borrowed"))?;
                serde::Serialize::serialize(&*set, serializer)
            }
        }
    }
}

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any value")
    }

    fn visit_bool<E>(self, boolean: bool) -> Result<Self::Value, E> {
        Ok(Value::Boolean(boolean))
    }

    fn visit_i64<E>(self, number: i64) -> Result<Self::Value, E> {
        Ok(Value::from(number))
    }

    fn visit_u64<E>(self, number: u64) -> Result<Self::Value, E> {
        Ok(Value::from(number))
    }

    fn visit_f64<E>(self, number: f64) -> Result<Self::Value, E> {
        Ok(Value::Number(number))
    }

    fn visit_str<E>(self, string: &str) -> Result<Self::Value, E> {
        Ok(Value::from(string))
    }

    fn visit_string<E>(self, string: String) -> Result<Self::Value, E> {
        Ok(Value::String(string))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements: Vec<Value> = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Value::Array(elements.into_iter().collect()))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let object = Object::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            object.insert(name, value);
        }
        Ok(Value::Object(object))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Missing, "undefined")]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "boolean")]
    #[case(Value::from(3), "number")]
    #[case(Value::from("a"), "string")]
    #[case(Value::from(Array::new()), "array")]
    #[case(Value::from(Object::new()), "object")]
    #[case(Value::from(SetHandle::default()), "set")]
    fn test_type_name(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.type_name(), expected);
    }

    #[rstest]
    fn test_default_is_missing() {
        assert!(Value::default().is_missing());
    }

    #[rstest]
    fn test_option_conversion() {
        assert!(Value::from(Option::<i32>::None).is_null());
        assert_eq!(Value::from(Some(2)), Value::Number(2.0));
    }

    #[rstest]
    fn test_vec_conversion_builds_array() {
        let value = Value::from(vec![1, 2, 3]);
        let array = value.as_array().map(Array::to_vec);
        assert_eq!(array, Some(vec![Value::from(1), Value::from(2), Value::from(3)]));
    }

    #[rstest]
    fn test_scalar_equality() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_ne!(Value::from(1), Value::from(true));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::Null, Value::Missing);
    }

    #[rstest]
    fn test_handle_equality_is_identity() {
        let object = Object::new();
        assert_eq!(Value::from(object.clone()), Value::from(object));
        assert_ne!(Value::from(Object::new()), Value::from(Object::new()));
        assert_ne!(Value::from(Array::new()), Value::from(Array::new()));
    }

    #[rstest]
    fn test_hash_keys_match_primitive_keys() {
        assert_eq!(Value::from(2).hash_key(), 2_u64.hash_key());
        assert_eq!(Value::from("x").hash_key(), "x".hash_key());
        assert_eq!(Value::from(false).hash_key(), false.hash_key());
        assert_eq!(Value::Null.hash_key(), Option::<bool>::None.hash_key());
    }

    #[rstest]
    fn test_handle_keys_are_stable() {
        let array = Array::from_iter([1]);
        let value = Value::from(array.clone());
        assert_eq!(value.hash_key(), array.hash_key());
        assert!(matches!(value.hash_key(), HashKey::Object(_)));
    }

    #[rstest]
    fn test_try_from_success() {
        assert_eq!(f64::try_from(&Value::from(2.5)), Ok(2.5));
        assert_eq!(bool::try_from(&Value::from(true)), Ok(true));
        assert_eq!(String::try_from(&Value::from("s")), Ok(String::from("s")));
    }

    #[rstest]
    fn test_try_from_mismatch() {
        assert_eq!(
            bool::try_from(&Value::Null),
            Err(TypeMismatchError {
                expected: "boolean",
                found: "null",
            })
        );
        assert_eq!(
            String::try_from(&Value::from(1)),
            Err(TypeMismatchError {
                expected: "string",
                found: "number",
            })
        );
    }

    #[rstest]
    #[case(Value::Missing, "undefined")]
    #[case(Value::from(2), "2")]
    #[case(Value::from(0.5), "0.5")]
    #[case(Value::from("plain"), "plain")]
    #[case(Value::from(Object::new()), "[object Object]")]
    #[case(Value::from(Array::new()), "[object Array]")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_object_properties() {
        let object = Object::new();
        assert!(object.is_empty());
        assert_eq!(object.insert("b", 2), None);
        assert_eq!(object.insert("a", 1), None);
        assert_eq!(object.insert("a", 3), Some(Value::from(1)));
        assert_eq!(object.keys(), vec![String::from("a"), String::from("b")]);
        assert_eq!(object.remove("b"), Some(Value::from(2)));
        assert_eq!(object.len(), 1);
    }

    #[rstest]
    fn test_debug_is_shallow() {
        let array = Array::from_iter([1, 2]);
        array.push(array.clone());
        assert_eq!(format!("{array:?}"), "Array { len: 3, .. }");
    }
}
