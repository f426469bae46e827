//! Arguments accepted by the set constructor, `update`, and binary operations.

use crate::value::{Array, Object, SetHandle, Value};

use super::Set;

/// One argument to [`Set::update`] or a binary set operation.
///
/// Dispatch is explicit: a [`Sequence`](Insertable::Sequence) is expanded one
/// level, a [`Set`](Insertable::Set) is merged member for member, and a
/// [`Scalar`](Insertable::Scalar) is a single member even when it is itself
/// an array or a set handle.
///
/// # Conversions
///
/// | Source                      | Variant    |
/// |-----------------------------|------------|
/// | `&Set<T>`                   | `Set`      |
/// | `Vec<U>`, `[U; N]`, `&[U]`  | `Sequence` |
/// | scalars, `Value`, handles   | `Scalar` (for `Set<Value>`) |
///
/// Bare scalars convert on their own only for `Set<Value>`. A generic
/// `From<T>` would overlap the sequence conversions (`T` may itself be a
/// `Vec`), so for any other `Set<T>` wrap a scalar with
/// [`Insertable::scalar`]:
///
/// ```rust
/// use refset::{Insertable, Set};
///
/// let set: Set<i32> = Set::from([4]);
/// assert!(set.equals(Insertable::scalar(4)));
/// assert!(set.union(Insertable::scalar(7)).equals([4, 7]));
/// ```
///
/// # Examples
///
/// ```rust
/// use refset::{Insertable, Set, Value};
///
/// let mut set: Set<Value> = Set::new();
/// set.update([1, 2, 3]);
/// set.update(4);
/// set.update(Insertable::Scalar(Value::from(vec![5, 6])));
///
/// assert_eq!(set.len(), 5);
/// ```
#[derive(Debug)]
pub enum Insertable<'a, T> {
    /// A single member.
    Scalar(T),
    /// Members added one by one.
    Sequence(Vec<T>),
    /// A set whose members are merged with their keys.
    Set(&'a Set<T>),
}

impl<T> Insertable<'_, T> {
    /// Wraps one value as a single member.
    #[inline]
    pub fn scalar(value: impl Into<T>) -> Self {
        Self::Scalar(value.into())
    }
}

impl<'a, T> From<&'a Set<T>> for Insertable<'a, T> {
    #[inline]
    fn from(set: &'a Set<T>) -> Self {
        Self::Set(set)
    }
}

impl<T, U: Into<T>> From<Vec<U>> for Insertable<'_, T> {
    fn from(elements: Vec<U>) -> Self {
        Self::Sequence(elements.into_iter().map(Into::into).collect())
    }
}

impl<T, U: Into<T>, const N: usize> From<[U; N]> for Insertable<'_, T> {
    fn from(elements: [U; N]) -> Self {
        Self::Sequence(elements.into_iter().map(Into::into).collect())
    }
}

impl<T, U: Clone + Into<T>> From<&[U]> for Insertable<'_, T> {
    fn from(elements: &[U]) -> Self {
        Self::Sequence(elements.iter().cloned().map(Into::into).collect())
    }
}

macro_rules! impl_scalar_for_value {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Insertable<'_, Value> {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::Scalar(Value::from(value))
                }
            }
        )*
    };
}

impl_scalar_for_value!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char, String, Array,
    Object, SetHandle
);

impl From<&str> for Insertable<'_, Value> {
    fn from(value: &str) -> Self {
        Self::Scalar(Value::from(value))
    }
}

impl From<Value> for Insertable<'_, Value> {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl<U: Into<Value>> From<Option<U>> for Insertable<'_, Value> {
    fn from(value: Option<U>) -> Self {
        Self::Scalar(Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_arrays_are_sequences() {
        let insertable: Insertable<'_, Value> = [1, 2].into();
        assert!(matches!(insertable, Insertable::Sequence(ref elements) if elements.len() == 2));
    }

    #[rstest]
    fn test_slices_are_sequences() {
        let elements = vec![1_u8, 2, 3];
        let insertable: Insertable<'_, Value> = elements.as_slice().into();
        assert!(matches!(insertable, Insertable::Sequence(ref elements) if elements.len() == 3));
    }

    #[rstest]
    fn test_value_arrays_are_scalars() {
        let insertable: Insertable<'_, Value> = Value::from(vec![1, 2]).into();
        assert!(matches!(insertable, Insertable::Scalar(Value::Array(_))));
    }

    #[rstest]
    fn test_sets_are_borrowed() {
        let set: Set<Value> = Set::new();
        let insertable: Insertable<'_, Value> = (&set).into();
        assert!(matches!(insertable, Insertable::Set(borrowed) if std::ptr::eq(borrowed, &set)));
    }

    #[rstest]
    fn test_scalar_constructor_converts() {
        let insertable: Insertable<'_, i64> = Insertable::scalar(3_u8);
        assert!(matches!(insertable, Insertable::Scalar(3)));
    }

    #[rstest]
    fn test_none_is_null_scalar() {
        let insertable: Insertable<'_, Value> = Option::<i32>::None.into();
        assert!(matches!(insertable, Insertable::Scalar(Value::Null)));
    }
}
