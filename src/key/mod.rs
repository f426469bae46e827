//! Hash keys: the identity of a set member.
//!
//! Every member of a [`Set`](crate::set::Set) is stored under a [`HashKey`]
//! derived from its value by the [`Hashable`] trait. Two values are the same
//! member exactly when their keys are equal.
//!
//! # Key Domains
//!
//! | Value                           | Key                       | Display            |
//! |---------------------------------|---------------------------|--------------------|
//! | integers, floats                | `Number(NumberKey)`       | `1`, `1.5`, `NaN`  |
//! | `bool`                          | `Boolean(bool)`           | `true`             |
//! | `str`, `String`, `char`         | `String(String)`          | `"a"`              |
//! | `None`, [`Value::Null`]         | `Null`                    | `null`             |
//! | [`Value::Missing`]              | `Missing`                 | `undefined`        |
//! | `Rc<T>`, arrays, objects, sets  | `Object(tag)`             | `[object 1000000]` |
//!
//! Each domain is tagged separately, so `1`, `true` and `"1"` never collide.
//!
//! # Examples
//!
//! ```rust
//! use refset::key::{HashKey, Hashable, NumberKey};
//!
//! assert_eq!(1_i32.hash_key(), HashKey::Number(NumberKey::Integer(1)));
//! assert_eq!(1_i32.hash_key(), 1.0_f64.hash_key());
//! assert_ne!(1_i32.hash_key(), true.hash_key());
//! assert_ne!(1_i32.hash_key(), "1".hash_key());
//! ```
//!
//! [`Value::Null`]: crate::value::Value::Null
//! [`Value::Missing`]: crate::value::Value::Missing

mod identity;

pub use identity::identity_tag;

use std::fmt;
use std::rc::Rc;

/// Integral numbers at or beyond this magnitude are keyed as floats.
const INTEGER_KEY_LIMIT: f64 = 1e21;

/// Floats below this magnitude are displayed in exponent notation.
const SMALL_FLOAT_LIMIT: f64 = 1e-6;

// =============================================================================
// NumberKey
// =============================================================================

/// The normalized key of a numeric value.
///
/// Integral values with a magnitude below `1e21` become [`NumberKey::Integer`],
/// whatever their source type. Everything else is stored by its bit pattern,
/// with every NaN collapsed into one canonical NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKey {
    /// An integral number.
    Integer(i128),
    /// The bits of a non-integral, non-finite or very large float.
    Float(u64),
}

impl NumberKey {
    /// Normalizes a float into its key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::key::NumberKey;
    ///
    /// assert_eq!(NumberKey::from_float(-0.0), NumberKey::Integer(0));
    /// assert_eq!(NumberKey::from_float(f64::NAN), NumberKey::from_float(-f64::NAN));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_float(number: f64) -> Self {
        if number.is_nan() {
            Self::Float(f64::NAN.to_bits())
        } else if number.fract() == 0.0 && number.abs() < INTEGER_KEY_LIMIT {
            Self::Integer(number as i128)
        } else {
            Self::Float(number.to_bits())
        }
    }

    /// Creates the key of an integer, as it would be keyed after passing
    /// through an `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refset::key::NumberKey;
    ///
    /// assert_eq!(NumberKey::from_integer(5), NumberKey::Integer(5));
    /// assert_eq!(
    ///     NumberKey::from_integer((1 << 53) + 1),
    ///     NumberKey::from_integer(1 << 53)
    /// );
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_integer(number: i128) -> Self {
        Self::from_float(number as f64)
    }
}

impl fmt::Display for NumberKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Float(bits) => write_float(formatter, f64::from_bits(bits)),
        }
    }
}

fn write_float(formatter: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_nan() {
        return formatter.write_str("NaN");
    }
    if number.is_infinite() {
        let text = if number > 0.0 { "Infinity" } else { "-Infinity" };
        return formatter.write_str(text);
    }
    let magnitude = number.abs();
    if magnitude >= INTEGER_KEY_LIMIT || magnitude < SMALL_FLOAT_LIMIT {
        let exponential = format!("{number:e}");
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(formatter, "{mantissa}e+{exponent}")
            }
            _ => formatter.write_str(&exponential),
        }
    } else {
        write!(formatter, "{number}")
    }
}

// =============================================================================
// HashKey
// =============================================================================

/// The tagged identity of a set member.
///
/// Value domains never share a variant, so a number, a boolean and a string
/// with the same textual form are distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// A number, compared by value.
    Number(NumberKey),
    /// A boolean, compared by value.
    Boolean(bool),
    /// A string, compared by value.
    String(String),
    /// The null value.
    Null,
    /// The "no value" sentinel. Never stored in a set.
    Missing,
    /// A reference value, compared by its identity tag.
    Object(u64),
}

impl HashKey {
    /// Returns `true` for the "no value" sentinel.
    #[inline]
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
            Self::String(string) => write!(formatter, "\"{string}\""),
            Self::Null => formatter.write_str("null"),
            Self::Missing => formatter.write_str("undefined"),
            Self::Object(tag) => write!(formatter, "[object {tag}]"),
        }
    }
}

// =============================================================================
// Hashable
// =============================================================================

/// Derives the [`HashKey`] that identifies a value inside a set.
///
/// Implementations must be consistent across types: two values that should
/// be the same member must produce equal keys, even when their Rust types
/// differ (`1_u8` and `1.0_f64` both key as the integer `1`).
pub trait Hashable {
    /// Returns the key of this value.
    fn hash_key(&self) -> HashKey;
}

macro_rules! impl_hashable_for_lossless_integer {
    ($($integer:ty),*) => {
        $(
            impl Hashable for $integer {
                #[inline]
                fn hash_key(&self) -> HashKey {
                    HashKey::Number(NumberKey::from_float(f64::from(*self)))
                }
            }
        )*
    };
}

impl_hashable_for_lossless_integer!(i8, i16, i32, u8, u16, u32);

// Wide integers key through `f64`, like `Value::Number`, so a number keeps its
// key when it moves into or out of a `Value`. Beyond 2^53 neighbours collapse.
macro_rules! impl_hashable_for_wide_integer {
    ($($integer:ty),*) => {
        $(
            impl Hashable for $integer {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn hash_key(&self) -> HashKey {
                    HashKey::Number(NumberKey::from_float(*self as f64))
                }
            }
        )*
    };
}

impl_hashable_for_wide_integer!(i64, u64, isize, usize);

impl Hashable for f32 {
    #[inline]
    fn hash_key(&self) -> HashKey {
        HashKey::Number(NumberKey::from_float(f64::from(*self)))
    }
}

impl Hashable for f64 {
    #[inline]
    fn hash_key(&self) -> HashKey {
        HashKey::Number(NumberKey::from_float(*self))
    }
}

impl Hashable for bool {
    #[inline]
    fn hash_key(&self) -> HashKey {
        HashKey::Boolean(*self)
    }
}

impl Hashable for char {
    fn hash_key(&self) -> HashKey {
        HashKey::String(self.to_string())
    }
}

impl Hashable for str {
    fn hash_key(&self) -> HashKey {
        HashKey::String(self.to_owned())
    }
}

impl Hashable for String {
    fn hash_key(&self) -> HashKey {
        self.as_str().hash_key()
    }
}

impl<T: Hashable> Hashable for Option<T> {
    fn hash_key(&self) -> HashKey {
        self.as_ref().map_or(HashKey::Null, Hashable::hash_key)
    }
}

impl<T: Hashable + ?Sized> Hashable for &T {
    #[inline]
    fn hash_key(&self) -> HashKey {
        (**self).hash_key()
    }
}

/// Shared values are members by identity: two `Rc`s are the same member only
/// when they point at the same allocation.
impl<T: ?Sized + 'static> Hashable for Rc<T> {
    fn hash_key(&self) -> HashKey {
        HashKey::Object(identity_tag(self))
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
    #[case(1.0, NumberKey::Integer(1))]
    #[case(-0.0, NumberKey::Integer(0))]
    #[case(-42.0, NumberKey::Integer(-42))]
    #[case(1e20, NumberKey::Integer(100_000_000_000_000_000_000))]
    fn test_integral_floats_normalize_to_integers(
        #[case] number: f64,
        #[case] expected: NumberKey,
    ) {
        assert_eq!(NumberKey::from_float(number), expected);
    }

    #[rstest]
    fn test_large_floats_stay_floats() {
        assert_eq!(NumberKey::from_float(1e21), NumberKey::Float(1e21_f64.to_bits()));
    }

    #[rstest]
    fn test_nan_is_canonical() {
        let negative_nan = -f64::NAN;
        assert_eq!(
            NumberKey::from_float(negative_nan),
            NumberKey::from_float(f64::NAN)
        );
    }

    #[rstest]
    #[case(1_i32.hash_key(), "1")]
    #[case(1.5_f64.hash_key(), "1.5")]
    #[case(f64::NAN.hash_key(), "NaN")]
    #[case(f64::INFINITY.hash_key(), "Infinity")]
    #[case(f64::NEG_INFINITY.hash_key(), "-Infinity")]
    #[case(1e21_f64.hash_key(), "1e+21")]
    #[case(1.5e-7_f64.hash_key(), "1.5e-7")]
    #[case(true.hash_key(), "true")]
    #[case("a".hash_key(), "\"a\"")]
    #[case(Option::<i32>::None.hash_key(), "null")]
    #[case(HashKey::Missing, "undefined")]
    #[case(HashKey::Object(1_000_000), "[object 1000000]")]
    fn test_key_display(#[case] key: HashKey, #[case] expected: &str) {
        assert_eq!(key.to_string(), expected);
    }

    #[rstest]
    fn test_domains_do_not_collide() {
        assert_ne!(1_i32.hash_key(), true.hash_key());
        assert_ne!(0_i32.hash_key(), false.hash_key());
        assert_ne!(1_i32.hash_key(), "1".hash_key());
        assert_ne!("true".hash_key(), true.hash_key());
        assert_ne!("null".hash_key(), HashKey::Null);
        assert_ne!(HashKey::Null, HashKey::Missing);
    }

    #[rstest]
    fn test_numeric_types_share_keys() {
        assert_eq!(7_u8.hash_key(), 7_i64.hash_key());
        assert_eq!(7_usize.hash_key(), 7.0_f32.hash_key());
        assert_eq!(u64::MAX.hash_key(), HashKey::Number(NumberKey::Integer(1 << 64)));
    }

    #[rstest]
    fn test_wide_integers_match_their_float_keys() {
        let beyond_exact = (1_u64 << 53) + 1;
        assert_eq!(beyond_exact.hash_key(), (beyond_exact as f64).hash_key());
        assert_eq!(beyond_exact.hash_key(), (1_u64 << 53).hash_key());
        assert_eq!(i64::MIN.hash_key(), (i64::MIN as f64).hash_key());
    }

    #[rstest]
    fn test_string_forms_share_keys() {
        assert_eq!('x'.hash_key(), "x".hash_key());
        assert_eq!(String::from("x").hash_key(), "x".hash_key());
    }

    #[rstest]
    fn test_option_some_uses_inner_key() {
        assert_eq!(Some(3_i32).hash_key(), 3_i32.hash_key());
    }

    #[rstest]
    fn test_rc_keys_by_identity() {
        let first = Rc::new(5);
        let second = Rc::new(5);
        assert_eq!(first.hash_key(), Rc::clone(&first).hash_key());
        assert_ne!(first.hash_key(), second.hash_key());
    }
}
