//! Error types for value conversions.

/// Represents a failed conversion out of a [`Value`](super::Value).
///
/// # Examples
///
/// ```rust
/// use refset::value::{TypeMismatchError, Value};
///
/// let error = f64::try_from(&Value::from("text")).unwrap_err();
/// assert_eq!(
///     error,
///     TypeMismatchError {
///         expected: "number",
///         found: "string",
///     }
/// );
/// assert_eq!(format!("{error}"), "expected number, found string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatchError {
    /// The type name the conversion required.
    pub expected: &'static str,
    /// The type name of the value that was supplied.
    pub found: &'static str,
}

impl std::fmt::Display for TypeMismatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "expected {}, found {}", self.expected, self.found)
    }
}

impl std::error::Error for TypeMismatchError {}
