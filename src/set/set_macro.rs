//! The `set!` macro for building heterogeneous sets.

/// Builds a [`Set<Value>`](crate::Set) from any number of arguments.
///
/// Each argument is passed to [`Set::update`](crate::Set::update) in order:
///
/// - `set![]` - An empty set
/// - `set![x]` - `x` added as one member
/// - `set![[a, b, c]]` - `a`, `b` and `c` added individually
/// - `set![&other]` - every member of `other` merged in
///
/// Sequences are only expanded one level: an array nested inside an
/// argument sequence is added as a single member.
///
/// # Examples
///
/// ```
/// use refset::{set, Value};
///
/// let inner = set![[1, 2, 3]];
/// let merged = set![1, &inner];
/// assert_eq!(merged.len(), 3);
///
/// let mixed = set![[1, 2, 3], 4, true, false, Value::Null, Value::Missing];
/// assert_eq!(mixed.len(), 7);
/// ```
#[macro_export]
macro_rules! set {
    // No arguments: an empty set
    () => {
        $crate::Set::<$crate::Value>::new()
    };

    // Arguments: update with each in turn
    ($($argument:expr),+ $(,)?) => {{
        let mut set = $crate::Set::<$crate::Value>::new();
        $(
            set.update($argument);
        )+
        set
    }};
}
