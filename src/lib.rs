//! # refset
//!
//! A mathematical set for values of any kind, with reference-aware
//! membership.
//!
//! ## Overview
//!
//! - **Set**: [`Set<T>`](Set) with union, intersection, difference,
//!   complement and symmetric difference, plus subset, superset,
//!   disjointness and equality predicates
//! - **Hash keys**: every member is identified by a tagged [`HashKey`];
//!   numbers, booleans and strings never collide with each other
//! - **Identity**: shared values (`Rc<T>`, [`Array`](value::Array),
//!   [`Object`](value::Object), [`SetHandle`](value::SetHandle)) are members
//!   by identity, not by structure
//! - **Dynamic values**: [`Value`] lets one set mix numbers, strings,
//!   `null`, objects and other sets
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Set`] and [`Value`]
//! - `fxhash`: hash members with `rustc-hash`
//! - `ahash`: hash members with `ahash`
//!
//! ## Example
//!
//! ```rust
//! use refset::prelude::*;
//!
//! let object = Object::new();
//! let mut members = set![[1, 2, 3], "1", object.clone()];
//!
//! assert_eq!(members.len(), 5);
//! assert!(members.contains(&1));
//! assert!(!members.contains(&true));
//! assert!(members.contains(&object));
//! assert!(!members.contains(&Object::new()));
//!
//! members.remove(&object);
//! assert_eq!(members.to_string(), "Set([1, 2, 3, \"1\"])");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use refset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::key::{HashKey, Hashable};
    pub use crate::set;
    pub use crate::set::{Insertable, Set};
    pub use crate::value::{Array, Object, SetHandle, Value};
}

pub mod key;
pub mod set;
pub mod value;

pub use key::{HashKey, Hashable};
pub use set::{Insertable, Set};
pub use value::Value;
