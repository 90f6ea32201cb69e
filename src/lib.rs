//! # sovran-dynmap
//!
//! A thread-safe, dynamically-typed key-value map with coercing accessors.
//!
//! `sovran-dynmap` stores values of a small closed set of runtime types
//! (strings, booleans, integers, floats, and decoded JSON numbers) under
//! string keys, behind a single lock. Typed accessors coerce whatever is
//! stored into the representation you ask for, so components can read
//! loosely-typed metadata without caring how it was written.
//!
//! ## Key Features
//!
//! - **Thread-safe**: Built on `Arc<Mutex<_>>` for safe concurrent access;
//!   cloning a map clones the handle, not the contents
//! - **Coercing reads**: Ask for a string, int, float, or bool and get one,
//!   whatever type was stored, as long as its text form parses
//! - **Missing keys are not errors**: Absent keys read back as the zero
//!   value (`""`, `0`, `0.0`, `false`) with no error
//! - **Closed value type**: [`DynValue`] is an enum, so coercion is
//!   exhaustive and compiler-checked rather than reflective
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_dynmap::{DynMap, DynMapError};
//!
//! fn main() -> Result<(), DynMapError> {
//!     let map = DynMap::new();
//!
//!     // Store values of different types
//!     map.set("name", "arthur");
//!     map.set("answer", 42);
//!     map.set("enabled", true);
//!     map.set("ratio", 3.3);
//!
//!     // Read them back in whatever representation you need
//!     assert_eq!(map.get_as_string("name")?, "arthur");
//!     assert_eq!(map.get_as_string("answer")?, "42");
//!     assert_eq!(map.get_as_int("answer")?, 42);
//!     assert_eq!(map.get_as_bool("enabled")?, true);
//!     assert_eq!(map.get_as_float("ratio")?, 3.3);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### The Coercion Pipeline
//!
//! Every typed accessor coerces the stored value to its string form first,
//! then parses that string into the target type. Integer reads parse the
//! string as a float and round half-up, so they accept anything a float
//! parser accepts:
//!
//! ```rust
//! use sovran_dynmap::{DynMap, DynMapError};
//!
//! fn main() -> Result<(), DynMapError> {
//!     let map = DynMap::new();
//!     map.set("stored_string", "4.9");
//!     map.set("stored_float", 4.4);
//!     map.set("scientific", "1.2e3");
//!
//!     assert_eq!(map.get_as_int("stored_string")?, 5); // half-up, not truncation
//!     assert_eq!(map.get_as_int("stored_float")?, 4);
//!     assert_eq!(map.get_as_int("scientific")?, 1200);
//!
//!     // A stored 1 reads as true; bools read as "true"/"false"
//!     map.set("flag", 1);
//!     assert_eq!(map.get_as_bool("flag")?, true);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Sharing a Map Between Threads
//!
//! ```rust
//! use sovran_dynmap::DynMap;
//! use std::thread;
//!
//! let map = DynMap::new();
//!
//! let writer = {
//!     let map = map.clone();
//!     thread::spawn(move || {
//!         map.set("progress", 100);
//!     })
//! };
//! writer.join().unwrap();
//!
//! assert_eq!(map.get_as_int("progress").unwrap(), 100);
//! ```
//!
//! ### Error Handling
//!
//! Only two things fail: an empty key string, and a stored value whose text
//! form cannot be parsed as the requested type. A missing key is neither.
//!
//! ```rust
//! use sovran_dynmap::{DynMap, DynMapError};
//!
//! let map = DynMap::new();
//! map.set("word", "blah");
//!
//! match map.get_as_int("word") {
//!     Ok(n) => println!("Got {}", n),
//!     Err(DynMapError::Parse { target, value }) => {
//!         println!("'{}' is not a valid {}", value, target)
//!     }
//!     Err(DynMapError::EmptyKey) => println!("Empty key"),
//! }
//!
//! // Missing key: zero value, no error
//! assert_eq!(map.get_as_int("absent").unwrap(), 0);
//!
//! // Empty key: always an error
//! assert!(matches!(map.get(""), Err(DynMapError::EmptyKey)));
//! ```
//!
//! ### Loading Decoded JSON
//!
//! JSON numbers keep their original decimal text via
//! [`DynValue::Number`], so nothing is lost before a caller decides which
//! representation it wants:
//!
//! ```rust
//! use sovran_dynmap::{DynMap, DynValue};
//! use std::collections::HashMap;
//!
//! let decoded: HashMap<String, serde_json::Value> =
//!     serde_json::from_str(r#"{"retries": 6, "backoff": 2.5}"#).unwrap();
//!
//! let map = DynMap::new();
//! for (key, value) in decoded {
//!     if let Some(value) = DynValue::from_json(value) {
//!         map.set(key, value);
//!     }
//! }
//!
//! assert_eq!(map.get_as_int("retries").unwrap(), 6);
//! assert_eq!(map.get_as_float("backoff").unwrap(), 2.5);
//! ```

mod error;
mod map;
mod value;

pub use error::DynMapError;
pub use map::{contains_string, DynMap};
pub use value::DynValue;
