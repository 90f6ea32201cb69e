use crate::error::DynMapError;
use crate::value::DynValue;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A thread-safe map from string keys to dynamically-typed values.
///
/// `DynMap` stores [`DynValue`]s behind a single mutex and offers typed
/// accessors that coerce whatever is stored into the representation the
/// caller wants. Coercion goes through the value's string form: a stored
/// integer `1` reads back as `"1"`, `1`, `1.0`, or `true` depending on the
/// accessor used.
///
/// Cloning a `DynMap` clones the handle; both handles share the same
/// underlying map.
///
/// # Examples
///
/// ```
/// use sovran_dynmap::{DynMap, DynMapError};
///
/// fn main() -> Result<(), DynMapError> {
///     let map = DynMap::new();
///     map.set("greeting", "hello");
///     map.set("port", "8080");
///     map.set("ratio", 4.9);
///
///     assert_eq!(map.get_as_string("greeting")?, "hello");
///     assert_eq!(map.get_as_int("port")?, 8080);
///     assert_eq!(map.get_as_int("ratio")?, 5); // rounds half-up
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DynMap {
    entries: Arc<Mutex<HashMap<String, DynValue>>>,
}

impl DynMap {
    /// Creates a new, empty map.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a map that takes ownership of `entries` as its backing store.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use sovran_dynmap::DynMap;
    ///
    /// let map = DynMap::from_map(HashMap::from([
    ///     ("test".to_string(), "blah".into()),
    ///     ("test1".to_string(), 2.into()),
    /// ]));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn from_map(entries: HashMap<String, DynValue>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    /// Inserts or overwrites the value at `key`.
    pub fn set(&self, key: impl Into<String>, value: impl Into<DynValue>) {
        self.entries.lock().insert(key.into(), value.into());
    }

    /// Returns a point-in-time snapshot of the whole map.
    ///
    /// The snapshot is an owned copy: writes made after this call do not
    /// show up in it, and mutating it does not touch the shared map.
    pub fn get_all(&self) -> HashMap<String, DynValue> {
        self.entries.lock().clone()
    }

    /// Returns the stored value at `key`, or `None` if the key is absent.
    ///
    /// A missing key is not an error; only an empty key string is.
    ///
    /// # Errors
    ///
    /// Returns `DynMapError::EmptyKey` if `key` is `""`.
    pub fn get(&self, key: &str) -> Result<Option<DynValue>, DynMapError> {
        if key.is_empty() {
            return Err(DynMapError::EmptyKey);
        }
        Ok(self.entries.lock().get(key).cloned())
    }

    /// Returns the value at `key` coerced to its string form, trimmed of
    /// surrounding whitespace.
    ///
    /// An absent key yields `""` with no error.
    ///
    /// # Errors
    ///
    /// Returns `DynMapError::EmptyKey` if `key` is `""`.
    pub fn get_as_string(&self, key: &str) -> Result<String, DynMapError> {
        Ok(self
            .get(key)?
            .map(|value| value.coerce_string())
            .unwrap_or_default())
    }

    /// Returns the value at `key` coerced to an integer.
    ///
    /// The value's string form is parsed as an `f64` and rounded half-up
    /// (`floor(x + 0.5)`), so `"4.9"` reads as `5` and `-4.5` reads as `-4`.
    /// Anything parseable as a textual float is accepted, scientific
    /// notation included. An absent key yields `0` with no error.
    ///
    /// # Errors
    ///
    /// - `DynMapError::EmptyKey` if `key` is `""`
    /// - `DynMapError::Parse` if the non-empty string form is not a number
    pub fn get_as_int(&self, key: &str) -> Result<i64, DynMapError> {
        let s = self.get_as_string(key)?;
        if s.is_empty() {
            return Ok(0);
        }
        match s.parse::<f64>() {
            Ok(x) => Ok((x + 0.5).floor() as i64),
            Err(_) => {
                debug!(key, value = %s, "integer coercion failed");
                Err(DynMapError::parse("int", s))
            }
        }
    }

    /// Returns the value at `key` coerced to an `f64`.
    ///
    /// An absent key yields `0.0` with no error.
    ///
    /// # Errors
    ///
    /// - `DynMapError::EmptyKey` if `key` is `""`
    /// - `DynMapError::Parse` if the non-empty string form is not a number
    pub fn get_as_float(&self, key: &str) -> Result<f64, DynMapError> {
        let s = self.get_as_string(key)?;
        if s.is_empty() {
            return Ok(0.0);
        }
        match s.parse::<f64>() {
            Ok(x) => Ok(x),
            Err(_) => {
                debug!(key, value = %s, "float coercion failed");
                Err(DynMapError::parse("float", s))
            }
        }
    }

    /// Returns the value at `key` coerced to a boolean.
    ///
    /// The string form is matched against the usual boolean spellings:
    /// `1`, `t`, `T`, `true`, `True`, `TRUE` are true; `0`, `f`, `F`,
    /// `false`, `False`, `FALSE` are false. A stored integer `1` therefore
    /// reads as `true`. An absent key yields `false` with no error.
    ///
    /// # Errors
    ///
    /// - `DynMapError::EmptyKey` if `key` is `""`
    /// - `DynMapError::Parse` if the non-empty string form matches no
    ///   boolean spelling
    pub fn get_as_bool(&self, key: &str) -> Result<bool, DynMapError> {
        let s = self.get_as_string(key)?;
        if s.is_empty() {
            return Ok(false);
        }
        match parse_bool(&s) {
            Some(b) => Ok(b),
            None => {
                debug!(key, value = %s, "bool coercion failed");
                Err(DynMapError::parse("bool", s))
            }
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns true if the map contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Returns all keys currently in the map, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }
}

impl From<HashMap<String, DynValue>> for DynMap {
    fn from(entries: HashMap<String, DynValue>) -> Self {
        DynMap::from_map(entries)
    }
}

/// Reports whether `needle` occurs in `haystack` by exact match.
///
/// ```
/// use sovran_dynmap::contains_string;
///
/// let hay = ["a".to_string(), "b".to_string()];
/// assert!(contains_string(&hay, "b"));
/// assert!(!contains_string(&hay, "c"));
/// ```
pub fn contains_string<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    haystack.iter().any(|s| s.as_ref() == needle)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Some(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}
