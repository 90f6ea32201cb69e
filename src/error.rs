use thiserror::Error;

/// Errors that can occur when reading from a DynMap
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DynMapError {
    /// An accessor was called with an empty key string
    #[error("key is empty")]
    EmptyKey,
    /// A stored value's string form could not be parsed as the requested type
    #[error("cannot parse to {target}: {value}")]
    Parse {
        /// The type the coerced string was being parsed into ("int", "float", "bool")
        target: &'static str,
        /// The coerced string that failed to parse
        value: String,
    },
}

impl DynMapError {
    pub(crate) fn parse(target: &'static str, value: impl Into<String>) -> Self {
        DynMapError::Parse {
            target,
            value: value.into(),
        }
    }
}
