//! Error types raised at the inspector's seams.
//!
//! None of these ever reach the host as a failure of the render itself:
//! `AccessError` is absorbed into an inline row by the walker, while
//! `PathParseError` and `ValueError` only come from host-supplied input
//! (path strings, literals) before any rendering happens.

/// Reading a single child value failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccessError {
    /// A property accessor raised while being read.
    #[error("{0}")]
    Thrown(String),
    /// A property accessor panicked; the payload text is kept when it is a string.
    #[error("accessor panicked: {0}")]
    Panicked(String),
}

impl AccessError {
    /// Convenience constructor for accessor failures.
    pub fn thrown(message: impl Into<String>) -> Self {
        AccessError::Thrown(message.into())
    }
}

/// A host-supplied literal could not be turned into a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("invalid bigint literal: {0:?}")]
    InvalidBigInt(String),
}

/// A serialized node path could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathParseError {
    /// Every path starts at the root marker `$`.
    #[error("path {0:?} must start with '$'")]
    MissingRoot(String),
    /// The path is malformed at the given byte offset.
    #[error("invalid path {path:?} at byte {offset}: {reason}")]
    Invalid {
        path: String,
        offset: usize,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_error_display() {
        assert_eq!(AccessError::thrown("boom").to_string(), "boom");
        assert_eq!(
            AccessError::Panicked("index out of bounds".into()).to_string(),
            "accessor panicked: index out of bounds"
        );
    }

    #[test]
    fn test_path_error_display() {
        let err = PathParseError::Invalid {
            path: "$.".to_string(),
            offset: 2,
            reason: "empty property name",
        };
        assert_eq!(
            err.to_string(),
            "invalid path \"$.\" at byte 2: empty property name"
        );
    }
}
