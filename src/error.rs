//! Error taxonomy for the catalog
//!
//! Catalog failures are pure data (`Clone + PartialEq`) so callers can match on
//! them and compare them in tests. Failures that involve a native handle wrap
//! the handle's own error type in [`HandleError`].

use thiserror::Error;

use crate::keys::KeyRole;
use crate::mode::Mode;

/// Errors raised by the static catalog itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A native handle was bound to the contract of a different algorithm
    #[error("wrong algorithm bound: expected `{expected}`, found `{actual}`")]
    WrongAlgorithm {
        /// Name declared by the contract
        expected: &'static str,
        /// Name reported by the native handle
        actual: String,
    },

    /// A key is not part of the algorithm's closed key set for that role
    #[error("`{key}` is not a valid {role} key for `{algorithm}`")]
    InvalidKey {
        algorithm: &'static str,
        role: KeyRole,
        key: String,
    },

    /// A contract was requested as the wrong mode-specialized type
    #[error("`{name}` is a {actual} algorithm, expected a {expected} algorithm")]
    ModeMismatch {
        name: &'static str,
        expected: Mode,
        actual: Mode,
    },

    /// No catalogued algorithm carries this name in this mode
    #[error("no {mode} algorithm named `{name}`")]
    UnknownAlgorithm { mode: Mode, name: String },
}

impl CatalogError {
    /// Short machine-readable code, stable across releases
    pub fn reason_code(&self) -> &'static str {
        match self {
            CatalogError::WrongAlgorithm { .. } => "wrong_algorithm",
            CatalogError::InvalidKey { .. } => "invalid_key",
            CatalogError::ModeMismatch { .. } => "mode_mismatch",
            CatalogError::UnknownAlgorithm { .. } => "unknown_algorithm",
        }
    }
}

/// Errors raised while driving a native handle through its contract
#[derive(Debug, Error)]
pub enum HandleError<E> {
    /// The request was rejected before reaching the native side
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The native side rejected the request
    #[error("native algorithm `{algorithm}` failed: {source}")]
    Native {
        algorithm: &'static str,
        #[source]
        source: E,
    },
}

impl<E> HandleError<E> {
    /// The catalog error, if the request never reached the native side
    pub fn as_catalog(&self) -> Option<&CatalogError> {
        match self {
            HandleError::Catalog(err) => Some(err),
            HandleError::Native { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_algorithm_message_names_both() {
        let err = CatalogError::WrongAlgorithm {
            expected: "RhythmExtractor2013",
            actual: "RhythmExtractor".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("`RhythmExtractor2013`"));
        assert!(msg.contains("`RhythmExtractor`"));
        assert_eq!(err.reason_code(), "wrong_algorithm");
    }

    #[test]
    fn test_invalid_key_message() {
        let err = CatalogError::InvalidKey {
            algorithm: "Leq",
            role: KeyRole::Parameter,
            key: "sampleRate".into(),
        };
        assert_eq!(
            err.to_string(),
            "`sampleRate` is not a valid parameter key for `Leq`"
        );
    }

    #[test]
    fn test_mode_mismatch_message() {
        let err = CatalogError::ModeMismatch {
            name: "FFT",
            expected: Mode::Streaming,
            actual: Mode::Standard,
        };
        assert_eq!(
            err.to_string(),
            "`FFT` is a standard algorithm, expected a streaming algorithm"
        );
    }

    #[test]
    fn test_handle_error_from_catalog() {
        let err: HandleError<std::fmt::Error> = CatalogError::UnknownAlgorithm {
            mode: Mode::Standard,
            name: "Nope".into(),
        }
        .into();
        assert_eq!(err.as_catalog().map(|e| e.reason_code()), Some("unknown_algorithm"));
        assert_eq!(err.to_string(), "no standard algorithm named `Nope`");
    }

    #[test]
    fn test_handle_error_native_source() {
        let err: HandleError<std::fmt::Error> = HandleError::Native {
            algorithm: "FFT",
            source: std::fmt::Error,
        };
        assert!(err.as_catalog().is_none());
        assert!(std::error::Error::source(&err).is_some());
    }
}
