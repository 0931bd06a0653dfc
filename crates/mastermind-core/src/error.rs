//! Error types for mastermind core
//!
//! Traversal and scheduling never fail; the only fallible step is turning an
//! untrusted JSON value into a typed mind map.

/// Reason an untrusted value is not a mind map
///
/// Every variant carries the path of the offending value, e.g.
/// `$.nodes[0].children[1].id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Value is not a JSON object
    #[error("{path}: expected an object")]
    NotAnObject { path: String },

    /// Required field absent
    #[error("{path}: missing field `{field}`")]
    MissingField { path: String, field: &'static str },

    /// Field present with the wrong JSON type
    #[error("{path}: expected {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
    },

    /// Node id is not a positive integer
    #[error("{path}: node id must be a positive integer")]
    InvalidId { path: String },

    /// Node title is empty or whitespace
    #[error("{path}: node title must not be empty")]
    EmptyTitle { path: String },
}

impl ValidationError {
    /// Path of the offending value
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotAnObject { path }
            | Self::MissingField { path, .. }
            | Self::WrongType { path, .. }
            | Self::InvalidId { path }
            | Self::EmptyTitle { path } => path,
        }
    }
}
