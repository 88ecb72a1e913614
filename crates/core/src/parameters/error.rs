//! Parameter store errors

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Unknown parameter or name longer than the key capacity
    InvalidConfig,
    /// Store is full
    StoreFull,
    /// Value type differs from the registered default's type
    TypeMismatch {
        /// Type id of the registered value
        expected: u8,
        /// Type id of the rejected value
        actual: u8,
    },
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::InvalidConfig => write!(f, "unknown or invalid parameter name"),
            ParameterError::StoreFull => write!(f, "parameter store full"),
            ParameterError::TypeMismatch { expected, actual } => {
                write!(f, "parameter type {} does not match registered type {}", actual, expected)
            }
        }
    }
}
