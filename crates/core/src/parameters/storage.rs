//! Parameter Storage Types
//!
//! Provides the value types and the `ParameterStore` holding the lock's
//! tunable configuration. The store lives in RAM only; values reset to their
//! registered defaults on every power cycle.

use super::error::ParameterError;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 16;

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    /// Get type discriminant
    pub fn type_id(&self) -> u8 {
        match self {
            ParamValue::Bool(_) => 0,
            ParamValue::Int(_) => 1,
            ParamValue::Float(_) => 2,
        }
    }

    /// Numeric view used by the parameter groups when loading
    pub fn as_f32(&self) -> f32 {
        match self {
            ParamValue::Bool(v) => {
                if *v {
                    1.0
                } else {
                    0.0
                }
            }
            ParamValue::Int(v) => *v as f32,
            ParamValue::Float(v) => *v,
        }
    }
}

/// Parameter store for configuration management
///
/// Every name is registered once with a typed default; later writes must
/// keep that type.
pub struct ParameterStore {
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
}

fn key_for(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
    let mut key = String::<PARAM_NAME_LEN>::new();
    key.push_str(name)
        .map_err(|_| ParameterError::InvalidConfig)?;
    Ok(key)
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = key_for(name).ok()?;
        self.parameters.get(&key)
    }

    /// Set parameter value
    ///
    /// The parameter must have been registered first, and the new value
    /// must have the same type as the registered default.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = key_for(name)?;

        let current = self
            .parameters
            .get_mut(&key)
            .ok_or(ParameterError::InvalidConfig)?;
        if current.type_id() != value.type_id() {
            return Err(ParameterError::TypeMismatch {
                expected: current.type_id(),
                actual: value.type_id(),
            });
        }

        *current = value;
        Ok(())
    }

    /// Register a new parameter with its default value
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
    ) -> Result<(), ParameterError> {
        let key = key_for(name)?;

        if self.parameters.contains_key(&key) {
            return Ok(());
        }

        self.parameters
            .insert(key, default_value)
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
