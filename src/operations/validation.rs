//! Local parameter validation.
//!
//! Runs before anything is sent, so a rejected call never reaches the
//! network.

use serde_json::{Map, Value};
use thiserror::Error;

use super::{OperationSpec, ParamShape};

/// Errors raised when call parameters do not match an operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No catalog operation has this name.
    #[error("Unknown operation '{name}'. See operations::CATALOG for the supported names.")]
    UnknownOperation {
        /// The name that was looked up.
        name: String,
    },

    /// A required parameter was absent, `null`, or blank.
    #[error("Operation '{operation}' requires parameter '{param}'.")]
    MissingParameter {
        operation: &'static str,
        param: &'static str,
    },

    /// A parameter value has the wrong JSON shape.
    #[error("Operation '{operation}' parameter '{param}' must be {expected}.")]
    InvalidParameter {
        operation: &'static str,
        param: &'static str,
        expected: ParamShape,
    },

    /// A parameter is not declared by the operation.
    #[error("Operation '{operation}' does not accept parameter '{param}'.")]
    UnknownParameter {
        operation: &'static str,
        param: String,
    },

    /// A typed input did not serialize to a JSON object.
    #[error("Operation '{operation}' input could not be encoded: {reason}")]
    UnencodableInput {
        operation: &'static str,
        reason: String,
    },
}

/// Returns `true` if a value counts as not supplied.
///
/// Blank strings count as missing so that a defaulted [`Id`](crate::Id) in a
/// typed input reads as an omitted parameter.
fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

pub(super) fn validate(
    spec: &OperationSpec,
    variables: &Map<String, Value>,
) -> Result<(), ValidationError> {
    if let Some(param) = spec
        .params
        .iter()
        .find(|p| p.required && is_absent(variables.get(p.name)))
    {
        return Err(ValidationError::MissingParameter {
            operation: spec.name,
            param: param.name,
        });
    }

    for (name, value) in variables {
        let Some(param) = spec.param(name) else {
            return Err(ValidationError::UnknownParameter {
                operation: spec.name,
                param: name.clone(),
            });
        };
        if value.is_null() {
            continue;
        }
        if !param.shape.accepts(value) {
            return Err(ValidationError::InvalidParameter {
                operation: spec.name,
                param: param.name,
                expected: param.shape,
            });
        }
    }

    Ok(())
}
