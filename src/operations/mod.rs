//! The operation catalog.
//!
//! Every Pipefy call this crate can make is described by a static
//! [`OperationSpec`]: its name, whether it is a query or a mutation, the root
//! field its payload lives under, the GraphQL document, and the declared
//! parameters with their shapes. Documents reference parameters only as
//! `$variables`; values are never spliced into document text.
//!
//! [`CATALOG`] lists every operation and [`find`] looks one up by name, which
//! is what [`PipefyClient::execute`](crate::PipefyClient::execute) uses.
//!
//! # Example
//!
//! ```rust
//! use pipefy_api::operations::{self, OperationKind};
//!
//! let spec = operations::find("createCard").unwrap();
//! assert_eq!(spec.kind, OperationKind::Mutation);
//! assert_eq!(spec.root_field, "createCard");
//! assert_eq!(spec.required_params().collect::<Vec<_>>(), ["pipe_id", "title"]);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde_json::{Map, Value};

pub mod inputs;
mod mutations;
mod queries;
mod validation;

pub use mutations::*;
pub use queries::*;
pub use validation::ValidationError;

/// Whether an operation reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Read-only and idempotent.
    Query,
    /// Changes remote state.
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// The JSON shape a parameter value must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamShape {
    /// A non-blank string or a non-negative integer.
    Id,
    /// An array of [`ParamShape::Id`] values.
    IdList,
    String,
    StringList,
    /// A signed 32-bit integer, as GraphQL `Int` is.
    Int,
    Float,
    Boolean,
    /// An RFC 3339 timestamp string.
    DateTime,
    Object,
    ObjectList,
    /// Any non-null JSON value.
    Json,
}

impl ParamShape {
    /// Returns `true` if `value` (never `null`) has this shape.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Id => is_id(value),
            Self::IdList => all_items(value, is_id),
            Self::String => value.is_string(),
            Self::StringList => all_items(value, Value::is_string),
            Self::Int => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
            Self::Float => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::DateTime => value
                .as_str()
                .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
            Self::Object => value.is_object(),
            Self::ObjectList => all_items(value, Value::is_object),
            Self::Json => !value.is_null(),
        }
    }
}

impl fmt::Display for ParamShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::Id => "a non-blank string or non-negative integer ID",
            Self::IdList => "a list of IDs",
            Self::String => "a string",
            Self::StringList => "a list of strings",
            Self::Int => "a 32-bit integer",
            Self::Float => "a number",
            Self::Boolean => "a boolean",
            Self::DateTime => "an RFC 3339 date-time string",
            Self::Object => "an object",
            Self::ObjectList => "a list of objects",
            Self::Json => "a JSON value",
        };
        f.write_str(description)
    }
}

fn is_id(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Number(n) => n.is_u64(),
        _ => false,
    }
}

fn all_items(value: &Value, accepts: fn(&Value) -> bool) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(accepts))
}

/// A declared parameter of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    /// The variable name, as written after `$` in the document.
    pub name: &'static str,
    pub shape: ParamShape,
    pub required: bool,
}

impl ParamSpec {
    /// Declares a required parameter.
    #[must_use]
    pub const fn required(name: &'static str, shape: ParamShape) -> Self {
        Self {
            name,
            shape,
            required: true,
        }
    }

    /// Declares an optional parameter.
    #[must_use]
    pub const fn optional(name: &'static str, shape: ParamShape) -> Self {
        Self {
            name,
            shape,
            required: false,
        }
    }
}

/// A static catalog entry describing one Pipefy operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationSpec {
    /// Catalog name, also used as the GraphQL operation name.
    pub name: &'static str,
    pub kind: OperationKind,
    /// Key under `data` that holds the operation's payload.
    pub root_field: &'static str,
    /// The parameterized GraphQL document.
    pub document: &'static str,
    pub params: &'static [ParamSpec],
}

impl OperationSpec {
    /// Names of the required parameters, in declaration order.
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> {
        self.params.iter().filter(|p| p.required).map(|p| p.name)
    }

    /// Names of the optional parameters, in declaration order.
    pub fn optional_params(&self) -> impl Iterator<Item = &'static str> {
        self.params.iter().filter(|p| !p.required).map(|p| p.name)
    }

    /// Looks up a declared parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Returns `true` for delete-by-id mutations, which are idempotent.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.kind == OperationKind::Mutation && self.name.starts_with("delete")
    }

    /// Every `$variable` referenced in the document.
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<&'static str> {
        let document = self.document;
        let bytes = document.as_bytes();
        let mut names = BTreeSet::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
                {
                    end += 1;
                }
                if end > start {
                    names.insert(&document[start..end]);
                }
                i = end;
            } else {
                i += 1;
            }
        }
        names
    }

    /// Checks `variables` against the declared parameters.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: a missing required
    /// parameter, then an undeclared parameter, then a value of the wrong
    /// shape.
    pub fn validate(&self, variables: &Map<String, Value>) -> Result<(), ValidationError> {
        validation::validate(self, variables)
    }
}

/// Every operation this crate can run.
pub static CATALOG: &[&OperationSpec] = &[
    &GET_ME,
    &LIST_ORGANIZATIONS,
    &GET_ORGANIZATION_BY_ID,
    &LIST_PIPES,
    &GET_PIPE_BY_ID,
    &GET_PHASE_BY_ID,
    &GET_CARDS_BY_PIPE_ID,
    &GET_CARD_BY_ID,
    &GET_PIPE_RELATION_BY_IDS,
    &CREATE_ORGANIZATION,
    &UPDATE_ORGANIZATION,
    &DELETE_ORGANIZATION,
    &CLONE_PIPES,
    &CREATE_PIPE,
    &UPDATE_PIPE,
    &DELETE_PIPE,
    &CREATE_PHASE,
    &UPDATE_PHASE,
    &DELETE_PHASE,
    &CREATE_PHASE_FIELD,
    &UPDATE_PHASE_FIELD,
    &DELETE_PHASE_FIELD,
    &CREATE_LABEL,
    &UPDATE_LABEL,
    &DELETE_LABEL,
    &CREATE_CARD,
    &UPDATE_CARD,
    &DELETE_CARD,
    &MOVE_CARD_TO_PHASE,
    &UPDATE_CARD_FIELD,
    &CREATE_COMMENT,
    &UPDATE_COMMENT,
    &DELETE_COMMENT,
    &SET_ROLE,
    &CREATE_PIPE_RELATION,
    &UPDATE_PIPE_RELATION,
    &DELETE_PIPE_RELATION,
    &CREATE_WEBHOOK,
    &UPDATE_WEBHOOK,
    &DELETE_WEBHOOK,
];

/// Looks up an operation by its catalog name (e.g. `"getCardById"`).
#[must_use]
pub fn find(name: &str) -> Option<&'static OperationSpec> {
    CATALOG.iter().copied().find(|spec| spec.name == name)
}
