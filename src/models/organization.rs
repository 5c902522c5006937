//! Organizations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, Connection, Id};
use super::pipe::Pipe;
use super::user::Member;

/// A Pipefy organization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<Member>,
    #[serde(default)]
    pub only_admin_can_create_pipes: Option<bool>,
    #[serde(default)]
    pub only_admin_can_invite_users: Option<bool>,
    #[serde(default)]
    pub force_omniauth_to_normal_users: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pipes: Vec<Pipe>,
    /// Database tables, when selected.
    #[serde(default)]
    pub tables: Option<Connection<Table>>,
}

/// A database table summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
}
