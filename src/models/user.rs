//! Users and pipe/organization memberships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Id;

/// A Pipefy user, as returned by `me` and nested member selections.
///
/// Older API revisions used snake_case for `avatar_url` and `time_zone`;
/// both spellings are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user ID.
    #[serde(default)]
    pub id: Option<Id>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Login name.
    #[serde(default)]
    pub username: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL.
    #[serde(rename = "avatarUrl", alias = "avatar_url", default)]
    pub avatar_url: Option<String>,
    /// When the account was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Preferred locale, e.g. `en`.
    #[serde(default)]
    pub locale: Option<String>,
    /// IANA time zone name.
    #[serde(rename = "timeZone", alias = "time_zone", default)]
    pub time_zone: Option<String>,
}

/// A user's membership in an organization or pipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub user: Option<User>,
    /// Role name such as `admin`, `member` or `read_only`.
    #[serde(default)]
    pub role_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_accepts_both_field_spellings() {
        let camel: User = serde_json::from_value(json!({
            "id": "1",
            "avatarUrl": "https://img/1.png",
            "timeZone": "America/Sao_Paulo"
        }))
        .unwrap();
        let snake: User = serde_json::from_value(json!({
            "id": 1,
            "avatar_url": "https://img/1.png",
            "time_zone": "America/Sao_Paulo"
        }))
        .unwrap();

        assert_eq!(camel, snake);
        assert_eq!(camel.time_zone.as_deref(), Some("America/Sao_Paulo"));
    }

    #[test]
    fn test_user_created_at_parses_offsets() {
        let user: User =
            serde_json::from_value(json!({"created_at": "2019-03-01T12:00:00-03:00"})).unwrap();
        assert_eq!(
            user.created_at.unwrap().to_rfc3339(),
            "2019-03-01T15:00:00+00:00"
        );
    }
}
