//! Pipe webhooks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{null_as_default, Id};

/// A webhook registered on a pipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
    /// Callback URL.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Subscribed events, e.g. `card.create` or `card.move`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<String>,
    /// Extra headers sent with each delivery.
    #[serde(default)]
    pub headers: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_deserializes() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": "91",
            "name": "Card events",
            "url": "https://hooks.example.com/pipefy",
            "actions": ["card.create", "card.move"],
            "headers": null
        }))
        .unwrap();

        assert_eq!(webhook.actions, vec!["card.create", "card.move"]);
        assert!(webhook.headers.is_none());
    }
}
