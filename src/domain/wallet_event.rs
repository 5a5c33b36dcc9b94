//! Audit trail entries recorded for wallet lifecycle and critical edits.

use std::fmt::Display;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::changes::FieldChange;
use crate::domain::types::{ActorEmail, TypeConstraintError, WalletEventId, WalletId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WalletEvent {
    pub id: WalletEventId,
    pub wallet_id: WalletId,
    pub actor: ActorEmail,
    pub event_type: WalletEventType,
    pub event_data: Value,
    pub created_at: NaiveDateTime,
}

impl WalletEvent {
    /// Builds an event from raw storage values.
    pub fn try_new(
        id: i32,
        wallet_id: i32,
        actor: String,
        event_type: String,
        event_data: Value,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: WalletEventId::new(id)?,
            wallet_id: WalletId::new(wallet_id)?,
            actor: ActorEmail::new(actor)?,
            event_type: event_type.into(),
            event_data,
            created_at,
        })
    }
}

/// Stored and serialized as its snake_case name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(into = "String", from = "String")]
pub enum WalletEventType {
    Created,
    CriticalUpdate,
    Deleted,
    Other(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewWalletEvent {
    pub wallet_id: WalletId,
    pub actor: ActorEmail,
    pub event_type: WalletEventType,
    pub event_data: Value,
    pub created_at: NaiveDateTime,
}

impl NewWalletEvent {
    #[must_use]
    pub fn new(
        wallet_id: WalletId,
        actor: ActorEmail,
        event_type: WalletEventType,
        event_data: Value,
    ) -> Self {
        Self {
            wallet_id,
            actor,
            event_type,
            event_data,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Event recording the critical fields changed by an update.
    #[must_use]
    pub fn critical_update(
        wallet_id: WalletId,
        actor: ActorEmail,
        changes: &[FieldChange],
    ) -> Self {
        Self::new(
            wallet_id,
            actor,
            WalletEventType::CriticalUpdate,
            serde_json::json!({ "changes": changes }),
        )
    }
}

impl Display for WalletEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletEventType::Created => write!(f, "created"),
            WalletEventType::CriticalUpdate => write!(f, "critical_update"),
            WalletEventType::Deleted => write!(f, "deleted"),
            WalletEventType::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for WalletEventType {
    fn from(s: &str) -> Self {
        match s {
            "created" => WalletEventType::Created,
            "critical_update" => WalletEventType::CriticalUpdate,
            "deleted" => WalletEventType::Deleted,
            _ => WalletEventType::Other(s.to_string()),
        }
    }
}

impl From<String> for WalletEventType {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<WalletEventType> for String {
    fn from(event_type: WalletEventType) -> Self {
        event_type.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::changes::CriticalField;

    #[test]
    fn event_type_round_trips_through_strings() {
        for event_type in [
            WalletEventType::Created,
            WalletEventType::CriticalUpdate,
            WalletEventType::Deleted,
            WalletEventType::Other("limit_reset".to_string()),
        ] {
            assert_eq!(WalletEventType::from(event_type.to_string()), event_type);
        }
    }

    #[test]
    fn critical_update_embeds_changes() {
        let event = NewWalletEvent::critical_update(
            WalletId::new(3).unwrap(),
            ActorEmail::new("ops@example.com").unwrap(),
            &[FieldChange {
                field: CriticalField::Card,
                old_value: Some("4111".to_string()),
                new_value: None,
            }],
        );

        assert_eq!(event.event_type, WalletEventType::CriticalUpdate);
        assert_eq!(
            event.event_data,
            serde_json::json!({
                "changes": [{ "field": "card", "old_value": "4111", "new_value": null }]
            })
        );
    }
}
