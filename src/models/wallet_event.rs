//! Diesel models for storing wallet audit events.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    types::TypeConstraintError,
    wallet_event::{NewWalletEvent as DomainNewWalletEvent, WalletEvent as DomainWalletEvent},
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::wallet_events)]
pub struct WalletEvent {
    pub id: i32,
    pub wallet_id: i32,
    pub actor: String,
    pub event_type: String,
    pub event_data: String, // store JSON text in the DB
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::wallet_events)]
pub struct NewWalletEvent {
    pub wallet_id: i32,
    pub actor: String,
    pub event_type: String,
    pub event_data: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<WalletEvent> for DomainWalletEvent {
    type Error = TypeConstraintError;

    fn try_from(event: WalletEvent) -> Result<Self, Self::Error> {
        let event_data = serde_json::from_str(&event.event_data).unwrap_or_default();

        DomainWalletEvent::try_new(
            event.id,
            event.wallet_id,
            event.actor,
            event.event_type,
            event_data,
            event.created_at,
        )
    }
}

impl<'a> From<&'a DomainNewWalletEvent> for NewWalletEvent {
    fn from(event: &'a DomainNewWalletEvent) -> Self {
        Self {
            wallet_id: event.wallet_id.get(),
            actor: event.actor.as_str().to_string(),
            event_type: event.event_type.to_string(),
            event_data: event.event_data.to_string(),
            created_at: event.created_at,
        }
    }
}
