//! Wallet aggregate: where and to whom an exchange pays out.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::changes::{CriticalField, WalletSnapshot};
use crate::domain::types::{
    CurrencyId, HubId, MinorAmount, NetworkId, NetworkTypeId, OwnerFullName, PhoneNumber,
    WalletId, WalletLabel,
};

/// Payout details shared by stored wallets and their pending edits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDetails {
    pub network_id: Option<NetworkId>,
    pub network_type_id: Option<NetworkTypeId>,
    pub phone: Option<PhoneNumber>,
    pub card: Option<String>,
    pub owner_full_name: Option<OwnerFullName>,
    pub address: Option<String>,
    pub account_id: Option<String>,
    pub username: Option<String>,
    pub exchange_uid: Option<String>,
}

impl WalletDetails {
    /// Flattens the critical fields into a diffable snapshot.
    pub fn snapshot(&self) -> WalletSnapshot {
        CriticalField::ALL
            .into_iter()
            .map(|field| (field.as_str().to_string(), self.value_of(field)))
            .collect()
    }

    fn value_of(&self, field: CriticalField) -> Option<String> {
        match field {
            CriticalField::Phone => self.phone.as_ref().map(|v| v.as_str().to_string()),
            CriticalField::Card => self.card.clone(),
            CriticalField::OwnerFullName => {
                self.owner_full_name.as_ref().map(|v| v.as_str().to_string())
            }
            CriticalField::NetworkId => self.network_id.map(|v| v.to_string()),
            CriticalField::NetworkTypeId => self.network_type_id.map(|v| v.to_string()),
            CriticalField::Address => self.address.clone(),
            CriticalField::AccountId => self.account_id.clone(),
            CriticalField::Username => self.username.clone(),
            CriticalField::ExchangeUid => self.exchange_uid.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub hub_id: HubId,
    pub currency_id: CurrencyId,
    pub label: Option<WalletLabel>,
    #[serde(flatten)]
    pub details: WalletDetails,
    /// Monthly payout cap in minor units, `None` when unlimited.
    pub monthly_limit: Option<MinorAmount>,
    /// Amount already paid out this month, maintained by the operations ledger.
    pub monthly_used: MinorAmount,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Wallet {
    pub fn snapshot(&self) -> WalletSnapshot {
        self.details.snapshot()
    }

    /// What is left of the monthly limit, never below zero.
    pub fn monthly_remaining(&self) -> Option<i64> {
        self.monthly_limit
            .map(|limit| (limit.get() - self.monthly_used.get()).max(0))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewWallet {
    pub hub_id: HubId,
    pub currency_id: CurrencyId,
    pub label: Option<WalletLabel>,
    pub details: WalletDetails,
    pub monthly_limit: Option<MinorAmount>,
}

/// Full replacement of the editable wallet fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateWallet {
    pub currency_id: CurrencyId,
    pub label: Option<WalletLabel>,
    pub details: WalletDetails,
    pub monthly_limit: Option<MinorAmount>,
    pub is_active: bool,
}

impl UpdateWallet {
    pub fn snapshot(&self) -> WalletSnapshot {
        self.details.snapshot()
    }
}
