//! Wallet create/update payloads.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{
    CurrencyId, HubId, MinorAmount, NetworkId, NetworkTypeId, OwnerFullName, PhoneNumber,
    WalletLabel,
};
use crate::domain::wallet::{NewWallet, UpdateWallet, WalletDetails};
use crate::forms::{FormError, blank_to_none};

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// JSON body for `POST /wallets` and `PUT /wallets/{id}`.
pub struct WalletForm {
    pub currency_id: i32,
    #[serde(default)]
    pub network_id: Option<i32>,
    #[serde(default)]
    pub network_type_id: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub label: Option<String>,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub card: Option<String>,
    #[serde(default)]
    #[validate(length(max = 256))]
    pub owner_full_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 256))]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub account_id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub exchange_uid: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub monthly_limit: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl WalletForm {
    fn details(&self) -> Result<WalletDetails, FormError> {
        let network_id = self
            .network_id
            .map(NetworkId::new)
            .transpose()
            .map_err(|_| FormError::InvalidNetworkId)?;
        let network_type_id = self
            .network_type_id
            .map(NetworkTypeId::new)
            .transpose()
            .map_err(|_| FormError::InvalidNetworkTypeId)?;
        let phone = blank_to_none(self.phone.clone())
            .map(PhoneNumber::new)
            .transpose()
            .map_err(|_| FormError::InvalidPhoneNumber)?;
        let owner_full_name = blank_to_none(self.owner_full_name.clone())
            .map(OwnerFullName::new)
            .transpose()
            .map_err(|source| FormError::InvalidValue {
                field: "owner_full_name",
                source,
            })?;

        Ok(WalletDetails {
            network_id,
            network_type_id,
            phone,
            card: blank_to_none(self.card.clone()),
            owner_full_name,
            address: blank_to_none(self.address.clone()),
            account_id: blank_to_none(self.account_id.clone()),
            username: blank_to_none(self.username.clone()),
            exchange_uid: blank_to_none(self.exchange_uid.clone()),
        })
    }

    fn currency_id(&self) -> Result<CurrencyId, FormError> {
        CurrencyId::new(self.currency_id).map_err(|_| FormError::InvalidCurrencyId)
    }

    fn label(&self) -> Result<Option<WalletLabel>, FormError> {
        blank_to_none(self.label.clone())
            .map(WalletLabel::new)
            .transpose()
            .map_err(|source| FormError::InvalidValue {
                field: "label",
                source,
            })
    }

    fn monthly_limit(&self) -> Result<Option<MinorAmount>, FormError> {
        self.monthly_limit
            .map(MinorAmount::new)
            .transpose()
            .map_err(|source| FormError::InvalidValue {
                field: "monthly_limit",
                source,
            })
    }

    /// Validates the payload and builds a wallet for `hub_id`.
    pub fn to_new_wallet(&self, hub_id: HubId) -> Result<NewWallet, FormError> {
        self.validate()?;
        Ok(NewWallet {
            hub_id,
            currency_id: self.currency_id()?,
            label: self.label()?,
            details: self.details()?,
            monthly_limit: self.monthly_limit()?,
        })
    }

    /// Validates the payload and builds the replacement values.
    pub fn to_update_wallet(&self) -> Result<UpdateWallet, FormError> {
        self.validate()?;
        Ok(UpdateWallet {
            currency_id: self.currency_id()?,
            label: self.label()?,
            details: self.details()?,
            monthly_limit: self.monthly_limit()?,
            is_active: self.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> WalletForm {
        serde_json::from_value(serde_json::json!({
            "currency_id": 2,
            "network_id": 5,
            "label": "  Payouts ",
            "phone": "",
            "address": " TXYZ ",
            "monthly_limit": 1000
        }))
        .expect("valid json")
    }

    #[test]
    fn blank_fields_become_absent() {
        let wallet = form().to_new_wallet(HubId::new(1).unwrap()).unwrap();

        assert_eq!(wallet.details.phone, None);
        assert_eq!(wallet.details.address.as_deref(), Some("TXYZ"));
        assert_eq!(wallet.label.as_ref().map(WalletLabel::as_str), Some("Payouts"));
        assert_eq!(wallet.monthly_limit.map(MinorAmount::get), Some(1000));
    }

    #[test]
    fn update_defaults_to_active() {
        let update = form().to_update_wallet().unwrap();
        assert!(update.is_active);
    }

    #[test]
    fn invalid_references_are_rejected() {
        let mut bad = form();
        bad.currency_id = 0;
        assert!(matches!(
            bad.to_update_wallet(),
            Err(FormError::InvalidCurrencyId)
        ));

        let mut bad = form();
        bad.network_type_id = Some(-1);
        assert!(matches!(
            bad.to_update_wallet(),
            Err(FormError::InvalidNetworkTypeId)
        ));
    }

    #[test]
    fn negative_limit_fails_validation() {
        let mut bad = form();
        bad.monthly_limit = Some(-5);
        assert!(matches!(
            bad.to_update_wallet(),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn bad_phone_is_rejected() {
        let mut bad = form();
        bad.phone = Some("not a phone".to_string());
        assert!(matches!(
            bad.to_update_wallet(),
            Err(FormError::InvalidPhoneNumber)
        ));
    }
}
