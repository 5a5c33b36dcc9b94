//! Diesel models for wallets.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::types::{
    CurrencyId, HubId, MinorAmount, NetworkId, NetworkTypeId, OwnerFullName, PhoneNumber,
    TypeConstraintError, WalletId, WalletLabel,
};
use crate::domain::wallet::{
    NewWallet as DomainNewWallet, UpdateWallet as DomainUpdateWallet, Wallet as DomainWallet,
    WalletDetails,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::wallets)]
/// Diesel model for [`crate::domain::wallet::Wallet`].
pub struct Wallet {
    pub id: i32,
    pub hub_id: i32,
    pub currency_id: i32,
    pub network_id: Option<i32>,
    pub network_type_id: Option<i32>,
    pub label: Option<String>,
    pub phone: Option<String>,
    pub card: Option<String>,
    pub owner_full_name: Option<String>,
    pub address: Option<String>,
    pub account_id: Option<String>,
    pub username: Option<String>,
    pub exchange_uid: Option<String>,
    pub monthly_limit: Option<i64>,
    pub monthly_used: i64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::wallets)]
/// Insertable form of [`Wallet`].
pub struct NewWallet<'a> {
    pub hub_id: i32,
    pub currency_id: i32,
    pub network_id: Option<i32>,
    pub network_type_id: Option<i32>,
    pub label: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub card: Option<&'a str>,
    pub owner_full_name: Option<&'a str>,
    pub address: Option<&'a str>,
    pub account_id: Option<&'a str>,
    pub username: Option<&'a str>,
    pub exchange_uid: Option<&'a str>,
    pub monthly_limit: Option<i64>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::wallets)]
#[diesel(treat_none_as_null = true)]
/// Data used when replacing the editable columns of a [`Wallet`].
pub struct UpdateWallet<'a> {
    pub currency_id: i32,
    pub network_id: Option<i32>,
    pub network_type_id: Option<i32>,
    pub label: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub card: Option<&'a str>,
    pub owner_full_name: Option<&'a str>,
    pub address: Option<&'a str>,
    pub account_id: Option<&'a str>,
    pub username: Option<&'a str>,
    pub exchange_uid: Option<&'a str>,
    pub monthly_limit: Option<i64>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Wallet> for DomainWallet {
    type Error = TypeConstraintError;

    fn try_from(wallet: Wallet) -> Result<Self, Self::Error> {
        let details = WalletDetails {
            network_id: wallet.network_id.map(NetworkId::new).transpose()?,
            network_type_id: wallet.network_type_id.map(NetworkTypeId::new).transpose()?,
            phone: wallet.phone.map(PhoneNumber::new).transpose()?,
            card: wallet.card,
            owner_full_name: wallet.owner_full_name.map(OwnerFullName::new).transpose()?,
            address: wallet.address,
            account_id: wallet.account_id,
            username: wallet.username,
            exchange_uid: wallet.exchange_uid,
        };

        Ok(Self {
            id: WalletId::new(wallet.id)?,
            hub_id: HubId::new(wallet.hub_id)?,
            currency_id: CurrencyId::new(wallet.currency_id)?,
            label: wallet.label.map(WalletLabel::new).transpose()?,
            details,
            monthly_limit: wallet.monthly_limit.map(MinorAmount::new).transpose()?,
            monthly_used: MinorAmount::new(wallet.monthly_used)?,
            is_active: wallet.is_active,
            created_at: wallet.created_at,
            updated_at: wallet.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewWallet> for NewWallet<'a> {
    fn from(wallet: &'a DomainNewWallet) -> Self {
        let details = &wallet.details;
        Self {
            hub_id: wallet.hub_id.get(),
            currency_id: wallet.currency_id.get(),
            network_id: details.network_id.map(NetworkId::get),
            network_type_id: details.network_type_id.map(NetworkTypeId::get),
            label: wallet.label.as_ref().map(WalletLabel::as_str),
            phone: details.phone.as_ref().map(PhoneNumber::as_str),
            card: details.card.as_deref(),
            owner_full_name: details.owner_full_name.as_ref().map(OwnerFullName::as_str),
            address: details.address.as_deref(),
            account_id: details.account_id.as_deref(),
            username: details.username.as_deref(),
            exchange_uid: details.exchange_uid.as_deref(),
            monthly_limit: wallet.monthly_limit.map(MinorAmount::get),
        }
    }
}

impl<'a> From<&'a DomainUpdateWallet> for UpdateWallet<'a> {
    fn from(wallet: &'a DomainUpdateWallet) -> Self {
        let details = &wallet.details;
        Self {
            currency_id: wallet.currency_id.get(),
            network_id: details.network_id.map(NetworkId::get),
            network_type_id: details.network_type_id.map(NetworkTypeId::get),
            label: wallet.label.as_ref().map(WalletLabel::as_str),
            phone: details.phone.as_ref().map(PhoneNumber::as_str),
            card: details.card.as_deref(),
            owner_full_name: details.owner_full_name.as_ref().map(OwnerFullName::as_str),
            address: details.address.as_deref(),
            account_id: details.account_id.as_deref(),
            username: details.username.as_deref(),
            exchange_uid: details.exchange_uid.as_deref(),
            monthly_limit: wallet.monthly_limit.map(MinorAmount::get),
            is_active: wallet.is_active,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
