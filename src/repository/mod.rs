//! Persistence traits and the Diesel-backed implementation.

use crate::{
    db::{DbConnection, DbPool},
    domain::{
        currency::{Currency, NewCurrency},
        network::{Network, NetworkType, NewNetwork, NewNetworkType},
        types::{CurrencyId, HubId, NetworkId, WalletId},
        wallet::{NewWallet, UpdateWallet, Wallet},
        wallet_event::{NewWalletEvent, WalletEvent, WalletEventType},
    },
    pagination::{PaginationPlan, PaginationRequest, calculate_pagination},
    repository::errors::RepositoryResult,
};

pub mod currency;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod network;
pub mod wallet;
pub mod wallet_event;

/// Shared Diesel repository implementing every reader/writer trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Offset and limit to apply for a paginated plan, `None` to load everything.
///
/// Values beyond `i64::MAX` are clamped so an out-of-range page reads as empty.
pub(crate) fn page_bounds(plan: &PaginationPlan) -> Option<(i64, i64)> {
    if !plan.should_paginate {
        return None;
    }
    match (plan.skip, plan.take) {
        (Some(skip), Some(take)) => Some((
            i64::try_from(skip).unwrap_or(i64::MAX),
            i64::try_from(take).unwrap_or(i64::MAX),
        )),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct WalletListQuery {
    pub hub_id: HubId,
    pub currency_id: Option<CurrencyId>,
    pub search: Option<String>,
    pub pagination: PaginationPlan,
}

impl WalletListQuery {
    pub fn new(hub_id: HubId) -> Self {
        Self {
            hub_id,
            currency_id: None,
            search: None,
            pagination: PaginationPlan::all(),
        }
    }

    pub fn currency(mut self, currency_id: CurrencyId) -> Self {
        self.currency_id = Some(currency_id);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, request: PaginationRequest) -> Self {
        self.pagination = calculate_pagination(request);
        self
    }
}

#[derive(Debug, Clone)]
pub struct WalletEventListQuery {
    pub wallet_id: WalletId,
    pub event_type: Option<WalletEventType>,
    pub pagination: PaginationPlan,
}

impl WalletEventListQuery {
    pub fn new(wallet_id: WalletId) -> Self {
        Self {
            wallet_id,
            event_type: None,
            pagination: PaginationPlan::all(),
        }
    }

    pub fn event_type(mut self, event_type: WalletEventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn paginate(mut self, request: PaginationRequest) -> Self {
        self.pagination = calculate_pagination(request);
        self
    }
}

/// Hub-scoped listing used by the catalog tables.
#[derive(Debug, Clone)]
pub struct CatalogListQuery {
    pub hub_id: HubId,
    pub pagination: PaginationPlan,
}

impl CatalogListQuery {
    pub fn new(hub_id: HubId) -> Self {
        Self {
            hub_id,
            pagination: PaginationPlan::all(),
        }
    }

    pub fn paginate(mut self, request: PaginationRequest) -> Self {
        self.pagination = calculate_pagination(request);
        self
    }
}

pub trait WalletReader {
    fn get_wallet_by_id(&self, id: WalletId, hub_id: HubId) -> RepositoryResult<Option<Wallet>>;
    fn list_wallets(&self, query: WalletListQuery) -> RepositoryResult<(usize, Vec<Wallet>)>;
}

pub trait WalletWriter {
    fn create_wallet(&self, new_wallet: &NewWallet) -> RepositoryResult<Wallet>;
    /// Replaces the editable fields of a hub's wallet, returning the row as it
    /// was before the write together with the updated row.
    fn update_wallet(
        &self,
        id: WalletId,
        hub_id: HubId,
        updates: &UpdateWallet,
    ) -> RepositoryResult<(Wallet, Wallet)>;
    fn delete_wallet(&self, id: WalletId) -> RepositoryResult<()>;
}

pub trait WalletEventReader {
    fn list_wallet_events(
        &self,
        query: WalletEventListQuery,
    ) -> RepositoryResult<(usize, Vec<WalletEvent>)>;
}

pub trait WalletEventWriter {
    fn create_wallet_event(&self, event: &NewWalletEvent) -> RepositoryResult<WalletEvent>;
}

pub trait CurrencyReader {
    fn get_currency_by_id(
        &self,
        id: CurrencyId,
        hub_id: HubId,
    ) -> RepositoryResult<Option<Currency>>;
    fn list_currencies(&self, query: CatalogListQuery) -> RepositoryResult<(usize, Vec<Currency>)>;
}

pub trait CurrencyWriter {
    fn create_currency(&self, new_currency: &NewCurrency) -> RepositoryResult<Currency>;
}

pub trait NetworkReader {
    fn get_network_by_id(&self, id: NetworkId, hub_id: HubId) -> RepositoryResult<Option<Network>>;
    fn list_networks(&self, query: CatalogListQuery) -> RepositoryResult<(usize, Vec<Network>)>;
    fn list_network_types(&self, network_id: NetworkId) -> RepositoryResult<Vec<NetworkType>>;
}

pub trait NetworkWriter {
    fn create_network(&self, new_network: &NewNetwork) -> RepositoryResult<Network>;
    fn create_network_type(&self, new_type: &NewNetworkType) -> RepositoryResult<NetworkType>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_follow_plan() {
        assert_eq!(page_bounds(&PaginationPlan::all()), None);
        assert_eq!(
            page_bounds(&calculate_pagination(PaginationRequest::new(3, 10))),
            Some((20, 10))
        );
    }

    #[test]
    fn page_bounds_never_go_negative() {
        let past_bigint = i64::MAX as usize / 100 + 2;
        let plan = calculate_pagination(PaginationRequest::new(past_bigint, 100));
        assert_eq!(page_bounds(&plan), Some((i64::MAX, 100)));

        let plan = calculate_pagination(PaginationRequest::new(usize::MAX, usize::MAX));
        assert_eq!(page_bounds(&plan), Some((i64::MAX, i64::MAX)));
    }
}
