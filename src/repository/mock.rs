//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::currency::{Currency, NewCurrency};
use crate::domain::network::{Network, NetworkType, NewNetwork, NewNetworkType};
use crate::domain::types::{CurrencyId, HubId, NetworkId, WalletId};
use crate::domain::wallet::{NewWallet, UpdateWallet, Wallet};
use crate::domain::wallet_event::{NewWalletEvent, WalletEvent};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CatalogListQuery, CurrencyReader, CurrencyWriter, NetworkReader, NetworkWriter,
    WalletEventListQuery, WalletEventReader, WalletEventWriter, WalletListQuery, WalletReader,
    WalletWriter,
};

mock! {
    pub Repository {}

    impl WalletReader for Repository {
        fn get_wallet_by_id(&self, id: WalletId, hub_id: HubId) -> RepositoryResult<Option<Wallet>>;
        fn list_wallets(&self, query: WalletListQuery) -> RepositoryResult<(usize, Vec<Wallet>)>;
    }

    impl WalletWriter for Repository {
        fn create_wallet(&self, new_wallet: &NewWallet) -> RepositoryResult<Wallet>;
        fn update_wallet(
            &self,
            id: WalletId,
            hub_id: HubId,
            updates: &UpdateWallet,
        ) -> RepositoryResult<(Wallet, Wallet)>;
        fn delete_wallet(&self, id: WalletId) -> RepositoryResult<()>;
    }

    impl WalletEventReader for Repository {
        fn list_wallet_events(
            &self,
            query: WalletEventListQuery,
        ) -> RepositoryResult<(usize, Vec<WalletEvent>)>;
    }

    impl WalletEventWriter for Repository {
        fn create_wallet_event(&self, event: &NewWalletEvent) -> RepositoryResult<WalletEvent>;
    }

    impl CurrencyReader for Repository {
        fn get_currency_by_id(
            &self,
            id: CurrencyId,
            hub_id: HubId,
        ) -> RepositoryResult<Option<Currency>>;
        fn list_currencies(
            &self,
            query: CatalogListQuery,
        ) -> RepositoryResult<(usize, Vec<Currency>)>;
    }

    impl CurrencyWriter for Repository {
        fn create_currency(&self, new_currency: &NewCurrency) -> RepositoryResult<Currency>;
    }

    impl NetworkReader for Repository {
        fn get_network_by_id(
            &self,
            id: NetworkId,
            hub_id: HubId,
        ) -> RepositoryResult<Option<Network>>;
        fn list_networks(&self, query: CatalogListQuery) -> RepositoryResult<(usize, Vec<Network>)>;
        fn list_network_types(&self, network_id: NetworkId) -> RepositoryResult<Vec<NetworkType>>;
    }

    impl NetworkWriter for Repository {
        fn create_network(&self, new_network: &NewNetwork) -> RepositoryResult<Network>;
        fn create_network_type(&self, new_type: &NewNetworkType) -> RepositoryResult<NetworkType>;
    }
}
