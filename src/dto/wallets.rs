//! DTOs exposed by the wallet endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::wallet::Wallet;
use crate::dto::ListParams;

/// Query parameters accepted by `GET /api/v1/wallets`.
#[derive(Debug, Default, Deserialize)]
pub struct WalletListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Restrict to wallets in this currency.
    pub currency_id: Option<i32>,
    /// Free-form search over label, owner and payout details.
    pub search: Option<String>,
}

impl WalletListParams {
    pub fn list(&self) -> ListParams {
        ListParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Wallet as returned by the API.
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    #[serde(flatten)]
    pub wallet: Wallet,
    pub monthly_remaining: Option<i64>,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        let monthly_remaining = wallet.monthly_remaining();
        Self {
            wallet,
            monthly_remaining,
        }
    }
}
