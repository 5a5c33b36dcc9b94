use serde::{Deserialize, Serialize};

use crate::domain::types::{CurrencyCode, CurrencyId, CurrencyName, HubId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: CurrencyId,
    pub hub_id: HubId,
    pub code: CurrencyCode,
    pub name: CurrencyName,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCurrency {
    pub hub_id: HubId,
    pub code: CurrencyCode,
    pub name: CurrencyName,
}

impl NewCurrency {
    #[must_use]
    pub fn new(hub_id: HubId, code: CurrencyCode, name: CurrencyName) -> Self {
        Self { hub_id, code, name }
    }
}
