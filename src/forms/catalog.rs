//! Payloads for the currency and network catalog.

use serde::Deserialize;
use validator::Validate;

use crate::domain::currency::NewCurrency;
use crate::domain::network::{NewNetwork, NewNetworkType};
use crate::domain::types::{
    CurrencyCode, CurrencyName, HubId, NetworkCode, NetworkId, NetworkName, NetworkTypeName,
};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct CurrencyForm {
    #[validate(length(min = 2, max = 10))]
    pub code: String,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

impl CurrencyForm {
    pub fn to_new_currency(&self, hub_id: HubId) -> Result<NewCurrency, FormError> {
        self.validate()?;
        let code = CurrencyCode::new(self.code.as_str())
            .map_err(|source| FormError::InvalidValue { field: "code", source })?;
        let name = CurrencyName::new(self.name.as_str())
            .map_err(|source| FormError::InvalidValue { field: "name", source })?;
        Ok(NewCurrency::new(hub_id, code, name))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NetworkForm {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

impl NetworkForm {
    pub fn to_new_network(&self, hub_id: HubId) -> Result<NewNetwork, FormError> {
        self.validate()?;
        Ok(NewNetwork {
            hub_id,
            code: NetworkCode::new(self.code.as_str())
                .map_err(|source| FormError::InvalidValue { field: "code", source })?,
            name: NetworkName::new(self.name.as_str())
                .map_err(|source| FormError::InvalidValue { field: "name", source })?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NetworkTypeForm {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

impl NetworkTypeForm {
    pub fn to_new_network_type(&self, network_id: NetworkId) -> Result<NewNetworkType, FormError> {
        self.validate()?;
        Ok(NewNetworkType {
            network_id,
            name: NetworkTypeName::new(self.name.as_str())
                .map_err(|source| FormError::InvalidValue { field: "name", source })?,
        })
    }
}
