//! Diesel models for currencies.

use diesel::prelude::*;

use crate::domain::currency::{Currency as DomainCurrency, NewCurrency as DomainNewCurrency};
use crate::domain::types::{CurrencyCode, CurrencyId, CurrencyName, HubId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::currencies)]
pub struct Currency {
    pub id: i32,
    pub hub_id: i32,
    pub code: String,
    pub name: String,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::currencies)]
pub struct NewCurrency<'a> {
    pub hub_id: i32,
    pub code: &'a str,
    pub name: &'a str,
}

impl TryFrom<Currency> for DomainCurrency {
    type Error = TypeConstraintError;

    fn try_from(currency: Currency) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CurrencyId::new(currency.id)?,
            hub_id: HubId::new(currency.hub_id)?,
            code: CurrencyCode::new(currency.code)?,
            name: CurrencyName::new(currency.name)?,
            is_active: currency.is_active,
        })
    }
}

impl<'a> From<&'a DomainNewCurrency> for NewCurrency<'a> {
    fn from(currency: &'a DomainNewCurrency) -> Self {
        Self {
            hub_id: currency.hub_id.get(),
            code: currency.code.as_str(),
            name: currency.name.as_str(),
        }
    }
}
