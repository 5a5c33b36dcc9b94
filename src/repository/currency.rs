use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::currency::{Currency, NewCurrency};
use crate::domain::types::{CurrencyId, HubId};
use crate::models::currency::{Currency as DbCurrency, NewCurrency as DbNewCurrency};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CatalogListQuery, CurrencyReader, CurrencyWriter, DieselRepository, page_bounds,
};

impl CurrencyReader for DieselRepository {
    fn get_currency_by_id(
        &self,
        id: CurrencyId,
        hub_id: HubId,
    ) -> RepositoryResult<Option<Currency>> {
        use crate::schema::currencies;

        let mut conn = self.conn()?;
        let currency = currencies::table
            .filter(currencies::id.eq(id.get()))
            .filter(currencies::hub_id.eq(hub_id.get()))
            .first::<DbCurrency>(&mut conn)
            .optional()?;

        Ok(currency.map(Currency::try_from).transpose()?)
    }

    fn list_currencies(&self, query: CatalogListQuery) -> RepositoryResult<(usize, Vec<Currency>)> {
        use crate::schema::currencies;

        let mut conn = self.conn()?;

        let total = currencies::table
            .filter(currencies::hub_id.eq(query.hub_id.get()))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = currencies::table
            .filter(currencies::hub_id.eq(query.hub_id.get()))
            .order(currencies::code.asc())
            .into_boxed::<Sqlite>();
        if let Some((offset, limit)) = page_bounds(&query.pagination) {
            items = items.offset(offset).limit(limit);
        }

        let currencies = items
            .load::<DbCurrency>(&mut conn)?
            .into_iter()
            .map(Currency::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, currencies))
    }
}

impl CurrencyWriter for DieselRepository {
    fn create_currency(&self, new_currency: &NewCurrency) -> RepositoryResult<Currency> {
        use crate::schema::currencies;

        let mut conn = self.conn()?;
        let insertable: DbNewCurrency = new_currency.into();

        let created = diesel::insert_into(currencies::table)
            .values(&insertable)
            .get_result::<DbCurrency>(&mut conn)?;

        Ok(Currency::try_from(created)?)
    }
}
