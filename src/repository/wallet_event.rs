use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::wallet_event::{NewWalletEvent, WalletEvent};
use crate::models::wallet_event::{
    NewWalletEvent as DbNewWalletEvent, WalletEvent as DbWalletEvent,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, WalletEventListQuery, WalletEventReader, WalletEventWriter, page_bounds,
};

impl WalletEventReader for DieselRepository {
    fn list_wallet_events(
        &self,
        query: WalletEventListQuery,
    ) -> RepositoryResult<(usize, Vec<WalletEvent>)> {
        use crate::schema::wallet_events;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = wallet_events::table
                .filter(wallet_events::wallet_id.eq(query.wallet_id.get()))
                .into_boxed::<Sqlite>();

            if let Some(event_type) = &query.event_type {
                items = items.filter(wallet_events::event_type.eq(event_type.to_string()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order((
            wallet_events::created_at.desc(),
            wallet_events::id.desc(),
        ));
        if let Some((offset, limit)) = page_bounds(&query.pagination) {
            items = items.offset(offset).limit(limit);
        }

        let events = items
            .load::<DbWalletEvent>(&mut conn)?
            .into_iter()
            .map(WalletEvent::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, events))
    }
}

impl WalletEventWriter for DieselRepository {
    fn create_wallet_event(&self, event: &NewWalletEvent) -> RepositoryResult<WalletEvent> {
        use crate::schema::wallet_events;

        let mut conn = self.conn()?;
        let insertable: DbNewWalletEvent = event.into();

        let created = diesel::insert_into(wallet_events::table)
            .values(&insertable)
            .get_result::<DbWalletEvent>(&mut conn)?;

        Ok(WalletEvent::try_from(created)?)
    }
}
