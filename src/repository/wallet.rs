use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::types::{HubId, WalletId};
use crate::domain::wallet::{NewWallet, UpdateWallet, Wallet};
use crate::models::wallet::{
    NewWallet as DbNewWallet, UpdateWallet as DbUpdateWallet, Wallet as DbWallet,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, WalletListQuery, WalletReader, WalletWriter, page_bounds,
};

/// `LIKE` pattern matching `term` anywhere, with its wildcards taken literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl WalletReader for DieselRepository {
    fn get_wallet_by_id(&self, id: WalletId, hub_id: HubId) -> RepositoryResult<Option<Wallet>> {
        use crate::schema::wallets;

        let mut conn = self.conn()?;
        let wallet = wallets::table
            .filter(wallets::id.eq(id.get()))
            .filter(wallets::hub_id.eq(hub_id.get()))
            .first::<DbWallet>(&mut conn)
            .optional()?;

        Ok(wallet.map(Wallet::try_from).transpose()?)
    }

    fn list_wallets(&self, query: WalletListQuery) -> RepositoryResult<(usize, Vec<Wallet>)> {
        use crate::schema::wallets;

        let mut conn = self.conn()?;
        let pattern = query.search.as_deref().map(contains_pattern);

        let query_builder = || {
            let mut items = wallets::table
                .filter(wallets::hub_id.eq(query.hub_id.get()))
                .into_boxed::<Sqlite>();

            if let Some(currency_id) = query.currency_id {
                items = items.filter(wallets::currency_id.eq(currency_id.get()));
            }
            if let Some(pattern) = &pattern {
                items = items.filter(
                    wallets::label
                        .like(pattern)
                        .escape('\\')
                        .or(wallets::owner_full_name.like(pattern).escape('\\'))
                        .or(wallets::address.like(pattern).escape('\\'))
                        .or(wallets::card.like(pattern).escape('\\'))
                        .or(wallets::phone.like(pattern).escape('\\'))
                        .or(wallets::username.like(pattern).escape('\\')),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(wallets::id.asc());
        if let Some((offset, limit)) = page_bounds(&query.pagination) {
            items = items.offset(offset).limit(limit);
        }

        let wallets = items
            .load::<DbWallet>(&mut conn)?
            .into_iter()
            .map(Wallet::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, wallets))
    }
}

impl WalletWriter for DieselRepository {
    fn create_wallet(&self, new_wallet: &NewWallet) -> RepositoryResult<Wallet> {
        use crate::schema::wallets;

        let mut conn = self.conn()?;
        let insertable: DbNewWallet = new_wallet.into();

        let created = diesel::insert_into(wallets::table)
            .values(&insertable)
            .get_result::<DbWallet>(&mut conn)?;

        Ok(Wallet::try_from(created)?)
    }

    fn update_wallet(
        &self,
        id: WalletId,
        hub_id: HubId,
        updates: &UpdateWallet,
    ) -> RepositoryResult<(Wallet, Wallet)> {
        use crate::schema::wallets;

        let mut conn = self.conn()?;
        let changeset: DbUpdateWallet = updates.into();

        // The prior row is read under the write lock so concurrent edits diff
        // against what they actually replace.
        let (previous, updated) =
            conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
                let target = wallets::table
                    .filter(wallets::id.eq(id.get()))
                    .filter(wallets::hub_id.eq(hub_id.get()));

                let previous = target.clone().first::<DbWallet>(conn)?;
                let updated = diesel::update(target)
                    .set(&changeset)
                    .get_result::<DbWallet>(conn)?;
                Ok((previous, updated))
            })?;

        Ok((Wallet::try_from(previous)?, Wallet::try_from(updated)?))
    }

    fn delete_wallet(&self, id: WalletId) -> RepositoryResult<()> {
        use crate::schema::wallets;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(wallets::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Bob"), "%Bob%");
        assert_eq!(contains_pattern("_"), "%\\_%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
