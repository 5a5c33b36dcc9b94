//! Wallet CRUD with critical-field auditing.

use serde_json::json;

use crate::domain::changes::{detect_critical_changes, has_critical_changes};
use crate::domain::types::{CurrencyId, HubId, WalletId};
use crate::domain::wallet::WalletDetails;
use crate::domain::wallet_event::{NewWalletEvent, WalletEvent, WalletEventType};
use crate::dto::ListParams;
use crate::dto::wallets::{WalletListParams, WalletResponse};
use crate::forms::wallets::WalletForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    CurrencyReader, NetworkReader, WalletEventListQuery, WalletEventReader, WalletEventWriter,
    WalletListQuery, WalletReader, WalletWriter,
};
use crate::services::{ServiceError, ServiceResult, ensure_role, validate_params};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn parse_wallet_id(wallet_id: i32) -> ServiceResult<WalletId> {
    WalletId::new(wallet_id).map_err(|_| ServiceError::NotFound)
}

/// Ensures the currency, network and network type a wallet points at exist
/// in the user's hub and fit together.
fn check_references<R>(
    repo: &R,
    hub_id: HubId,
    currency_id: CurrencyId,
    details: &WalletDetails,
) -> ServiceResult<()>
where
    R: CurrencyReader + NetworkReader + ?Sized,
{
    if repo.get_currency_by_id(currency_id, hub_id)?.is_none() {
        return Err(ServiceError::Form(format!("unknown currency {currency_id}")));
    }

    match (details.network_id, details.network_type_id) {
        (None, None) => Ok(()),
        (None, Some(_)) => Err(ServiceError::Form(
            "network type requires a network".to_string(),
        )),
        (Some(network_id), network_type_id) => {
            if repo.get_network_by_id(network_id, hub_id)?.is_none() {
                return Err(ServiceError::Form(format!("unknown network {network_id}")));
            }
            if let Some(network_type_id) = network_type_id {
                let known = repo
                    .list_network_types(network_id)?
                    .iter()
                    .any(|network_type| network_type.id == network_type_id);
                if !known {
                    return Err(ServiceError::Form(format!(
                        "network type {network_type_id} does not belong to network {network_id}"
                    )));
                }
            }
            Ok(())
        }
    }
}

/// Records an audit event; failures are logged and do not fail the request.
fn record_event<R>(repo: &R, event: &NewWalletEvent)
where
    R: WalletEventWriter + ?Sized,
{
    if let Err(err) = repo.create_wallet_event(event) {
        log::error!(
            "Failed to record {} event for wallet {}: {err}",
            event.event_type,
            event.wallet_id
        );
    }
}

/// Lists the wallets of the user's hub, paginated when requested.
pub fn list_wallets<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: WalletListParams,
) -> ServiceResult<Paginated<WalletResponse>>
where
    R: WalletReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let list = params.list();
    validate_params(&list)?;
    let request = list.pagination();

    let mut query = WalletListQuery::new(user.hub_id).paginate(request);

    if let Some(currency_id) = params.currency_id {
        let currency_id = CurrencyId::new(currency_id)
            .map_err(|_| ServiceError::Form("invalid currency id".to_string()))?;
        query = query.currency(currency_id);
    }

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }

    let (total, wallets) = repo.list_wallets(query).map_err(|err| {
        log::error!("Failed to list wallets: {err}");
        err
    })?;

    Ok(Paginated::new(wallets, total, request).map(WalletResponse::from))
}

pub fn get_wallet<R>(
    repo: &R,
    user: &AuthenticatedUser,
    wallet_id: i32,
) -> ServiceResult<WalletResponse>
where
    R: WalletReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let wallet_id = parse_wallet_id(wallet_id)?;
    repo.get_wallet_by_id(wallet_id, user.hub_id)?
        .map(WalletResponse::from)
        .ok_or(ServiceError::NotFound)
}

pub fn create_wallet<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: WalletForm,
) -> ServiceResult<WalletResponse>
where
    R: WalletWriter + WalletEventWriter + CurrencyReader + NetworkReader + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let new_wallet = form.to_new_wallet(user.hub_id).map_err(|err| {
        log::error!("Failed to validate wallet form: {err}");
        err
    })?;
    check_references(repo, user.hub_id, new_wallet.currency_id, &new_wallet.details)?;

    let wallet = repo.create_wallet(&new_wallet).map_err(|err| {
        log::error!("Failed to create wallet: {err}");
        err
    })?;

    record_event(
        repo,
        &NewWalletEvent::new(
            wallet.id,
            user.email.clone(),
            WalletEventType::Created,
            json!({ "snapshot": wallet.snapshot() }),
        ),
    );

    log::info!("Wallet {} created by {}", wallet.id, user.email);
    Ok(wallet.into())
}

/// Replaces the editable fields of a wallet.
///
/// The row replaced by the write is diffed against the update over the
/// critical fields; a non-empty diff is logged and stored as a
/// `critical_update` event.
pub fn update_wallet<R>(
    repo: &R,
    user: &AuthenticatedUser,
    wallet_id: i32,
    form: WalletForm,
) -> ServiceResult<WalletResponse>
where
    R: WalletWriter + WalletEventWriter + CurrencyReader + NetworkReader + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let wallet_id = parse_wallet_id(wallet_id)?;
    let updates = form.to_update_wallet().map_err(|err| {
        log::error!("Failed to validate wallet form: {err}");
        err
    })?;
    check_references(repo, user.hub_id, updates.currency_id, &updates.details)?;

    let (previous, wallet) = repo
        .update_wallet(wallet_id, user.hub_id, &updates)
        .map_err(|err| {
            log::error!("Failed to update wallet {wallet_id}: {err}");
            err
        })?;

    let changes = detect_critical_changes(&previous.snapshot(), &wallet.snapshot());
    if has_critical_changes(&changes) {
        let fields: Vec<&str> = changes.iter().map(|change| change.field.as_str()).collect();
        log::warn!(
            "Critical fields of wallet {wallet_id} changed by {}: {}",
            user.email,
            fields.join(", ")
        );
        record_event(
            repo,
            &NewWalletEvent::critical_update(wallet_id, user.email.clone(), &changes),
        );
    }

    Ok(wallet.into())
}

pub fn delete_wallet<R>(repo: &R, user: &AuthenticatedUser, wallet_id: i32) -> ServiceResult<()>
where
    R: WalletReader + WalletWriter + WalletEventWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let wallet_id = parse_wallet_id(wallet_id)?;
    let existing = repo
        .get_wallet_by_id(wallet_id, user.hub_id)?
        .ok_or(ServiceError::NotFound)?;

    repo.delete_wallet(wallet_id).map_err(|err| {
        log::error!("Failed to delete wallet {wallet_id}: {err}");
        err
    })?;

    record_event(
        repo,
        &NewWalletEvent::new(
            wallet_id,
            user.email.clone(),
            WalletEventType::Deleted,
            json!({ "snapshot": existing.snapshot() }),
        ),
    );

    log::info!("Wallet {wallet_id} deleted by {}", user.email);
    Ok(())
}

/// Lists the audit trail of a wallet, newest first.
pub fn list_wallet_events<R>(
    repo: &R,
    user: &AuthenticatedUser,
    wallet_id: i32,
    params: ListParams,
) -> ServiceResult<Paginated<WalletEvent>>
where
    R: WalletReader + WalletEventReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;
    validate_params(&params)?;

    let wallet_id = parse_wallet_id(wallet_id)?;
    if repo.get_wallet_by_id(wallet_id, user.hub_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let request = params.pagination();
    let (total, events) =
        repo.list_wallet_events(WalletEventListQuery::new(wallet_id).paginate(request))?;

    Ok(Paginated::new(events, total, request))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::{always, eq};

    use super::*;
    use crate::domain::changes::CriticalField;
    use crate::domain::currency::Currency;
    use crate::domain::network::{Network, NetworkType};
    use crate::domain::types::{
        CurrencyCode, CurrencyName, MinorAmount, NetworkCode, NetworkId, NetworkName,
        NetworkTypeId, NetworkTypeName, WalletEventId,
    };
    use crate::domain::wallet::{UpdateWallet, Wallet};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::test_support::{admin_user, user_with_roles, viewer_user};

    fn hub() -> HubId {
        HubId::new(42).unwrap()
    }

    fn stored_wallet(id: i32) -> Wallet {
        let now = Utc::now().naive_utc();
        Wallet {
            id: WalletId::new(id).unwrap(),
            hub_id: hub(),
            currency_id: CurrencyId::new(1).unwrap(),
            label: None,
            details: WalletDetails {
                network_id: Some(NetworkId::new(2).unwrap()),
                address: Some("TOLD".to_string()),
                username: None,
                ..WalletDetails::default()
            },
            monthly_limit: Some(MinorAmount::new(500).unwrap()),
            monthly_used: MinorAmount::new(100).unwrap(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn form(address: &str) -> WalletForm {
        serde_json::from_value(json!({
            "currency_id": 1,
            "network_id": 2,
            "address": address,
            "username": "",
            "label": "renamed"
        }))
        .unwrap()
    }

    fn expect_catalog(repo: &mut MockRepository) {
        repo.expect_get_currency_by_id().returning(|id, hub_id| {
            Ok(Some(Currency {
                id,
                hub_id,
                code: CurrencyCode::new("USDT").unwrap(),
                name: CurrencyName::new("Tether").unwrap(),
                is_active: true,
            }))
        });
        repo.expect_get_network_by_id().returning(|id, hub_id| {
            Ok(Some(Network {
                id,
                hub_id,
                code: NetworkCode::new("TRC20").unwrap(),
                name: NetworkName::new("Tron").unwrap(),
            }))
        });
        repo.expect_list_network_types().returning(|network_id| {
            Ok(vec![NetworkType {
                id: NetworkTypeId::new(7).unwrap(),
                network_id,
                name: NetworkTypeName::new("token").unwrap(),
            }])
        });
    }

    fn echo_event(event: &NewWalletEvent) -> Result<WalletEvent, RepositoryError> {
        Ok(WalletEvent {
            id: WalletEventId::new(1).unwrap(),
            wallet_id: event.wallet_id,
            actor: event.actor.clone(),
            event_type: event.event_type.clone(),
            event_data: event.event_data.clone(),
            created_at: event.created_at,
        })
    }

    #[test]
    fn list_requires_access_role() {
        let repo = MockRepository::new();
        let user = user_with_roles(&["other"]);

        let result = list_wallets(&repo, &user, WalletListParams::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn list_paginates_when_page_and_limit_given() {
        let mut repo = MockRepository::new();
        repo.expect_list_wallets()
            .withf(|query| {
                query.pagination.should_paginate
                    && query.pagination.skip == Some(10)
                    && query.pagination.take == Some(10)
                    && query.search.as_deref() == Some("jane")
            })
            .returning(|_| Ok((25, vec![stored_wallet(11)])));

        let params = WalletListParams {
            page: Some(2),
            limit: Some(10),
            currency_id: None,
            search: Some("  jane ".to_string()),
        };
        let page = list_wallets(&repo, &viewer_user(), params).unwrap();

        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.items[0].monthly_remaining, Some(400));
    }

    #[test]
    fn list_without_pagination_returns_single_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_wallets()
            .withf(|query| !query.pagination.should_paginate)
            .returning(|_| Ok((2, vec![stored_wallet(1), stored_wallet(2)])));

        let page = list_wallets(&repo, &viewer_user(), WalletListParams::default()).unwrap();

        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.pagination.limit, 2);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn list_rejects_oversized_limit() {
        let repo = MockRepository::new();
        let params = WalletListParams {
            page: Some(1),
            limit: Some(1_000),
            ..WalletListParams::default()
        };

        let result = list_wallets(&repo, &viewer_user(), params);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn list_rejects_page_past_addressable_offset() {
        let mut repo = MockRepository::new();
        repo.expect_list_wallets().times(0);
        let params = WalletListParams {
            page: Some(usize::MAX / 50),
            limit: Some(100),
            ..WalletListParams::default()
        };

        let result = list_wallets(&repo, &viewer_user(), params);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn get_missing_wallet_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_wallet_by_id().returning(|_, _| Ok(None));

        let result = get_wallet(&repo, &viewer_user(), 5);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_requires_admin_role() {
        let repo = MockRepository::new();

        let result = create_wallet(&repo, &viewer_user(), form("TNEW"));

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn create_records_created_event() {
        let mut repo = MockRepository::new();
        expect_catalog(&mut repo);
        repo.expect_create_wallet().returning(|new_wallet| {
            let mut wallet = stored_wallet(3);
            wallet.details = new_wallet.details.clone();
            Ok(wallet)
        });
        repo.expect_create_wallet_event()
            .withf(|event| event.event_type == WalletEventType::Created)
            .times(1)
            .returning(echo_event);

        let created = create_wallet(&repo, &admin_user(), form("TNEW")).unwrap();

        assert_eq!(created.wallet.details.address.as_deref(), Some("TNEW"));
    }

    #[test]
    fn create_rejects_unknown_currency() {
        let mut repo = MockRepository::new();
        repo.expect_get_currency_by_id().returning(|_, _| Ok(None));

        let result = create_wallet(&repo, &admin_user(), form("TNEW"));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn create_rejects_foreign_network_type() {
        let mut repo = MockRepository::new();
        expect_catalog(&mut repo);
        let mut bad = form("TNEW");
        bad.network_type_id = Some(99);

        let result = create_wallet(&repo, &admin_user(), bad);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    fn apply(previous: Wallet, updates: &UpdateWallet) -> (Wallet, Wallet) {
        let mut updated = previous.clone();
        updated.label = updates.label.clone();
        updated.details = updates.details.clone();
        updated.monthly_limit = updates.monthly_limit;
        updated.is_active = updates.is_active;
        (previous, updated)
    }

    #[test]
    fn update_with_critical_change_records_event() {
        let mut repo = MockRepository::new();
        expect_catalog(&mut repo);
        repo.expect_update_wallet()
            .with(eq(WalletId::new(3).unwrap()), eq(hub()), always())
            .returning(|id, _, updates| Ok(apply(stored_wallet(id.get()), updates)));
        repo.expect_create_wallet_event()
            .withf(|event| {
                event.event_type == WalletEventType::CriticalUpdate
                    && event.event_data["changes"][0]["field"] == "address"
                    && event.event_data["changes"][0]["old_value"] == "TOLD"
                    && event.event_data["changes"][0]["new_value"] == "TNEW"
                    && event.event_data["changes"].as_array().map(Vec::len) == Some(1)
            })
            .times(1)
            .returning(echo_event);

        let updated = update_wallet(&repo, &admin_user(), 3, form("TNEW")).unwrap();

        assert_eq!(updated.wallet.details.address.as_deref(), Some("TNEW"));
    }

    #[test]
    fn update_diffs_against_the_replaced_row() {
        let mut repo = MockRepository::new();
        expect_catalog(&mut repo);
        // Another edit landed between any earlier read and this write.
        repo.expect_update_wallet().returning(|id, _, updates| {
            let mut replaced = stored_wallet(id.get());
            replaced.details.address = Some("TRACE".to_string());
            Ok(apply(replaced, updates))
        });
        repo.expect_create_wallet_event()
            .withf(|event| event.event_data["changes"][0]["old_value"] == "TRACE")
            .times(1)
            .returning(echo_event);

        assert!(update_wallet(&repo, &admin_user(), 3, form("TNEW")).is_ok());
    }

    #[test]
    fn update_without_critical_change_records_nothing() {
        let mut repo = MockRepository::new();
        expect_catalog(&mut repo);
        repo.expect_update_wallet()
            .returning(|id, _, updates| Ok(apply(stored_wallet(id.get()), updates)));
        repo.expect_create_wallet_event().times(0);

        // Only the label changes; blank username equals the stored `None`.
        let result = update_wallet(&repo, &admin_user(), 3, form("TOLD"));

        assert!(result.is_ok());
    }

    #[test]
    fn update_survives_event_write_failure() {
        let mut repo = MockRepository::new();
        expect_catalog(&mut repo);
        repo.expect_update_wallet()
            .returning(|id, _, updates| Ok(apply(stored_wallet(id.get()), updates)));
        repo.expect_create_wallet_event()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("locked".into())));

        assert!(update_wallet(&repo, &admin_user(), 3, form("TNEW")).is_ok());
    }

    #[test]
    fn update_of_foreign_wallet_is_not_found() {
        let mut repo = MockRepository::new();
        expect_catalog(&mut repo);
        repo.expect_update_wallet()
            .returning(|_, _, _| Err(RepositoryError::NotFound));
        repo.expect_create_wallet_event().times(0);

        let result = update_wallet(&repo, &admin_user(), 3, form("TNEW"));

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn delete_records_deleted_event() {
        let mut repo = MockRepository::new();
        repo.expect_get_wallet_by_id()
            .returning(|id, _| Ok(Some(stored_wallet(id.get()))));
        repo.expect_delete_wallet()
            .with(eq(WalletId::new(4).unwrap()))
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_create_wallet_event()
            .withf(|event| {
                event.event_type == WalletEventType::Deleted
                    && event.event_data["snapshot"][CriticalField::Address.as_str()] == "TOLD"
            })
            .times(1)
            .returning(echo_event);

        assert!(delete_wallet(&repo, &admin_user(), 4).is_ok());
    }

    #[test]
    fn events_of_unknown_wallet_are_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_wallet_by_id().returning(|_, _| Ok(None));

        let result = list_wallet_events(&repo, &viewer_user(), 8, ListParams::default());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn events_are_paginated() {
        let mut repo = MockRepository::new();
        repo.expect_get_wallet_by_id()
            .returning(|id, _| Ok(Some(stored_wallet(id.get()))));
        repo.expect_list_wallet_events()
            .withf(|query| query.pagination.skip == Some(0) && query.pagination.take == Some(5))
            .returning(|_| Ok((6, Vec::new())));

        let params = ListParams {
            page: Some(1),
            limit: Some(5),
        };
        let page = list_wallet_events(&repo, &viewer_user(), 8, params).unwrap();

        assert_eq!(page.pagination.total_pages, 2);
    }
}
