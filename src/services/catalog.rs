//! Currencies, networks and network types of a hub.

use crate::domain::currency::Currency;
use crate::domain::network::{Network, NetworkType};
use crate::domain::types::NetworkId;
use crate::dto::ListParams;
use crate::dto::catalog::NetworkWithTypes;
use crate::forms::catalog::{CurrencyForm, NetworkForm, NetworkTypeForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    CatalogListQuery, CurrencyReader, CurrencyWriter, NetworkReader, NetworkWriter,
};
use crate::services::{ServiceError, ServiceResult, ensure_role, validate_params};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn hub_network<R>(repo: &R, user: &AuthenticatedUser, network_id: i32) -> ServiceResult<Network>
where
    R: NetworkReader + ?Sized,
{
    let network_id = NetworkId::new(network_id).map_err(|_| ServiceError::NotFound)?;
    repo.get_network_by_id(network_id, user.hub_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_currencies<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<Paginated<Currency>>
where
    R: CurrencyReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;
    validate_params(&params)?;

    let request = params.pagination();
    let (total, currencies) = repo
        .list_currencies(CatalogListQuery::new(user.hub_id).paginate(request))
        .map_err(|err| {
            log::error!("Failed to list currencies: {err}");
            err
        })?;

    Ok(Paginated::new(currencies, total, request))
}

pub fn create_currency<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CurrencyForm,
) -> ServiceResult<Currency>
where
    R: CurrencyWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let new_currency = form.to_new_currency(user.hub_id)?;
    let currency = repo.create_currency(&new_currency).map_err(|err| {
        log::error!("Failed to create currency {}: {err}", new_currency.code);
        err
    })?;

    log::info!("Currency {} added by {}", currency.code, user.email);
    Ok(currency)
}

pub fn list_networks<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ListParams,
) -> ServiceResult<Paginated<Network>>
where
    R: NetworkReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;
    validate_params(&params)?;

    let request = params.pagination();
    let (total, networks) = repo
        .list_networks(CatalogListQuery::new(user.hub_id).paginate(request))
        .map_err(|err| {
            log::error!("Failed to list networks: {err}");
            err
        })?;

    Ok(Paginated::new(networks, total, request))
}

/// Loads a network of the user's hub along with its types.
pub fn get_network<R>(
    repo: &R,
    user: &AuthenticatedUser,
    network_id: i32,
) -> ServiceResult<NetworkWithTypes>
where
    R: NetworkReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let network = hub_network(repo, user, network_id)?;
    let types = repo.list_network_types(network.id)?;

    Ok(NetworkWithTypes { network, types })
}

pub fn create_network<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: NetworkForm,
) -> ServiceResult<Network>
where
    R: NetworkWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let new_network = form.to_new_network(user.hub_id)?;
    let network = repo.create_network(&new_network).map_err(|err| {
        log::error!("Failed to create network {}: {err}", new_network.code);
        err
    })?;

    log::info!("Network {} added by {}", network.code, user.email);
    Ok(network)
}

pub fn list_network_types<R>(
    repo: &R,
    user: &AuthenticatedUser,
    network_id: i32,
) -> ServiceResult<Vec<NetworkType>>
where
    R: NetworkReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let network = hub_network(repo, user, network_id)?;
    Ok(repo.list_network_types(network.id)?)
}

pub fn create_network_type<R>(
    repo: &R,
    user: &AuthenticatedUser,
    network_id: i32,
    form: NetworkTypeForm,
) -> ServiceResult<NetworkType>
where
    R: NetworkReader + NetworkWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let network = hub_network(repo, user, network_id)?;
    let new_type = form.to_new_network_type(network.id)?;

    repo.create_network_type(&new_type).map_err(|err| {
        log::error!("Failed to add type to network {}: {err}", network.id);
        err.into()
    })
}
