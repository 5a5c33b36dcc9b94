use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::ListParams;
use crate::forms::catalog::{CurrencyForm, NetworkForm, NetworkTypeForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::catalog as catalog_service;

#[get("/currencies")]
pub async fn list_currencies(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match catalog_service::list_currencies(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[post("/currencies")]
pub async fn create_currency(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CurrencyForm>,
) -> impl Responder {
    match catalog_service::create_currency(repo.get_ref(), &user, form) {
        Ok(currency) => HttpResponse::Created().json(currency),
        Err(err) => service_error_response(err),
    }
}

#[get("/networks")]
pub async fn list_networks(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match catalog_service::list_networks(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[post("/networks")]
pub async fn create_network(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NetworkForm>,
) -> impl Responder {
    match catalog_service::create_network(repo.get_ref(), &user, form) {
        Ok(network) => HttpResponse::Created().json(network),
        Err(err) => service_error_response(err),
    }
}

#[get("/networks/{network_id}")]
pub async fn show_network(
    network_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::get_network(repo.get_ref(), &user, network_id.into_inner()) {
        Ok(network) => HttpResponse::Ok().json(network),
        Err(err) => service_error_response(err),
    }
}

#[get("/networks/{network_id}/types")]
pub async fn list_network_types(
    network_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::list_network_types(repo.get_ref(), &user, network_id.into_inner()) {
        Ok(types) => HttpResponse::Ok().json(types),
        Err(err) => service_error_response(err),
    }
}

#[post("/networks/{network_id}/types")]
pub async fn create_network_type(
    network_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NetworkTypeForm>,
) -> impl Responder {
    match catalog_service::create_network_type(
        repo.get_ref(),
        &user,
        network_id.into_inner(),
        form,
    ) {
        Ok(network_type) => HttpResponse::Created().json(network_type),
        Err(err) => service_error_response(err),
    }
}
