use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::ListParams;
use crate::dto::wallets::WalletListParams;
use crate::forms::wallets::WalletForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::wallets as wallets_service;

#[get("/wallets")]
pub async fn list_wallets(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<WalletListParams>,
) -> impl Responder {
    match wallets_service::list_wallets(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[post("/wallets")]
pub async fn create_wallet(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<WalletForm>,
) -> impl Responder {
    match wallets_service::create_wallet(repo.get_ref(), &user, form) {
        Ok(wallet) => HttpResponse::Created().json(wallet),
        Err(err) => service_error_response(err),
    }
}

#[get("/wallets/{wallet_id}")]
pub async fn show_wallet(
    wallet_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match wallets_service::get_wallet(repo.get_ref(), &user, wallet_id.into_inner()) {
        Ok(wallet) => HttpResponse::Ok().json(wallet),
        Err(err) => service_error_response(err),
    }
}

#[put("/wallets/{wallet_id}")]
pub async fn update_wallet(
    wallet_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<WalletForm>,
) -> impl Responder {
    match wallets_service::update_wallet(repo.get_ref(), &user, wallet_id.into_inner(), form) {
        Ok(wallet) => HttpResponse::Ok().json(wallet),
        Err(err) => service_error_response(err),
    }
}

#[delete("/wallets/{wallet_id}")]
pub async fn delete_wallet(
    wallet_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match wallets_service::delete_wallet(repo.get_ref(), &user, wallet_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}

#[get("/wallets/{wallet_id}/events")]
pub async fn wallet_events(
    wallet_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match wallets_service::list_wallet_events(
        repo.get_ref(),
        &user,
        wallet_id.into_inner(),
        params.into_inner(),
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}
