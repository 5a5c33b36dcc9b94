//! Bearer-token authentication for API handlers.

use std::future::{Ready, ready};

use actix_web::{
    FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized, http::header, web,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ActorEmail, HubId, TypeConstraintError};
use crate::models::config::ServerConfig;

/// Token payload issued by the auth service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub hub_id: i32,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

/// User resolved from a verified bearer token.
#[derive(Clone, Debug, Serialize)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: ActorEmail,
    pub hub_id: HubId,
    pub name: String,
    pub roles: Vec<String>,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = TypeConstraintError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            sub: claims.sub,
            email: ActorEmail::new(claims.email)?,
            hub_id: HubId::new(claims.hub_id)?,
            name: claims.name,
            roles: claims.roles,
        })
    }
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        check_role(role, &self.roles)
    }
}

pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Verifies an HS256 token and extracts its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::default()).map(|data| data.claims)
}

/// Signs claims with HS256.
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    let config = req
        .app_data::<web::Data<ServerConfig>>()
        .ok_or_else(|| ErrorUnauthorized("authentication is not configured"))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ErrorUnauthorized("missing bearer token"))?;

    let claims = decode_token(token.trim(), &config.secret).map_err(|err| {
        log::warn!("Rejected bearer token: {err}");
        ErrorUnauthorized("invalid token")
    })?;

    AuthenticatedUser::try_from(claims).map_err(|err| {
        log::warn!("Rejected token claims: {err}");
        ErrorUnauthorized("invalid token")
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
