//! Business operations behind the HTTP handlers.
//!
//! Services are plain functions generic over the repository traits so they
//! can be exercised against mocks.

use thiserror::Error;
use validator::Validate;

use crate::forms::FormError;
use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;

pub mod catalog;
pub mod wallets;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    TypeConstraint(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

pub(crate) fn ensure_role(user: &AuthenticatedUser, role: &str) -> ServiceResult<()> {
    if user.has_role(role) {
        Ok(())
    } else {
        log::warn!("User {} lacks role `{role}`", user.email);
        Err(ServiceError::Unauthorized)
    }
}

pub(crate) fn validate_params<T: Validate>(params: &T) -> ServiceResult<()> {
    params.validate().map_err(|err| {
        log::error!("Failed to validate request parameters: {err}");
        ServiceError::Form(err.to_string())
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::types::{ActorEmail, HubId};
    use crate::models::auth::AuthenticatedUser;
    use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

    pub fn user_with_roles(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: ActorEmail::new("ops@example.com").unwrap(),
            hub_id: HubId::new(42).unwrap(),
            name: "Ops".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn admin_user() -> AuthenticatedUser {
        user_with_roles(&[SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE])
    }

    pub fn viewer_user() -> AuthenticatedUser {
        user_with_roles(&[SERVICE_ACCESS_ROLE])
    }
}
