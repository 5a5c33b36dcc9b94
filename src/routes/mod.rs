//! JSON handlers mounted under `/api/v1`.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod catalog;
pub mod wallets;

/// Maps a service failure onto an HTTP response with a JSON error body.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Forbidden().json(json!({ "error": "insufficient role" }))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": "not found" })),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(json!({ "error": message }))
        }
        err => {
            log::error!("Request failed: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal error" }))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;
    use crate::repository::errors::RepositoryError;

    #[test]
    fn errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Unauthorized, StatusCode::FORBIDDEN),
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (ServiceError::Form("bad".into()), StatusCode::BAD_REQUEST),
            (
                ServiceError::TypeConstraint("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (ServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (
                ServiceError::Repository(RepositoryError::DatabaseError("x".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(service_error_response(err).status(), status);
        }
    }
}
