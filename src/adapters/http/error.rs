//! Error mapping from the domain taxonomy to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::order::CheckoutError;
use crate::domain::user::AccountError;

/// JSON error body returned for every failed operation.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Wrapper that renders a `DomainError` as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::PaymentDeclined | ErrorCode::PaymentFailed => StatusCode::PAYMENT_REQUIRED,
        ErrorCode::EmailFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::InconsistentState
        | ErrorCode::DatabaseError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code);

        // Reconciliation cases and plain server faults are logged here so
        // every transport path reports them uniformly.
        if self.0.code == ErrorCode::InconsistentState {
            tracing::error!(
                code = %self.0.code,
                details = ?self.0.details,
                "{}", self.0.message
            );
        } else if status.is_server_error() {
            tracing::error!(code = %self.0.code, "{}", self.0.message);
        }

        let body = ErrorResponse {
            error: self.0.message,
            code: self.0.code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        ApiError(err.into())
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_failures_map_to_401_and_403() {
        assert_eq!(status_for(ErrorCode::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorCode::Forbidden), StatusCode::FORBIDDEN);
    }

    #[test]
    fn payment_failures_map_to_402() {
        assert_eq!(status_for(ErrorCode::PaymentDeclined), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(status_for(ErrorCode::PaymentFailed), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn inconsistent_state_is_a_server_error() {
        assert_eq!(
            status_for(ErrorCode::InconsistentState),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_body_carries_code_and_message() {
        let err = ApiError(DomainError::new(ErrorCode::NotFound, "Order not found"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
