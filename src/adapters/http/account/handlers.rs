//! HTTP handlers for account endpoints.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::account::{
    RequestResetCommand, ResetPasswordCommand, SigninCommand, SignupCommand,
    UpdatePermissionsCommand,
};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};

use super::super::error::ApiError;
use super::super::middleware::OptionalIdentity;
use super::super::session_cookie::{clear_cookie, issue_cookie};
use super::super::state::AppState;
use super::dto::{
    MessageResponse, RequestResetRequest, ResetPasswordRequest, SigninRequest, SignupRequest,
    UpdatePermissionsRequest, UserResponse,
};

/// Issues a session for `user_id` and attaches it to a JSON response.
fn with_session(
    state: &AppState,
    user_id: &UserId,
    status: StatusCode,
    body: UserResponse,
) -> Result<Response, ApiError> {
    let token = state
        .session_tokens
        .issue(user_id)
        .map_err(|e| ApiError(DomainError::new(ErrorCode::InternalError, e.to_string())))?;
    let cookie = issue_cookie(&state.cookie, &token);
    Ok((status, [(SET_COOKIE, cookie)], Json(body)).into_response())
}

/// POST /api/signup - Create an account and start a session
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Response, ApiError> {
    let user = state
        .signup
        .handle(SignupCommand {
            email: req.email,
            name: req.name,
            password: req.password,
            confirm_password: req.confirm_password,
        })
        .await?;

    let user_id = user.id;
    with_session(&state, &user_id, StatusCode::CREATED, user.into())
}

/// POST /api/signin - Verify credentials and start a session
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> Result<Response, ApiError> {
    let user = state
        .signin
        .handle(SigninCommand { email: req.email, password: req.password })
        .await?;

    let user_id = user.id;
    with_session(&state, &user_id, StatusCode::OK, user.into())
}

/// POST /api/signout - Clear the session cookie
pub async fn signout(State(state): State<AppState>) -> Response {
    let cookie = clear_cookie(&state.cookie);
    (
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(MessageResponse { message: "Goodbye".into() }),
    )
        .into_response()
}

/// GET /api/me - The requester's own account, or null when anonymous
pub async fn me(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response, ApiError> {
    let Some(identity) = identity else {
        return Ok(Json(serde_json::Value::Null).into_response());
    };

    let user = state.users.find_by_id(&identity.user_id).await?;
    match user {
        Some(user) => Ok(Json(UserResponse::from(user)).into_response()),
        None => Ok(Json(serde_json::Value::Null).into_response()),
    }
}

/// POST /api/request-reset - Issue a reset token and email the link
pub async fn request_reset(
    State(state): State<AppState>,
    Json(req): Json<RequestResetRequest>,
) -> Result<Response, ApiError> {
    let result = state
        .request_reset
        .handle(RequestResetCommand { email: req.email })
        .await?;

    // Delivery failure is reported in the message, never as a failure of
    // the request itself; the token is already persisted.
    let message = if result.delivered {
        "Thanks! Check your email.".to_string()
    } else {
        "Reset token issued, but the email could not be sent.".to_string()
    };
    Ok(Json(MessageResponse { message }).into_response())
}

/// POST /api/reset-password - Consume a reset token and start a session
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Response, ApiError> {
    let user = state
        .reset_password
        .handle(ResetPasswordCommand {
            token: req.reset_token,
            password: req.password,
            confirm_password: req.confirm_password,
        })
        .await?;

    let user_id = user.id;
    with_session(&state, &user_id, StatusCode::OK, user.into())
}

/// POST /api/permissions - Replace a user's permission set (admin)
pub async fn update_permissions(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Json(req): Json<UpdatePermissionsRequest>,
) -> Result<Response, ApiError> {
    let user = state
        .update_permissions
        .handle(
            identity.as_ref(),
            UpdatePermissionsCommand {
                user_id: req.user_id,
                permissions: req.permissions,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(user)).into_response())
}

/// GET /api/users - Every account (admin)
pub async fn list_users(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response, ApiError> {
    let users = state.list_users.handle(identity.as_ref()).await?;
    let body: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}
