//! Session-resolution middleware.
//!
//! Resolves the request's identity exactly once: read the session cookie,
//! verify the token, load the account and its current permission set, and
//! inject an `Identity` into the request extensions.
//!
//! Every failure short of a store outage degrades to anonymous - a missing
//! cookie, a bad signature, an unknown user id. Operations that require an
//! identity fail later at the policy layer with `Unauthenticated`; the
//! session layer never turns a bad token into a request failure.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::domain::foundation::Identity;

use super::super::session_cookie::token_from_headers;
use super::super::state::AppState;

/// Resolves the session cookie into an `Identity` extension.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(identity) = resolve_identity(&state, request.headers()).await {
        request.extensions_mut().insert(identity);
    }
    next.run(request).await
}

async fn resolve_identity(state: &AppState, headers: &HeaderMap) -> Option<Identity> {
    let token = token_from_headers(headers, &state.cookie.name)?;

    let user_id = match state.session_tokens.verify(&token) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::debug!(error = %e, "Session token rejected, continuing anonymous");
            return None;
        }
    };

    match state.users.find_by_id(&user_id).await {
        Ok(Some(user)) => Some(Identity::new(user.id, user.email, user.permissions)),
        Ok(None) => {
            tracing::debug!(%user_id, "Session token for unknown user, continuing anonymous");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "User lookup failed during session resolution");
            None
        }
    }
}



/// Extractor for the resolved identity; `None` means anonymous.
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> axum::extract::FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let identity = parts.extensions.get::<Identity>().cloned();
            Ok(OptionalIdentity(identity))
        })
    }
}
