// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! `protect_route` middleware for Axum.
//!
//! Wraps [`AuthGate`](super::AuthGate) for a router subtree:
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/users/me", get(users::get_current_user))
//!     .route_layer(axum::middleware::from_fn_with_state(state.clone(), protect_route));
//! ```
//!
//! On success the resolved identity is inserted into the request extensions
//! as [`CurrentUser`] and the inner service runs. On failure the error is
//! logged once and reported; the inner service never runs.

use axum::{
    extract::{OriginalUri, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use super::{cookie::session_token, AuthError, CurrentUser};
use crate::error::report_error;
use crate::state::AppState;

/// Authentication middleware function.
pub async fn protect_route(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = session_token(request.headers());

    match state.gate.authenticate(token.as_deref()).await {
        Ok(user) => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        Err(err) => {
            // Nested routers strip their prefix from `uri()`
            let path = request
                .extensions()
                .get::<OriginalUri>()
                .map(|uri| uri.0.path())
                .unwrap_or_else(|| request.uri().path());
            log_rejection(&err, request.method(), path);
            report_error(err)
        }
    }
}

/// Emit the single error record for a rejected request.
fn log_rejection(err: &AuthError, method: &Method, path: &str) {
    tracing::error!(
        error_code = err.error_code(),
        kind = ?err.kind(),
        status = err.status_code().as_u16(),
        %method,
        path,
        error = %err,
        "Error in protect_route middleware"
    );
}
