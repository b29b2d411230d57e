// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User endpoints.

use axum::Json;

use crate::auth::CurrentUser;
use crate::models::UserIdentity;

/// Get the current authenticated user.
///
/// Returns the identity bound by the session gate. The password hash is
/// never part of it.
#[utoipa::path(
    get,
    path = "/v1/users/me",
    tag = "Users",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "User information", body = UserIdentity),
        (status = 401, description = "Unauthorized - missing or invalid session token"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Server misconfigured or internal error"),
    )
)]
pub async fn get_current_user(CurrentUser(user): CurrentUser) -> Json<UserIdentity> {
    Json(user)
}
