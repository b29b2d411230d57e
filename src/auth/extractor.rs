// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the identity bound by `protect_route`.
//!
//! ```rust,ignore
//! async fn my_handler(CurrentUser(user): CurrentUser) -> impl IntoResponse {
//!     // user is UserIdentity
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::AuthError;
use crate::models::UserIdentity;

/// Identity of the authenticated user for the current request.
///
/// Inserted into the request extensions by the middleware, once per
/// successful authentication.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserIdentity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A handler mounted outside the gate is a routing fault, not a client one
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AuthError::internal("Route is not protected by the session gate"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    use crate::auth::AuthErrorKind;

    fn empty_parts() -> Parts {
        Request::builder().uri("/test").body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn reads_bound_identity() {
        let mut parts = empty_parts();
        let user = UserIdentity {
            id: "u2".to_string(),
            username: "a".to_string(),
            email: "a@x.com".to_string(),
            image: String::new(),
            search_history: vec!["dune".to_string()],
        };
        parts.extensions.insert(CurrentUser(user.clone()));

        let CurrentUser(found) = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn missing_binding_is_internal() {
        let mut parts = empty_parts();
        let err = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::Internal);
    }
}
