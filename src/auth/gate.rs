// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The session gate: token verification and identity resolution.
//!
//! ## Checks
//!
//! Evaluated in order, the first failure decides the outcome:
//!
//! 1. session token present → else `Unauthorized` (no token)
//! 2. signing secret configured → else `ServerMisconfigured`
//! 3. signature and expiry verify, claims decode → else `Unauthorized` (invalid token)
//! 4. `userId` claim non-empty → else `Unauthorized` (invalid token)
//! 5. user exists (password projected out) → else `NotFound`
//!
//! The store is read once, and only after step 4. Store failures become
//! `Internal`.

use std::sync::Arc;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::{AuthError, SessionClaims};
use crate::models::UserIdentity;
use crate::storage::{Projection, UserStore};

/// Verify a session token against `secret` and decode its claims.
///
/// Signature, expiry (when `exp` is present, no leeway) and claim decoding
/// happen in one step; a token failing any of them yields no claims.
pub fn verify_token(token: &str, secret: &str) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.leeway = 0;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<SessionClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::invalid_token())
}

/// Gate in front of protected routes.
///
/// Holds the signing secret (read-only for the process lifetime) and the
/// identity store. Carries no per-request state.
pub struct AuthGate {
    secret: Option<String>,
    store: Arc<dyn UserStore>,
}

impl AuthGate {
    /// Create a gate. An empty secret counts as unset.
    pub fn new(secret: Option<String>, store: Arc<dyn UserStore>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
            store,
        }
    }

    /// Whether a signing secret is configured.
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Authenticate a request from its session token.
    pub async fn authenticate(&self, token: Option<&str>) -> Result<UserIdentity, AuthError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(AuthError::no_token)?;

        let secret = self.secret.as_deref().ok_or_else(AuthError::missing_secret)?;

        let claims = verify_token(token, secret)?;
        let user_id = claims.subject().ok_or_else(AuthError::invalid_token)?;

        let document = self
            .store
            .find_by_id(user_id, &Projection::without_credentials())
            .await
            .map_err(|e| AuthError::internal(e.to_string()))?
            .ok_or_else(AuthError::user_not_found)?;

        serde_json::from_value(serde_json::Value::Object(document))
            .map_err(|e| AuthError::internal(format!("Malformed user record: {e}")))
    }
}
