// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Cookie-based session authentication for protected routes.
//!
//! ## Auth Flow
//!
//! 1. The client sends the session JWT in the `jwt-netflix` cookie
//! 2. The server:
//!    - Verifies the HMAC signature (and `exp`, when present) against `JWT_SECRET`
//!    - Extracts `userId` from the claims
//!    - Loads the user with the password field projected out
//! 3. The identity is bound to the request as [`CurrentUser`]
//!
//! Token issuance lives elsewhere; this module only consumes tokens.

pub mod claims;
pub mod cookie;
pub mod error;
pub mod extractor;
pub mod gate;
pub mod middleware;

pub use claims::SessionClaims;
pub use cookie::SESSION_COOKIE;
pub use error::{AuthError, AuthErrorKind};
pub use extractor::CurrentUser;
pub use gate::AuthGate;
pub use middleware::protect_route;
