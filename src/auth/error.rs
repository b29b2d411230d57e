// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Message for a request without a session cookie.
pub const NO_TOKEN_MESSAGE: &str = "Unauthorized - No Token Provided";
/// Message for a token that fails verification or carries no subject.
pub const INVALID_TOKEN_MESSAGE: &str = "Unauthorized - Invalid Token";
/// Message for a process started without a signing secret.
pub const MISSING_SECRET_MESSAGE: &str = "JWT_SECRET is not defined";
/// Message for a verified token whose subject no longer exists.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Discrete failure class of an [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    Unauthorized,
    ServerMisconfigured,
    NotFound,
    Internal,
}

/// Authentication error type.
///
/// Every rejection of the session gate is one of these four kinds. The first
/// failing check decides the kind; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Missing token, bad or expired signature, or no subject claim
    #[error("{0}")]
    Unauthorized(String),
    /// Signing secret absent at runtime (operator fault)
    #[error("{0}")]
    ServerMisconfigured(String),
    /// Token is valid but its subject does not resolve to a user
    #[error("{0}")]
    NotFound(String),
    /// Unexpected failure (store unreachable, undecodable record, ...)
    #[error("{0}")]
    Internal(String),
}

impl AuthError {
    pub fn no_token() -> Self {
        AuthError::Unauthorized(NO_TOKEN_MESSAGE.to_string())
    }

    pub fn invalid_token() -> Self {
        AuthError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
    }

    pub fn missing_secret() -> Self {
        AuthError::ServerMisconfigured(MISSING_SECRET_MESSAGE.to_string())
    }

    pub fn user_not_found() -> Self {
        AuthError::NotFound(USER_NOT_FOUND_MESSAGE.to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AuthError::Internal(message.into())
    }

    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::Unauthorized(_) => AuthErrorKind::Unauthorized,
            AuthError::ServerMisconfigured(_) => AuthErrorKind::ServerMisconfigured,
            AuthError::NotFound(_) => AuthErrorKind::NotFound,
            AuthError::Internal(_) => AuthErrorKind::Internal,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            AuthError::Unauthorized(msg)
            | AuthError::ServerMisconfigured(msg)
            | AuthError::NotFound(msg)
            | AuthError::Internal(msg) => msg,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Unauthorized(_) => "unauthorized",
            AuthError::ServerMisconfigured(_) => "server_misconfigured",
            AuthError::NotFound(_) => "not_found",
            AuthError::Internal(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AuthError::NotFound(_) => StatusCode::NOT_FOUND,
            AuthError::ServerMisconfigured(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
