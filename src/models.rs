// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # User Data Models
//!
//! Two shapes of the same account:
//!
//! - [`UserRecord`] is the stored document, including the hashed password.
//!   It never leaves the storage layer through the API.
//! - [`UserIdentity`] is what the auth gate binds to a request. It has no
//!   credential field, so a bound identity cannot carry the password hash
//!   whatever the store returns.
//!
//! Wire names follow the document store convention (`_id`, camelCase).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored user account document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique identifier (store key)
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique display name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Password hash. Confidential: projected out of every auth read.
    pub password: String,
    /// Avatar image URL
    #[serde(default)]
    pub image: String,
    /// Ordered search history, oldest first
    #[serde(default, rename = "searchHistory")]
    pub search_history: Vec<String>,
}

impl UserRecord {
    /// Create a record with an empty image and search history.
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            password: password_hash.into(),
            image: String::new(),
            search_history: Vec::new(),
        }
    }
}

/// Authenticated user identity bound to a request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserIdentity {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub username: String,
    /// Email address
    pub email: String,
    /// Avatar image URL (empty when unset)
    #[serde(default)]
    pub image: String,
    /// Ordered search history
    #[serde(default, rename = "searchHistory")]
    pub search_history: Vec<String>,
}
