// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # User Storage Module
//!
//! The identity store the auth gate reads from. The gate only needs one
//! operation, lookup by id with a field projection, expressed by the
//! [`UserStore`] trait.
//!
//! ## Implementations
//!
//! - [`UserDatabase`]: embedded redb database, used by the server binary.
//!   Ids are UUIDs; usernames and emails are unique via index tables.
//! - [`InMemoryUserStore`]: hash map behind an `RwLock`, used by tests and
//!   local development.
//!
//! ## Table Layout (redb)
//!
//! ```text
//! users      _id      → UserRecord (JSON bytes)
//! usernames  username → _id
//! emails     email    → _id
//! ```

pub mod memory;
pub mod projection;
pub mod user_database;

use async_trait::async_trait;

pub use crate::models::UserRecord;
pub use memory::InMemoryUserStore;
pub use projection::{Document, Projection, UserField};
pub use user_database::UserDatabase;

/// Error type for user storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("redb error: {0}")]
    Redb(#[from] redb::Error),

    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid user id: {0}")]
    InvalidId(String),

    #[error("duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed user store with field projection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by id, returning the projected document.
    ///
    /// `Ok(None)` means no such user. Any other failure is an `Err`.
    async fn find_by_id(&self, id: &str, projection: &Projection) -> StoreResult<Option<Document>>;

    /// Insert a new user. Fails if the id, username or email is taken.
    async fn insert(&self, record: UserRecord) -> StoreResult<()>;
}
