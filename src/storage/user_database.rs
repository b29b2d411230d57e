// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Embedded user database backed by redb (pure Rust, ACID).

use std::path::Path;

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use uuid::Uuid;

use super::{Document, Projection, StoreError, StoreResult, UserRecord, UserStore};

// =============================================================================
// Table Definitions
// =============================================================================

/// Primary table: _id → serialized UserRecord (JSON bytes).
const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Unique index: username → _id.
const USERNAMES: TableDefinition<&str, &str> = TableDefinition::new("usernames");

/// Unique index: email → _id.
const EMAILS: TableDefinition<&str, &str> = TableDefinition::new("emails");

/// Parse a user id into the store's native key form.
fn parse_id(id: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

// =============================================================================
// UserDatabase
// =============================================================================

/// Embedded ACID user database.
pub struct UserDatabase {
    db: Database,
}

impl UserDatabase {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Database::create(path)?;

        // Pre-create all tables so later read transactions don't fail
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(USERS)?;
            let _ = write_txn.open_table(USERNAMES)?;
            let _ = write_txn.open_table(EMAILS)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Read the full stored record.
    pub fn get(&self, id: &str) -> StoreResult<Option<UserRecord>> {
        let key = parse_id(id)?.hyphenated().to_string();
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(USERS)?;
        match table.get(key.as_str())? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Insert a record and its unique index entries in one transaction.
    pub fn create(&self, record: &UserRecord) -> StoreResult<()> {
        let key = parse_id(&record.id)?.hyphenated().to_string();
        let json = serde_json::to_vec(record)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut users = write_txn.open_table(USERS)?;
            if users.get(key.as_str())?.is_some() {
                return Err(StoreError::Duplicate {
                    field: "_id",
                    value: record.id.clone(),
                });
            }

            let mut usernames = write_txn.open_table(USERNAMES)?;
            if usernames.get(record.username.as_str())?.is_some() {
                return Err(StoreError::Duplicate {
                    field: "username",
                    value: record.username.clone(),
                });
            }

            let mut emails = write_txn.open_table(EMAILS)?;
            if emails.get(record.email.as_str())?.is_some() {
                return Err(StoreError::Duplicate {
                    field: "email",
                    value: record.email.clone(),
                });
            }

            users.insert(key.as_str(), json.as_slice())?;
            usernames.insert(record.username.as_str(), key.as_str())?;
            emails.insert(record.email.as_str(), key.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserDatabase {
    async fn find_by_id(&self, id: &str, projection: &Projection) -> StoreResult<Option<Document>> {
        self.get(id)?
            .map(|record| projection.apply(&record))
            .transpose()
    }

    async fn insert(&self, record: UserRecord) -> StoreResult<()> {
        self.create(&record)
    }
}
