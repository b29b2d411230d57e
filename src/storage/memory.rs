// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory user store for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Document, Projection, StoreError, StoreResult, UserRecord, UserStore};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`. Later duplicates are rejected.
    pub async fn with_users(records: impl IntoIterator<Item = UserRecord>) -> StoreResult<Self> {
        let store = Self::new();
        for record in records {
            store.insert(record).await?;
        }
        Ok(store)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str, projection: &Projection) -> StoreResult<Option<Document>> {
        let users = self.users.read().await;
        users.get(id).map(|record| projection.apply(record)).transpose()
    }

    async fn insert(&self, record: UserRecord) -> StoreResult<()> {
        let mut users = self.users.write().await;

        if users.contains_key(&record.id) {
            return Err(StoreError::Duplicate {
                field: "_id",
                value: record.id,
            });
        }
        if users.values().any(|u| u.username == record.username) {
            return Err(StoreError::Duplicate {
                field: "username",
                value: record.username,
            });
        }
        if users.values().any(|u| u.email == record.email) {
            return Err(StoreError::Duplicate {
                field: "email",
                value: record.email,
            });
        }

        users.insert(record.id.clone(), record);
        Ok(())
    }
}
