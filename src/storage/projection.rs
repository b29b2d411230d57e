// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Field-level projection for user documents.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::{StoreResult, UserRecord};

/// A projected user document: a JSON object with excluded fields removed.
pub type Document = Map<String, Value>;

/// Fields of a stored user document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Id,
    Username,
    Email,
    Password,
    Image,
    SearchHistory,
}

impl UserField {
    /// Document key of this field.
    pub fn key(&self) -> &'static str {
        match self {
            UserField::Id => "_id",
            UserField::Username => "username",
            UserField::Email => "email",
            UserField::Password => "password",
            UserField::Image => "image",
            UserField::SearchHistory => "searchHistory",
        }
    }
}

/// Set of fields to leave out of a read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    exclude: BTreeSet<UserField>,
}

impl Projection {
    /// Return every field.
    pub fn all() -> Self {
        Self::default()
    }

    /// Exclude the given fields.
    pub fn excluding(fields: &[UserField]) -> Self {
        Self {
            exclude: fields.iter().copied().collect(),
        }
    }

    /// Exclude the password hash.
    pub fn without_credentials() -> Self {
        Self::excluding(&[UserField::Password])
    }

    /// Serialize a record and strip the excluded keys.
    pub fn apply(&self, record: &UserRecord) -> StoreResult<Document> {
        let mut doc = match serde_json::to_value(record)? {
            Value::Object(map) => map,
            // UserRecord is a struct, it always serializes to an object
            _ => Map::new(),
        };
        for field in &self.exclude {
            doc.remove(field.key());
        }
        Ok(doc)
    }
}
