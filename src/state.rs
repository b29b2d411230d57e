// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::AuthGate;
use crate::storage::{InMemoryUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<AuthGate>,
}

impl AppState {
    pub fn new(jwt_secret: Option<String>, users: Arc<dyn UserStore>) -> Self {
        Self {
            gate: Arc::new(AuthGate::new(jwt_secret, users)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None, Arc::new(InMemoryUserStore::new()))
    }
}
