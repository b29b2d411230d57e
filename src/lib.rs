// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session Gate - cookie JWT route protection
//!
//! Verifies the signed session cookie on protected routes, resolves the
//! token subject to a stored user, and binds that identity to the request.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Session token verification and the `protect_route` gate
//! - `config` - Environment configuration
//! - `storage` - User store (redb, in-memory)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
