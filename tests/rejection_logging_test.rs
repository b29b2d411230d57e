// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Each rejected request produces exactly one error-level log record.

use std::io;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

use session_gate::{
    api::router,
    models::UserRecord,
    state::AppState,
    storage::{InMemoryUserStore, UserDatabase},
};

const SECRET: &str = "logging-secret";

/// Shared in-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Drain captured records, one JSON object per line.
    fn take_records(&self) -> Vec<Value> {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn session_for(user_id: &str) -> String {
    encode(
        &Header::default(),
        &json!({ "userId": user_id }),
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

async fn get_me(app: Router, cookie: Option<String>) -> StatusCode {
    let mut builder = Request::builder().uri("/v1/users/me");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

fn error_records(records: &[Value]) -> Vec<&Value> {
    records.iter().filter(|r| r["level"] == "ERROR").collect()
}

#[tokio::test]
async fn every_rejection_kind_logs_one_error_record() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let memory = InMemoryUserStore::with_users([UserRecord::new("u2", "a", "a@x.com", "hash")])
        .await
        .unwrap();
    let with_secret = router(AppState::new(Some(SECRET.to_string()), Arc::new(memory)));
    let without_secret = router(AppState::new(None, Arc::new(InMemoryUserStore::new())));

    // Non-UUID ids are a store fault in the redb store.
    let dir = tempfile::tempdir().unwrap();
    let db = UserDatabase::open(&dir.path().join("users.redb")).unwrap();
    let redb_backed = router(AppState::new(Some(SECRET.to_string()), Arc::new(db)));

    let cases = [
        (with_secret.clone(), None, StatusCode::UNAUTHORIZED, "unauthorized"),
        (
            without_secret,
            Some(format!("jwt-netflix={}", session_for("u2"))),
            StatusCode::INTERNAL_SERVER_ERROR,
            "server_misconfigured",
        ),
        (
            with_secret.clone(),
            Some(format!("jwt-netflix={}", session_for("u1"))),
            StatusCode::NOT_FOUND,
            "not_found",
        ),
        (
            redb_backed,
            Some(format!("jwt-netflix={}", session_for("u2"))),
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
        ),
    ];

    for (app, cookie, expected_status, expected_code) in cases {
        let status = get_me(app, cookie).await;
        assert_eq!(status, expected_status, "{expected_code}");

        let records = logs.take_records();
        let errors = error_records(&records);
        assert_eq!(errors.len(), 1, "{expected_code}: {records:#?}");
        assert_eq!(errors[0]["fields"]["error_code"], expected_code);
        assert_eq!(errors[0]["fields"]["path"], "/v1/users/me");
    }

    // Success logs no error at all.
    let status = get_me(with_secret, Some(format!("jwt-netflix={}", session_for("u2")))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(error_records(&logs.take_records()).is_empty());
}
