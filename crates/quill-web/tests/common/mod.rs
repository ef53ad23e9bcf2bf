//! Shared harness for API tests
//!
//! Every [`TestApp`] gets its own isolated in-memory SurrealDB database,
//! already reset to the seed notes, and drives the router in-process.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use quill_core::test_support::{notes_in_db, reset_and_seed};
use quill_core::{Note, NoteStore};
use quill_surrealdb::SurrealNoteStore;
use quill_web::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Generous bound for database setup, which can be slow on cold starts
const SETUP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestApp {
    pub store: Arc<dyn NoteStore>,
    pub seeded: Vec<Note>,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = tokio::time::timeout(SETUP_TIMEOUT, SurrealNoteStore::isolated_memory())
            .await
            .expect("database setup timed out")
            .expect("failed to open database");
        Self::with_store(Arc::new(store)).await
    }

    pub async fn with_store(store: Arc<dyn NoteStore>) -> Self {
        let seeded = reset_and_seed(store.as_ref()).await.unwrap();
        let router = build_router(AppState::from_arc(Arc::clone(&store)));
        Self {
            store,
            seeded,
            router,
        }
    }

    pub async fn notes_in_db(&self) -> Vec<Note> {
        notes_in_db(self.store.as_ref()).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(text) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(text)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
