//! Store failure mapping, health endpoints, and serving over a real socket.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::TestApp;
use quill_core::{InMemoryNoteStore, NewNote, Note, NoteId, NoteStore, StorageError, StorageResult};
use quill_web::{serve, AppState};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::{oneshot, RwLock};

/// Store whose backend can be switched off mid-test
#[derive(Default)]
struct FlakyStore {
    inner: InMemoryNoteStore,
    down: RwLock<bool>,
}

impl FlakyStore {
    async fn check(&self) -> StorageResult<()> {
        if *self.down.read().await {
            return Err(StorageError::unavailable("connection reset by peer at 10.0.0.7"));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteStore for FlakyStore {
    async fn list(&self) -> StorageResult<Vec<Note>> {
        self.check().await?;
        self.inner.list().await
    }

    async fn create(&self, note: NewNote) -> StorageResult<Note> {
        self.check().await?;
        self.inner.create(note).await
    }

    async fn find_by_id(&self, id: &NoteId) -> StorageResult<Option<Note>> {
        self.check().await?;
        self.inner.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: &NoteId) -> StorageResult<()> {
        self.check().await?;
        self.inner.delete_by_id(id).await
    }

    async fn clear(&self) -> StorageResult<()> {
        self.check().await?;
        self.inner.clear().await
    }
}

#[tokio::test]
async fn store_failure_is_generic_5xx_without_details() {
    let store = Arc::new(FlakyStore::default());
    let app = TestApp::with_store(store.clone()).await;
    *store.down.write().await = true;

    let responses = [
        app.get("/api/notes").await,
        app.get(&format!("/api/notes/{}", app.seeded[0].id)).await,
        app.post_json("/api/notes", &json!({ "content": "lost" })).await,
        app.delete(&format!("/api/notes/{}", app.seeded[0].id)).await,
    ];

    for response in responses {
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json(), json!({ "error": "internal server error" }));
    }
}

#[tokio::test]
async fn validation_happens_before_the_store_is_touched() {
    let store = Arc::new(FlakyStore::default());
    let app = TestApp::with_store(store.clone()).await;
    *store.down.write().await = true;

    let response = app.post_json("/api/notes", &json!({ "content": "" })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_and_readiness() {
    let store = Arc::new(FlakyStore::default());
    let app = TestApp::with_store(store.clone()).await;

    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.json()["status"], json!("healthy"));
    assert_eq!(app.get("/ready").await.status, StatusCode::OK);

    *store.down.write().await = true;

    assert_eq!(app.get("/health").await.status, StatusCode::OK);
    assert_eq!(
        app.get("/ready").await.status,
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn serves_over_tcp_and_shuts_down_gracefully() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve(
        listener,
        AppState::new(InMemoryNoteStore::new()),
        async move {
            stop_rx.await.ok();
        },
    ));

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /api/notes HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200"), "got: {raw}");
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(raw.ends_with("[]"));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
