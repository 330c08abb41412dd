//! Local books endpoints for integration tests

#![allow(dead_code)]

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const BOOKS_PATH: &str = "/api/books";

/// Serve a router on an ephemeral port and return the books URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    books_url(addr)
}

pub fn books_url(addr: SocketAddr) -> String {
    format!("http://{}{}", addr, BOOKS_PATH)
}

/// An endpoint that answers with a JSON body and counts its hits
pub async fn serve_json(body: Value) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        BOOKS_PATH,
        get(move || {
            let body = body.clone();
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(body)
            }
        }),
    );
    (serve(router).await, hits)
}

/// An endpoint that answers with a bare status code
pub async fn serve_status(status: StatusCode) -> String {
    serve(Router::new().route(BOOKS_PATH, get(move || async move { status }))).await
}

/// An endpoint that answers 200 with a body that is not a list of books
pub async fn serve_text(body: &'static str) -> String {
    serve(Router::new().route(BOOKS_PATH, get(move || async move { body }))).await
}

/// A URL nothing listens on
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    books_url(addr)
}
