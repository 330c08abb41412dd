//! Integration tests for the Livraria CLI

use assert_cmd::Command;
use axum::{http::StatusCode, routing::get, Json, Router};
use predicates::prelude::*;
use serde_json::{json, Value};

/// Serve a router on an ephemeral port and return the books URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/books", addr)
}

async fn serve_books(body: Value) -> String {
    serve(Router::new().route(
        "/api/books",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    ))
    .await
}

/// Run the binary off the async runtime so the test server keeps serving
async fn run(args: Vec<String>) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("livraria")
            .unwrap()
            .env_remove("LIVRARIA_ENDPOINT")
            .env_remove("RUST_LOG")
            .args(&args)
            .assert()
    })
    .await
    .unwrap()
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("livraria").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("livraria").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("livraria"));
}

#[test]
fn test_width_too_small() {
    let mut cmd = Command::cargo_bin("livraria").unwrap();
    cmd.args(["--width", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("width must be at least 30"));
}

#[test]
fn test_invalid_endpoint() {
    let mut cmd = Command::cargo_bin("livraria").unwrap();
    cmd.args(["--endpoint", "potterhead-api.vercel.app/api/books"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to set up books endpoint"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_renders_grid() {
    let url = serve_books(json!([
        {"id": 1, "title": "Harry Potter and the Philosopher's Stone"},
        {"id": 2, "title": "Unknown Title"}
    ]))
    .await;

    run(vec!["--endpoint".into(), url])
        .await
        .success()
        .stdout(predicate::str::contains("Livraria do Harry Potter"))
        .stdout(predicate::str::contains("Harry Potter and the"))
        .stdout(predicate::str::contains("R$ 39,90"))
        .stdout(predicate::str::contains("Avaliação: 4.8"))
        .stdout(predicate::str::contains("Unknown Title"))
        .stdout(predicate::str::contains("Preço não disponível"))
        .stdout(predicate::str::contains("Avaliação: Não avaliado"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_json_output() {
    let url = serve_books(json!([
        {"id": 7, "title": "Harry Potter and the Deathly Hallows"},
        {"id": 2, "title": "Unknown Title"}
    ]))
    .await;

    let assert = run(vec!["--json".into(), "--endpoint".into(), url])
        .await
        .success();
    let output: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(output["title"], "Livraria do Harry Potter");
    let books = output["books"].as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["key"], "7");
    assert_eq!(books[0]["rating"], "4.9");
    assert_eq!(
        books[0]["synopsis"],
        "A batalha final entre Harry e Voldemort."
    );
    assert_eq!(books[1]["key"], "2");
    assert_eq!(books[1]["image"], "URL_PADRAO");
    assert_eq!(books[1]["category"], "Categoria não disponível");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_empty_catalog() {
    let url = serve_books(json!([])).await;

    run(vec!["--endpoint".into(), url])
        .await
        .success()
        .stdout(predicate::str::contains("Livraria do Harry Potter"))
        .stdout(predicate::str::contains("Capa:").not());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_server_error() {
    let url = serve(Router::new().route(
        "/api/books",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    run(vec!["--endpoint".into(), url])
        .await
        .code(1)
        .stdout(predicate::str::diff(
            "Error: Network response was not ok\n",
        ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_server_error_json() {
    let url = serve(Router::new().route(
        "/api/books",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;

    let assert = run(vec!["--json".into(), "--endpoint".into(), url])
        .await
        .code(1);
    let output: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(output["error"], "Network response was not ok");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/books", listener.local_addr().unwrap());
    drop(listener);

    run(vec!["--endpoint".into(), url])
        .await
        .code(1)
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("Livraria do Harry Potter").not());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_endpoint_from_env() {
    let url = serve_books(json!([
        {"id": 3, "title": "Harry Potter and the Prisoner of Azkaban"}
    ]))
    .await;

    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("livraria")
            .unwrap()
            .env("LIVRARIA_ENDPOINT", url)
            .args(["--width", "200"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Harry descobre mais sobre seu passado."));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_rust_log_shows_lookup_misses() {
    let url = serve_books(json!([{"id": 2, "title": "Unknown Title"}])).await;

    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("livraria")
            .unwrap()
            .env("RUST_LOG", "livraria_core=trace")
            .args(["--endpoint", url.as_str()])
            .assert()
            .success()
            .stderr(predicate::str::contains("No cover image for title"))
            .stderr(predicate::str::contains("No detail entry for title"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_lookup_misses_are_silent_by_default() {
    let url = serve_books(json!([{"id": 2, "title": "Unknown Title"}])).await;

    run(vec!["--verbose".into(), "--endpoint".into(), url])
        .await
        .success()
        .stderr(predicate::str::contains("No cover image for title").not());
}
