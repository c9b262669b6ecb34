//! Reply mapping of the gateway client against a mocked gateway.

use std::io::Write;
use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use bhujal_client::api::{CONNECTION_FALLBACK, GatewayClient, UPLOAD_FALLBACK};

async fn spawn_gateway_mock(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn pdf_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"%PDF-1.4 fake").unwrap();
    file
}

#[tokio::test]
async fn send_wraps_the_reply_as_an_answer() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { Json(json!({ "reply": "42 metres" })) }),
    );
    let addr = spawn_gateway_mock(app).await;
    let client = GatewayClient::new(format!("http://{addr}"));

    let reply = client.send("depth?").await;

    assert!(!reply.is_fallback());
    assert_eq!(reply.text(), "42 metres");
}

#[tokio::test]
async fn send_with_no_reply_field_falls_back() {
    let app = Router::new().route("/api/chat", post(|| async { Json(json!({})) }));
    let addr = spawn_gateway_mock(app).await;
    let client = GatewayClient::new(format!("http://{addr}"));

    let reply = client.send("depth?").await;

    assert!(reply.is_fallback());
    assert_eq!(reply.text(), "No reply from server.");
}

#[tokio::test]
async fn send_to_an_unreachable_gateway_falls_back() {
    // Bind then drop to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GatewayClient::new(format!("http://{addr}"));
    let reply = client.send("anyone there?").await;

    assert!(reply.is_fallback());
    assert_eq!(reply.text(), CONNECTION_FALLBACK);
}

#[tokio::test]
async fn upload_with_a_snippet_reports_the_snippet() {
    let app = Router::new().route(
        "/api/upload-pdf",
        post(|| async { Json(json!({ "id": "abc", "snippet": "aquifer recharge fell" })) }),
    );
    let addr = spawn_gateway_mock(app).await;
    let client = GatewayClient::new(format!("http://{addr}"));

    let file = pdf_file();
    let reply = client.upload(file.path()).await;

    assert!(!reply.is_fallback());
    assert_eq!(
        reply.text(),
        "PDF processed. Snippet: aquifer recharge fell"
    );
}

#[tokio::test]
async fn upload_with_only_an_id_invites_followup_questions() {
    let app = Router::new().route(
        "/api/upload-pdf",
        post(|| async { Json(json!({ "id": "abc" })) }),
    );
    let addr = spawn_gateway_mock(app).await;
    let client = GatewayClient::new(format!("http://{addr}"));

    let file = pdf_file();
    let reply = client.upload(file.path()).await;

    assert!(!reply.is_fallback());
    assert!(reply.text().contains("abc"), "got {:?}", reply.text());
    assert!(reply.text().contains("ask about the report"));
}

#[tokio::test]
async fn upload_with_neither_id_nor_snippet_still_acknowledges() {
    let app = Router::new().route("/api/upload-pdf", post(|| async { Json(json!({})) }));
    let addr = spawn_gateway_mock(app).await;
    let client = GatewayClient::new(format!("http://{addr}"));

    let file = pdf_file();
    let reply = client.upload(file.path()).await;

    assert!(!reply.is_fallback());
    assert_eq!(reply.text(), "PDF uploaded but no text returned.");
}

#[tokio::test]
async fn upload_server_error_falls_back() {
    let app = Router::new().route(
        "/api/upload-pdf",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "ingestion failed" })),
            )
        }),
    );
    let addr = spawn_gateway_mock(app).await;
    let client = GatewayClient::new(format!("http://{addr}"));

    let file = pdf_file();
    let reply = client.upload(file.path()).await;

    assert!(reply.is_fallback());
    assert_eq!(reply.text(), UPLOAD_FALLBACK);
}

#[tokio::test]
async fn upload_of_a_missing_file_falls_back_without_a_request() {
    let client = GatewayClient::new("http://127.0.0.1:1");

    let reply = client
        .upload(std::path::Path::new("/nonexistent/report.pdf"))
        .await;

    assert!(reply.is_fallback());
    assert_eq!(reply.text(), UPLOAD_FALLBACK);
}
