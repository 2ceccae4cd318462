use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use shared::{
    error::ApiError,
    protocol::{DecryptRequest, EncryptRequest},
};
use tokio::net::TcpListener;

use crate::{validate::clean_ciphertext_hex, HttpTransformClient, TransformBackend, TransformError};

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn encrypt_success_lands_all_formatted_fields() {
    let seen: Arc<Mutex<Option<EncryptRequest>>> = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route(
            "/api/encrypt",
            post(
                |State(seen): State<Arc<Mutex<Option<EncryptRequest>>>>,
                 Json(request): Json<EncryptRequest>| async move {
                    *seen.lock().expect("lock") = Some(request);
                    Json(serde_json::json!({
                        "original": "Hi",
                        "ascii_str": "72 105",
                        "binary": "01001000 01101001",
                        "cipher_hex": "a1b2",
                        "cipher_binary": "1010000110110010",
                        "padded_hex": "4869",
                    }))
                },
            ),
        )
        .with_state(seen.clone());

    let server_url = serve(router).await;
    let client = HttpTransformClient::new(server_url);

    let response = client
        .encrypt(&EncryptRequest {
            plaintext: "Hi".to_string(),
            key_hex: None,
        })
        .await
        .expect("encrypt");

    assert_eq!(response.cipher_hex, "a1b2");
    assert_eq!(response.cipher_binary, "1010000110110010");
    assert_eq!(response.padded_hex, "4869");

    let request = seen.lock().expect("lock").clone().expect("request seen");
    assert_eq!(request.plaintext, "Hi");
    assert!(request.key_hex.is_none());
}

#[tokio::test]
async fn decrypt_failure_detail_is_surfaced_verbatim() {
    let router = Router::new().route(
        "/api/decrypt",
        post(|Json(_request): Json<DecryptRequest>| async move {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("Decryption failed: key mismatch")),
            )
        }),
    );

    let server_url = serve(router).await;
    let client = HttpTransformClient::new(server_url);

    let err = client
        .decrypt(&DecryptRequest {
            ciphertext_hex: "a1b2".to_string(),
            key_hex: None,
        })
        .await
        .expect_err("service rejects");

    match err {
        TransformError::Service { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Decryption failed: key mismatch");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_failure_body_falls_back_to_generic_detail() {
    let router = Router::new().route(
        "/api/encrypt",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );

    let server_url = serve(router).await;
    let client = HttpTransformClient::new(server_url);

    let err = client
        .encrypt(&EncryptRequest {
            plaintext: "x".to_string(),
            key_hex: None,
        })
        .await
        .expect_err("service errors");

    match err {
        TransformError::Service { status, detail } => {
            assert_eq!(status, 500);
            assert!(detail.contains("500"), "generic detail names the status: {detail}");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Bind then drop so the port is very likely closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = HttpTransformClient::new(format!("http://{addr}"));
    let err = client
        .encrypt(&EncryptRequest {
            plaintext: "Hi".to_string(),
            key_hex: None,
        })
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err, TransformError::Transport(_)));
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_error() {
    let router = Router::new().route("/api/encrypt", post(|| async { "not json" }));

    let server_url = serve(router).await;
    let client = HttpTransformClient::new(server_url);

    let err = client
        .encrypt(&EncryptRequest {
            plaintext: "Hi".to_string(),
            key_hex: None,
        })
        .await
        .expect_err("body does not decode");

    assert!(matches!(err, TransformError::Transport(_)));
}

#[tokio::test]
async fn decrypt_request_carries_the_cleaned_hex() {
    let seen: Arc<Mutex<Option<DecryptRequest>>> = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route(
            "/api/decrypt",
            post(
                |State(seen): State<Arc<Mutex<Option<DecryptRequest>>>>,
                 Json(request): Json<DecryptRequest>| async move {
                    *seen.lock().expect("lock") = Some(request);
                    Json(serde_json::json!({
                        "decrypted": "Hi",
                        "ascii_str": "72 105",
                        "binary": "01001000 01101001",
                        "padded_hex": "4869",
                    }))
                },
            ),
        )
        .with_state(seen.clone());

    let server_url = serve(router).await;
    let client = HttpTransformClient::new(server_url);

    let cleaned = clean_ciphertext_hex("DEad  Beef").expect("valid hex");
    client
        .decrypt(&DecryptRequest {
            ciphertext_hex: cleaned,
            key_hex: None,
        })
        .await
        .expect("decrypt");

    let request = seen.lock().expect("lock").clone().expect("request seen");
    assert_eq!(request.ciphertext_hex, "DEadBeef");
}
