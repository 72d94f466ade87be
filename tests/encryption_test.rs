// ============================================================================
// Mock Encrypt / Decrypt Tests
// ============================================================================

use serde_json::{Value, json};

use test_utils::spawn_app;

async fn post_json(url: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn encrypt_wraps_message_and_reports_sizes() {
    let app = spawn_app().await;

    let response = post_json(
        &app.url("/api/encrypt"),
        json!({"algorithm": "kyber", "message": "hello", "key": "x"}),
    )
    .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["algorithm"], "kyber");
    assert_eq!(body["encrypted_message"], "ENCRYPTED[hello]");
    assert_eq!(body["metrics"]["message_size"], 5);
    assert_eq!(body["metrics"]["encrypted_size"], 15);
}

#[tokio::test]
async fn decrypt_strips_wrapper() {
    let app = spawn_app().await;

    let response = post_json(
        &app.url("/api/decrypt"),
        json!({"algorithm": "kyber", "message": "ENCRYPTED[hello]", "key": "x"}),
    )
    .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["decrypted_message"], "hello");
    assert!(body["metrics"]["decryption_time"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn encrypt_then_decrypt_round_trips() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for message in ["hello", "", "multi word message", "ENCRYPTED[already]"] {
        let encrypted: Value = client
            .post(app.url("/api/encrypt"))
            .json(&json!({"algorithm": "rsa", "message": message, "key": "k"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let decrypted: Value = client
            .post(app.url("/api/decrypt"))
            .json(&json!({
                "algorithm": "rsa",
                "message": encrypted["encrypted_message"],
                "key": "k"
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(decrypted["decrypted_message"], message);
    }
}

#[tokio::test]
async fn decrypt_returns_sentinel_for_malformed_input() {
    let app = spawn_app().await;

    for message in ["hello", "ENCRYPTED[no suffix", "no prefix]", ""] {
        let response = post_json(
            &app.url("/api/decrypt"),
            json!({"algorithm": "kyber", "message": message, "key": "x"}),
        )
        .await;

        // Never an HTTP error, just the sentinel string
        assert_eq!(response.status(), 200, "message: {:?}", message);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["decrypted_message"], "Decryption failed");
    }
}

#[tokio::test]
async fn encrypt_ignores_algorithm_and_key() {
    let app = spawn_app().await;

    // Even an unknown algorithm is accepted: encryption never branches on it
    let response = post_json(
        &app.url("/api/encrypt"),
        json!({"algorithm": "rot13", "message": "hi", "key": ""}),
    )
    .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["algorithm"], "rot13");
    assert_eq!(body["encrypted_message"], "ENCRYPTED[hi]");
}
