use fieldshield_kms::{KeyResolutionError, KmsClient, KmsConfig};
use fieldshield_types::KeyScope;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> KmsClient {
    KmsClient::new(KmsConfig::for_endpoint(server.uri()))
}

fn key_response() -> serde_json::Value {
    serde_json::json!({
        "publicKeyHex": "30819f30",
        "privateKeyHex": "30820276"
    })
}

// --- Table keys ---

#[tokio::test]
async fn table_key_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rsa/private-key"))
        .and(query_param("tableName", "std_employee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(key_response()))
        .mount(&server)
        .await;

    let material = client(&server).table_key("std_employee").await.unwrap();
    assert_eq!(material.scope, KeyScope::table("std_employee"));
    assert_eq!(material.public_key_hex, "30819f30");
    assert_eq!(material.private_key().expose(), "30820276");
}

#[tokio::test]
async fn table_key_passes_session_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rsa/private-key"))
        .and(header("Authorization", "Bearer session-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(key_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.set_bearer_token("session-token-1".into()).await;
    client.table_key("std_employee").await.unwrap();
}

#[tokio::test]
async fn table_key_without_public_half_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rsa/private-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "privateKeyHex": "30820276" })),
        )
        .mount(&server)
        .await;

    let err = client(&server).table_key("std_employee").await.unwrap_err();
    assert!(matches!(err, KeyResolutionError::Unavailable(_)), "got: {err:?}");
}

// --- Row keys ---

#[tokio::test]
async fn row_key_uses_its_lookup_handle_as_public_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rsa/private-key"))
        .and(query_param("keyPublic", "30819f99"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "privateKeyHex": "30820276" })),
        )
        .mount(&server)
        .await;

    let material = client(&server).row_key("30819f99").await.unwrap();
    assert_eq!(material.scope, KeyScope::row("30819f99"));
    assert_eq!(material.public_key_hex, "30819f99");
    assert_eq!(material.private_key().expose(), "30820276");
}

// --- POST by scope ---

#[tokio::test]
async fn request_private_key_posts_scope_and_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rsa/private-key"))
        .and(body_json(serde_json::json!({
            "scope": "table",
            "scopeId": "std_employee"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "privateKeyHex": "30820276" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let key = client(&server)
        .request_private_key(&KeyScope::table("std_employee"))
        .await
        .unwrap();
    assert_eq!(key.expose(), "30820276");
}

// --- Failure taxonomy ---

#[tokio::test]
async fn missing_key_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rsa/private-key"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server).table_key("std_unknown").await.unwrap_err();
    match err {
        KeyResolutionError::NotFound(subject) => assert_eq!(subject, "std_unknown"),
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rsa/private-key"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server).table_key("std_employee").await.unwrap_err();
    assert!(matches!(err, KeyResolutionError::Unavailable(_)), "got: {err:?}");
}

#[tokio::test]
async fn unreachable_service_is_unavailable() {
    // Point at a server that is already shut down.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = KmsClient::new(KmsConfig::for_endpoint(uri));
    let err = client.table_key("std_employee").await.unwrap_err();
    assert!(matches!(err, KeyResolutionError::Unavailable(_)), "got: {err:?}");
}

// --- Hygiene ---

#[tokio::test]
async fn debug_output_redacts_the_private_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rsa/private-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(key_response()))
        .mount(&server)
        .await;

    let material = client(&server).table_key("std_employee").await.unwrap();
    let rendered = format!("{material:?}");
    assert!(!rendered.contains("30820276"), "private key leaked: {rendered}");
    assert!(rendered.contains("<redacted>"));
}
