//! Integration tests for the HTTP client and its facades against a mock API.

use api::{ApiClient, ApiConfig, ApiError, IngredientUpdate, NewIngredient, UNEXPECTED_ERROR};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig::new(server.uri())).unwrap()
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "3f1c9a52-8d7e-4b8a-9f57-0c2d7e1b6a11",
        "email": "cook@example.com",
        "username": "cook",
        "full_name": "Ada Cook",
        "role": "user",
        "is_active": true,
        "created_at": "2024-05-01T12:30:00Z"
    })
}

#[tokio::test]
async fn test_request_magic_link_posts_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/magic-link"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "email": "cook@example.com", "full_name": "Ada Cook" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Magic link sent successfully!",
            "email": "cook@example.com",
            "expires_in_minutes": 15
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .auth()
        .request_magic_link("cook@example.com", Some("Ada Cook"))
        .await
        .unwrap();

    assert_eq!(response.email, "cook@example.com");
    assert_eq!(response.expires_in_minutes, Some(15));
}

#[tokio::test]
async fn test_verify_token_returns_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify"))
        .and(body_json(json!({ "token": "tok-123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Authentication successful!",
            "user": user_json(),
            "session_token": "sess"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).auth().verify_token("tok-123").await.unwrap();
    assert_eq!(response.user.email, "cook@example.com");
    assert_eq!(response.user.display_name(), "Ada Cook");
}

#[tokio::test]
async fn test_session_cookie_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session_token=sess-abc; Path=/; HttpOnly")
                .set_body_json(json!({ "user": user_json() })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ingredients"))
        .and(header("cookie", "session_token=sess-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.auth().verify_token("tok").await.unwrap();
    let ingredients = client.ingredients().list().await.unwrap();
    assert!(ingredients.is_empty());
}

#[tokio::test]
async fn test_error_prefers_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid or expired token. Please request a new magic link.",
            "message": "ignored"
        })))
        .mount(&server)
        .await;

    let error = client_for(&server).auth().verify_token("used").await.unwrap_err();
    assert_eq!(
        error,
        ApiError::new(
            "Invalid or expired token. Please request a new magic link.",
            Some(401)
        )
    );
}

#[tokio::test]
async fn test_error_falls_back_to_message_then_generic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/magic-link"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "message": "Slow down" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let auth = client_for(&server).auth();

    let limited = auth.request_magic_link("a@b.c", None).await.unwrap_err();
    assert_eq!(limited.message, "Slow down");
    assert_eq!(limited.status, Some(429));

    let broken = auth.logout().await.unwrap_err();
    assert_eq!(broken.message, UNEXPECTED_ERROR);
    assert_eq!(broken.status, Some(500));
}

#[tokio::test]
async fn test_transport_failure_has_no_status() {
    // Nothing listens on port 1.
    let client = ApiClient::new(&ApiConfig::new("http://127.0.0.1:1")).unwrap();

    let error = client.ingredients().list().await.unwrap_err();
    assert_eq!(error.message, UNEXPECTED_ERROR);
    assert_eq!(error.status, None);
}

#[tokio::test]
async fn test_truncated_error_body_keeps_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Announces a longer body than it sends, then hangs up.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(
                b"HTTP/1.1 502 Bad Gateway\r\n\
                  content-type: application/json\r\n\
                  content-length: 100\r\n\
                  \r\n\
                  {\"detail\":",
            )
            .await
            .unwrap();
        let _ = socket.shutdown().await;
    });

    let client = ApiClient::new(&ApiConfig::new(format!("http://{addr}"))).unwrap();
    let error = client.ingredients().list().await.unwrap_err();

    assert_eq!(error.message, UNEXPECTED_ERROR);
    assert_eq!(error.status, Some(502));
}

#[tokio::test]
async fn test_logout_posts_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Logged out successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ack = client_for(&server).auth().logout().await.unwrap();
    assert_eq!(ack.message, "Logged out successfully");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_ingredient_crud_routes() {
    let server = MockServer::start().await;
    let flour = json!({
        "id": "9b2e",
        "name": "Flour",
        "category": "Baking",
        "unit": "cups",
        "calories_per_unit": 455.0,
        "additional_data": {},
        "created_at": "2024-05-01T12:30:00Z",
        "updated_at": "2024-05-01T12:30:00Z"
    });

    Mock::given(method("POST"))
        .and(path("/ingredients"))
        .and(body_json(json!({
            "name": "Flour",
            "category": "Baking",
            "unit": "cups",
            "calories_per_unit": 455.0,
            "additional_data": {}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(flour.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ingredients/9b2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(flour.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/ingredients/9b2e"))
        .and(body_json(json!({ "unit": "grams" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9b2e",
            "name": "Flour",
            "unit": "grams",
            "additional_data": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/ingredients/9b2e"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ingredients = client_for(&server).ingredients();

    let created = ingredients
        .create(&NewIngredient {
            category: Some("Baking".to_string()),
            unit: Some("cups".to_string()),
            calories_per_unit: Some(455.0),
            ..NewIngredient::named("Flour")
        })
        .await
        .unwrap();
    assert_eq!(created.id, "9b2e");

    let fetched = ingredients.get("9b2e").await.unwrap();
    assert_eq!(fetched.category.as_deref(), Some("Baking"));

    let updated = ingredients
        .update(
            "9b2e",
            &IngredientUpdate {
                unit: Some("grams".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.unit.as_deref(), Some("grams"));
    assert_eq!(updated.category, None);

    ingredients.delete("9b2e").await.unwrap();
}

#[tokio::test]
async fn test_missing_ingredient_is_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/ingredients/gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Ingredient not found" })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server).ingredients().delete("gone").await.unwrap_err();
    assert_eq!(error, ApiError::new("Ingredient not found", Some(404)));
}
