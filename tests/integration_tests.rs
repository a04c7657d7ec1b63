//! End-to-end tests for the clinic API on the seeded in-memory store

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use petclinic::{Config, create_app};

async fn create_test_server_with_config(config: Config) -> TestServer {
    let app = create_app(config).await.expect("Failed to create app");
    TestServer::new(app).expect("Failed to create test server")
}

async fn create_test_server() -> TestServer {
    create_test_server_with_config(Config::default()).await
}

fn jane_doe() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "address": "456 Another St",
        "city": "Metropolis",
        "telephone": "9876543210"
    })
}

#[tokio::test]
async fn test_server_startup_and_health() {
    let server = create_test_server().await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
    assert!(body["version"].is_string());
    assert!(body["details"]["build_info"]["git_sha"].is_string());
}

#[tokio::test]
async fn test_zero_timeout_is_rejected() {
    let mut config = Config::default();
    config.server.request_timeout_seconds = 0;

    let err = create_app(config).await.unwrap_err();
    assert_eq!(err.error_type(), "configuration_error");
}

#[tokio::test]
async fn test_seeded_pet_lookup() {
    let server = create_test_server().await;

    let response = server.get("/owners/2/pets/2").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["name"], "Basil");
    assert_eq!(body["owner"], "Betty Davis");
    assert_eq!(body["type"], json!({"id": 6, "name": "hamster"}));
}

#[tokio::test]
async fn test_owner_segment_does_not_scope_pet_lookup() {
    let server = create_test_server().await;

    let response = server.get("/owners/9/pets/2").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["owner"], "Betty Davis");
}

#[tokio::test]
async fn test_owner_pets_listed_by_name() {
    let server = create_test_server().await;

    let body: Value = server.get("/owners/3").await.json();
    assert_eq!(body["firstName"], "Eduardo");
    let names: Vec<&str> = body["pets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pet| pet["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Jewel", "Rosy"]);
}

#[tokio::test]
async fn test_empty_clinic() {
    let mut config = Config::default();
    config.store.seed_demo_data = false;
    let server = create_test_server_with_config(config).await;

    assert_eq!(server.get("/vets").await.json::<Value>(), json!([]));
    assert_eq!(server.get("/owners").await.json::<Value>(), json!([]));
    assert_eq!(server.get("/petTypes").await.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_owner_lifecycle() {
    let server = create_test_server().await;

    let response = server.post("/owners").json(&jane_doe()).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let owner_id = response.json::<Value>()["id"].as_u64().unwrap();
    assert_eq!(owner_id, 11);

    let mut changed = jane_doe();
    changed["city"] = json!("Gotham");
    let response = server
        .put(&format!("/owners/{owner_id}"))
        .json(&changed)
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server
        .post(&format!("/owners/{owner_id}/pets"))
        .json(&json!({"name": "Rex", "birthDate": "2020-02-29", "typeId": 2}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let pet_id = response.json::<Value>()["id"].as_u64().unwrap();

    let response = server
        .put(&format!("/owners/{owner_id}/pets/{pet_id}"))
        .json(&json!({"name": "Rex", "birthDate": "2020-02-29", "typeId": 1}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let owner: Value = server.get(&format!("/owners/{owner_id}")).await.json();
    assert_eq!(owner["city"], "Gotham");
    assert_eq!(owner["pets"][0]["name"], "Rex");
    assert_eq!(owner["pets"][0]["type"]["name"], "cat");

    let owners: Value = server.get("/owners").await.json();
    assert_eq!(owners.as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn test_owner_validation() {
    let server = create_test_server().await;

    let mut owner = jane_doe();
    owner["telephone"] = json!("0123456789012");
    let response = server.post("/owners").json(&owner).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["details"]["error"].as_str().unwrap().contains("telephone"));
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let server = create_test_server().await;

    assert_eq!(
        server.get("/owners/404").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server.get("/owners/1/pets/404").await.status_code(),
        StatusCode::NOT_FOUND
    );

    let response = server
        .put("/owners/1/pets/404")
        .json(&json!({"name": "Ghost", "typeId": 1}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_docs_can_be_disabled() {
    let mut config = Config::default();
    config.server.enable_docs = false;
    let server = create_test_server_with_config(config).await;

    let response = server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
