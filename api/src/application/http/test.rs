use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use safeplate_core::infrastructure::profile::repositories::ProfileStore;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::application::http::server::{
    app_state::AppState,
    http_server::{api_router, state},
};
use crate::args::Args;

async fn memory_state() -> AppState {
    let args = Args::parse_from(["safeplate-api", "--store", "memory"]);
    state(Arc::new(args)).await.expect("memory state")
}

fn server(state: AppState) -> TestServer {
    TestServer::new(api_router(state.clone()).with_state(state)).expect("test server")
}

fn set_profile_store_online(state: &AppState, online: bool) {
    match state.service.profile_repository() {
        ProfileStore::Memory(repository) => repository.set_online(online),
        ProfileStore::Postgres(_) => panic!("tests run against the memory store"),
    }
}

#[tokio::test]
async fn test_catalog_lists_every_picker() {
    let server = server(memory_state().await);

    let response = server.get("/catalog").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["allergens"].as_array().map(Vec::len), Some(9));
    let keto = body["data"]["lifestyles"]
        .as_array()
        .and_then(|lifestyles| lifestyles.iter().find(|l| l["id"] == "keto"))
        .cloned()
        .expect("keto listed");
    assert_eq!(keto["macro_caps"][0]["metric"], "carbs");
}

#[tokio::test]
async fn test_preview_rejects_unknown_catalog_ids() {
    let server = server(memory_state().await);

    let response = server
        .post("/profiles/preview")
        .json(&json!({ "lifestyles": ["breatharian"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_preview_builds_profile_without_storing() {
    let server = server(memory_state().await);

    let response = server
        .post("/profiles/preview")
        .json(&json!({
            "allergens": ["Peanuts"],
            "conditions": ["hypertension"],
            "lifestyles": ["keto"]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["banned_allergens"], json!(["peanut"]));
    assert_eq!(body["data"]["macro_caps"]["carbs"], 10.0);
}

#[tokio::test]
async fn test_saved_profile_drives_evaluation() {
    let server = server(memory_state().await);
    let user_id = Uuid::new_v4();

    server
        .put(&format!("/users/{user_id}/profile"))
        .json(&json!({ "allergens": ["peanut"], "conditions": ["hypertension"] }))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/users/{user_id}/safety/evaluate"))
        .json(&json!({
            "items": [
                { "name": "Rice", "allergen_flags": { "peanut": false } },
                { "name": "Miso Soup", "allergen_flags": { "peanut": false }, "category_tags": ["High Sodium"] },
                { "name": "Mystery Curry" },
                { "name": "Satay", "allergen_flags": { "peanut": true } }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let levels: Vec<&str> = body["data"]["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter_map(|item| item["verdict"]["level"].as_str())
        .collect();
    assert_eq!(levels, vec!["unsafe", "caution", "unknown", "safe"]);
    assert_eq!(body["data"]["summary"]["total"], 4);
    assert_eq!(body["data"]["summary"]["unsafe"], 1);
}

#[tokio::test]
async fn test_user_without_profile_is_unrestricted() {
    let server = server(memory_state().await);
    let user_id = Uuid::new_v4();

    server
        .get(&format!("/users/{user_id}/profile"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server.get(&format!("/users/{user_id}/restrictions")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["banned_allergens"], json!([]));
}

#[tokio::test]
async fn test_partition_keeps_input_order_inside_buckets() {
    let server = server(memory_state().await);
    let user_id = Uuid::new_v4();

    server
        .put(&format!("/users/{user_id}/profile"))
        .json(&json!({ "allergens": ["dairy"] }))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/users/{user_id}/safety/partition"))
        .json(&json!({
            "items": [
                { "name": "Latte", "allergen_flags": { "dairy": true } },
                { "name": "Black Coffee", "allergen_flags": { "dairy": false } },
                { "name": "Cheesecake", "allergen_flags": { "dairy": true } }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["unsafe"][0]["item"]["name"], "Latte");
    assert_eq!(body["data"]["unsafe"][1]["item"]["name"], "Cheesecake");
    assert_eq!(body["data"]["safe"][0]["item"]["name"], "Black Coffee");
}

#[tokio::test]
async fn test_classify_keeps_declared_allergen_across_alias_keys() {
    let server = server(memory_state().await);

    let response = server
        .post("/safety/classify")
        .json(&json!({
            "profile": { "banned_allergens": ["dairy"] },
            "item": { "name": "Cheese", "allergen_flags": { "dairy": true, "milk": false } }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["level"], "unsafe");

    let response = server
        .post("/safety/classify")
        .json(&json!({
            "profile": { "banned_allergens": ["dairy"] },
            "item": { "name": "Lactose-free milk", "allergen_flags": { "lactose": false } }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["level"], "unknown");
}

#[tokio::test]
async fn test_raw_records_are_normalized_and_rejections_reported() {
    let server = server(memory_state().await);
    let user_id = Uuid::new_v4();

    server
        .put(&format!("/users/{user_id}/profile"))
        .json(&json!({ "allergens": ["gluten"] }))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/users/{user_id}/safety/records"))
        .json(&json!({
            "source": "grocery",
            "records": [
                { "title": "Oat Crackers", "contains_gluten": true },
                { "brand": "Nameless" },
                { "name": "Rice Cakes", "glutenFree": true }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["summary"]["total"], 2);
    assert_eq!(body["data"]["items"][0]["item"]["name"], "Oat Crackers");
    assert_eq!(body["data"]["items"][1]["verdict"]["level"], "safe");
    assert_eq!(body["data"]["rejected"][0]["index"], 1);
}

#[tokio::test]
async fn test_profile_write_is_queued_while_store_is_offline() {
    let state = memory_state().await;
    let server = server(state.clone());
    let user_id = Uuid::new_v4();

    set_profile_store_online(&state, false);

    let response = server
        .put(&format!("/users/{user_id}/profile"))
        .json(&json!({ "allergens": ["sesame"] }))
        .await;
    response.assert_status(StatusCode::ACCEPTED);
    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "queued");

    // The queued write is visible before it reaches the store.
    let response = server.get(&format!("/users/{user_id}/restrictions")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["banned_allergens"], json!(["sesame"]));

    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let response = server.post("/sync/flush").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["flushed"], 0);
    assert_eq!(body["data"]["remaining"], 1);

    set_profile_store_online(&state, true);

    let response = server.post("/sync/flush").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["flushed"], 1);
    assert_eq!(body["data"]["remaining"], 0);

    let response = server.get(&format!("/users/{user_id}/profile")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["allergens"], json!(["sesame"]));

    let response = server.get("/health/ready").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["pending_writes"], 0);
}

#[tokio::test]
async fn test_offline_store_without_queued_write_is_reported() {
    let state = memory_state().await;
    let server = server(state.clone());

    set_profile_store_online(&state, false);

    let response = server
        .get(&format!("/users/{}/restrictions", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_intake_log_summary_and_delete() {
    let server = server(memory_state().await);
    let user_id = Uuid::new_v4();

    let response = server
        .post(&format!("/users/{user_id}/intake"))
        .json(&json!({
            "consumed_on": "2025-06-01",
            "name": "Greek Yogurt",
            "servings": 2.0,
            "macros": { "protein": 10.0, "sugar": 4.0 }
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let entry_id = body["data"]["id"].as_str().expect("entry id").to_string();

    server
        .post(&format!("/users/{user_id}/intake"))
        .json(&json!({
            "consumed_on": "2025-06-01",
            "name": "Almonds",
            "servings": 1.0,
            "macros": { "protein": 6.0 }
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get(&format!("/users/{user_id}/intake/2025-06-01"))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["entry_count"], 2);
    assert_eq!(body["data"]["totals"]["protein"], 26.0);
    assert_eq!(body["data"]["totals"]["sugar"], 8.0);

    server
        .delete(&format!("/users/{user_id}/intake/entries/{entry_id}"))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/users/{user_id}/intake/entries/{entry_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server
        .get(&format!("/users/{user_id}/intake/2025-06-01"))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["entry_count"], 1);
}

#[tokio::test]
async fn test_invalid_intake_is_unprocessable() {
    let server = server(memory_state().await);

    let response = server
        .post(&format!("/users/{}/intake", Uuid::new_v4()))
        .json(&json!({
            "consumed_on": "2025-06-01",
            "name": "Water",
            "servings": 0.0
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_VALIDATION_FAILED");
}

#[tokio::test]
async fn test_nutrition_search_without_api_key_is_unavailable() {
    let server = server(memory_state().await);

    server
        .get("/nutrition/foods")
        .add_query_param("query", "banana")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_liveness() {
    let server = server(memory_state().await);

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}
