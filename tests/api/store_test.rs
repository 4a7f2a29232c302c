use actix_web::test;
use serde_json::{json, Value};
use std::fs::{read_to_string, write};

use crate::common::{self, call_json};

#[actix_web::test]
async fn test_list_when_store_missing_expect_empty_and_file_created() {
    let store_dir = common::initialize_store_dir();
    let store_path = store_dir.path().join(common::STORE_FILE_NAME);
    let app = common::initialize_app(&store_path).await;

    let req = test::TestRequest::get().uri("/books/available").to_request();
    let (status, body) = call_json(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
    assert_eq!(read_to_string(&store_path).unwrap(), "[]");
}

#[actix_web::test]
async fn test_create_expect_store_file_holds_full_collection() {
    let store_dir = common::initialize_store_dir();
    let store_path = store_dir.path().join(common::STORE_FILE_NAME);
    let app = common::initialize_app(&store_path).await;

    for title in ["Dune", "Emma"] {
        let req = test::TestRequest::post()
            .uri("/books")
            .set_json(json!({"title": title, "author": "Anon", "available": true}))
            .to_request();
        assert_eq!(call_json(&app, req).await.0, 201);
    }

    let content = read_to_string(&store_path).unwrap();
    assert!(content.contains("\n  {\n    \"id\": 1,"), "{content}");
    let stored: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        stored,
        json!([
            {"id": 1, "title": "Dune", "author": "Anon", "available": true},
            {"id": 2, "title": "Emma", "author": "Anon", "available": true}
        ])
    );
}

#[actix_web::test]
async fn test_ids_continue_from_hand_edited_store() {
    let store_dir = common::initialize_store_dir();
    let store_path = store_dir.path().join(common::STORE_FILE_NAME);
    write(
        &store_path,
        r#"[{"id": 10, "title": "Emma", "author": "Austen", "available": false}]"#,
    )
    .unwrap();
    let app = common::initialize_app(&store_path).await;

    let req = test::TestRequest::post()
        .uri("/books")
        .set_json(json!({"title": "Dune", "author": "Herbert", "available": true}))
        .to_request();
    let (status, body) = call_json(&app, req).await;
    assert_eq!(status, 201);
    assert_eq!(body["id"], json!(11));
}

#[actix_web::test]
async fn test_corrupt_store_expect_internal_error_then_recovery() {
    let store_dir = common::initialize_store_dir();
    let store_path = store_dir.path().join(common::STORE_FILE_NAME);
    write(&store_path, "not json at all").unwrap();
    let app = common::initialize_app(&store_path).await;

    let req = test::TestRequest::get().uri("/books").to_request();
    let (status, body) = call_json(&app, req).await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Internal server error"}));

    let req = test::TestRequest::post()
        .uri("/books")
        .set_json(json!({"title": "Dune", "author": "Herbert", "available": true}))
        .to_request();
    assert_eq!(call_json(&app, req).await.0, 500);
    assert_eq!(read_to_string(&store_path).unwrap(), "not json at all");

    write(&store_path, "[]").unwrap();
    let req = test::TestRequest::get().uri("/books").to_request();
    let (status, body) = call_json(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_create_when_max_id_taken_expect_internal_error_and_store_unchanged() {
    let store_dir = common::initialize_store_dir();
    let store_path = store_dir.path().join(common::STORE_FILE_NAME);
    let content =
        r#"[{"id": 18446744073709551615, "title": "Emma", "author": "Austen", "available": true}]"#;
    write(&store_path, content).unwrap();
    let app = common::initialize_app(&store_path).await;

    let req = test::TestRequest::post()
        .uri("/books")
        .set_json(json!({"title": "Dune", "author": "Herbert", "available": true}))
        .to_request();
    let (status, body) = call_json(&app, req).await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Internal server error"}));
    assert_eq!(read_to_string(&store_path).unwrap(), content);

    let req = test::TestRequest::get().uri("/books").to_request();
    assert_eq!(call_json(&app, req).await.0, 200);
}
