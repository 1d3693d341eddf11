mod common;

use axum::http::StatusCode;
use common::{MultipartBody, TestApp};

fn book_form(title: &str) -> MultipartBody {
    MultipartBody::default()
        .text("title", title)
        .text("author", "Chinua Achebe")
        .text("price", "450000")
        .text("rating", "5")
        .text("category", "Fiction")
        .text("description", "A classic")
}

#[tokio::test]
async fn admin_creates_book_with_cover_and_activity_is_logged() {
    let app = TestApp::new().await;
    let admin = app.register_admin("Boss", "boss@example.com").await;

    let form = book_form("Things Fall Apart")
        .file("image", "cover.png", "image/png", b"\x89PNG fake")
        .finish();

    let (status, body) = app.send_multipart("/api/book", Some(&admin), form).await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["title"], "Things Fall Apart");
    assert_eq!(body["data"]["price"], 450000);

    let image = body["data"]["image"].as_str().unwrap();
    assert!(image.starts_with("/uploads/"));
    assert_eq!(app.harness.images.stored(), vec![image.to_string()]);

    let activities = app.harness.db.activities();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].action, "CREATED BOOK");
    assert_eq!(activities[0].details["title"], "Things Fall Apart");
    assert_eq!(activities[0].details["adminEmail"], "boss@example.com");

    let (status, body) = app.get("/api/admin/activity", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["action"], "CREATED BOOK");
}

#[tokio::test]
async fn book_creation_requires_admin_and_valid_fields() {
    let app = TestApp::new().await;
    let user = app.register_user("reader", "reader@example.com").await;
    let admin = app.register_admin("Boss", "boss@example.com").await;

    let (status, _) = app
        .send_multipart("/api/book", Some(&user), book_form("Nope").finish())
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send_multipart("/api/book", Some(&admin), book_form("").finish())
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let form = MultipartBody::default()
        .text("title", "Priced wrong")
        .text("author", "A")
        .text("price", "cheap")
        .text("category", "Fiction")
        .finish();
    let (status, body) = app.send_multipart("/api/book", Some(&admin), form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be a number");

    let form = book_form("Not a picture")
        .file("image", "notes.txt", "text/plain", b"hello")
        .finish();
    let (status, body) = app.send_multipart("/api/book", Some(&admin), form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Only PNG, JPEG, WebP or GIF images are allowed");

    let form = book_form("Scripted cover")
        .file("image", "cover.svg", "image/svg+xml", b"<svg onload=\"alert(1)\"/>")
        .finish();
    let (status, body) = app.send_multipart("/api/book", Some(&admin), form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Only PNG, JPEG, WebP or GIF images are allowed");

    assert!(app.harness.db.books().is_empty());
    assert!(app.harness.images.stored().is_empty());
}

#[tokio::test]
async fn lists_books_newest_first_with_search_and_pagination() {
    let app = TestApp::new().await;
    app.harness.db.seed_book("Half of a Yellow Sun", "Chimamanda Adichie", "Fiction", 300000);
    app.harness.db.seed_book("Arrow of God", "Chinua Achebe", "Fiction", 250000);
    app.harness.db.seed_book("The Trouble with Nigeria", "Chinua Achebe", "Essays", 150000);

    let (status, body) = app.get("/api/book", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"][0]["title"], "The Trouble with Nigeria");
    assert_eq!(body["pagination"]["totalItems"], 3);

    let (_, body) = app.get("/api/book?search=achebe", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = app
        .get("/api/book?search=achebe&category=Fiction", None)
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "Arrow of God");

    let (_, body) = app.get("/api/book?page=2&pageSize=2", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["totalPages"], 2);

    let (status, _) = app.get("/api/book?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/book?page=2147483647&pageSize=100", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn fetches_and_deletes_single_books() {
    let app = TestApp::new().await;
    let admin = app.register_admin("Boss", "boss@example.com").await;

    let form = book_form("Arrow of God")
        .file("image", "cover.jpg", "image/jpeg", b"jpeg bytes")
        .finish();
    let (_, body) = app.send_multipart("/api/book", Some(&admin), form).await;
    let id = body["data"]["id"].as_i64().unwrap();
    let image = body["data"]["image"].as_str().unwrap().to_string();

    let (status, body) = app.get(&format!("/api/book/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["author"], "Chinua Achebe");

    let (status, _) = app.delete(&format!("/api/book/{id}"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.delete(&format!("/api/book/{id}"), Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.harness.images.deleted(), vec![image]);

    let (status, _) = app.get(&format!("/api/book/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/api/book/{id}"), Some(&admin)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let actions: Vec<String> = app
        .harness
        .db
        .activities()
        .into_iter()
        .map(|a| a.action)
        .collect();
    assert_eq!(actions, vec!["CREATED BOOK", "DELETED BOOK"]);
}

#[tokio::test]
async fn failed_image_cleanup_does_not_fail_deletion() {
    let app = TestApp::new().await;
    let admin = app.register_admin("Boss", "boss@example.com").await;

    let form = book_form("Arrow of God")
        .file("image", "cover.jpg", "image/jpeg", b"jpeg bytes")
        .finish();
    let (_, body) = app.send_multipart("/api/book", Some(&admin), form).await;
    let id = body["data"]["id"].as_i64().unwrap();

    app.harness.images.fail_deletes(true);

    let (status, _) = app.delete(&format!("/api/book/{id}"), Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(app.harness.db.books().is_empty());
}
