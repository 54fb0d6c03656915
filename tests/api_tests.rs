//! API integration tests
//!
//! Each test gets a fresh migrated database from `#[sqlx::test]`.
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use bookstore_server::{api, repository::Repository, AppConfig, AppState};

fn app(pool: PgPool) -> Router {
    api::create_router(AppState::new(AppConfig::default(), Repository::new(pool)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(format!("/api/v1{}", uri));
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create_author(app: &Router, name: &str) -> String {
    let (status, body) = send(app, Method::POST, "/authors", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_str().unwrap().to_string()
}

async fn create_book(app: &Router, title: &str, author: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/books",
        Some(json!({ "title": title, "author": author })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_str().unwrap().to_string()
}

#[sqlx::test]
#[ignore]
async fn test_health_check(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[sqlx::test]
#[ignore]
async fn test_listing_empty_collection_is_out_of_range(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(&app, Method::GET, "/authors", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[sqlx::test]
#[ignore]
async fn test_listing_pages(pool: PgPool) {
    let app = app(pool);
    for i in 0..7 {
        create_author(&app, &format!("Author {}", i)).await;
    }

    let (status, body) = send(&app, Method::GET, "/authors?page=1&limit=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authors"].as_array().unwrap().len(), 5);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalDocuments"], 7);

    let (status, body) = send(&app, Method::GET, "/authors?page=2&limit=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authors"].as_array().unwrap().len(), 2);

    let (status, _) = send(&app, Method::GET, "/authors?page=3&limit=5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/authors?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/authors?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[sqlx::test]
#[ignore]
async fn test_listing_search_and_sort(pool: PgPool) {
    let app = app(pool);
    create_author(&app, "Terry Pratchett").await;
    create_author(&app, "Neil Gaiman").await;
    create_author(&app, "Terry Brooks").await;

    let (status, body) = send(&app, Method::GET, "/authors?search=TERRY&sortBy=name&order=asc", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["authors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Terry Brooks", "Terry Pratchett"]);

    // Default order is descending by name
    let (_, body) = send(&app, Method::GET, "/authors", None).await;
    assert_eq!(body["authors"][0]["name"], "Terry Pratchett");

    // A LIKE wildcard in the search term is matched literally
    let (status, _) = send(&app, Method::GET, "/authors?search=%25", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore]
async fn test_get_all_and_get_by_id(pool: PgPool) {
    let app = app(pool);

    let (status, _) = send(&app, Method::GET, "/authors/all", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = create_author(&app, "Octavia E. Butler").await;

    let (status, body) = send(&app, Method::GET, "/authors/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, &format!("/authors/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Octavia E. Butler");

    let missing = uuid::Uuid::new_v4();
    let (status, body) = send(&app, Method::GET, &format!("/authors/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");

    let (status, _) = send(&app, Method::GET, "/authors/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore]
async fn test_create_rejects_invalid_and_duplicate(pool: PgPool) {
    let app = app(pool);
    create_author(&app, "Jane Austen").await;

    let (status, _) = send(&app, Method::POST, "/authors", Some(json!({ "name": "Jane Austen" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::POST, "/authors", Some(json!({ "bio": "no name" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::POST, "/authors", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");
}

#[sqlx::test]
#[ignore]
async fn test_update_author(pool: PgPool) {
    let app = app(pool);
    let id = create_author(&app, "Mary Shelley").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/authors/{}", id),
        Some(json!({ "bio": "Wrote Frankenstein", "dateOfBirth": "1797-08-30" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mary Shelley");
    assert_eq!(body["bio"], "Wrote Frankenstein");
    assert_eq!(body["dateOfBirth"], "1797-08-30");

    let (status, body) = send(&app, Method::PUT, &format!("/authors/{}", id), Some(json!({ "bio": null }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["bio"].is_null());
    assert_eq!(body["dateOfBirth"], "1797-08-30");

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, Method::PUT, &format!("/authors/{}", missing), Some(json!({ "bio": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore]
async fn test_delete_author_reassigns_books_to_placeholder(pool: PgPool) {
    let app = app(pool.clone());
    let first = create_author(&app, "First").await;
    let second = create_author(&app, "Second").await;
    let book_a = create_book(&app, "Book A", &first).await;
    let book_b = create_book(&app, "Book B", &first).await;
    let book_c = create_book(&app, "Book C", &second).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/authors/{}", first), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reassignedBooks"], 2);
    let placeholder = body["placeholderId"].as_str().unwrap().to_string();

    for book in [&book_a, &book_b] {
        let (_, body) = send(&app, Method::GET, &format!("/books/{}", book), None).await;
        assert_eq!(body["author"], placeholder.as_str());
    }

    let (status, _) = send(&app, Method::GET, &format!("/authors/{}", first), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The placeholder is reused on later deletions
    let (status, body) = send(&app, Method::DELETE, &format!("/authors/{}", second), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["placeholderId"], placeholder.as_str());

    let (_, body) = send(&app, Method::GET, &format!("/books/{}", book_c), None).await;
    assert_eq!(body["author"], placeholder.as_str());

    let placeholders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE name = 'Unknown'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(placeholders, 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/authors/{}", placeholder), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore]
async fn test_delete_missing_author_is_not_found(pool: PgPool) {
    let app = app(pool.clone());

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, Method::DELETE, &format!("/authors/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Nothing was created on the way out
    let authors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(authors, 0);
}

#[sqlx::test]
#[ignore]
async fn test_books_filters_and_unknown_references(pool: PgPool) {
    let app = app(pool);
    let author = create_author(&app, "Frank Herbert").await;
    let other = create_author(&app, "Isaac Asimov").await;
    create_book(&app, "Dune", &author).await;
    create_book(&app, "Dune Messiah", &author).await;
    create_book(&app, "Foundation", &other).await;

    let (status, body) = send(&app, Method::GET, &format!("/books?author={}", author), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalDocuments"], 2);

    let (status, body) = send(&app, Method::GET, "/books?search=dune&sortBy=title&order=asc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["books"][0]["title"], "Dune");

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "Orphan", "author": missing })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore]
async fn test_delete_category_clears_book_reference(pool: PgPool) {
    let app = app(pool);

    let (status, category) = send(&app, Method::POST, "/categories", Some(json!({ "name": "Sci-Fi" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = category["id"].as_str().unwrap();

    let (status, _) = send(&app, Method::POST, "/categories", Some(json!({ "name": "Sci-Fi" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, book) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "Hyperion", "category": category_id })),
    )
    .await;
    let book_id = book["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/categories/{}", category_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category deleted");

    let (_, book) = send(&app, Method::GET, &format!("/books/{}", book_id), None).await;
    assert!(book["category"].is_null());

    let (status, _) = send(&app, Method::DELETE, &format!("/categories/{}", category_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore]
async fn test_users_crud(pool: PgPool) {
    let app = app(pool);

    let (status, _) = send(&app, Method::GET, "/users/all", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "username": "reader", "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, user) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "username": "reader", "email": "Reader@Example.org" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["email"], "reader@example.org");
    let id = user["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "username": "other", "email": "reader@example.org" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, Method::PUT, &format!("/users/{}", id), Some(json!({ "fullName": "Avid Reader" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fullName"], "Avid Reader");

    let (status, body) = send(&app, Method::GET, "/users?search=avid", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore]
async fn test_blank_name_is_rejected_and_nothing_stored(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(&app, Method::POST, "/authors", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");

    let (status, _) = send(&app, Method::POST, "/categories", Some(json!({ "name": "\t" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/authors/all", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = create_author(&app, "  Octavia Butler ").await;
    let (_, body) = send(&app, Method::GET, &format!("/authors/{}", id), None).await;
    assert_eq!(body["name"], "Octavia Butler");
}

#[sqlx::test]
#[ignore]
async fn test_huge_page_is_bad_request(pool: PgPool) {
    let app = app(pool);
    create_author(&app, "Italo Calvino").await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/authors?page={}&limit=2", i64::MAX),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");

    let (status, _) = send(&app, Method::GET, &format!("/books?page={}", i64::MAX / 2), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore]
async fn test_update_rejects_invalid_fields(pool: PgPool) {
    let app = app(pool);
    let author = create_author(&app, "Frank Herbert").await;
    let book = create_book(&app, "Dune", &author).await;
    let uri = format!("/books/{}", book);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "price": -5.0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "isbn": "1" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "isbn": "9".repeat(18) }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/authors/{}", author),
        Some(json!({ "name": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Rejected patches leave the record as it was
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["price"].is_null());
    assert!(body["isbn"].is_null());
}

#[sqlx::test]
#[ignore]
async fn test_user_contact_fields_too_long(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "username": "reader", "email": "reader@example.org", "phone": "5".repeat(40) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationError");

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "username": "reader", "email": "reader@example.org" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/users/{}", body["id"].as_str().unwrap()),
        Some(json!({ "fullName": "x".repeat(256) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
