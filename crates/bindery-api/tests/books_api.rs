//! End-to-end tests for the five book routes, driven through the router
//! against an in-memory SQLite host.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt as _;

use bindery_api::api_router;
use bindery_core::{HostPlatform, book, content::{ContentStatus, NewContentItem}};
use bindery_host_sqlite::SqliteHost;

async fn app() -> (Router, Arc<SqliteHost>) {
  let host = Arc::new(SqliteHost::open_in_memory().await.expect("in-memory host"));
  host
    .register_content_type(book::books_content_type())
    .await
    .expect("register books type");
  let router = Router::new().nest("/books/v1", api_router(host.clone()));
  (router, host)
}

async fn send(
  router: &Router,
  method: Method,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };

  let response = router
    .clone()
    .oneshot(builder.body(body).unwrap())
    .await
    .unwrap();

  let status = response.status();
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

fn dune() -> Value {
  json!({
    "title": "Dune",
    "description": "Desert planet.",
    "genre": ["Sci-Fi"],
    "author": "Frank Herbert",
  })
}

async fn create(router: &Router, body: Value) -> u64 {
  let (status, json) =
    send(router, Method::POST, "/books/v1/book/create", Some(body)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["status"], 200);
  assert_eq!(json["data"]["success"], true);
  json["data"]["book_id"].as_u64().expect("book_id")
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_matches() {
  let (router, _) = app().await;
  let id = create(&router, dune()).await;
  assert_ne!(id, 0);

  let (status, json) =
    send(&router, Method::GET, &format!("/books/v1/book/get/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["title"], "Dune");
  assert_eq!(json["description"], "Desert planet.");
  assert_eq!(json["genre"], json!(["Sci-Fi"]));
  assert_eq!(json["author"], json!({"first_name": "Frank", "last_name": "Herbert"}));
}

#[tokio::test]
async fn create_missing_field_returns_empty_envelope() {
  let (router, host) = app().await;

  for missing in ["title", "description", "genre", "author"] {
    let mut body = dune();
    body.as_object_mut().unwrap().remove(missing);
    let (status, json) =
      send(&router, Method::POST, "/books/v1/book/create", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({}), "missing {missing} should yield {{}}");
  }

  // A missing title must not have provisioned the author either.
  assert!(host.search_users("Frank Herbert").await.unwrap().is_empty());
  let (_, json) = send(&router, Method::GET, "/books/v1/book/get", None).await;
  assert_eq!(json, json!([]));
}

#[tokio::test]
async fn create_accepts_comma_separated_genre_string() {
  let (router, _) = app().await;
  let mut body = dune();
  body["genre"] = json!("Sci-Fi, Classic");
  let id = create(&router, body).await;

  let (_, json) =
    send(&router, Method::GET, &format!("/books/v1/book/get/{id}"), None).await;
  let mut genres: Vec<String> =
    serde_json::from_value(json["genre"].clone()).unwrap();
  genres.sort();
  assert_eq!(genres, vec!["Classic".to_owned(), "Sci-Fi".to_owned()]);
}

#[tokio::test]
async fn create_reuses_existing_author() {
  let (router, host) = app().await;
  create(&router, dune()).await;
  let mut second = dune();
  second["title"] = json!("Dune Messiah");
  create(&router, second).await;

  assert_eq!(host.search_users("Frank Herbert").await.unwrap().len(), 1);
}

// ─── Get one ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_unknown_id_returns_default_shape() {
  let (router, _) = app().await;

  for uri in ["/books/v1/book/get/9999", "/books/v1/book/get/abc"] {
    let (status, json) = send(&router, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      json,
      json!({
        "title": "",
        "description": "",
        "genre": "N/A",
        "author": {"first_name": "", "last_name": ""},
      })
    );
  }
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_returns_empty_array() {
  let (router, _) = app().await;
  let (status, json) = send(&router, Method::GET, "/books/v1/book/get", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json, json!([]));
}

#[tokio::test]
async fn list_returns_one_entry_per_book() {
  let (router, _) = app().await;
  for title in ["A", "B", "C"] {
    let mut body = dune();
    body["title"] = json!(title);
    create(&router, body).await;
  }

  let (_, json) = send(&router, Method::GET, "/books/v1/book/get", None).await;
  let entries = json.as_array().unwrap();
  assert_eq!(entries.len(), 3);
  let titles: Vec<&str> =
    entries.iter().map(|e| e["title"].as_str().unwrap()).collect();
  assert_eq!(titles, vec!["A", "B", "C"]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_zero_or_garbage_id_returns_404_envelope() {
  let (router, _) = app().await;

  for id in ["0", "abc"] {
    let (status, json) = send(
      &router,
      Method::PUT,
      &format!("/books/v1/book/update/{id}"),
      Some(json!({"title": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert_eq!(json["data"]["success"], false);
    assert_eq!(json["data"]["message"], "Book not found!");
  }
}

#[tokio::test]
async fn update_title_only_leaves_other_fields() {
  let (router, _) = app().await;
  let id = create(&router, dune()).await;

  let (status, json) = send(
    &router,
    Method::PUT,
    &format!("/books/v1/book/update/{id}"),
    Some(json!({"title": "Dune Messiah"})),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["data"]["book_id"], id);

  let (_, json) =
    send(&router, Method::GET, &format!("/books/v1/book/get/{id}"), None).await;
  assert_eq!(json["title"], "Dune Messiah");
  assert_eq!(json["description"], "Desert planet.");
  assert_eq!(json["genre"], json!(["Sci-Fi"]));
  assert_eq!(json["author"]["first_name"], "Frank");
}

#[tokio::test]
async fn update_genre_fully_replaces_previous_set() {
  let (router, _) = app().await;
  let id = create(&router, dune()).await;

  send(
    &router,
    Method::PUT,
    &format!("/books/v1/book/update/{id}"),
    Some(json!({"genre": ["Fantasy"]})),
  )
  .await;

  let (_, json) =
    send(&router, Method::GET, &format!("/books/v1/book/get/{id}"), None).await;
  assert_eq!(json["genre"], json!(["Fantasy"]));
}

#[tokio::test]
async fn update_author_resolves_or_provisions() {
  let (router, host) = app().await;
  let id = create(&router, dune()).await;

  send(
    &router,
    Method::PUT,
    &format!("/books/v1/book/update/{id}"),
    Some(json!({"author": "Jane Doe"})),
  )
  .await;

  let (_, json) =
    send(&router, Method::GET, &format!("/books/v1/book/get/{id}"), None).await;
  assert_eq!(json["author"], json!({"first_name": "Jane", "last_name": "Doe"}));
  assert_eq!(host.search_users("Jane Doe").await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_with_no_fields_is_silent_success() {
  let (router, _) = app().await;
  let id = create(&router, dune()).await;

  let (status, json) = send(
    &router,
    Method::PUT,
    &format!("/books/v1/book/update/{id}"),
    Some(json!({})),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["data"]["success"], true);
}

#[tokio::test]
async fn update_nonexistent_valid_id_still_reports_success() {
  let (router, _) = app().await;
  let (status, json) = send(
    &router,
    Method::PUT,
    "/books/v1/book/update/777",
    Some(json!({"title": "ghost"})),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["data"]["success"], true);
  assert_eq!(json["data"]["book_id"], 777);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_returns_default_shape() {
  let (router, _) = app().await;
  let id = create(&router, dune()).await;

  let (status, json) = send(
    &router,
    Method::DELETE,
    &format!("/books/v1/book/delete/{id}"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["status"], 200);
  assert_eq!(json["data"]["success"], true);
  assert_eq!(json["data"]["message"], "The book has been deleted successfully.");

  let (_, json) =
    send(&router, Method::GET, &format!("/books/v1/book/get/{id}"), None).await;
  assert_eq!(json["title"], "");
  assert_eq!(json["genre"], "N/A");

  let (_, json) = send(&router, Method::GET, "/books/v1/book/get", None).await;
  assert_eq!(json, json!([]));
}

#[tokio::test]
async fn delete_invalid_or_wrong_type_returns_404() {
  let (router, host) = app().await;

  // An item of a different content type must not be deletable as a book.
  let page = host
    .insert_item(NewContentItem {
      content_type: "pages".to_owned(),
      title:        "About".to_owned(),
      excerpt:      String::new(),
      author:       1,
      status:       ContentStatus::Published,
    })
    .await
    .unwrap();

  for uri in [
    "/books/v1/book/delete/0".to_owned(),
    "/books/v1/book/delete/9999".to_owned(),
    format!("/books/v1/book/delete/{page}"),
  ] {
    let (status, json) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert_eq!(json["data"]["success"], false);
    assert_eq!(json["data"]["message"], "No book found with the provided ID.");
  }

  // The page itself is untouched.
  assert!(host.get_item(page).await.unwrap().is_some());
}
