//! Favorite flows over the HTTP client with scripted backend replies.

use chrono::NaiveDate;
use futures::executor::block_on;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use turbo_auth::StoredCredentials;
use turbo_cache::MemoryStore;
use turbo_commerce::catalog::ProductRecord;
use turbo_commerce::FavoriteId;
use turbo_data::testing::ScriptedTransport;
use turbo_data::{FetchClient, FetchError, Method};
use turbo_favorites::prelude::*;

#[derive(Default)]
struct Notices(RefCell<Vec<Notice>>);

impl Notifier for Notices {
    fn notify(&self, notice: Notice, _message: &str) {
        self.0.borrow_mut().push(notice);
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn harness(store: MemoryStore) -> (Rc<ScriptedTransport>, Rc<Notices>, FavoriteController) {
    let transport = Rc::new(ScriptedTransport::new());
    let client = FetchClient::with_transport(transport.clone()).with_base_url("https://backend.test/");
    let notices = Rc::new(Notices::default());
    let controller = FavoriteController::new(
        Rc::new(HttpFavoritesApi::new(client)),
        Rc::new(StoredCredentials::new(store)),
        notices.clone(),
    )
    .with_clock(day);
    (transport, notices, controller)
}

fn fakestore_product() -> ProductRecord {
    serde_json::from_value(json!({
        "id": 42,
        "title": "Mens Casual Slim Fit",
        "price": 15.99,
        "image": "https://fakestoreapi.com/img/71YXzeOuslL.jpg",
        "rating": {"rate": 2.1, "count": 430},
        "source": "fakestore",
        "store_id": 2
    }))
    .unwrap()
}

#[test]
fn test_add_then_remove_round_trip() {
    let (transport, notices, controller) = harness(MemoryStore::with_entry("token", "abc"));
    let product = fakestore_product();

    transport.push_json(200, json!([{"id": 3, "product_id": 10}]));
    transport.push_status(201, "{}");
    transport.push_json(200, json!([{"id": 3, "product_id": 10}, {"id": 11, "product_id": 42}]));
    transport.push_status(200, "");

    let state = block_on(controller.lookup(&product));
    assert_eq!(state, FavoriteState::NotFavorited);

    let added = block_on(controller.toggle(&product, &state));
    assert_eq!(
        added.state,
        FavoriteState::Favorited {
            id: Some(FavoriteId::from(11))
        }
    );

    let removed = block_on(controller.toggle(&product, &added.state));
    assert_eq!(removed.state, FavoriteState::NotFavorited);
    assert_eq!(removed.removed, Some(FavoriteId::from(11)));
    assert!(removed.close_requested());

    assert_eq!(*notices.0.borrow(), vec![Notice::Added, Notice::Removed]);

    let requests = transport.requests();
    let calls: Vec<(Method, &str)> = requests
        .iter()
        .map(|r| (r.method, r.url.as_str()))
        .collect();
    assert_eq!(
        calls,
        vec![
            (Method::Get, "https://backend.test/api/favorites"),
            (Method::Post, "https://backend.test/api/favorites"),
            (Method::Get, "https://backend.test/api/favorites"),
            (Method::Delete, "https://backend.test/api/favorites/11"),
        ]
    );
    assert!(requests
        .iter()
        .all(|r| r.header("Authorization") == Some("Bearer abc")));
    assert_eq!(
        requests[1].json_body(),
        Some(json!({"product_id": 42, "store_id": 2, "date_ad": "2025-03-14"}))
    );
}

#[test]
fn test_signed_out_never_calls_backend() {
    let (transport, notices, controller) = harness(MemoryStore::new());
    let product = fakestore_product();

    let state = block_on(controller.lookup(&product));
    let outcome = block_on(controller.toggle(&product, &state));

    assert_eq!(outcome.state, FavoriteState::NotFavorited);
    assert_eq!(outcome.notice, Notice::LoginRequired);
    assert_eq!(transport.request_count(), 0);
    assert_eq!(*notices.0.borrow(), vec![Notice::LoginRequired]);
}

#[test]
fn test_whitespace_token_counts_as_signed_out() {
    let (transport, notices, controller) = harness(MemoryStore::with_entry("token", "   "));
    let product = fakestore_product();

    assert_eq!(block_on(controller.lookup(&product)), FavoriteState::NotFavorited);
    let outcome = block_on(controller.toggle(&product, &FavoriteState::NotFavorited));

    assert_eq!(outcome.notice, Notice::LoginRequired);
    assert_eq!(transport.request_count(), 0);
    assert_eq!(*notices.0.borrow(), vec![Notice::LoginRequired]);
}

#[test]
fn test_text_and_numeric_ids_do_not_match() {
    let (transport, _, controller) = harness(MemoryStore::with_entry("token", "abc"));
    transport.push_json(200, json!([{"id": 5, "product_id": "42"}]));

    let state = block_on(controller.lookup(&fakestore_product()));

    assert_eq!(state, FavoriteState::NotFavorited);
}

#[test]
fn test_malformed_entry_does_not_hide_match() {
    let (transport, _, controller) = harness(MemoryStore::with_entry("token", "abc"));
    transport.push_json(200, json!([{"product_id": 10}, {"id": 7, "product_id": 42}]));

    let state = block_on(controller.lookup(&fakestore_product()));

    assert_eq!(
        state,
        FavoriteState::Favorited {
            id: Some(FavoriteId::from(7))
        }
    );
}

#[test]
fn test_lookup_network_failure_is_silent() {
    let (transport, notices, controller) = harness(MemoryStore::with_entry("token", "abc"));
    transport.push_error(FetchError::Timeout);

    let state = block_on(controller.lookup(&fakestore_product()));

    assert_eq!(state, FavoriteState::NotFavorited);
    assert!(notices.0.borrow().is_empty());
}

#[test]
fn test_failed_remove_keeps_favorite() {
    let (transport, notices, controller) = harness(MemoryStore::with_entry("token", "abc"));
    transport.push_status(500, "boom");
    let current = FavoriteState::Favorited {
        id: Some(FavoriteId::from(11)),
    };

    let outcome = block_on(controller.toggle(&fakestore_product(), &current));

    assert_eq!(outcome.state, current);
    assert!(!outcome.close_requested());
    assert_eq!(*notices.0.borrow(), vec![Notice::RemoveFailed]);
}
