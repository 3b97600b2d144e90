mod support;

use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;
use support::harness;
use wordsuz_admin_core::guard::{decide, GuardDecision};
use wordsuz_admin_core::models::{LoginRequest, User};
use wordsuz_admin_core::services::{AuthService, UsersService, WordsService};
use wordsuz_admin_core::storage::{ACCESS_TOKEN_KEY, USER_KEY};
use wordsuz_admin_core::{ApiError, Method, PageQuery, SessionStorage, SessionStore};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "ops@words.uz".into(),
        password: "secret".into(),
    }
}

#[test]
fn login_persists_token_and_synthesized_identity() {
    let h = harness();
    h.transport.json(json!({
        "data": { "email": "ops@words.uz", "accessToken": "tok-1" },
        "message": "Logged in",
        "statusCode": 200
    }));
    let store = SessionStore::new(AuthService::new(h.client.clone()), Rc::new(|| {}));
    store.restore();

    let user = block_on(store.login(&credentials())).unwrap();

    assert_eq!(user.id, "admin");
    assert_eq!(user.username.as_deref(), Some("Admin"));
    assert_eq!(user.email, "ops@words.uz");
    assert_eq!(h.storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok-1"));

    let stored: User = serde_json::from_str(&h.storage.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored, user);

    let state = store.state();
    assert!(state.is_authenticated());
    assert!(!state.is_loading);
    assert_eq!(decide(&state, "/words"), GuardDecision::Allow);

    let request = h.transport.last();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://api.test/auth/admin/login");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(request.body.as_deref().unwrap()).unwrap(),
        json!({"email": "ops@words.uz", "password": "secret"})
    );
}

#[test]
fn rejected_login_stays_anonymous() {
    let h = harness();
    h.transport
        .reply(400, r#"{"message":"Invalid credentials","statusCode":400}"#);
    let store = SessionStore::new(AuthService::new(h.client.clone()), Rc::new(|| {}));
    store.restore();

    let err = block_on(store.login(&credentials())).unwrap_err();

    assert_eq!(err.login_message(), "Invalid email or password");
    assert!(!store.state().is_authenticated());
    assert!(!store.state().is_loading);
    assert!(h.storage.is_empty());
}

#[test]
fn bearer_token_is_attached_once_stored() {
    let h = harness();
    h.transport
        .json(json!({"data": {"data": [], "meta": {"total": 0}}, "message": "", "statusCode": 200}))
        .json(json!({"data": {"data": [], "meta": {"total": 0}}, "message": "", "statusCode": 200}));
    let users = UsersService::new(h.client.clone());

    block_on(users.list(1, 10)).unwrap();
    assert_eq!(h.transport.last().header("Authorization"), None);

    h.storage.set(ACCESS_TOKEN_KEY, "tok-2").unwrap();
    block_on(users.list(2, 10)).unwrap();
    assert_eq!(h.transport.last().header("Authorization"), Some("Bearer tok-2"));
    assert_eq!(h.transport.last().header("Content-Type"), None);
    assert_eq!(h.transport.last().body, None);
    assert_eq!(
        h.transport.calls(),
        vec!["GET /users?page=1&limit=10", "GET /users?page=2&limit=10"]
    );
}

#[test]
fn any_401_clears_the_session_and_redirects_to_login() {
    let h = harness();
    h.storage.set(ACCESS_TOKEN_KEY, "expired").unwrap();
    h.storage.set(USER_KEY, r#"{"id":"admin","email":"a@b.c"}"#).unwrap();
    h.transport.reply(401, r#"{"message":"Unauthorized"}"#);

    let words = WordsService::new(h.client.clone());
    let err = block_on(words.list(&PageQuery::from_ui(0, 10, ""))).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(h.storage.is_empty());
    assert_eq!(*h.redirect.targets.borrow(), vec!["/login".to_string()]);
}

#[test]
fn restore_reads_a_valid_session_without_network() {
    let h = harness();
    h.storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    h.storage
        .set(USER_KEY, r#"{"id":"admin","email":"ops@words.uz","username":"Admin"}"#)
        .unwrap();
    let store = SessionStore::new(AuthService::new(h.client.clone()), Rc::new(|| {}));
    assert_eq!(decide(&store.state(), "/"), GuardDecision::Pending);

    store.restore();

    assert!(store.state().is_authenticated());
    assert_eq!(store.state().display_name(), "Admin");
    assert!(h.transport.requests().is_empty());
}

#[test]
fn corrupt_stored_user_is_cleared() {
    let h = harness();
    h.storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    h.storage.set(USER_KEY, "{not json").unwrap();
    let store = SessionStore::new(AuthService::new(h.client.clone()), Rc::new(|| {}));

    store.restore();

    assert!(!store.state().is_authenticated());
    assert!(!store.state().is_loading);
    assert!(h.storage.is_empty());
    assert_eq!(
        decide(&store.state(), "/comments"),
        GuardDecision::RedirectToLogin {
            from: "/comments".into()
        }
    );
}

#[test]
fn logout_forgets_the_session_locally() {
    let h = harness();
    h.storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    h.storage
        .set(USER_KEY, r#"{"id":"admin","email":"ops@words.uz"}"#)
        .unwrap();
    let store = SessionStore::new(AuthService::new(h.client.clone()), Rc::new(|| {}));
    store.restore();

    block_on(store.logout()).unwrap();

    assert!(!store.state().is_authenticated());
    assert!(h.storage.is_empty());
    assert!(h.transport.requests().is_empty());
}

#[test]
fn storage_changes_from_another_tab_are_picked_up() {
    let h = harness();
    h.storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    h.storage
        .set(USER_KEY, r#"{"id":"admin","email":"ops@words.uz"}"#)
        .unwrap();
    let store = SessionStore::new(AuthService::new(h.client.clone()), Rc::new(|| {}));
    store.restore();

    h.storage.remove(ACCESS_TOKEN_KEY);
    h.storage.remove(USER_KEY);
    store.sync_from_storage();

    assert!(!store.state().is_authenticated());
}
