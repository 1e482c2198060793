//! Shared helpers for integration tests

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use std::sync::Arc;
use todolist_server::session::SessionStore;
use todolist_server::{TodoAppState, todo_routes};
use tower::util::ServiceExt;

pub const TEST_COOKIE: &str = "todo_session";

/// Build a router backed by a fresh in-memory session store
pub fn create_test_app() -> Router {
    let (app, _) = create_test_app_with_state();
    app
}

/// Build a router and keep the state for direct store inspection
pub fn create_test_app_with_state() -> (Router, TodoAppState) {
    let state = TodoAppState {
        store: Arc::new(SessionStore::new()),
        cookie_name: TEST_COOKIE.to_string(),
    };
    (todo_routes(state.clone()), state)
}

/// Extract the session token from a response's Set-Cookie header, if any
pub fn session_token(response: &Response) -> Option<String> {
    let header = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = header.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    (name == TEST_COOKIE).then(|| value.to_string())
}

/// Send a GET request, optionally with a session cookie
pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("{TEST_COOKIE}={token}"));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a form-encoded POST request, optionally with a session cookie
pub async fn post_form(app: &Router, uri: &str, body: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("{TEST_COOKIE}={token}"));
    }
    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Collect a response body into a string
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
