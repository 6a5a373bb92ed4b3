use crate::auth::SessionRegistry;
use crate::board::Board;
use crate::db::seed::parse_seed;
use crate::db::SeedRepository;
use crate::domain::Clock;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::Arc;

pub const PASSCODE: &str = "regatta";

/// Fixed "now" for router tests: 2025-07-01 noon UTC.
pub fn test_clock() -> Clock {
    Clock::Fixed("2025-07-01T12:00:00Z".parse().unwrap())
}

/// A loaded board holding the bundled seed dataset.
pub fn init_test_state() -> AppState {
    let items = parse_seed(include_str!("../../data/seed.json")).unwrap();
    let board = Board::ready(
        Box::new(SeedRepository::new("data/seed.json")),
        test_clock(),
        items,
    );
    AppState::new(Arc::new(board), SessionRegistry::new(Some(PASSCODE.into()), 3600))
}

/// Cookie header value for a fresh manager session.
pub fn manager_cookie(state: &AppState) -> String {
    let now = test_clock().now().timestamp();
    let token = state.sessions.login(PASSCODE, now).unwrap();
    format!("session={token}")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post(uri: &str, form: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}
