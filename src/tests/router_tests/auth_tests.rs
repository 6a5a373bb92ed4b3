use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, location, post, PASSCODE};

fn set_cookie(resp: &astra::Response) -> String {
    resp.headers()
        .get("Set-Cookie")
        .expect("missing Set-Cookie")
        .to_str()
        .unwrap()
        .to_string()
}

#[test]
fn login_page_asks_for_passcode() {
    let state = init_test_state();
    let resp = handle(get("/manager/login?notice=login-required", None), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Manager Login"));
    assert!(body.contains("name=\"passcode\""));
    assert!(body.contains("Please log in as a manager to continue."));
}

#[test]
fn wrong_passcode_is_rejected() {
    let state = init_test_state();
    let resp = handle(post("/manager/login", "passcode=nope", None), &state).unwrap();

    assert_eq!(resp.status(), 401);
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert!(body_string(resp).contains("Incorrect passcode"));
}

#[test]
fn login_then_logout_round_trip() {
    let state = init_test_state();

    let resp = handle(
        post("/manager/login", &format!("passcode={PASSCODE}"), None),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?notice=logged-in");

    let cookie_header = set_cookie(&resp);
    assert!(cookie_header.starts_with("session="));
    assert!(cookie_header.contains("HttpOnly"));
    let cookie = cookie_header.split(';').next().unwrap().to_string();

    let body = body_string(handle(get("/?notice=logged-in", Some(&cookie)), &state).unwrap());
    assert!(body.contains("Logout Manager"));
    assert!(body.contains("Manager mode enabled."));

    let resp = handle(post("/manager/logout", "", Some(&cookie)), &state).unwrap();
    assert_eq!(location(&resp), "/?notice=logged-out");
    assert!(set_cookie(&resp).contains("Max-Age=0"));

    // The old token no longer grants manager access.
    let resp = handle(get("/manager/opportunities/new", Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 302);
}
