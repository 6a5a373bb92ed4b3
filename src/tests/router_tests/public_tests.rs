use crate::auth::SessionRegistry;
use crate::board::Board;
use crate::db::SeedRepository;
use crate::domain::OpportunityId;
use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{
    body_string, get, init_test_state, location, manager_cookie, post, test_clock,
};
use claims::{assert_err, assert_ok};
use std::sync::Arc;

fn roster_len(state: &AppState, id: &str) -> usize {
    state
        .board
        .get(&OpportunityId::new(id))
        .unwrap()
        .volunteers_signed_up
        .len()
}

#[test]
fn public_board_hides_past_opportunities() {
    let state = init_test_state();

    let resp = assert_ok!(handle(get("/", None), &state));
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Youth Sailing Camp Assistant"));
    assert!(body.contains("Race Committee Boat Crew"));
    assert!(!body.contains("Clubhouse Maintenance Day"));
    assert!(!body.contains("Spring Regatta Setup"));
    assert!(body.contains("3 of 5 spots open"));
    assert!(body.contains("Manager Login"));
    assert!(!body.contains("Add New Opportunity"));
}

#[test]
fn nearest_sort_lists_soonest_first() {
    let state = init_test_state();
    let body = body_string(handle(get("/", None), &state).unwrap());

    let camp = body.find("Youth Sailing Camp Assistant").unwrap();
    let crew = body.find("Race Committee Boat Crew").unwrap();
    assert!(camp < crew);
}

#[test]
fn date_desc_sort_reverses_order_and_sticks() {
    let state = init_test_state();
    let body = body_string(handle(get("/?sort=dateDesc", None), &state).unwrap());

    let camp = body.find("Youth Sailing Camp Assistant").unwrap();
    let crew = body.find("Race Committee Boat Crew").unwrap();
    assert!(crew < camp);
    assert!(body.contains("<option value=\"dateDesc\" selected>"));

    // The chosen sort stays active for later requests.
    let body = body_string(handle(get("/", None), &state).unwrap());
    assert!(body.contains("<option value=\"dateDesc\" selected>"));
}

#[test]
fn notice_query_renders_banner() {
    let state = init_test_state();
    let body = body_string(handle(get("/?notice=signed-up", None), &state).unwrap());
    assert!(body.contains("Thank you for signing up!"));
}

#[test]
fn loading_board_polls_until_ready() {
    let board = Board::new(Box::new(SeedRepository::new("data/seed.json")), test_clock());
    let state = AppState::new(Arc::new(board), SessionRegistry::new(None, 60));

    let body = body_string(handle(get("/", None), &state).unwrap());
    assert!(body.contains("Loading..."));
    assert!(body.contains("hx-trigger=\"every 1s\""));
    assert!(!body.contains("No upcoming volunteer opportunities"));

    let health = body_string(handle(get("/health", None), &state).unwrap());
    assert_eq!(health, "loading");
}

#[test]
fn signup_form_renders_for_open_opportunity() {
    let state = init_test_state();
    let resp = assert_ok!(handle(get("/opportunities/2/signup", None), &state));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign Up For:"));
    assert!(body.contains("Youth Sailing Camp Assistant"));
    assert!(body.contains("action=\"/opportunities/2/signup\""));
}

#[test]
fn signup_success_redirects_with_notice() {
    let state = init_test_state();
    let req = post(
        "/opportunities/2/signup",
        "name=Eve+Adams&email=eve%40example.com&phone=555-0000",
        None,
    );

    let resp = assert_ok!(handle(req, &state));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?notice=signed-up");
    assert_eq!(roster_len(&state, "2"), 3);
}

#[test]
fn duplicate_email_is_rejected_with_notice() {
    let state = init_test_state();
    let req = post(
        "/opportunities/2/signup",
        "name=Someone+Else&email=bob%40example.com&phone=999",
        None,
    );

    let resp = handle(req, &state).unwrap();
    assert_eq!(location(&resp), "/?notice=already-signed-up");
    assert_eq!(roster_len(&state, "2"), 2);
}

#[test]
fn last_spot_then_capacity_rejection() {
    let state = init_test_state();
    // Race crew needs 3 and has 1.
    for (i, email) in ["a%40x.com", "b%40x.com"].iter().enumerate() {
        let form = format!("name=V{i}&email={email}&phone=1");
        let resp = handle(post("/opportunities/4/signup", &form, None), &state).unwrap();
        assert_eq!(location(&resp), "/?notice=signed-up");
    }

    let resp = handle(
        post("/opportunities/4/signup", "name=Late&email=c%40x.com&phone=1", None),
        &state,
    )
    .unwrap();
    assert_eq!(location(&resp), "/?notice=opportunity-full");
    assert_eq!(roster_len(&state, "4"), 3);

    // Opening the form for a full opportunity bounces back to the list.
    let resp = handle(get("/opportunities/4/signup", None), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?notice=full");
}

#[test]
fn invalid_signup_rerenders_form() {
    let state = init_test_state();
    let req = post(
        "/opportunities/2/signup",
        "name=Eve+Adams&email=not-an-email&phone=555",
        None,
    );

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("value=\"Eve Adams\""));
    assert_eq!(roster_len(&state, "2"), 2);
}

#[test]
fn missing_fields_rerender_form() {
    let state = init_test_state();
    let resp = handle(post("/opportunities/2/signup", "name=Eve", None), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Please fill in all fields."));
}

#[test]
fn unknown_opportunity_is_not_found() {
    let state = init_test_state();
    let err = assert_err!(handle(get("/opportunities/nope/signup", None), &state));
    assert!(matches!(err, ServerError::NotFound));

    let err = assert_err!(handle(get("/no/such/page", None), &state));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn past_opportunity_is_closed_to_visitors() {
    let state = init_test_state();

    let err = assert_err!(handle(get("/opportunities/3/signup", None), &state));
    assert!(matches!(err, ServerError::NotFound));

    let form = "name=Zed&email=zed%40x.com&phone=9";
    let err = assert_err!(handle(post("/opportunities/3/signup", form, None), &state));
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(roster_len(&state, "3"), 0);
}

#[test]
fn manager_can_still_open_past_signup_form() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);

    let resp = assert_ok!(handle(get("/opportunities/3/signup", Some(&cookie)), &state));
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Clubhouse Maintenance Day"));
}

#[test]
fn health_check() {
    let state = init_test_state();
    let resp = handle(get("/health", None), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}
