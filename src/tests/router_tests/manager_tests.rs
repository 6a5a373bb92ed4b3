use crate::domain::{OpportunityId, ViewMode};
use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, get, init_test_state, location, manager_cookie, post};
use chrono::NaiveDate;
use claims::{assert_err, assert_none, assert_ok, assert_some};

fn find_by_title(state: &AppState, title: &str) -> Option<crate::domain::Opportunity> {
    state
        .board
        .view(ViewMode::Manager, None)
        .items
        .into_iter()
        .find(|op| op.title == title)
}

#[test]
fn manager_pages_redirect_anonymous_visitors_to_login() {
    let state = init_test_state();
    let resp = handle(get("/manager/opportunities/new", None), &state).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/manager/login?notice=login-required");
}

#[test]
fn manager_actions_refuse_anonymous_visitors() {
    let state = init_test_state();
    let err = assert_err!(handle(
        post("/manager/opportunities/2/delete", "confirm=yes", None),
        &state
    ));
    assert!(matches!(err, ServerError::Unauthorized(_)));
    assert_some!(state.board.get(&OpportunityId::new("2")));
}

#[test]
fn forged_cookie_is_anonymous() {
    let state = init_test_state();
    let resp = handle(get("/manager/opportunities/new", Some("session=forged")), &state).unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn manager_board_shows_everything_with_rosters() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let body = body_string(handle(get("/", Some(&cookie)), &state).unwrap());

    assert!(body.contains("Clubhouse Maintenance Day"));
    assert!(body.contains("Spring Regatta Setup"));
    assert!(body.contains("Alice Smith (alice@example.com)"));
    assert!(body.contains("Volunteers Signed Up (2)"));
    assert!(body.contains("Add New Opportunity"));
    assert!(body.contains("Logout Manager"));
}

#[test]
fn create_form_defaults_to_today() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let resp = assert_ok!(handle(get("/manager/opportunities/new", Some(&cookie)), &state));
    let body = body_string(resp);

    assert!(body.contains("Create New Opportunity"));
    assert!(body.contains("value=\"2025-07-01\""));
}

#[test]
fn create_valid_opportunity() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let form = "title=Dock+Party&description=Bring+snacks&date=2025-09-01&timeOfDay=Evening&timeRange=18%3A00+-+21%3A00&volunteersNeeded=4";

    let resp = handle(post("/manager/opportunities", form, Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?notice=added");

    let created = find_by_title(&state, "Dock Party").unwrap();
    assert_eq!(created.volunteers_needed, 4);
    assert_eq!(created.end_date, None);
    assert!(created.volunteers_signed_up.is_empty());
}

#[test]
fn create_with_zero_volunteers_rerenders_with_message() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let form = "title=Dock+Party&date=2025-09-01&timeOfDay=Evening&volunteersNeeded=0";

    let resp = handle(post("/manager/opportunities", form, Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Number of volunteers needed must be greater than zero."));
    assert!(body.contains("value=\"Dock Party\""));
    assert_none!(find_by_title(&state, "Dock Party"));
}

#[test]
fn create_with_backwards_range_rerenders_with_message() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let form = "title=Camp&date=2025-09-01&isDateRange=on&endDate=2025-08-01&timeOfDay=All+Day&volunteersNeeded=2";

    let resp = handle(post("/manager/opportunities", form, Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("End date cannot be before the start date."));
}

#[test]
fn edit_form_keeps_full_day_choice() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let body = body_string(
        handle(get("/manager/opportunities/4/edit", Some(&cookie)), &state).unwrap(),
    );

    assert!(body.contains("Edit Opportunity"));
    assert!(body.contains("<option value=\"Full Day\" selected>"));
    assert!(body.contains("value=\"Race Committee Boat Crew\""));
}

#[test]
fn update_keeps_roster_and_identity() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let form = "title=Youth+Camp+Helper&description=&date=2025-07-20&isDateRange=on&endDate=2025-07-26&timeOfDay=All+Day&timeRange=&volunteersNeeded=6";

    let resp = handle(post("/manager/opportunities/2", form, Some(&cookie)), &state).unwrap();
    assert_eq!(location(&resp), "/?notice=updated");

    let updated = state.board.get(&OpportunityId::new("2")).unwrap();
    assert_eq!(updated.title, "Youth Camp Helper");
    assert_eq!(updated.end_date, NaiveDate::from_ymd_opt(2025, 7, 26));
    assert_eq!(updated.volunteers_needed, 6);
    assert_eq!(updated.volunteers_signed_up.len(), 2);
}

#[test]
fn update_unknown_opportunity_is_not_found() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let err = assert_err!(handle(
        post("/manager/opportunities/zzz", "title=X", Some(&cookie)),
        &state
    ));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn delete_requires_confirmation() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);

    let err = assert_err!(handle(
        post("/manager/opportunities/3/delete", "", Some(&cookie)),
        &state
    ));
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_some!(state.board.get(&OpportunityId::new("3")));

    let resp = handle(
        post("/manager/opportunities/3/delete", "confirm=yes", Some(&cookie)),
        &state,
    )
    .unwrap();
    assert_eq!(location(&resp), "/?notice=deleted");
    assert_none!(state.board.get(&OpportunityId::new("3")));
}

#[test]
fn duplicate_resets_copy_and_reports_original() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);

    let resp = handle(
        post("/manager/opportunities/2/duplicate", "", Some(&cookie)),
        &state,
    )
    .unwrap();
    assert_eq!(
        location(&resp),
        "/?notice=duplicated&title=Youth+Sailing+Camp+Assistant"
    );

    let copy = find_by_title(&state, "Youth Sailing Camp Assistant (Copy)").unwrap();
    assert_ne!(copy.id, OpportunityId::new("2"));
    assert_eq!(copy.date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    assert_eq!(copy.end_date, None);
    assert!(copy.volunteers_signed_up.is_empty());
    assert_eq!(copy.time_range, "09:00 - 17:00");

    let body = body_string(handle(get(&location(&resp), Some(&cookie)), &state).unwrap());
    assert!(body.contains("duplicated as"));
}
