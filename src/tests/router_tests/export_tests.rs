use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, manager_cookie};
use std::io::Read;

#[test]
fn roster_page_shows_csv_text() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let resp = handle(get("/manager/opportunities/2/roster", Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Volunteer List for:"));
    assert!(body.contains(
        "Name,Email,Phone\nBob Johnson,bob@example.com,555-5678\nCarol Williams,carol@example.com,555-8765"
    ));
    assert!(body.contains("Copy to Clipboard"));
    assert!(body.contains("/manager/opportunities/2/roster.csv"));
}

#[test]
fn empty_roster_shows_placeholder() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let body = body_string(
        handle(get("/manager/opportunities/3/roster", Some(&cookie)), &state).unwrap(),
    );
    assert!(body.contains("No volunteers signed up yet."));
    assert!(!body.contains("Name,Email,Phone"));
}

#[test]
fn csv_download_is_an_attachment() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let resp = handle(get("/manager/opportunities/1/roster.csv", Some(&cookie)), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"roster_spring-regatta-setup.csv\""
    );
    assert_eq!(
        body_string(resp),
        "Name,Email,Phone\nAlice Smith,alice@example.com,555-1234"
    );
}

#[test]
fn xlsx_download_is_a_zip_workbook() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let resp = handle(get("/manager/opportunities/2/roster.xlsx", Some(&cookie)), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn copy_status_partials() {
    let state = init_test_state();
    let cookie = manager_cookie(&state);
    let base = "/manager/opportunities/2/roster/copy-status";

    let copied = body_string(handle(get(&format!("{base}?ok=true"), Some(&cookie)), &state).unwrap());
    assert!(copied.contains("Copied!"));
    assert!(!copied.contains("<html"));

    let failed = body_string(handle(get(&format!("{base}?ok=false"), Some(&cookie)), &state).unwrap());
    assert!(failed.contains(
        "Failed to copy list. You can manually select and copy from the text area."
    ));

    let idle = body_string(handle(get(base, Some(&cookie)), &state).unwrap());
    assert!(!idle.contains("Copied!"));
    assert!(idle.contains("copy-status"));
}
