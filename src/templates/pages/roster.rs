use maud::{html, Markup};

use crate::domain::{Opportunity, OpportunityId, Session};
use crate::spreadsheets::{roster_csv, ExportError};
use crate::templates::components::card;
use crate::templates::desktop_layout;

/// Outcome of a clipboard copy as reported by the browser.
/// `None` renders the idle state.
pub type CopyOutcome = Option<Result<(), ExportError>>;

pub fn roster_page(op: &Opportunity) -> Markup {
    let base = format!("/manager/opportunities/{}", op.id);
    let status_url = format!("{base}/roster/copy-status");
    // The copy happens in the browser; only the outcome comes back to us.
    let copy_js = format!(
        "Promise.resolve().then(() => navigator.clipboard.writeText(document.getElementById('roster-csv').value))\
         .then(() => htmx.ajax('GET', '{status_url}?ok=true', {{target: '#copy-status', swap: 'outerHTML'}}))\
         .catch(() => htmx.ajax('GET', '{status_url}?ok=false', {{target: '#copy-status', swap: 'outerHTML'}}))"
    );

    desktop_layout(
        "Volunteer List",
        Session::Manager,
        card(
            "Volunteer List for:",
            html! {
                h3 { (op.title) }
                p class="meta" {
                    "The list below is in CSV (Comma Separated Values) format. "
                    "You can copy it directly into a spreadsheet or email."
                }
                textarea id="roster-csv" class="roster-text" readonly
                    aria-label="Volunteer list in CSV format" {
                    (roster_csv(op))
                }
                div class="actions" {
                    button class="btn" type="button" onclick=(copy_js) { "Copy to Clipboard" }
                    (copy_status(&op.id, None))
                }
                div class="actions" {
                    a class="btn secondary" href={ (base) "/roster.csv" } { "Download CSV" }
                    a class="btn secondary" href={ (base) "/roster.xlsx" } { "Download Excel" }
                    a class="btn secondary" href="/" { "Close" }
                }
            },
        ),
    )
}

/// Status slot next to the copy button. "Copied!" clears itself after two seconds.
pub fn copy_status(id: &OpportunityId, outcome: CopyOutcome) -> Markup {
    let status_url = format!("/manager/opportunities/{id}/roster/copy-status");
    html! {
        @match outcome {
            None => {
                span id="copy-status" {}
            }
            Some(Ok(())) => {
                span id="copy-status" class="copied" hx-get=(status_url)
                    hx-trigger="load delay:2s" hx-swap="outerHTML" { "Copied!" }
            }
            Some(Err(e)) => {
                span id="copy-status" class="notice error" role="alert" { (e) }
            }
        }
    }
}
