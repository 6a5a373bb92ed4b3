use maud::{html, Markup};

use crate::domain::format::format_date_span;
use crate::domain::{Opportunity, ViewMode};

/// One opportunity as a card. The public card carries the signup button;
/// the manager card shows the roster and the management actions.
pub fn opportunity_card(op: &Opportunity, mode: ViewMode) -> Markup {
    let spots_left = op.spots_left();
    let full = op.is_full();
    let base = format!("/manager/opportunities/{}", op.id);

    html! {
        article.card.full[full] id={ "opportunity-" (op.id) } {
            h2 { (op.title) }
            @if !op.description.is_empty() {
                p { (op.description) }
            }
            p class="meta" { (format_date_span(op.date, op.end_date)) }
            p class="meta" {
                (op.time_of_day)
                " ("
                @if op.time_range.is_empty() { "N/A" } @else { (op.time_range) }
                ")"
            }
            p class="meta spots" {
                @if full {
                    "Opportunity Full"
                } @else {
                    (spots_left) " of " (op.volunteers_needed) " spots open"
                }
            }

            @match mode {
                ViewMode::Public => {
                    div class="actions" {
                        @if full {
                            button class="btn" type="button" disabled { "Full" }
                        } @else {
                            a class="btn" href={ "/opportunities/" (op.id) "/signup" } { "Sign Up" }
                        }
                    }
                }
                ViewMode::Manager => {
                    @if op.volunteers_signed_up.is_empty() {
                        p class="empty" { "No volunteers signed up yet." }
                    } @else {
                        p class="meta" {
                            "Volunteers Signed Up (" (op.volunteers_signed_up.len()) "): "
                            a href={ (base) "/roster" } { "Export List" }
                        }
                        ul class="roster" {
                            @for v in &op.volunteers_signed_up {
                                li { (v.name) " (" (v.email) ")" }
                            }
                        }
                    }
                    div class="actions" {
                        a class="btn" href={ (base) "/edit" } { "Edit" }
                        form method="post" action={ (base) "/duplicate" } {
                            button class="btn secondary" type="submit" { "Duplicate" }
                        }
                        form method="post" action={ (base) "/delete" }
                            onsubmit="return confirm('Are you sure you want to delete this opportunity?')" {
                            input type="hidden" name="confirm" value="yes";
                            button class="btn danger" type="submit" { "Delete" }
                        }
                    }
                }
            }
        }
    }
}
