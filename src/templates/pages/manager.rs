use maud::{html, Markup};

use crate::domain::{Opportunity, ViewMode};
use crate::templates::components::opportunity_card;

pub fn manager_panel(items: &[Opportunity]) -> Markup {
    html! {
        div class="actions" {
            a class="btn" href="/manager/opportunities/new" { "Add New Opportunity" }
        }
        @if items.is_empty() {
            p class="empty" {
                "No opportunities found. Click \"Add New Opportunity\" to create one."
            }
        } @else {
            div class="cards" {
                @for op in items {
                    (opportunity_card(op, ViewMode::Manager))
                }
            }
        }
    }
}
