use maud::{html, Markup};

use crate::domain::{Opportunity, ViewMode};
use crate::templates::components::opportunity_card;

/// Upcoming opportunities as signup cards.
pub fn public_display(items: &[Opportunity]) -> Markup {
    html! {
        @if items.is_empty() {
            p class="empty" {
                "No upcoming volunteer opportunities available at the moment. Please check back later!"
            }
        } @else {
            div class="cards" {
                @for op in items {
                    (opportunity_card(op, ViewMode::Public))
                }
            }
        }
    }
}
