use maud::{html, Markup};

pub mod error;
pub mod notice;
pub mod opportunity_card;

pub use error::html_error_response;
pub use notice::{error_banner, notice_banner};
pub use opportunity_card::opportunity_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
