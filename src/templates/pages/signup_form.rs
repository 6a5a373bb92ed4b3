use maud::{html, Markup};

use crate::domain::{Opportunity, Session};
use crate::forms::SignupForm;
use crate::templates::components::{card, error_banner};
use crate::templates::desktop_layout;

/// Signup form for one opportunity, re-rendered with `error` after a rejected submit.
pub fn signup_page(
    session: Session,
    op: &Opportunity,
    form: &SignupForm,
    error: Option<&str>,
) -> Markup {
    desktop_layout(
        "Sign Up",
        session,
        card(
            "Sign Up For:",
            html! {
                h3 { (op.title) }
                @if let Some(message) = error {
                    (error_banner(message))
                }
                form class="stacked" method="post" action={ "/opportunities/" (op.id) "/signup" } {
                    label for="name" { "Full Name" }
                    input type="text" id="name" name="name" value=(form.name) required;

                    label for="email" { "Email Address" }
                    input type="email" id="email" name="email" value=(form.email) required;

                    label for="phone" { "Phone Number" }
                    input type="tel" id="phone" name="phone" value=(form.phone) required;

                    div class="actions" {
                        a class="btn secondary" href="/" { "Cancel" }
                        button class="btn" type="submit" { "Submit Signup" }
                    }
                }
            },
        ),
    )
}
