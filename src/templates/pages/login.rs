use maud::{html, Markup};

use crate::domain::Session;
use crate::notice::Notice;
use crate::templates::components::{card, error_banner, notice_banner};
use crate::templates::desktop_layout;

pub fn login_page(requires_passcode: bool, notice: Option<&Notice>, error: Option<&str>) -> Markup {
    desktop_layout(
        "Manager Login",
        Session::Anonymous,
        card(
            "Manager Login",
            html! {
                @if let Some(notice) = notice {
                    (notice_banner(notice))
                }
                @if let Some(message) = error {
                    (error_banner(message))
                }
                form class="stacked" method="post" action="/manager/login" {
                    @if requires_passcode {
                        label for="passcode" { "Manager Passcode" }
                        input type="password" id="passcode" name="passcode" required autofocus;
                    } @else {
                        p class="meta" { "No passcode is configured. Continue to manage opportunities." }
                    }
                    div class="actions" {
                        a class="btn secondary" href="/" { "Cancel" }
                        button class="btn" type="submit" { "Enter Manager Mode" }
                    }
                }
            },
        ),
    )
}
