use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::domain::Session;

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f8fb; color: #1f2933; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #0b4f7c; color: #fff; }
header a, header button { color: #fff; }
header h1 { font-size: 1.25rem; margin: 0; }
main { max-width: 960px; margin: 1.5rem auto; padding: 0 1rem; }
footer { text-align: center; color: #6b7785; padding: 2rem 0; font-size: 0.9rem; }
.toolbar { display: flex; gap: 1rem; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.12); }
.card h2 { margin-top: 0; font-size: 1.15rem; }
.card.full { opacity: 0.8; }
.meta { color: #52606d; font-size: 0.9rem; margin: 0.25rem 0; }
.spots { font-weight: 600; }
.actions { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.75rem; }
.actions form { display: inline; }
.btn { display: inline-block; padding: 0.4rem 0.8rem; border-radius: 6px; border: 1px solid #0b4f7c; background: #0b4f7c; color: #fff; text-decoration: none; cursor: pointer; font-size: 0.9rem; }
.btn.secondary { background: #fff; color: #0b4f7c; }
.btn.danger { background: #b42318; border-color: #b42318; }
.btn[disabled] { background: #9aa5b1; border-color: #9aa5b1; cursor: not-allowed; }
.link-button { background: none; border: none; padding: 0; cursor: pointer; text-decoration: underline; font: inherit; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.notice.success { background: #e3f9e5; color: #0e5c1e; }
.notice.warning { background: #fff3c4; color: #7a4d05; }
.notice.error { background: #ffe3e3; color: #8a1c1c; }
.empty { color: #52606d; font-style: italic; }
.roster { margin: 0.5rem 0 0; padding-left: 1.2rem; font-size: 0.9rem; }
form.stacked label { display: block; margin-top: 0.75rem; font-weight: 600; }
form.stacked input[type=text], form.stacked input[type=email], form.stacked input[type=tel],
form.stacked input[type=date], form.stacked input[type=number], form.stacked input[type=password],
form.stacked select, form.stacked textarea { width: 100%; padding: 0.4rem; box-sizing: border-box; }
form.stacked .inline { display: inline; font-weight: normal; }
textarea.roster-text { width: 100%; min-height: 12rem; font-family: monospace; }
.copied { color: #0e5c1e; font-weight: 600; }
"#;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, session: Session, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Sailing School Volunteers" }
                style { (PreEscaped(STYLES)) }
                script src=(HTMX_SRC) defer {};
            }
            body {
                header {
                    h1 { a href="/" { "Sailing School Volunteers" } }
                    nav {
                        @if session.is_manager() {
                            form method="post" action="/manager/logout" style="display:inline" {
                                button type="submit" class="link-button" { "Logout Manager" }
                            }
                        } @else {
                            a href="/manager/login" { "Manager Login" }
                        }
                    }
                }
                main {
                    (content)
                }
                footer {
                    "© " (Utc::now().year()) " Sailing School Volunteers. All rights reserved."
                }
            }
        }
    }
}
