use maud::{html, Markup};

use crate::board::{BoardView, LoadState};
use crate::domain::{Session, SortOption};
use crate::notice::Notice;
use crate::templates::components::{error_banner, notice_banner};
use crate::templates::desktop_layout;
use crate::templates::pages::{manager::manager_panel, public::public_display};

pub struct BoardPageVm {
    pub session: Session,
    pub view: BoardView,
    pub notice: Option<Notice>,
}

pub fn board_page(vm: &BoardPageVm) -> Markup {
    desktop_layout(
        "Volunteer Opportunities",
        vm.session,
        html! {
            @if let Some(notice) = &vm.notice {
                (notice_banner(notice))
            }
            (board_region(vm))
        },
    )
}

/// The part of the page that is swapped in once the initial load resolves.
fn board_region(vm: &BoardPageVm) -> Markup {
    match &vm.view.load {
        LoadState::Loading => html! {
            div id="board" hx-get="/" hx-trigger="every 1s" hx-select="#board" hx-swap="outerHTML" {
                p class="empty" { "Loading..." }
            }
        },
        LoadState::Ready | LoadState::Failed(_) => html! {
            div id="board" {
                @if let LoadState::Failed(message) = &vm.view.load {
                    (error_banner(message))
                }
                div class="toolbar" {
                    h1 { "Volunteer Opportunities" }
                    (sort_select(vm.view.sort))
                }
                @if vm.session.is_manager() {
                    (manager_panel(&vm.view.items))
                } @else {
                    (public_display(&vm.view.items))
                }
            }
        },
    }
}

fn sort_select(active: SortOption) -> Markup {
    html! {
        form method="get" action="/" {
            label for="sortOption" { "Sort by: " }
            select id="sortOption" name="sort" onchange="this.form.submit()" {
                @for choice in SortOption::ALL {
                    option value=(choice.as_str()) selected[choice == active] { (choice.label()) }
                }
            }
            noscript { button class="btn secondary" type="submit" { "Apply" } }
        }
    }
}
