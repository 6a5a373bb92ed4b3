use maud::{html, Markup};

use crate::notice::{Notice, NoticeKind};

pub fn notice_banner(notice: &Notice) -> Markup {
    let class = match notice.kind() {
        NoticeKind::Success => "notice success",
        NoticeKind::Warning => "notice warning",
    };
    html! {
        div class=(class) role="status" { (notice.message()) }
    }
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="notice error" role="alert" { (message) }
    }
}
