pub mod download;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;

pub use download::{csv_response, xlsx_response};
pub use html::{html_response, html_with_status, text_response};
pub use redirect::{redirect, redirect_with_cookie};
