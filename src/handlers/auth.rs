use tracing::info;

use crate::auth::sessions::{cleared_session_cookie, session_cookie};
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::handlers::RequestCtx;
use crate::notice::Notice;
use crate::responses::{html_response, html_with_status, redirect, redirect_with_cookie, ResultResp};
use crate::state::AppState;
use crate::templates::pages::login_page;

pub fn login_form(state: &AppState, ctx: &RequestCtx) -> ResultResp {
    if ctx.session.is_manager() {
        return redirect("/");
    }
    let notice = Notice::from_query(&ctx.query);
    html_response(login_page(
        state.sessions.requires_passcode(),
        notice.as_ref(),
        None,
    ))
}

pub fn login(state: &AppState, body: &FormData) -> ResultResp {
    let now = state.board.clock().now().timestamp();
    match state.sessions.login(body.get("passcode"), now) {
        Some(token) => {
            let cookie = session_cookie(&token, state.sessions.ttl_secs());
            redirect_with_cookie(&Notice::LoggedIn.redirect_target(), &cookie)
        }
        None => html_with_status(
            401,
            login_page(true, None, Some("Incorrect passcode. Please try again.")),
        ),
    }
}

pub fn logout(state: &AppState, ctx: &RequestCtx) -> ResultResp {
    if let Some(token) = &ctx.session_token {
        state.sessions.logout(token);
    }
    redirect_with_cookie(&Notice::LoggedOut.redirect_target(), &cleared_session_cookie())
}

/// Anonymous visitor on a manager route: pages go to the login form, actions are refused.
pub fn login_required(method: &str) -> ResultResp {
    info!(%method, "manager route without a session");
    match method {
        "GET" => redirect(&format!("/manager/login?{}", Notice::LoginRequired.query())),
        _ => Err(ServerError::Unauthorized(Notice::LoginRequired.message())),
    }
}
