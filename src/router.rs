use std::io::Read;

use crate::auth::sessions::session_token_from_cookies;
use crate::board::LoadState;
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::handlers::{self, RequestCtx};
use crate::responses::{text_response, ResultResp};
use crate::state::AppState;
use astra::Request;
use tracing::debug;

// Form posts here are a handful of short fields.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let ctx = request_ctx(&req, state);
    debug!(%method, %path, session = ?ctx.session, "request");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => handlers::public::board(state, &ctx),
        ("GET", ["health"]) => text_response(match state.board.load_state() {
            LoadState::Ready => "ok",
            LoadState::Loading => "loading",
            LoadState::Failed(_) => "load failed",
        }),

        ("GET", ["opportunities", id, "signup"]) => handlers::public::signup_form(state, &ctx, id),
        ("POST", ["opportunities", id, "signup"]) => {
            let form = read_form(req)?;
            handlers::public::submit_signup(state, &ctx, id, &form)
        }

        ("GET", ["manager", "login"]) => handlers::auth::login_form(state, &ctx),
        ("POST", ["manager", "login"]) => {
            let form = read_form(req)?;
            handlers::auth::login(state, &form)
        }
        ("POST", ["manager", "logout"]) => handlers::auth::logout(state, &ctx),

        (_, ["manager", rest @ ..]) => {
            if !ctx.session.is_manager() {
                return handlers::auth::login_required(&method);
            }
            manager_routes(req, state, &ctx, &method, rest)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn manager_routes(
    req: Request,
    state: &AppState,
    ctx: &RequestCtx,
    method: &str,
    rest: &[&str],
) -> ResultResp {
    use handlers::manager;

    match (method, rest) {
        ("GET", ["opportunities", "new"]) => manager::new_form(state),
        ("POST", ["opportunities"]) => {
            let form = read_form(req)?;
            manager::create(state, &form)
        }
        ("GET", ["opportunities", id, "edit"]) => manager::edit_form(state, id),
        ("POST", ["opportunities", id]) => {
            let form = read_form(req)?;
            manager::update(state, id, &form)
        }
        ("POST", ["opportunities", id, "delete"]) => {
            let form = read_form(req)?;
            manager::delete(state, id, &form)
        }
        ("POST", ["opportunities", id, "duplicate"]) => manager::duplicate(state, id),
        ("GET", ["opportunities", id, "roster"]) => manager::roster(state, id),
        ("GET", ["opportunities", id, "roster", "copy-status"]) => {
            manager::copy_status(state, ctx, id)
        }
        ("GET", ["opportunities", id, "roster.csv"]) => manager::roster_csv_download(state, id),
        ("GET", ["opportunities", id, "roster.xlsx"]) => manager::roster_xlsx_download(state, id),
        _ => Err(ServerError::NotFound),
    }
}

fn request_ctx(req: &Request, state: &AppState) -> RequestCtx {
    let query = FormData::parse(req.uri().query().unwrap_or(""));
    let session_token = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(session_token_from_cookies)
        .map(str::to_owned);
    let now = state.board.clock().now().timestamp();
    let session = state.sessions.resolve(session_token.as_deref(), now);

    RequestCtx {
        session,
        query,
        session_token,
    }
}

/// Reads an urlencoded request body.
fn read_form(req: Request) -> Result<FormData, ServerError> {
    let mut raw = String::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(FormData::parse(&raw))
}
