use tracing::info;

use crate::domain::{Opportunity, OpportunityId, SortOption};
use crate::errors::ServerError;
use crate::forms::{FormData, SignupForm};
use crate::handlers::{find_opportunity, RequestCtx};
use crate::notice::Notice;
use crate::responses::{html_response, html_with_status, redirect, ResultResp};
use crate::state::AppState;
use crate::store::SignupRejection;
use crate::templates::pages::{board_page, signup_page, BoardPageVm};

/// The opportunity list, projected for whoever is asking.
pub fn board(state: &AppState, ctx: &RequestCtx) -> ResultResp {
    let sort = ctx.query.opt("sort").and_then(SortOption::parse);
    let view = state.board.view(ctx.session.view_mode(), sort);
    let vm = BoardPageVm {
        session: ctx.session,
        view,
        notice: Notice::from_query(&ctx.query),
    };
    html_response(board_page(&vm))
}

/// Visitors only reach opportunities that have not ended yet.
fn find_signup_target(state: &AppState, ctx: &RequestCtx, id: &str) -> Result<Opportunity, ServerError> {
    let op = find_opportunity(state, id)?;
    if !ctx.session.is_manager() && !op.is_upcoming(state.board.clock().today()) {
        return Err(ServerError::NotFound);
    }
    Ok(op)
}

pub fn signup_form(state: &AppState, ctx: &RequestCtx, id: &str) -> ResultResp {
    let op = find_signup_target(state, ctx, id)?;
    if op.is_full() {
        return redirect(&Notice::Full.redirect_target());
    }
    html_response(signup_page(ctx.session, &op, &SignupForm::default(), None))
}

pub fn submit_signup(state: &AppState, ctx: &RequestCtx, id: &str, body: &FormData) -> ResultResp {
    let op = find_signup_target(state, ctx, id)?;
    let form = SignupForm::from_form(body);

    let signup = match form.validate(state.board.clock().now()) {
        Ok(signup) => signup,
        Err(e) => {
            info!(%id, error = %e, "signup form rejected");
            return html_with_status(400, signup_page(ctx.session, &op, &form, Some(e.0.as_str())));
        }
    };

    match state.board.signup(&OpportunityId::new(id), signup) {
        Ok(_) => redirect(&Notice::SignedUp.redirect_target()),
        Err(SignupRejection::NotFound) => Err(ServerError::NotFound),
        Err(rejection) => match Notice::from_rejection(&rejection) {
            Some(notice) => redirect(&notice.redirect_target()),
            None => Err(ServerError::InternalError),
        },
    }
}
