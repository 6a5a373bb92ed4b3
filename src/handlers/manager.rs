use tracing::{info, warn};

use crate::domain::OpportunityId;
use crate::errors::ServerError;
use crate::forms::{FormData, OpportunityForm, ValidationError};
use crate::handlers::{find_opportunity, RequestCtx};
use crate::notice::Notice;
use crate::responses::{
    csv_response, html_response, html_with_status, redirect, xlsx_response, ResultResp,
};
use crate::spreadsheets::{roster_csv, roster_filename, roster_xlsx, ExportError};
use crate::state::AppState;
use crate::templates::pages::{
    copy_status as copy_status_partial, opportunity_form_page, roster_page, CopyOutcome,
    OpportunityFormVm,
};

fn form_page(
    state: &AppState,
    editing: Option<&OpportunityId>,
    form: &OpportunityForm,
    error: Option<&ValidationError>,
) -> ResultResp {
    let page = opportunity_form_page(&OpportunityFormVm {
        editing,
        form,
        error: error.map(|e| e.0.as_str()),
        today: state.board.clock().today(),
    });
    match error {
        Some(_) => html_with_status(400, page),
        None => html_response(page),
    }
}

pub fn new_form(state: &AppState) -> ResultResp {
    let form = OpportunityForm::blank(state.board.clock().today());
    form_page(state, None, &form, None)
}

pub fn create(state: &AppState, body: &FormData) -> ResultResp {
    let form = OpportunityForm::from_form(body);
    match form.validate() {
        Ok(draft) => {
            state.board.add(draft);
            redirect(&Notice::Added.redirect_target())
        }
        Err(e) => {
            info!(error = %e, "create form rejected");
            form_page(state, None, &form, Some(&e))
        }
    }
}

pub fn edit_form(state: &AppState, id: &str) -> ResultResp {
    let op = find_opportunity(state, id)?;
    form_page(state, Some(&op.id), &OpportunityForm::from_opportunity(&op), None)
}

pub fn update(state: &AppState, id: &str, body: &FormData) -> ResultResp {
    let op = find_opportunity(state, id)?;
    let form = OpportunityForm::from_form(body);
    match form.validate() {
        Ok(draft) => {
            state
                .board
                .update(&op.id, draft)
                .ok_or(ServerError::NotFound)?;
            redirect(&Notice::Updated.redirect_target())
        }
        Err(e) => {
            info!(%id, error = %e, "edit form rejected");
            form_page(state, Some(&op.id), &form, Some(&e))
        }
    }
}

pub fn delete(state: &AppState, id: &str, body: &FormData) -> ResultResp {
    if body.get("confirm") != "yes" {
        return Err(ServerError::BadRequest(
            "Deleting an opportunity must be confirmed.".into(),
        ));
    }
    state
        .board
        .delete(&OpportunityId::new(id))
        .ok_or(ServerError::NotFound)?;
    redirect(&Notice::Deleted.redirect_target())
}

pub fn duplicate(state: &AppState, id: &str) -> ResultResp {
    let original = find_opportunity(state, id)?;
    state
        .board
        .duplicate(&original.id)
        .ok_or(ServerError::NotFound)?;
    redirect(
        &Notice::Duplicated {
            original: original.title,
        }
        .redirect_target(),
    )
}

pub fn roster(state: &AppState, id: &str) -> ResultResp {
    let op = find_opportunity(state, id)?;
    html_response(roster_page(&op))
}

/// Partial swapped next to the copy button once the browser reports how the copy went.
pub fn copy_status(state: &AppState, ctx: &RequestCtx, id: &str) -> ResultResp {
    let op = find_opportunity(state, id)?;
    let outcome: CopyOutcome = match ctx.query.opt("ok") {
        Some("true") => Some(Ok(())),
        Some("false") => {
            warn!(%id, "roster copy failed in the browser");
            Some(Err(ExportError::ClipboardFailure))
        }
        _ => None,
    };
    html_response(copy_status_partial(&op.id, outcome))
}

pub fn roster_csv_download(state: &AppState, id: &str) -> ResultResp {
    let op = find_opportunity(state, id)?;
    csv_response(roster_csv(&op), &roster_filename(&op, "csv"))
}

pub fn roster_xlsx_download(state: &AppState, id: &str) -> ResultResp {
    let op = find_opportunity(state, id)?;
    let buffer = roster_xlsx(&op)?;
    xlsx_response(buffer, &roster_filename(&op, "xlsx"))
}
