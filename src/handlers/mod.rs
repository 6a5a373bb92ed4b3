pub mod auth;
pub mod manager;
pub mod public;

use crate::domain::{Opportunity, OpportunityId, Session};
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::state::AppState;

/// Per-request facts resolved before dispatch.
#[derive(Debug)]
pub struct RequestCtx {
    pub session: Session,
    pub query: FormData,
    pub session_token: Option<String>,
}

/// Current copy of the opportunity behind a path segment.
fn find_opportunity(state: &AppState, id: &str) -> Result<Opportunity, ServerError> {
    state
        .board
        .get(&OpportunityId::new(id))
        .ok_or(ServerError::NotFound)
}
