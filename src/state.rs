// src/state.rs
use std::sync::Arc;

use crate::auth::SessionRegistry;
use crate::board::Board;

/// Everything a request handler needs, shared by all server workers.
pub struct AppState {
    pub board: Arc<Board>,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(board: Arc<Board>, sessions: SessionRegistry) -> Self {
        Self { board, sessions }
    }
}
