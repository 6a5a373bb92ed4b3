// src/loader.rs
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::board::Board;
use crate::db::OpportunityRepository;
use crate::domain::Opportunity;
use crate::errors::ServerError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load opportunities: {0}")]
    Repository(#[from] ServerError),
}

/// Fetches the initial opportunity list after an artificial `delay`.
pub fn load_opportunities(
    repo: &dyn OpportunityRepository,
    delay: Duration,
) -> Result<Vec<Opportunity>, LoadError> {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    Ok(repo.load_all()?)
}

/// Runs the one-time load on a background thread and hands the result to the
/// board. Pages show a loading state until then.
pub fn spawn_initial_load(board: Arc<Board>, delay: Duration) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("initial-load".into())
        .spawn(move || {
            info!(delay_ms = delay.as_millis() as u64, "loading opportunities");
            let result = load_opportunities(board.repository(), delay);
            board.finish_load(result);
        })
}
