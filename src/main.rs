use crate::auth::SessionRegistry;
use crate::board::Board;
use crate::db::{init_db, load_seed_file, Database, OpportunityRepository, SeedRepository, SqliteRepository};
use crate::domain::Clock;
use crate::router::handle;
use crate::settings::{PersistenceKind, Settings};
use crate::state::AppState;
use anyhow::Context;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

mod auth;
mod board;
mod db;
mod domain;
mod errors;
mod forms;
mod handlers;
mod loader;
mod notice;
mod responses;
mod router;
mod settings;
mod spreadsheets;
mod state;
mod store;
mod telemetry;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    telemetry::init_subscriber(&settings.app.log_level)?;

    // 1️⃣ Pick the persistence collaborator
    let repo = build_repository(&settings)?;

    // 2️⃣ Start with an empty board; the initial load fills it in the background
    let board = Arc::new(Board::new(repo, Clock::System));
    loader::spawn_initial_load(Arc::clone(&board), settings.app.load_delay())
        .context("Failed to start the initial load")?;

    if settings.manager.passcode.as_deref().unwrap_or("").is_empty() {
        info!("no manager passcode configured; manager login is open");
    }
    let sessions = SessionRegistry::new(
        settings.manager.passcode.clone(),
        settings.manager.session_ttl_secs(),
    );
    let state = Arc::new(AppState::new(board, sessions));

    // 3️⃣ Start the server
    let addr: SocketAddr = settings
        .app
        .addr()
        .parse()
        .with_context(|| format!("Invalid listen address {}", settings.app.addr()))?;
    info!(%addr, workers = settings.app.max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(settings.app.max_workers);

    // 4️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            error!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        return Err(e.into());
    }

    info!("server shut down cleanly");
    Ok(())
}

fn build_repository(settings: &Settings) -> anyhow::Result<Box<dyn OpportunityRepository>> {
    let seed_path = &settings.app.seed_path;
    match settings.persistence.kind {
        PersistenceKind::Seed => {
            info!(%seed_path, "using the in-memory seed dataset");
            Ok(Box::new(SeedRepository::new(seed_path.clone())))
        }
        PersistenceKind::Sqlite => {
            let db = Database::new(settings.persistence.sqlite_path.clone());
            init_db(&db).context("Database initialization failed")?;
            let seed = load_seed_file(seed_path).context("Failed to read the seed dataset")?;
            info!(path = %db.path(), "using SQLite persistence");
            Ok(Box::new(SqliteRepository::new(db, seed)))
        }
    }
}
