// src/db/seed.rs
use std::fs;

use tracing::debug;

use crate::db::OpportunityRepository;
use crate::domain::{Opportunity, OpportunityId, Signup};
use crate::errors::ServerError;

/// Reads the mock dataset (a JSON array of opportunities).
pub fn load_seed_file(path: &str) -> Result<Vec<Opportunity>, ServerError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ServerError::DbError(format!("Failed to read seed file {path}: {e}")))?;
    parse_seed(&raw)
}

pub fn parse_seed(raw: &str) -> Result<Vec<Opportunity>, ServerError> {
    serde_json::from_str(raw)
        .map_err(|e| ServerError::DbError(format!("Failed to parse seed data: {e}")))
}

/// Volatile persistence: loads the mock dataset, drops every write.
/// Everything lives in the in-memory store and is lost on restart.
pub struct SeedRepository {
    path: String,
}

impl SeedRepository {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl OpportunityRepository for SeedRepository {
    fn load_all(&self) -> Result<Vec<Opportunity>, ServerError> {
        load_seed_file(&self.path)
    }

    fn add(&self, op: &Opportunity) -> Result<(), ServerError> {
        debug!(id = %op.id, "seed repository: add not persisted");
        Ok(())
    }

    fn update(&self, op: &Opportunity) -> Result<(), ServerError> {
        debug!(id = %op.id, "seed repository: update not persisted");
        Ok(())
    }

    fn delete(&self, id: &OpportunityId) -> Result<(), ServerError> {
        debug!(%id, "seed repository: delete not persisted");
        Ok(())
    }

    fn append_signup(&self, id: &OpportunityId, _signup: &Signup) -> Result<(), ServerError> {
        debug!(%id, "seed repository: signup not persisted");
        Ok(())
    }
}
