pub mod connection;
pub mod opportunities;
pub mod seed;

use crate::domain::{Opportunity, OpportunityId, Signup};
use crate::errors::ServerError;

pub use connection::{init_db, Database};
pub use opportunities::SqliteRepository;
pub use seed::{load_seed_file, SeedRepository};

/// Persistence collaborator for the board. Every write is keyed by the
/// opportunity id and mirrors one store mutation.
pub trait OpportunityRepository: Send + Sync {
    fn load_all(&self) -> Result<Vec<Opportunity>, ServerError>;
    fn add(&self, op: &Opportunity) -> Result<(), ServerError>;
    fn update(&self, op: &Opportunity) -> Result<(), ServerError>;
    fn delete(&self, id: &OpportunityId) -> Result<(), ServerError>;
    fn append_signup(&self, id: &OpportunityId, signup: &Signup) -> Result<(), ServerError>;
}
