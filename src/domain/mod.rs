pub mod format;
pub mod opportunity;
pub mod session;

pub use format::Clock;
pub use opportunity::{Opportunity, OpportunityDraft, OpportunityId, Signup, TimeOfDay};
pub use session::{Session, SortOption, ViewMode};
