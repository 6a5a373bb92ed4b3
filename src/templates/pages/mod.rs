pub mod board;
pub mod login;
pub mod manager;
pub mod opportunity_form;
pub mod public;
pub mod roster;
pub mod signup_form;

pub use board::{board_page, BoardPageVm};
pub use login::login_page;
pub use opportunity_form::{opportunity_form_page, OpportunityFormVm};
pub use roster::{copy_status, roster_page, CopyOutcome};
pub use signup_form::signup_page;
