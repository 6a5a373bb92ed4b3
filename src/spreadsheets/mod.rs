pub mod roster_csv;
pub mod roster_xlsx;

use thiserror::Error;

pub use roster_csv::{roster_csv, roster_filename};
pub use roster_xlsx::roster_xlsx;

/// Failures on the roster export surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The browser could not write the roster to the clipboard.
    #[error("Failed to copy list. You can manually select and copy from the text area.")]
    ClipboardFailure,
}
