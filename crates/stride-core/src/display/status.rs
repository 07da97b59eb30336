//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::sync::SyncStatus;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.saving {
            write!(f, "Saving...")
        } else if self.pending {
            write!(f, "Unsaved changes")
        } else if let Some(error) = &self.last_error {
            write!(f, "Save failed: {error}")
        } else {
            write!(f, "All changes saved")
        }
    }
}
