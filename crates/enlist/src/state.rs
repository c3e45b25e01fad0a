// File: src/state.rs
// Purpose: Aggregate validation state with one always-present slot per field

use crate::field::{FieldId, FieldStatus};

/// Last-computed status of every field
///
/// Slots exist from construction on; there is no lazy creation and no
/// caching beyond "the most recent evaluation".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    statuses: [FieldStatus; FieldId::COUNT],
}

impl FormState {
    pub fn new() -> Self {
        Self {
            statuses: std::array::from_fn(|_| FieldStatus::ok()),
        }
    }

    pub fn status(&self, field: FieldId) -> &FieldStatus {
        &self.statuses[field.index()]
    }

    pub fn set_status(&mut self, field: FieldId, status: FieldStatus) {
        self.statuses[field.index()] = status;
    }

    /// AND of the most recent per-field evaluations
    pub fn is_form_valid(&self) -> bool {
        self.statuses.iter().all(|status| status.valid)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
