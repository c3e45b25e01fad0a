// File: src/values.rs
// Purpose: Current value/checked state of every form control

use serde::{Deserialize, Serialize};

/// Snapshot of what the user has entered so far
///
/// `gender` is `Some` once any radio in the group is checked; `country` holds
/// the selected option value, with the empty string standing for the
/// placeholder option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub confirm_password: String,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub country: String,

    #[serde(default)]
    pub terms: bool,
}
