// File: src/validator.rs
// Purpose: The form validator: per-field evaluation, validate-all, submit gating

use crate::config::FormConfig;
use crate::field::{FieldId, FieldStatus};
use crate::rules;
use crate::state::FormState;
use crate::summary::Summary;
use crate::values::FormValues;

/// The registration form: values, per-field status, the submit gate, and the
/// post-submit summary
///
/// Owns the injected configuration and all session state; everything is
/// recomputed synchronously from current values on every event.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub(crate) values: FormValues,
    pub(crate) state: FormState,
    pub(crate) submit_enabled: bool,
    pub(crate) summary: Option<Summary>,
    pub(crate) config: FormConfig,
}

impl RegistrationForm {
    /// Build the form and run the initial validation pass, so the submit
    /// gate and error nodes reflect the untouched state immediately
    pub fn new(config: FormConfig) -> Self {
        let mut form = Self {
            values: FormValues::default(),
            state: FormState::new(),
            submit_enabled: false,
            summary: None,
            config,
        };
        form.sync_submit_state();
        form
    }

    pub fn with_defaults() -> Self {
        Self::new(FormConfig::default())
    }

    /// Evaluate one field's rule and store the result in its slot
    pub fn validate_field(&mut self, field: FieldId) -> bool {
        let status = rules::evaluate(field, &self.values);
        let valid = status.valid;
        self.state.set_status(field, status);
        valid
    }

    /// Run every rule in fixed order and return the AND of the results
    ///
    /// Never short-circuits: every field's slot is refreshed even after the
    /// first failure.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in FieldId::ALL {
            all_valid &= self.validate_field(field);
        }
        tracing::debug!(valid = all_valid, "form revalidated");
        all_valid
    }

    /// Recompute overall validity and gate the submit control on it
    pub fn sync_submit_state(&mut self) {
        self.submit_enabled = self.validate_all();
    }

    pub fn is_form_valid(&self) -> bool {
        self.state.is_form_valid()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn status(&self, field: FieldId) -> &FieldStatus {
        self.state.status(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_gates_submit() {
        let form = RegistrationForm::with_defaults();
        assert!(!form.submit_enabled());
        assert!(!form.is_form_valid());
        // Errors are visible from the start
        assert!(!form.status(FieldId::Terms).is_hidden());
    }

    #[test]
    fn test_validate_all_refreshes_every_slot() {
        let mut form = RegistrationForm::with_defaults();
        form.values.email = "a@b".to_string();
        form.validate_all();

        // Email cleared even though earlier fields still fail
        assert!(form.status(FieldId::Email).is_hidden());
        assert!(!form.status(FieldId::FirstName).is_hidden());
        assert!(!form.status(FieldId::Country).is_hidden());
    }

    #[test]
    fn test_aggregate_matches_individual_results() {
        let mut form = RegistrationForm::with_defaults();
        form.values = FormValues {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@b.com".to_string(),
            password: "Secret1!".to_string(),
            confirm_password: "Secret1!".to_string(),
            gender: Some("female".to_string()),
            country: "fr".to_string(),
            terms: true,
        };
        assert!(form.validate_all());
        assert!(form.is_form_valid());

        form.values.terms = false;
        assert!(!form.validate_all());
        assert!(!form.is_form_valid());
    }
}
