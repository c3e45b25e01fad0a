// File: src/event.rs
// Purpose: Event dispatch wiring for input/change/submit handling

use crate::field::FieldId;
use crate::summary::Summary;
use crate::validator::RegistrationForm;

/// A user interaction with the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Keystroke in one of the five text controls
    Input(FieldId, String),
    /// A radio in the gender group was checked
    SelectGender(String),
    /// The country select changed
    SelectCountry(String),
    /// The terms checkbox was toggled
    SetTerms(bool),
    /// Submit attempt; the default action is always blocked
    Submit,
}

impl RegistrationForm {
    /// Apply one event: store the new value, re-run the affected rule(s),
    /// then resync the submit gate
    ///
    /// Mirrors the live-validation wiring: editing the password also re-runs
    /// the confirm-password rule, and a submit runs the full pass and builds
    /// the summary only when everything holds.
    pub fn dispatch(&mut self, event: FormEvent) {
        match event {
            FormEvent::Input(field, value) => {
                match field {
                    FieldId::FirstName => self.values.first_name = value,
                    FieldId::LastName => self.values.last_name = value,
                    FieldId::Email => self.values.email = value,
                    FieldId::Password => self.values.password = value,
                    FieldId::ConfirmPassword => self.values.confirm_password = value,
                    _ => {
                        tracing::warn!(?field, "ignoring input event for non-text control");
                        return;
                    }
                }
                self.validate_field(field);
                if field == FieldId::Password {
                    self.validate_field(FieldId::ConfirmPassword);
                }
            }
            FormEvent::SelectGender(value) => {
                self.values.gender = Some(value);
                self.validate_field(FieldId::Gender);
            }
            FormEvent::SelectCountry(value) => {
                self.values.country = value;
                self.validate_field(FieldId::Country);
            }
            FormEvent::SetTerms(checked) => {
                self.values.terms = checked;
                self.validate_field(FieldId::Terms);
            }
            FormEvent::Submit => {
                let valid = self.validate_all();
                if valid {
                    self.summary = Some(Summary::from_values(&self.values, &self.config));
                    tracing::debug!("submit accepted, summary rendered");
                } else {
                    tracing::debug!("submit blocked, form invalid");
                }
            }
        }
        self.sync_submit_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_input_revalidates_confirm() {
        let mut form = RegistrationForm::with_defaults();
        form.dispatch(FormEvent::Input(
            FieldId::ConfirmPassword,
            "OldSecret1".to_string(),
        ));
        form.dispatch(FormEvent::Input(FieldId::Password, "OldSecret1".to_string()));
        assert!(form.status(FieldId::ConfirmPassword).is_hidden());

        // Editing the password breaks the match again
        form.dispatch(FormEvent::Input(FieldId::Password, "NewSecret1".to_string()));
        assert_eq!(
            form.status(FieldId::ConfirmPassword).message,
            "Passwords must match."
        );
    }

    #[test]
    fn test_change_events_flip_their_field() {
        let mut form = RegistrationForm::with_defaults();
        assert!(!form.status(FieldId::Gender).valid);

        form.dispatch(FormEvent::SelectGender("male".to_string()));
        assert!(form.status(FieldId::Gender).valid);

        form.dispatch(FormEvent::SelectCountry("ca".to_string()));
        assert!(form.status(FieldId::Country).valid);

        form.dispatch(FormEvent::SetTerms(true));
        assert!(form.status(FieldId::Terms).valid);

        form.dispatch(FormEvent::SetTerms(false));
        assert!(!form.status(FieldId::Terms).valid);
    }

    #[test]
    fn test_invalid_submit_blocks_and_keeps_errors() {
        let mut form = RegistrationForm::with_defaults();
        form.dispatch(FormEvent::Submit);
        assert!(form.summary().is_none());
        assert!(!form.submit_enabled());
        assert!(!form.status(FieldId::FirstName).is_hidden());
    }
}
