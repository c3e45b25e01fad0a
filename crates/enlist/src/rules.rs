// File: src/rules.rs
// Purpose: Per-field validation rules mapping current values to a status + message

use crate::field::{FieldId, FieldStatus};
use crate::values::FormValues;
use enlist_validation::{
    contains_at_sign, has_ascii_uppercase, is_accepted, is_blank, is_selected, matches_exactly,
    meets_min_length, non_empty_choice,
};

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Evaluate the rule for one field against the current values
pub fn evaluate(field: FieldId, values: &FormValues) -> FieldStatus {
    match field {
        FieldId::FirstName => first_name(values),
        FieldId::LastName => last_name(values),
        FieldId::Email => email(values),
        FieldId::Password => password(values),
        FieldId::ConfirmPassword => confirm_password(values),
        FieldId::Gender => gender(values),
        FieldId::Country => country(values),
        FieldId::Terms => terms(values),
    }
}

pub fn first_name(values: &FormValues) -> FieldStatus {
    if is_blank(&values.first_name) {
        FieldStatus::fail("First name is required.")
    } else {
        FieldStatus::ok()
    }
}

/// Last name carries no rule; evaluating it clears any stale error
pub fn last_name(_values: &FormValues) -> FieldStatus {
    FieldStatus::ok()
}

pub fn email(values: &FormValues) -> FieldStatus {
    if contains_at_sign(values.email.trim()) {
        FieldStatus::ok()
    } else {
        FieldStatus::fail("Email must contain \"@\".")
    }
}

pub fn password(values: &FormValues) -> FieldStatus {
    let has_min = meets_min_length(&values.password, MIN_PASSWORD_LENGTH);
    let has_upper = has_ascii_uppercase(&values.password);

    if has_min && has_upper {
        return FieldStatus::ok();
    }
    let message = if !has_min && !has_upper {
        "Password must be at least 8 characters and include an uppercase letter."
    } else if !has_min {
        "Password must be at least 8 characters."
    } else {
        "Password must include at least one uppercase letter."
    };
    FieldStatus::fail(message)
}

pub fn confirm_password(values: &FormValues) -> FieldStatus {
    if matches_exactly(&values.confirm_password, &values.password) {
        FieldStatus::ok()
    } else {
        FieldStatus::fail("Passwords must match.")
    }
}

pub fn gender(values: &FormValues) -> FieldStatus {
    if is_selected(values.gender.as_deref()) {
        FieldStatus::ok()
    } else {
        FieldStatus::fail("Please select your gender.")
    }
}

pub fn country(values: &FormValues) -> FieldStatus {
    if non_empty_choice(&values.country) {
        FieldStatus::ok()
    } else {
        FieldStatus::fail("Please select your country.")
    }
}

pub fn terms(values: &FormValues) -> FieldStatus {
    if is_accepted(values.terms) {
        FieldStatus::ok()
    } else {
        FieldStatus::fail("You must agree to the Terms & Conditions.")
    }
}
