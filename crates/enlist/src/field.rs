// File: src/field.rs
// Purpose: Field identifiers, the element-ID contract, and per-field presentation status

/// The eight controls of the registration form
///
/// Declaration order is the fixed order `validate_all` runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Gender,
    Country,
    Terms,
}

impl FieldId {
    pub const COUNT: usize = 8;

    /// Every field, in validation order
    pub const ALL: [FieldId; FieldId::COUNT] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Gender,
        FieldId::Country,
        FieldId::Terms,
    ];

    /// Element id of the control itself (for the gender group, the shared
    /// radio `name`)
    pub fn control_id(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Gender => "gender",
            FieldId::Country => "country",
            FieldId::Terms => "terms",
        }
    }

    /// Element id of the container the error node lives in
    pub fn container_id(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstNameField",
            FieldId::LastName => "lastNameField",
            FieldId::Email => "emailField",
            FieldId::Password => "passwordField",
            FieldId::ConfirmPassword => "confirmPasswordField",
            FieldId::Gender => "genderField",
            FieldId::Country => "countryField",
            FieldId::Terms => "termsField",
        }
    }

    /// Element id of the error node
    pub fn error_id(self) -> &'static str {
        match self {
            FieldId::FirstName => "error_firstName",
            FieldId::LastName => "error_lastName",
            FieldId::Email => "error_email",
            FieldId::Password => "error_password",
            FieldId::ConfirmPassword => "error_confirmPassword",
            FieldId::Gender => "error_gender",
            FieldId::Country => "error_country",
            FieldId::Terms => "error_terms",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of one rule evaluation: validity plus the message to display
///
/// An empty message means the error node is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub valid: bool,
    pub message: String,
}

impl FieldStatus {
    /// Passing status with no message
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Failing status carrying the message to display
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Whether the error node is hidden
    pub fn is_hidden(&self) -> bool {
        self.message.is_empty()
    }
}
