// Enlist - registration form validation kit
// Typed form state with live per-field errors, submit gating, and Maud rendering

pub mod config;
pub mod event;
pub mod field;
pub mod render;
pub mod rules;
pub mod state;
pub mod summary;
pub mod validator;
pub mod values;

// Re-export core types
pub use config::{ChoiceOption, FieldLabels, FormCaptions, FormConfig};
pub use event::FormEvent;
pub use field::{FieldId, FieldStatus};
pub use state::FormState;
pub use summary::Summary;
pub use validator::RegistrationForm;
pub use values::FormValues;

// Re-export Maud for templates
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
