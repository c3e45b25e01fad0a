// File: src/render.rs
// Purpose: Reconcile form state to HTML markup

use maud::{html, Markup, DOCTYPE};

use crate::field::FieldId;
use crate::validator::RegistrationForm;

impl RegistrationForm {
    /// Render the whole page: document shell, form, and summary (when present)
    pub fn render_page(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.config.form.title) }
                }
                body {
                    h1 { (self.config.form.title) }
                    (self.render_form())
                    (self.render_summary())
                }
            }
        }
    }

    /// Render the form from current state
    ///
    /// Every field renders its container, control, and an always-present
    /// error node; the node carries `hidden` exactly when the message is
    /// empty, and an invalid control carries the `input-error` class.
    pub fn render_form(&self) -> Markup {
        html! {
            form id="registrationForm" {
                (self.text_field(FieldId::FirstName, "text", &self.config.labels.first_name))
                (self.text_field(FieldId::LastName, "text", &self.config.labels.last_name))
                (self.text_field(FieldId::Email, "text", &self.config.labels.email))
                (self.text_field(FieldId::Password, "password", &self.config.labels.password))
                (self.text_field(
                    FieldId::ConfirmPassword,
                    "password",
                    &self.config.labels.confirm_password,
                ))
                (self.gender_group())
                (self.country_select())
                (self.terms_checkbox())
                button id="submitBtn" type="submit" disabled[!self.submit_enabled] {
                    (self.config.form.submit)
                }
            }
        }
    }

    /// Render the post-submit summary; empty markup while none exists
    pub fn render_summary(&self) -> Markup {
        html! {
            @if let Some(summary) = &self.summary {
                section id="summary" class="summary" {
                    h2 { (self.config.form.summary_heading) }
                    dl {
                        dt { "Full name" }
                        dd { (summary.full_name) }
                        dt { "Email" }
                        dd { (summary.email) }
                        dt { "Country" }
                        dd { (summary.country) }
                        dt { "Gender" }
                        dd { (summary.gender) }
                    }
                }
            }
        }
    }

    fn text_field(&self, field: FieldId, input_type: &str, label: &str) -> Markup {
        let status = self.status(field);
        let value = match field {
            FieldId::FirstName => &self.values.first_name,
            FieldId::LastName => &self.values.last_name,
            FieldId::Email => &self.values.email,
            FieldId::Password => &self.values.password,
            FieldId::ConfirmPassword => &self.values.confirm_password,
            _ => unreachable!("not a text field"),
        };
        html! {
            div id=(field.container_id()) class="form-field" {
                label for=(field.control_id()) { (label) }
                input.input-error[!status.valid]
                    id=(field.control_id())
                    name=(field.control_id())
                    type=(input_type)
                    value=(value);
                (self.error_node(field))
            }
        }
    }

    fn gender_group(&self) -> Markup {
        let status = self.status(FieldId::Gender);
        let count = self.config.genders.len();
        html! {
            div id=(FieldId::Gender.container_id()) class="form-field" {
                span class="field-label" { (self.config.labels.gender) }
                @for (index, option) in self.config.genders.iter().enumerate() {
                    label class="radio-option" {
                        // The last radio is the group's nominal input for styling
                        input.input-error[!status.valid && index + 1 == count]
                            type="radio"
                            name=(FieldId::Gender.control_id())
                            value=(option.value)
                            checked[self.values.gender.as_deref() == Some(option.value.as_str())];
                        (option.label)
                    }
                }
                (self.error_node(FieldId::Gender))
            }
        }
    }

    fn country_select(&self) -> Markup {
        let status = self.status(FieldId::Country);
        html! {
            div id=(FieldId::Country.container_id()) class="form-field" {
                label for=(FieldId::Country.control_id()) { (self.config.labels.country) }
                select.input-error[!status.valid]
                    id=(FieldId::Country.control_id())
                    name=(FieldId::Country.control_id()) {
                    option value="" selected[self.values.country.is_empty()] {
                        (self.config.labels.country_placeholder)
                    }
                    @for option in &self.config.countries {
                        option value=(option.value)
                            selected[self.values.country == option.value] {
                            (option.label)
                        }
                    }
                }
                (self.error_node(FieldId::Country))
            }
        }
    }

    fn terms_checkbox(&self) -> Markup {
        let status = self.status(FieldId::Terms);
        html! {
            div id=(FieldId::Terms.container_id()) class="form-field" {
                label for=(FieldId::Terms.control_id()) {
                    input.input-error[!status.valid]
                        id=(FieldId::Terms.control_id())
                        name=(FieldId::Terms.control_id())
                        type="checkbox"
                        checked[self.values.terms];
                    (self.config.labels.terms)
                }
                (self.error_node(FieldId::Terms))
            }
        }
    }

    fn error_node(&self, field: FieldId) -> Markup {
        let status = self.status(field);
        html! {
            small.error-message.hidden[status.is_hidden()] id=(field.error_id()) {
                (status.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_renders_an_error_node() {
        let form = RegistrationForm::with_defaults();
        let markup = form.render_form().into_string();
        for field in FieldId::ALL {
            assert!(
                markup.contains(&format!("id=\"{}\"", field.error_id())),
                "missing error node for {:?}",
                field
            );
        }
    }

    #[test]
    fn test_summary_absent_until_built() {
        let form = RegistrationForm::with_defaults();
        assert!(form.render_summary().into_string().is_empty());
    }
}
