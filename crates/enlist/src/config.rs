// File: src/config.rs
// Purpose: Form configuration parsing from enlist.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration: captions, field labels, and option lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormCaptions,

    #[serde(default)]
    pub labels: FieldLabels,

    #[serde(default = "default_genders")]
    pub genders: Vec<ChoiceOption>,

    #[serde(default = "default_countries")]
    pub countries: Vec<ChoiceOption>,
}

/// Page and control captions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormCaptions {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_submit")]
    pub submit: String,

    #[serde(default = "default_summary_heading")]
    pub summary_heading: String,
}

/// Label text for every field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldLabels {
    #[serde(default = "default_first_name")]
    pub first_name: String,

    #[serde(default = "default_last_name")]
    pub last_name: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_password")]
    pub password: String,

    #[serde(default = "default_confirm_password")]
    pub confirm_password: String,

    #[serde(default = "default_gender")]
    pub gender: String,

    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_country_placeholder")]
    pub country_placeholder: String,

    #[serde(default = "default_terms")]
    pub terms: String,
}

/// One entry of a radio group or select: submitted value plus display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// Default values
fn default_title() -> String {
    "Create your account".to_string()
}

fn default_submit() -> String {
    "Register".to_string()
}

fn default_summary_heading() -> String {
    "Registration summary".to_string()
}

fn default_first_name() -> String {
    "First name".to_string()
}

fn default_last_name() -> String {
    "Last name".to_string()
}

fn default_email() -> String {
    "Email".to_string()
}

fn default_password() -> String {
    "Password".to_string()
}

fn default_confirm_password() -> String {
    "Confirm password".to_string()
}

fn default_gender() -> String {
    "Gender".to_string()
}

fn default_country() -> String {
    "Country".to_string()
}

fn default_country_placeholder() -> String {
    "Select your country".to_string()
}

fn default_terms() -> String {
    "I agree to the Terms & Conditions".to_string()
}

fn default_genders() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("male", "Male"),
        ChoiceOption::new("female", "Female"),
        ChoiceOption::new("other", "Other"),
    ]
}

fn default_countries() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("au", "Australia"),
        ChoiceOption::new("ca", "Canada"),
        ChoiceOption::new("fr", "France"),
        ChoiceOption::new("in", "India"),
        ChoiceOption::new("gb", "United Kingdom"),
        ChoiceOption::new("us", "United States"),
    ]
}

// Default implementations
impl Default for FormCaptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            submit: default_submit(),
            summary_heading: default_summary_heading(),
        }
    }
}

impl Default for FieldLabels {
    fn default() -> Self {
        Self {
            first_name: default_first_name(),
            last_name: default_last_name(),
            email: default_email(),
            password: default_password(),
            confirm_password: default_confirm_password(),
            gender: default_gender(),
            country: default_country(),
            country_placeholder: default_country_placeholder(),
            terms: default_terms(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form: FormCaptions::default(),
            labels: FieldLabels::default(),
            genders: default_genders(),
            countries: default_countries(),
        }
    }
}

impl FormConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from enlist.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = Self::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./enlist.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("enlist.toml")
    }

    /// Display text for a country value
    pub fn country_label(&self, value: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.form.title, "Create your account");
        assert_eq!(config.labels.first_name, "First name");
        assert_eq!(config.genders.len(), 3);
        assert_eq!(config.country_label("fr"), Some("France"));
        assert_eq!(config.country_label(""), None);
        assert_eq!(config.country_label("zz"), None);
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config = FormConfig::from_str("").unwrap_or_default();
        assert_eq!(config.form.submit, "Register");
        assert!(!config.countries.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml = r#"
            [form]
            title = "Join the beta"

            [[countries]]
            value = "nz"
            label = "New Zealand"
        "#;
        let config = FormConfig::from_str(toml).unwrap();
        assert_eq!(config.form.title, "Join the beta");
        // Omitted captions keep their defaults
        assert_eq!(config.form.submit, "Register");
        assert_eq!(config.labels.email, "Email");
        // Provided list replaces the default one
        assert_eq!(config.countries.len(), 1);
        assert_eq!(config.country_label("nz"), Some("New Zealand"));
        // Untouched list stays default
        assert_eq!(config.genders.len(), 3);
    }
}
