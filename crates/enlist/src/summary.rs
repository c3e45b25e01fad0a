// File: src/summary.rs
// Purpose: The read-only summary rendered after a successful submit

use serde::Serialize;

use crate::config::FormConfig;
use crate::values::FormValues;

/// Placeholder shown for any absent value
const PLACEHOLDER: &str = "-";

/// Display values listed in the post-submit summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub gender: String,
}

impl Summary {
    /// Compute the summary from current values
    ///
    /// The country resolves to the selected option's display text, not its
    /// value; every entry falls back to "-" when absent.
    pub fn from_values(values: &FormValues, config: &FormConfig) -> Self {
        Self {
            full_name: full_name(&values.first_name, &values.last_name),
            email: or_placeholder(values.email.trim()),
            country: config
                .country_label(&values.country)
                .map(str::to_string)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            gender: values
                .gender
                .as_deref()
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

/// First and last name, trimmed and space-joined; "-" when both are empty
fn full_name(first: &str, last: &str) -> String {
    let joined = [first.trim(), last.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    or_placeholder(&joined)
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joining() {
        assert_eq!(full_name("  Ann ", " Lee "), "Ann Lee");
        assert_eq!(full_name("Ann", ""), "Ann");
        assert_eq!(full_name("", "Lee"), "Lee");
        assert_eq!(full_name("  ", ""), "-");
    }

    #[test]
    fn test_country_resolves_to_display_text() {
        let config = FormConfig::default();
        let mut values = FormValues {
            country: "fr".to_string(),
            ..FormValues::default()
        };
        let summary = Summary::from_values(&values, &config);
        assert_eq!(summary.country, "France");

        values.country.clear();
        let summary = Summary::from_values(&values, &config);
        assert_eq!(summary.country, "-");
    }

    #[test]
    fn test_absent_values_become_placeholders() {
        let summary = Summary::from_values(&FormValues::default(), &FormConfig::default());
        assert_eq!(summary.full_name, "-");
        assert_eq!(summary.email, "-");
        assert_eq!(summary.country, "-");
        assert_eq!(summary.gender, "-");
    }
}
