// File: src/main.rs
// Purpose: Scripted registration session against the enlist form kit

use anyhow::{Context, Result};
use enlist::{FieldId, FormConfig, FormEvent, RegistrationForm};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("enlist demo starting...");

    let config = FormConfig::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        FormConfig::default()
    });

    let mut form = RegistrationForm::new(config);
    info!(submit_enabled = form.submit_enabled(), "form initialized");

    // A submit attempt on the untouched form is blocked
    form.dispatch(FormEvent::Submit);
    println!(
        "Blocked submit: {} field error(s) visible",
        FieldId::ALL
            .iter()
            .filter(|field| !form.status(**field).valid)
            .count()
    );

    // The user fills the form in
    let session = [
        FormEvent::Input(FieldId::FirstName, "Ann".to_string()),
        FormEvent::Input(FieldId::LastName, "Lee".to_string()),
        FormEvent::Input(FieldId::Email, "a@b.com".to_string()),
        FormEvent::Input(FieldId::Password, "Secret1!".to_string()),
        FormEvent::Input(FieldId::ConfirmPassword, "Secret1!".to_string()),
        FormEvent::SelectGender("female".to_string()),
        FormEvent::SelectCountry("fr".to_string()),
        FormEvent::SetTerms(true),
    ];
    for event in session {
        form.dispatch(event);
    }
    println!("Form filled, submit enabled: {}", form.submit_enabled());

    form.dispatch(FormEvent::Submit);
    let summary = form
        .summary()
        .context("summary must exist after a valid submit")?;
    println!("Summary: {}", serde_json::to_string_pretty(summary)?);

    println!("\n--- Rendered page ---\n{}", form.render_page().into_string());

    Ok(())
}
