//! Password validation predicates
//!
//! The registration form checks two independent conditions (minimum length
//! and the presence of an ASCII uppercase letter) and picks its message by
//! which of the two failed, so both are exposed separately rather than as a
//! single pass/fail.

/// Length check on the raw (untrimmed) password
pub fn meets_min_length(password: &str, min: usize) -> bool {
    password.len() >= min
}

/// True when the password contains at least one ASCII uppercase letter
pub fn has_ascii_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meets_min_length() {
        assert!(meets_min_length("LongEnough1", 8));
        assert!(meets_min_length("12345678", 8));
        assert!(!meets_min_length("short", 8));
        assert!(!meets_min_length("", 8));
    }

    #[test]
    fn test_has_ascii_uppercase() {
        assert!(has_ascii_uppercase("Secret1"));
        assert!(has_ascii_uppercase("allLower"));
        assert!(!has_ascii_uppercase("longenough"));
        assert!(!has_ascii_uppercase("1234!@#$"));
        // Non-ASCII uppercase does not count
        assert!(!has_ascii_uppercase("über Ärger"));
    }
}
