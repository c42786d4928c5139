//! Input validation helpers
//!
//! Centralized text length limits. SQLite TEXT has no built-in length
//! enforcement, so the use cases cap free-text input before it reaches
//! the store.

use shared::error::SystemError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: department, role, position title, username, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a string is within the length limit
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), SystemError> {
    if value.len() > max_len {
        return Err(SystemError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_len() {
        assert!(validate_text_len("HR", "Name", MAX_NAME_LEN).is_ok());
        let err = validate_text_len(&"x".repeat(201), "Name", MAX_NAME_LEN).unwrap_err();
        assert!(err.message.contains("Name is too long"));
    }
}
