//! Input validation helpers
//!
//! Text length limits for free-form input. Lengths are counted in chars.

use crate::ordering::{OrderError, OrderResult};

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Reject text longer than `max_len` chars
pub fn validate_text_len(value: &str, field: &'static str, max_len: usize) -> OrderResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(OrderError::TextTooLong {
            field,
            len,
            max: max_len,
        });
    }
    Ok(())
}

/// Trim a guest name, rejecting blank or overlong input
pub fn normalize_guest_name(value: &str) -> OrderResult<String> {
    let name = value.trim();
    if name.is_empty() {
        return Err(OrderError::BlankGuestName);
    }
    validate_text_len(name, "guest name", MAX_NAME_LEN)?;
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_guest_name() {
        assert_eq!(normalize_guest_name("  Alice ").unwrap(), "Alice");
        assert_eq!(normalize_guest_name("   "), Err(OrderError::BlankGuestName));
        assert_eq!(normalize_guest_name(""), Err(OrderError::BlankGuestName));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let accented = "é".repeat(MAX_NAME_LEN);
        assert!(normalize_guest_name(&accented).is_ok());
        let too_long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            normalize_guest_name(&too_long),
            Err(OrderError::TextTooLong { max: MAX_NAME_LEN, .. })
        ));
    }
}
