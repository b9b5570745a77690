//! Validators shared by resource payloads.

use std::borrow::Cow;
use validator::ValidationError;

/// Rejects strings that are empty or whitespace only.
///
/// Use with `#[validate(custom(function = "resource::validation::not_blank"))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        for value in ["", " ", "\t\n"] {
            let err = not_blank(value).unwrap_err();
            assert_eq!(err.code, "blank");
        }
    }

    #[test]
    fn padded_values_are_accepted() {
        assert!(not_blank(" Engineering ").is_ok());
    }
}
