#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Server names: 1 to 63 lowercase letters, digits or hyphens, not starting
/// or ending with a hyphen.
pub fn validate_server_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.len() > 63 {
        return Err(ValidationError::new(field, "must be between 1 and 63 characters"));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::new(
            field,
            "can contain only lowercase letters, numbers and '-'",
        ));
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Err(ValidationError::new(field, "can't start or end with '-'"));
    }
    Ok(())
}

pub fn validate_resource_group_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() > 90 {
        return Err(ValidationError::new(field, "must be between 1 and 90 characters"));
    }
    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '(' | ')'))
    {
        return Err(ValidationError::new(
            field,
            "may only contain alphanumeric characters, dash, underscores, parentheses and periods",
        ));
    }
    if value.ends_with('.') {
        return Err(ValidationError::new(field, "cannot end in a period"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_names() {
        let longest = "a".repeat(63);
        let too_long = "a".repeat(64);
        for ok in ["a", "mi1", "my-instance-01", longest.as_str()] {
            assert!(validate_server_name("name", ok).is_ok(), "{ok}");
        }
        for bad in ["", "-mi", "mi-", "My-Instance", "mi_1", too_long.as_str()] {
            assert!(validate_server_name("name", bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn server_name_error_names_the_field() {
        let err = validate_server_name("name", "Bad").unwrap_err();
        assert_eq!(err.field, "name");
        assert!(err.to_string().starts_with("name: "));
    }

    #[test]
    fn resource_group_names() {
        let longest = "r".repeat(90);
        let too_long = "r".repeat(91);
        for ok in ["rg1", "My_RG-(prod).v2", longest.as_str()] {
            assert!(validate_resource_group_name("resource_group_name", ok).is_ok(), "{ok}");
        }
        for bad in ["", "rg.", "rg/1", "rg 1", too_long.as_str()] {
            assert!(validate_resource_group_name("resource_group_name", bad).is_err(), "{bad}");
        }
    }
}
