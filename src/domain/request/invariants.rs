use super::entity::RequestDescriptor;
use crate::domain::{DomainError, DomainResult};

/// Validates all RequestDescriptor invariants
pub fn validate_request(request: &RequestDescriptor) -> DomainResult<()> {
    validate_action(request)?;
    validate_categories(request)?;
    Ok(())
}

/// Action must be non-empty and not whitespace-only
fn validate_action(request: &RequestDescriptor) -> DomainResult<()> {
    if request.action.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Request action cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Categories, when present, must be non-empty strings
fn validate_categories(request: &RequestDescriptor) -> DomainResult<()> {
    for category in &request.categories {
        if category.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Request categories cannot contain empty entries".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = RequestDescriptor::new("view")
            .with_data("content://documents/42")
            .with_category("browsable");
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_empty_action_fails() {
        let request = RequestDescriptor::new("  ");
        let result = validate_request(&request);
        assert!(result.is_err());

        if let Err(DomainError::InvariantViolation(msg)) = result {
            assert!(msg.contains("action"));
        } else {
            panic!("Expected InvariantViolation error");
        }
    }

    #[test]
    fn test_empty_category_fails() {
        let request = RequestDescriptor::new("view").with_category("");
        assert!(validate_request(&request).is_err());
    }
}
