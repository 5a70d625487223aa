//! Default [`EmailValidator`] backed by the `validator` crate.

use validator::ValidateEmail;

use crate::config::EmailPolicy;
use crate::error::Result;
use crate::ports::EmailValidator;

/// HTML5 email check restricted by an [`EmailPolicy`].
#[derive(Debug, Clone, Default)]
pub struct StandardEmailValidator {
    policy: EmailPolicy,
}

impl StandardEmailValidator {
    pub fn new(policy: EmailPolicy) -> Self {
        Self { policy }
    }
}

impl EmailValidator for StandardEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool> {
        if email.len() > self.policy.max_length || !email.validate_email() {
            return Ok(false);
        }

        let Some((_, domain)) = email.rsplit_once('@') else {
            return Ok(false);
        };

        Ok(!self
            .policy
            .blocked_domains
            .iter()
            .any(|blocked| blocked.eq_ignore_ascii_case(domain)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let validator = StandardEmailValidator::default();

        assert!(validator.is_valid("valid_email@email.com").unwrap());
        assert!(!validator.is_valid("invalid_email#email.com").unwrap());
        assert!(!validator.is_valid("@email.com").unwrap());
        assert!(!validator.is_valid("").unwrap());
    }

    #[test]
    fn test_max_length() {
        let validator = StandardEmailValidator::new(EmailPolicy {
            max_length: 16,
            ..Default::default()
        });

        assert!(validator.is_valid("short@email.com").unwrap());
        assert!(!validator.is_valid("much_longer@email.com").unwrap());
    }

    #[test]
    fn test_blocked_domains() {
        let validator = StandardEmailValidator::new(EmailPolicy {
            blocked_domains: vec!["mailinator.com".into()],
            ..Default::default()
        });

        assert!(!validator.is_valid("user@mailinator.com").unwrap());
        assert!(!validator.is_valid("user@MailInator.com").unwrap());
        assert!(validator.is_valid("user@gravitalia.com").unwrap());
    }
}
