use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select your role.")]
    MissingRole,
}

/// Raw form field values, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadInput {
    pub email: String,
    pub role: String,
    pub org: String,
}

/// Row written to the `leads` table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadRecord {
    pub email: String,
    pub role: String,
    pub org: Option<String>,
}

impl LeadInput {
    pub fn validate(&self) -> Result<LeadRecord, ValidationError> {
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.role.is_empty() {
            return Err(ValidationError::MissingRole);
        }

        let org = self.org.trim();
        Ok(LeadRecord {
            email: email.to_string(),
            role: self.role.clone(),
            org: (!org.is_empty()).then(|| org.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(email: &str, role: &str, org: &str) -> LeadInput {
        LeadInput {
            email: email.into(),
            role: role.into(),
            org: org.into(),
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_checked_before_role() {
        assert_eq!(input("nope", "", "").validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(input("a@b.co", "", "").validate(), Err(ValidationError::MissingRole));
    }

    #[test]
    fn trims_and_nulls_blank_org() {
        let lead = input("  a@b.co ", "student", "   ").validate().unwrap();
        assert_eq!(lead.email, "a@b.co");
        assert_eq!(lead.org, None);

        let lead = input("a@b.co", "recruiter", " Acme ").validate().unwrap();
        assert_eq!(lead.org.as_deref(), Some("Acme"));
    }

    #[test]
    fn serializes_null_org() {
        let lead = input("a@b.co", "student", "").validate().unwrap();
        let body = serde_json::to_string(&[&lead]).unwrap();
        assert_eq!(body, r#"[{"email":"a@b.co","role":"student","org":null}]"#);
    }

    #[test]
    fn messages_match_toasts() {
        assert_eq!(ValidationError::MissingRole.to_string(), "Please select your role.");
    }
}
