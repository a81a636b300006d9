//! Client-side form validation for customer drafts.
//!
//! # Design
//! Validity is explicit per field: `valid` plus the reason it failed
//! (`Required`, `Pattern`, or `BackendRejected` for server-side rejections
//! mapped back onto the form). The three patterns are the ones the form has
//! always enforced and must not drift from the server's expectations.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::CustomerDraft;

/// Two uppercase letters, e.g. `US`.
pub const COUNTRY_CODE_PATTERN: &str = "^[A-Z]{2}$";
/// Parenthesized area code (1-6 digits), two groups of 3 digits, final group
/// of 1-4 digits; separators are space, dot, or dash.
pub const PHONE_PATTERN: &str = r"^(\(\d{1,6}\))[- .]?(\d{3}[- .]?){2}\d{1,4}$";
/// Simplified `local@domain.tld`, lowercase-biased.
pub const EMAIL_PATTERN: &str = r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}$";

static COUNTRY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COUNTRY_CODE_PATTERN).unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(PHONE_PATTERN).unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Why a field is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    /// The field is empty but required.
    Required,
    /// The value does not match the field's pattern.
    Pattern,
    /// The server rejected the value on a submission attempt.
    BackendRejected,
}

/// Validity of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidity {
    pub valid: bool,
    pub reason: Option<Invalid>,
}

impl FieldValidity {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn invalid(reason: Invalid) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

impl Default for FieldValidity {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validity of every editable field of a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftValidity {
    pub name: FieldValidity,
    pub country_code: FieldValidity,
    pub phone: FieldValidity,
    pub email: FieldValidity,
    pub gender: FieldValidity,
}

impl DraftValidity {
    pub fn is_valid(&self) -> bool {
        self.name.valid
            && self.country_code.valid
            && self.phone.valid
            && self.email.valid
            && self.gender.valid
    }
}

fn check(value: &str, pattern: &Regex) -> FieldValidity {
    if value.is_empty() {
        FieldValidity::invalid(Invalid::Required)
    } else if !pattern.is_match(value) {
        FieldValidity::invalid(Invalid::Pattern)
    } else {
        FieldValidity::ok()
    }
}

/// Validate a draft against the client-side rules. All fields are required;
/// country code, phone, and email must additionally match their patterns.
pub fn validate_draft(draft: &CustomerDraft) -> DraftValidity {
    DraftValidity {
        name: if draft.name.is_empty() {
            FieldValidity::invalid(Invalid::Required)
        } else {
            FieldValidity::ok()
        },
        country_code: check(&draft.country_code, &COUNTRY_CODE_RE),
        phone: check(&draft.phone, &PHONE_RE),
        email: check(&draft.email, &EMAIL_RE),
        gender: match draft.gender {
            Some(_) => FieldValidity::ok(),
            None => FieldValidity::invalid(Invalid::Required),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;

    fn valid_draft() -> CustomerDraft {
        CustomerDraft {
            name: "Ana".to_string(),
            country_code: "US".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "ana@x.com".to_string(),
            gender: Some(Gender::Female),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_draft(&valid_draft()).is_valid());
    }

    #[test]
    fn empty_draft_is_all_required() {
        let validity = validate_draft(&CustomerDraft::default());
        assert!(!validity.is_valid());
        assert_eq!(validity.name.reason, Some(Invalid::Required));
        assert_eq!(validity.country_code.reason, Some(Invalid::Required));
        assert_eq!(validity.phone.reason, Some(Invalid::Required));
        assert_eq!(validity.email.reason, Some(Invalid::Required));
        assert_eq!(validity.gender.reason, Some(Invalid::Required));
    }

    #[test]
    fn country_code_must_be_two_uppercase_letters() {
        for bad in ["us", "USA", "U1", "u"] {
            let draft = CustomerDraft {
                country_code: bad.to_string(),
                ..valid_draft()
            };
            assert_eq!(
                validate_draft(&draft).country_code.reason,
                Some(Invalid::Pattern),
                "{bad:?} should fail"
            );
        }
        let draft = CustomerDraft {
            country_code: "EG".to_string(),
            ..valid_draft()
        };
        assert!(validate_draft(&draft).country_code.valid);
    }

    #[test]
    fn phone_pattern_accepts_documented_shapes() {
        for good in [
            "(555) 123-4567",
            "(1)222.333.4444",
            "(123456)-111-222-3",
            "(20)100200300",
        ] {
            let draft = CustomerDraft {
                phone: good.to_string(),
                ..valid_draft()
            };
            assert!(validate_draft(&draft).phone.valid, "{good:?} should pass");
        }
    }

    #[test]
    fn phone_requires_parenthesized_area_code() {
        for bad in ["555 123 4567", "(1234567) 123 456 7", "(12) 12-345"] {
            let draft = CustomerDraft {
                phone: bad.to_string(),
                ..valid_draft()
            };
            assert_eq!(
                validate_draft(&draft).phone.reason,
                Some(Invalid::Pattern),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn email_pattern_is_lowercase_biased() {
        let draft = CustomerDraft {
            email: "Ana@X.com".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate_draft(&draft).email.reason, Some(Invalid::Pattern));

        let draft = CustomerDraft {
            email: "ana.b+tag@mail.co".to_string(),
            ..valid_draft()
        };
        assert!(validate_draft(&draft).email.valid);
    }
}
