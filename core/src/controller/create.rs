//! New-customer form: draft state, validation gate, and mapping of
//! server-side validation messages back onto form fields.

use std::sync::Arc;

use tracing::warn;

use crate::api::CustomerApi;
use crate::error::ApiError;
use crate::types::CustomerDraft;
use crate::validate::{validate_draft, DraftValidity, FieldValidity, Invalid};

/// Accumulated backend error text per form field, for display next to the
/// field. Reset on every failed submission before being repopulated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorSet {
    pub name: String,
    pub country_code: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
}

/// State behind the add-customer form.
pub struct AddCustomer {
    api: Arc<CustomerApi>,
    draft: CustomerDraft,
    validity: DraftValidity,
    errors: FieldErrorSet,
    submitted: bool,
}

impl AddCustomer {
    pub fn new(api: Arc<CustomerApi>) -> Self {
        Self {
            api,
            draft: CustomerDraft::default(),
            validity: DraftValidity::default(),
            errors: FieldErrorSet::default(),
            submitted: false,
        }
    }

    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CustomerDraft {
        &mut self.draft
    }

    pub fn validity(&self) -> &DraftValidity {
        &self.validity
    }

    pub fn errors(&self) -> &FieldErrorSet {
        &self.errors
    }

    /// Whether the last submission succeeded. The draft is kept as-is after
    /// success; the user starts a new entry explicitly via [`Self::new_customer`].
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Validate and submit the draft. Only the editable fields travel to the
    /// server — never an identifier. A validation rejection is mapped onto
    /// the individual form fields; any other failure is logged and leaves
    /// the form untouched.
    pub async fn save(&mut self) {
        self.validity = validate_draft(&self.draft);
        if !self.validity.is_valid() {
            return;
        }
        match self.api.create(&self.draft).await {
            Ok(_) => self.submitted = true,
            Err(ApiError::Validation { errors }) => self.apply_backend_errors(&errors),
            Err(err) => warn!("customer creation failed: {err}"),
        }
    }

    /// Map server-reported error strings onto form fields.
    ///
    /// Compatibility shim over the server's free-text messages: each string
    /// is matched against the known field prefixes in priority order and the
    /// first hit wins. The backend spells the country-code field
    /// `countryCode`. Strings matching no known prefix are dropped, which
    /// mirrors the historical behavior of this form.
    fn apply_backend_errors(&mut self, errors: &[String]) {
        self.errors = FieldErrorSet::default();
        for error in errors {
            let slot = if error.contains("name:") {
                self.validity.name = FieldValidity::invalid(Invalid::BackendRejected);
                &mut self.errors.name
            } else if error.contains("countryCode:") {
                self.validity.country_code = FieldValidity::invalid(Invalid::BackendRejected);
                &mut self.errors.country_code
            } else if error.contains("phone:") {
                self.validity.phone = FieldValidity::invalid(Invalid::BackendRejected);
                &mut self.errors.phone
            } else if error.contains("email:") {
                self.validity.email = FieldValidity::invalid(Invalid::BackendRejected);
                &mut self.errors.email
            } else if error.contains("gender:") {
                self.validity.gender = FieldValidity::invalid(Invalid::BackendRejected);
                &mut self.errors.gender
            } else {
                continue;
            };
            slot.push_str(error);
            slot.push_str("\n ");
        }
    }

    /// Reset the form for a fresh entry.
    pub fn new_customer(&mut self) {
        self.draft = CustomerDraft::default();
        self.validity = DraftValidity::default();
        self.errors = FieldErrorSet::default();
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::ScriptedTransport;
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

    fn form(transport: Arc<ScriptedTransport>) -> AddCustomer {
        AddCustomer::new(Arc::new(CustomerApi::new("http://localhost:8181", transport)))
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_api() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut form = form(transport.clone());
        form.save().await;

        assert_eq!(transport.request_count(), 0);
        assert!(!form.submitted());
        assert!(!form.validity().is_valid());
    }

    #[tokio::test]
    async fn successful_save_marks_submitted_and_keeps_draft() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(
            201,
            r#"{"id":5,"name":"Ana","country_code":"US","phone":"(555) 123-4567","email":"ana@x.com","gender":"female"}"#,
        );

        let mut form = form(transport);
        *form.draft_mut() = valid_draft();
        form.save().await;

        assert!(form.submitted());
        assert_eq!(form.draft().name, "Ana");
    }

    #[tokio::test]
    async fn server_error_string_marks_matching_field() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(400, r#"{"errors":["name: too short"]}"#);

        let mut form = form(transport);
        *form.draft_mut() = valid_draft();
        form.save().await;

        assert!(!form.submitted());
        assert_eq!(
            form.validity().name.reason,
            Some(Invalid::BackendRejected)
        );
        assert!(form.errors().name.contains("name: too short"));
        assert!(form.validity().phone.valid);
        assert!(form.errors().phone.is_empty());
        assert!(form.errors().email.is_empty());
    }

    #[tokio::test]
    async fn backend_country_code_spelling_maps_to_country_code_field() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(
            400,
            r#"{"errors":["countryCode: invalid country code","email: already taken"]}"#,
        );

        let mut form = form(transport);
        *form.draft_mut() = valid_draft();
        form.save().await;

        assert_eq!(
            form.validity().country_code.reason,
            Some(Invalid::BackendRejected)
        );
        assert!(form.errors().country_code.contains("countryCode: invalid country code"));
        assert!(form.errors().email.contains("email: already taken"));
    }

    #[tokio::test]
    async fn unrecognized_error_string_is_dropped() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(400, r#"{"errors":["foo: bar"]}"#);

        let mut form = form(transport);
        *form.draft_mut() = valid_draft();
        form.save().await;

        assert_eq!(*form.errors(), FieldErrorSet::default());
        assert!(form.validity().is_valid());
    }

    #[tokio::test]
    async fn errors_reset_between_failed_submissions_then_accumulate_within_one() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(
            400,
            r#"{"errors":["phone: invalid phone number","phone: already taken"]}"#,
        );
        transport.push_ok(400, r#"{"errors":["email: already taken"]}"#);

        let mut form = form(transport);
        *form.draft_mut() = valid_draft();
        form.save().await;
        assert_eq!(
            form.errors().phone,
            "phone: invalid phone number\n phone: already taken\n "
        );

        form.save().await;
        assert!(form.errors().phone.is_empty(), "reset before repopulation");
        assert!(form.errors().email.contains("email: already taken"));
    }

    #[tokio::test]
    async fn new_customer_resets_everything() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(
            201,
            r#"{"id":5,"name":"Ana","country_code":"US","phone":"(555) 123-4567","email":"ana@x.com","gender":"female"}"#,
        );

        let mut form = form(transport);
        *form.draft_mut() = valid_draft();
        form.save().await;
        assert!(form.submitted());

        form.new_customer();
        assert!(!form.submitted());
        assert_eq!(*form.draft(), CustomerDraft::default());
        assert_eq!(*form.errors(), FieldErrorSet::default());
    }
}
