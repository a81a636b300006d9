//! Domain DTOs for the customer API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently
//! from the mock-server crate; the integration tests catch schema drift.
//! Field names follow the backend exactly: the page envelope uses Spring's
//! `content` / `totalElements`, and the country code travels as
//! `country_code`.

use serde::{Deserialize, Serialize};

/// Customer gender, serialized lowercase (`"male"` / `"female"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A customer record as returned by the API.
///
/// `id` is server-assigned and immutable; a value of 0 marks a record that
/// has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub country_code: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
}

/// The user-editable fields of a customer, used as the create payload.
///
/// Never carries an identifier — the server assigns one on creation.
/// `gender` stays `None` until the user picks a value; the client-side
/// validation gate rejects submission while it is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub country_code: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl Customer {
    /// The editable fields of this record, for equality checks and re-submission.
    pub fn draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.clone(),
            country_code: self.country_code.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            gender: Some(self.gender),
        }
    }
}

/// One page of customers plus the total count across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub content: Vec<Customer>,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
}

/// Customer count for one country code, computed server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryStatistic {
    pub country_code: String,
    pub count: u64,
}

/// Whether a phone number or email is still free for a new customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAvailability {
    pub available: bool,
}

/// Pagination query parameters, zero-based as the API expects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Render as a query string including the leading `?`, or an empty
    /// string when both parameters are unset.
    pub(crate) fn to_query_string(self) -> String {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={page}"));
        }
        if let Some(size) = self.size {
            params.push(format!("size={size}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}
