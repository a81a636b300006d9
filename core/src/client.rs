//! Stateless HTTP request builder and response parser for the customer API.
//!
//! # Design
//! `CustomerClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]; the transport executes the round-trip in between, so
//! everything here stays deterministic and free of I/O.
//!
//! The resource path is fixed at `/api/customers`; only the host part is
//! injected. Path segments are percent-encoded because names and phone
//! numbers legitimately contain spaces and parentheses.

use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Customer, CustomerDraft, CountryStatistic, IdentityAvailability, Page, PageQuery};

const RESOURCE_PATH: &str = "/api/customers";

/// Shape of a 4xx body carrying server-side validation messages.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<String>,
}

/// Stateless request builder / response parser for the customer API.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    base_url: String,
}

impl CustomerClient {
    /// `base_url` is the host part only, e.g. `http://localhost:8181`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: format!("{}{RESOURCE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    fn get(&self, tail: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{tail}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json_body<T: serde::Serialize>(
        &self,
        method: HttpMethod,
        tail: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: format!("{}{tail}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list(&self, query: PageQuery) -> HttpRequest {
        self.get(&query.to_query_string())
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        self.get(&format!("/{id}"))
    }

    pub fn build_find_by_name(&self, name: &str, query: PageQuery) -> HttpRequest {
        self.get(&format!(
            "/name/{}{}",
            encode_segment(name),
            query.to_query_string()
        ))
    }

    pub fn build_find_by_country_code(&self, code: &str, query: PageQuery) -> HttpRequest {
        self.get(&format!(
            "/country_code/{}{}",
            encode_segment(code),
            query.to_query_string()
        ))
    }

    pub fn build_find_by_phone(&self, phone: &str) -> HttpRequest {
        self.get(&format!("/phone/{}", encode_segment(phone)))
    }

    pub fn build_count_by_country_code(&self) -> HttpRequest {
        self.get("/count/country_code")
    }

    pub fn build_phone_available(&self, phone: &str) -> HttpRequest {
        self.get(&format!("/available/phone/{}", encode_segment(phone)))
    }

    pub fn build_email_available(&self, email: &str) -> HttpRequest {
        self.get(&format!("/available/email/{}", encode_segment(email)))
    }

    pub fn build_create(&self, draft: &CustomerDraft) -> Result<HttpRequest, ApiError> {
        self.with_json_body(HttpMethod::Post, "", draft)
    }

    /// The detail view submits the full current record; the path id is
    /// authoritative on the server side.
    pub fn build_update(&self, id: i64, record: &Customer) -> Result<HttpRequest, ApiError> {
        self.with_json_body(HttpMethod::Put, &format!("/{id}"), record)
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_page(&self, response: HttpResponse) -> Result<Page, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_created(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_statistics(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<CountryStatistic>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_availability(
        &self,
        response: HttpResponse,
    ) -> Result<IdentityAvailability, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    /// Delete responds 200 with an empty body; any 2xx counts as success.
    pub fn parse_deleted(&self, response: HttpResponse) -> Result<(), ApiError> {
        if (200..300).contains(&response.status) {
            Ok(())
        } else {
            Err(error_from(response))
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(error_from(response.clone()))
}

/// Map a non-success response to the appropriate `ApiError` variant.
///
/// A 4xx body of the form `{"errors": ["<field>: <message>", ...]}` is the
/// server's structured validation rejection; anything else stays raw.
fn error_from(response: HttpResponse) -> ApiError {
    if response.status == 404 {
        return ApiError::NotFound;
    }
    if (400..500).contains(&response.status) {
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&response.body) {
            return ApiError::Validation {
                errors: body.errors,
            };
        }
    }
    ApiError::Http {
        status: response.status,
        body: response.body,
    }
}

/// Percent-encode one path segment (RFC 3986 unreserved set kept verbatim).
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
