//! Client core for the customer-management service.
//!
//! # Overview
//! Lists, paginates, filters, creates, updates, and deletes customer records
//! against the `/api/customers` REST resource, and fetches per-country
//! aggregate counts. View controllers ([`controller`]) own the state behind
//! each screen and talk to the API through [`CustomerApi`] only; rendering
//! and routing are external collaborators.
//!
//! # Design
//! - Endpoint logic is split into deterministic `build_*` / `parse_*`
//!   methods on a stateless [`CustomerClient`]; the async
//!   [`transport::HttpTransport`] seam executes the round-trips, so all
//!   request/response handling is unit-testable with plain data.
//! - The base URL is injected at construction; there is no ambient global.
//! - Every operation surfaces exactly one success or one failure; no
//!   retries, no client-side cache. Controllers recover locally by logging
//!   and keeping displayed state, or by mapping validation rejections onto
//!   form fields.

pub mod api;
pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod validate;

pub use api::CustomerApi;
pub use client::CustomerClient;
pub use controller::{AddCustomer, CustomerDetail, CustomerList, FieldErrorSet, Filter, Navigator, Statistics, PAGE_SIZES};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{CountryStatistic, Customer, CustomerDraft, Gender, IdentityAvailability, Page, PageQuery};
pub use validate::{validate_draft, DraftValidity, FieldValidity, Invalid};
