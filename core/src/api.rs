//! Typed async façade over the customer REST API.
//!
//! # Design
//! `CustomerApi` joins the stateless [`CustomerClient`] with an
//! [`HttpTransport`]: each operation builds one request, executes it once,
//! and parses the response. Exactly one success or one failure reaches the
//! caller per call — no retries, no caching. The base URL is injected at
//! construction rather than read from any ambient global.

use std::sync::Arc;

use crate::client::CustomerClient;
use crate::error::ApiError;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{Customer, CustomerDraft, CountryStatistic, IdentityAvailability, Page, PageQuery};

/// Async client for the `/api/customers` resource.
pub struct CustomerApi {
    client: CustomerClient,
    transport: Arc<dyn HttpTransport>,
}

impl CustomerApi {
    pub fn new(base_url: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            client: CustomerClient::new(base_url),
            transport,
        }
    }

    /// Convenience constructor wiring up the production reqwest transport.
    pub fn connect(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self::new(base_url, Arc::new(ReqwestTransport::new()?)))
    }

    pub async fn list(&self, query: PageQuery) -> Result<Page, ApiError> {
        let request = self.client.build_list(query);
        self.client.parse_page(self.transport.execute(request).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Customer, ApiError> {
        let request = self.client.build_get(id);
        self.client
            .parse_customer(self.transport.execute(request).await?)
    }

    pub async fn find_by_name(&self, name: &str, query: PageQuery) -> Result<Page, ApiError> {
        let request = self.client.build_find_by_name(name, query);
        self.client.parse_page(self.transport.execute(request).await?)
    }

    pub async fn find_by_country_code(
        &self,
        code: &str,
        query: PageQuery,
    ) -> Result<Page, ApiError> {
        let request = self.client.build_find_by_country_code(code, query);
        self.client.parse_page(self.transport.execute(request).await?)
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<Customer, ApiError> {
        let request = self.client.build_find_by_phone(phone);
        self.client
            .parse_customer(self.transport.execute(request).await?)
    }

    pub async fn count_by_country_code(&self) -> Result<Vec<CountryStatistic>, ApiError> {
        let request = self.client.build_count_by_country_code();
        self.client
            .parse_statistics(self.transport.execute(request).await?)
    }

    pub async fn phone_available(&self, phone: &str) -> Result<IdentityAvailability, ApiError> {
        let request = self.client.build_phone_available(phone);
        self.client
            .parse_availability(self.transport.execute(request).await?)
    }

    pub async fn email_available(&self, email: &str) -> Result<IdentityAvailability, ApiError> {
        let request = self.client.build_email_available(email);
        self.client
            .parse_availability(self.transport.execute(request).await?)
    }

    pub async fn create(&self, draft: &CustomerDraft) -> Result<Customer, ApiError> {
        let request = self.client.build_create(draft)?;
        self.client
            .parse_created(self.transport.execute(request).await?)
    }

    pub async fn update(&self, id: i64, record: &Customer) -> Result<Customer, ApiError> {
        let request = self.client.build_update(id, record)?;
        self.client
            .parse_customer(self.transport.execute(request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete(id);
        self.client
            .parse_deleted(self.transport.execute(request).await?)
    }
}
