//! Paginated, filterable customer list.

use std::sync::Arc;

use tracing::warn;

use crate::api::CustomerApi;
use crate::types::{Customer, PageQuery};

/// Page sizes the view offers.
pub const PAGE_SIZES: [u32; 3] = [3, 6, 9];

const DEFAULT_PAGE_SIZE: u32 = PAGE_SIZES[0];

/// Active list filter. At most one of name / country code is set at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    None,
    ByName(String),
    ByCountryCode(String),
}

/// State behind the customer list view.
///
/// `page` is 1-based for display; requests convert to the API's 0-based
/// convention. Every state change issues exactly one request and replaces
/// the displayed collection on success; on failure the previous collection
/// stays on screen and the error is logged.
pub struct CustomerList {
    api: Arc<CustomerApi>,
    customers: Vec<Customer>,
    count: u64,
    page: u32,
    page_size: u32,
    filter: Filter,
}

impl CustomerList {
    pub fn new(api: Arc<CustomerApi>) -> Self {
        Self {
            api,
            customers: Vec::new(),
            count: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter: Filter::None,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Total element count across all pages, for pagination controls.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    fn query(&self) -> PageQuery {
        PageQuery::new(self.page - 1, self.page_size)
    }

    /// Re-issue the query for the current page/size/filter and replace the
    /// displayed collection with the response.
    pub async fn refresh(&mut self) {
        let result = match &self.filter {
            Filter::None => self.api.list(self.query()).await,
            Filter::ByName(name) => self.api.find_by_name(name, self.query()).await,
            Filter::ByCountryCode(code) => self.api.find_by_country_code(code, self.query()).await,
        };
        match result {
            Ok(page) => {
                self.customers = page.content;
                self.count = page.total_elements;
            }
            Err(err) => warn!("customer list refresh failed: {err}"),
        }
    }

    /// Filter by name; clears any country-code filter. An empty name drops
    /// back to the unfiltered listing.
    pub async fn filter_by_name(&mut self, name: &str) {
        self.filter = if name.is_empty() {
            Filter::None
        } else {
            Filter::ByName(name.to_string())
        };
        self.refresh().await;
    }

    /// Filter by country code; clears any name filter.
    pub async fn filter_by_country_code(&mut self, code: &str) {
        self.filter = if code.is_empty() {
            Filter::None
        } else {
            Filter::ByCountryCode(code.to_string())
        };
        self.refresh().await;
    }

    pub async fn clear_filter(&mut self) {
        self.filter = Filter::None;
        self.refresh().await;
    }

    pub async fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.refresh().await;
    }

    /// Changing the page size always jumps back to the first page.
    pub async fn set_page_size(&mut self, size: u32) {
        self.page_size = size;
        self.page = 1;
        self.refresh().await;
    }
}
