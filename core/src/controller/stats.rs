//! Read-only per-country customer counts.

use std::sync::Arc;

use tracing::warn;

use crate::api::CustomerApi;
use crate::types::CountryStatistic;

/// State behind the statistics view: one fetch, displayed verbatim.
pub struct Statistics {
    api: Arc<CustomerApi>,
    statistics: Vec<CountryStatistic>,
}

impl Statistics {
    pub fn new(api: Arc<CustomerApi>) -> Self {
        Self {
            api,
            statistics: Vec::new(),
        }
    }

    pub fn statistics(&self) -> &[CountryStatistic] {
        &self.statistics
    }

    pub async fn load(&mut self) {
        match self.api.count_by_country_code().await {
            Ok(statistics) => self.statistics = statistics,
            Err(err) => warn!("loading country statistics failed: {err}"),
        }
    }
}
