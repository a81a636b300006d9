//! Single-customer detail view: load, in-place edit, delete.

use std::sync::Arc;

use tracing::warn;

use crate::api::CustomerApi;
use crate::types::Customer;

/// Routing collaborator. The detail view signals it after a successful
/// delete; everything else about navigation lives outside this crate.
pub trait Navigator: Send + Sync {
    fn navigate_to_list(&self);
}

/// State behind the customer detail view.
pub struct CustomerDetail {
    api: Arc<CustomerApi>,
    navigator: Arc<dyn Navigator>,
    current: Option<Customer>,
    message: String,
}

impl CustomerDetail {
    pub fn new(api: Arc<CustomerApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            navigator,
            current: None,
            message: String::new(),
        }
    }

    pub fn current(&self) -> Option<&Customer> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Customer> {
        self.current.as_mut()
    }

    /// User-facing status message for the last update attempt.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Fetch the record for `id`. On failure the view stays empty and the
    /// error is logged.
    pub async fn load(&mut self, id: i64) {
        self.message.clear();
        match self.api.get(id).await {
            Ok(customer) => self.current = Some(customer),
            Err(err) => warn!("loading customer {id} failed: {err}"),
        }
    }

    /// Submit the full current record. Success and failure both surface as
    /// `message`; the failure text carries the server's reported detail.
    pub async fn update(&mut self) {
        let Some(customer) = self.current.clone() else {
            return;
        };
        match self.api.update(customer.id, &customer).await {
            Ok(updated) => {
                self.current = Some(updated);
                self.message = "The customer was updated successfully!".to_string();
            }
            Err(err) => {
                self.message = format!("The customer could not be updated: {err}");
            }
        }
    }

    /// Delete the current record and navigate back to the list on success.
    /// On failure the view stays unchanged and no navigation happens.
    pub async fn delete(&mut self) {
        let Some(customer) = &self.current else {
            return;
        };
        let id = customer.id;
        match self.api.delete(id).await {
            Ok(()) => self.navigator.navigate_to_list(),
            Err(err) => warn!("deleting customer {id} failed: {err}"),
        }
    }
}
