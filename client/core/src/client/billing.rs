//! Implement the billing API methods.
use anyhow::Result;

use cloudclient_utils::ListParameters;
use cloudclient_utils::ResourceIdentifier;

use super::Client;
use crate::models::billing::Card;
use crate::models::billing::CardRequest;
use crate::models::billing::CloudCost;
use crate::models::billing::CreateInvoiceQueryRequest;
use crate::models::billing::DirectDebit;
use crate::models::billing::Invoice;
use crate::models::billing::InvoiceQuery;
use crate::models::billing::Payment;
use crate::models::billing::RecurringCost;

/// Access billing operations.
pub struct BillingClient<'a> {
    inner: &'a Client,
}

impl Client {
    /// Billing operations.
    pub fn billing(&self) -> BillingClient<'_> {
        BillingClient { inner: self }
    }
}

impl<'a> BillingClient<'a> {
    /// Fetch a [`Card`] record from the server.
    pub async fn card(&self, id: i32) -> Result<Card> {
        let path = format!("billing/v1/cards/{}", id);
        let reference = ResourceIdentifier::reference("card", id);
        self.inner.fetch(&path, reference).await
    }

    /// List payment cards registered with the account.
    pub async fn cards(&self, params: &ListParameters) -> Result<Vec<Card>> {
        self.inner.fetch_all("billing/v1/cards", params).await
    }

    /// Fetch a [`CloudCost`] record from the server.
    pub async fn cloud_cost(&self, id: i32) -> Result<CloudCost> {
        let path = format!("billing/v1/cloud-costs/{}", id);
        let reference = ResourceIdentifier::reference("cloud cost", id);
        self.inner.fetch(&path, reference).await
    }

    /// List cloud costs billed to the account.
    pub async fn cloud_costs(&self, params: &ListParameters) -> Result<Vec<CloudCost>> {
        self.inner.fetch_all("billing/v1/cloud-costs", params).await
    }

    /// Register a new payment card and return its ID.
    pub async fn create_card(&self, request: &CardRequest) -> Result<i32> {
        self.inner.create("billing/v1/cards", request).await
    }

    /// Raise a new invoice query and return its ID.
    pub async fn create_invoice_query(&self, request: &CreateInvoiceQueryRequest) -> Result<i32> {
        self.inner.create("billing/v1/invoice-queries", request).await
    }

    /// Remove a payment card from the account.
    pub async fn delete_card(&self, id: i32) -> Result<()> {
        let url = self.inner.url(&format!("billing/v1/cards/{}", id));
        let request = self.inner.client.delete(url);
        let reference = ResourceIdentifier::reference("card", id);
        self.inner.execute(request, reference).await
    }

    /// Fetch the account [`DirectDebit`] details.
    pub async fn direct_debit(&self) -> Result<DirectDebit> {
        let reference = ResourceIdentifier::reference("direct debit", "account");
        self.inner.fetch("billing/v1/direct-debit", reference).await
    }

    /// Fetch an [`Invoice`] record from the server.
    pub async fn invoice(&self, id: i32) -> Result<Invoice> {
        let path = format!("billing/v1/invoices/{}", id);
        let reference = ResourceIdentifier::reference("invoice", id);
        self.inner.fetch(&path, reference).await
    }

    /// Fetch an [`InvoiceQuery`] record from the server.
    pub async fn invoice_query(&self, id: i32) -> Result<InvoiceQuery> {
        let path = format!("billing/v1/invoice-queries/{}", id);
        let reference = ResourceIdentifier::reference("invoice query", id);
        self.inner.fetch(&path, reference).await
    }

    /// List invoice queries raised by the account.
    pub async fn invoice_queries(&self, params: &ListParameters) -> Result<Vec<InvoiceQuery>> {
        self.inner
            .fetch_all("billing/v1/invoice-queries", params)
            .await
    }

    /// List invoices issued to the account.
    pub async fn invoices(&self, params: &ListParameters) -> Result<Vec<Invoice>> {
        self.inner.fetch_all("billing/v1/invoices", params).await
    }

    /// Update attributes of a payment card.
    pub async fn patch_card(&self, id: i32, request: &CardRequest) -> Result<()> {
        let url = self.inner.url(&format!("billing/v1/cards/{}", id));
        let request = self.inner.client.patch(url).json(request);
        let reference = ResourceIdentifier::reference("card", id);
        self.inner.execute(request, reference).await
    }

    /// Fetch a [`Payment`] record from the server.
    pub async fn payment(&self, id: i32) -> Result<Payment> {
        let path = format!("billing/v1/payments/{}", id);
        let reference = ResourceIdentifier::reference("payment", id);
        self.inner.fetch(&path, reference).await
    }

    /// List payments made by the account.
    pub async fn payments(&self, params: &ListParameters) -> Result<Vec<Payment>> {
        self.inner.fetch_all("billing/v1/payments", params).await
    }

    /// Fetch a [`RecurringCost`] record from the server.
    pub async fn recurring_cost(&self, id: i32) -> Result<RecurringCost> {
        let path = format!("billing/v1/recurring-costs/{}", id);
        let reference = ResourceIdentifier::reference("recurring cost", id);
        self.inner.fetch(&path, reference).await
    }

    /// List costs billed to the account at regular intervals.
    pub async fn recurring_costs(&self, params: &ListParameters) -> Result<Vec<RecurringCost>> {
        self.inner
            .fetch_all("billing/v1/recurring-costs", params)
            .await
    }
}
