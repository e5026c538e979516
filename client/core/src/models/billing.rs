//! Billing API models.
use serde::Deserialize;
use serde::Serialize;

/// A payment card registered with the account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: i32,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_type: String,
    #[serde(default)]
    pub valid_from: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub issue_number: i32,
    #[serde(default)]
    pub primary_card: bool,
}

/// Attributes of a card to create or update.
///
/// Unset attributes are not sent, leaving existing values untouched on update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_card: Option<bool>,
}

/// Cost of a cloud resource billed to the account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudCost {
    pub id: i32,
    #[serde(default)]
    pub server_id: i32,
    #[serde(default)]
    pub resource: CloudCostResource,
}

/// Details of the resource a [`CloudCost`] refers to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudCostResource {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub usage_since: String,
    #[serde(default)]
    pub usage_quantity: i32,
    #[serde(default)]
    pub price: f64,
}

/// Direct debit status of the account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectDebit {
    #[serde(default)]
    pub is_activated: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub net: f64,
    #[serde(default)]
    pub vat: f64,
    #[serde(default)]
    pub gross: f64,
}

/// A query raised about one or more invoices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceQuery {
    pub id: i32,
    #[serde(default)]
    pub contact_id: i32,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub what_was_expected: String,
    #[serde(default)]
    pub what_was_received: String,
    #[serde(default)]
    pub proposed_solution: String,
    #[serde(default)]
    pub invoice_ids: Vec<i32>,
    #[serde(default)]
    pub contact_method: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub resolution_date: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateInvoiceQueryRequest {
    pub contact_id: i32,
    pub amount: f64,
    pub what_was_expected: String,
    pub what_was_received: String,
    pub proposed_solution: String,
    pub invoice_ids: Vec<i32>,
    pub contact_method: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub net: f64,
    #[serde(default)]
    pub vat: f64,
    #[serde(default)]
    pub gross: f64,
}

/// A cost billed to the account at regular intervals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringCost {
    pub id: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cost_gbp: f64,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub interval: String,
    #[serde(default)]
    pub next_payment_at: String,
    #[serde(default)]
    pub created_at: String,
}
