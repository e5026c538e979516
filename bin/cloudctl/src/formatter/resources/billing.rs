use cloudclient::models::billing::Card;
use cloudclient::models::billing::CloudCost;
use cloudclient::models::billing::DirectDebit;
use cloudclient::models::billing::Invoice;
use cloudclient::models::billing::InvoiceQuery;
use cloudclient::models::billing::Payment;
use cloudclient::models::billing::RecurringCost;

use super::money;
use crate::formatter::Resource;
use crate::utils::value_or_empty;

impl Resource for Card {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "friendly_name",
        "name",
        "card_number",
        "card_type",
        "expiry",
        "primary_card",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.friendly_name.clone(),
            self.name.clone(),
            self.card_number.clone(),
            self.card_type.clone(),
            self.expiry.clone(),
            self.primary_card.to_string(),
        ]
    }
}

impl Resource for CloudCost {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "server_id",
        "type",
        "quantity",
        "period",
        "usage_since",
        "usage_quantity",
        "price",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.server_id.to_string(),
            self.resource.kind.clone(),
            self.resource.quantity.to_string(),
            self.resource.period.clone(),
            self.resource.usage_since.clone(),
            self.resource.usage_quantity.to_string(),
            money(self.resource.price),
        ]
    }
}

impl Resource for DirectDebit {
    const FIELDS: &'static [&'static str] = &["is_activated"];

    fn values(&self) -> Vec<String> {
        vec![self.is_activated.to_string()]
    }
}

impl Resource for Invoice {
    const FIELDS: &'static [&'static str] = &["id", "date", "paid", "net", "vat", "gross"];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.paid.to_string(),
            money(self.net),
            money(self.vat),
            money(self.gross),
        ]
    }
}

impl Resource for InvoiceQuery {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "contact_id",
        "amount",
        "invoice_ids",
        "contact_method",
        "status",
        "resolution_date",
        "date",
    ];

    fn values(&self) -> Vec<String> {
        let invoices: Vec<_> = self.invoice_ids.iter().map(i32::to_string).collect();
        vec![
            self.id.to_string(),
            self.contact_id.to_string(),
            money(self.amount),
            invoices.join(","),
            self.contact_method.clone(),
            self.status.clone(),
            value_or_empty(&self.resolution_date),
            self.date.clone(),
        ]
    }
}

impl Resource for Payment {
    const FIELDS: &'static [&'static str] =
        &["id", "date", "payment_method", "net", "vat", "gross"];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.payment_method.clone(),
            money(self.net),
            money(self.vat),
            money(self.gross),
        ]
    }
}

impl Resource for RecurringCost {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "description",
        "status",
        "cost_gbp",
        "period",
        "interval",
        "next_payment_at",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.description.clone(),
            self.status.clone(),
            money(self.cost_gbp),
            self.period.clone(),
            self.interval.clone(),
            self.next_payment_at.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use cloudclient::models::billing::Card;
    use cloudclient::models::billing::CloudCost;
    use cloudclient::models::billing::DirectDebit;
    use cloudclient::models::billing::Invoice;
    use cloudclient::models::billing::InvoiceQuery;
    use cloudclient::models::billing::Payment;
    use cloudclient::models::billing::RecurringCost;

    use crate::formatter::Resource;

    fn assert_fields<R: Resource + Default>() {
        assert_eq!(R::FIELDS.len(), R::default().values().len());
    }

    #[test]
    fn fields_match_values() {
        assert_fields::<Card>();
        assert_fields::<CloudCost>();
        assert_fields::<DirectDebit>();
        assert_fields::<Invoice>();
        assert_fields::<InvoiceQuery>();
        assert_fields::<Payment>();
        assert_fields::<RecurringCost>();
    }

    #[test]
    fn invoice_values() {
        let invoice = Invoice {
            id: 7,
            date: "2024-01-31".into(),
            paid: true,
            net: 10.0,
            vat: 2.0,
            gross: 12.0,
        };
        assert_eq!(
            invoice.values(),
            vec!["7", "2024-01-31", "true", "10.00", "2.00", "12.00"],
        );
    }
}
