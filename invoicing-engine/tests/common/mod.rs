//! Test helper module for invoicing-engine integration tests.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use domain_core::MoneyRounding;
use invoicing_engine::models::{
    CreateInvoice, CreatePayment, Invoice, InvoiceItem, InvoiceStatus, Payment, PaymentMethod,
};
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn utc(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 instant")
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid ISO date")
}

pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal")
}

/// Builder for invoices with sensible defaults.
pub struct InvoiceBuilder {
    input: CreateInvoice,
}

impl InvoiceBuilder {
    pub fn new(number: &str) -> Self {
        Self {
            input: CreateInvoice {
                client_id: Uuid::new_v4(),
                client_name: "Farmer Emir Kovačević".to_string(),
                invoice_number: number.to_string(),
                issue_date: date("2025-04-01"),
                due_date: date("2025-04-15"),
                status: InvoiceStatus::Sent,
                items: vec![InvoiceItem::new("Crop spraying", dec("2"), dec("500"))],
                tax_rate: dec("17"),
                stated_total: None,
                notes: None,
            },
        }
    }

    pub fn client(mut self, name: &str) -> Self {
        self.input.client_name = name.to_string();
        self
    }

    pub fn issued(mut self, issue: &str) -> Self {
        self.input.issue_date = date(issue);
        self
    }

    pub fn due(mut self, due: &str) -> Self {
        self.input.due_date = date(due);
        self
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.input.status = status;
        self
    }

    pub fn items(mut self, items: Vec<InvoiceItem>) -> Self {
        self.input.items = items;
        self
    }

    pub fn tax_rate(mut self, rate: &str) -> Self {
        self.input.tax_rate = dec(rate);
        self
    }

    pub fn stated_total(mut self, total: &str) -> Self {
        self.input.stated_total = Some(dec(total));
        self
    }

    pub fn build(self) -> Invoice {
        Invoice::try_new(self.input, MoneyRounding::default()).expect("valid invoice")
    }
}

pub fn payment(invoice: &Invoice, on: &str, amount: &str) -> Payment {
    Payment::try_new(CreatePayment {
        invoice_id: invoice.id(),
        invoice_number: invoice.invoice_number().to_string(),
        client_name: invoice.client_name().to_string(),
        date: date(on),
        amount: dec(amount),
        method: PaymentMethod::BankTransfer,
        reference: None,
        notes: None,
    })
    .expect("valid payment")
}
