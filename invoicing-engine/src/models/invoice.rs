//! Invoice model for invoicing-engine.

use super::InvoiceItem;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use domain_core::query::{DateRange, Searchable, SortFields};
use domain_core::money::{checked_add, checked_sum};
use domain_core::{DomainError, MoneyRounding, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Stored invoice status, as last written by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            "cancelled" => Ok(InvoiceStatus::Cancelled),
            other => Err(DomainError::invalid(format!("unknown invoice status '{}'", other))),
        }
    }
}

/// Input for creating an invoice.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoice {
    pub client_id: Uuid,
    #[validate(length(min = 1))]
    pub client_name: String,
    #[validate(length(min = 1))]
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItem>,
    /// Percentage, e.g. `17` for 17 %.
    pub tax_rate: Decimal,
    /// Total as stored by the caller, checked against the recomputed one.
    #[serde(default)]
    pub stated_total: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Recomputed money figures for an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// A validated invoice.
///
/// Construction checks quantities, prices and the tax rate once; the totals
/// are always recomputed from the line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    id: Uuid,
    client_id: Uuid,
    client_name: String,
    invoice_number: String,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    status: InvoiceStatus,
    items: Vec<InvoiceItem>,
    tax_rate: Decimal,
    stated_total: Option<Decimal>,
    notes: Option<String>,
    totals: InvoiceTotals,
    #[serde(skip)]
    money: MoneyRounding,
}

impl Invoice {
    /// Validate `input` and assign a fresh id.
    pub fn try_new(input: CreateInvoice, money: MoneyRounding) -> Result<Self> {
        Self::with_id(Uuid::new_v4(), input, money)
    }

    /// Validate `input` for an invoice that already has an id.
    pub fn with_id(id: Uuid, input: CreateInvoice, money: MoneyRounding) -> Result<Self> {
        input.validate()?;
        for (position, item) in input.items.iter().enumerate() {
            item.check(position)?;
        }
        if input.tax_rate < Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "tax rate must not be negative, got {}",
                input.tax_rate
            )));
        }
        let totals = compute_totals(&input.items, input.tax_rate, money)?;

        Ok(Self {
            id,
            client_id: input.client_id,
            client_name: input.client_name,
            invoice_number: input.invoice_number,
            issue_date: input.issue_date,
            due_date: input.due_date,
            status: input.status,
            items: input.items,
            tax_rate: input.tax_rate,
            stated_total: input.stated_total,
            notes: input.notes,
            totals,
            money,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn client_id(&self) -> Uuid {
        self.client_id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn stated_total(&self) -> Option<Decimal> {
        self.stated_total
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn money(&self) -> MoneyRounding {
        self.money
    }

    /// Subtotal, tax and total derived from the line items at construction.
    pub fn totals(&self) -> InvoiceTotals {
        self.totals
    }
}

/// The subtotal is rounded first and tax is taken from the rounded subtotal,
/// so `total == subtotal + tax_amount` holds exactly. Amounts outside the
/// decimal range are `InvalidArgument`.
fn compute_totals(
    items: &[InvoiceItem],
    tax_rate: Decimal,
    money: MoneyRounding,
) -> Result<InvoiceTotals> {
    let lines = items
        .iter()
        .map(InvoiceItem::line_total)
        .collect::<Result<Vec<_>>>()?;
    let subtotal = money.round(checked_sum(lines, "invoice subtotal")?);
    let tax = subtotal
        .checked_mul(tax_rate)
        .and_then(|scaled| scaled.checked_div(HUNDRED))
        .ok_or_else(|| DomainError::invalid(format!("tax on {} is out of range", subtotal)))?;
    let tax_amount = money.round(tax);
    Ok(InvoiceTotals {
        subtotal,
        tax_amount,
        total: checked_add(subtotal, tax_amount, "invoice total")?,
    })
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice_number.as_str(), self.client_name.as_str()]
    }
}

impl SortFields for Invoice {
    fn sort_date(&self) -> NaiveDateTime {
        self.issue_date.and_time(NaiveTime::MIN)
    }

    fn sort_amount(&self) -> Decimal {
        self.totals().total
    }

    fn sort_name(&self) -> &str {
        &self.client_name
    }
}

/// Filter parameters for listing invoices. `None` means no filter.
#[derive(Debug, Clone)]
pub struct ListInvoicesFilter {
    pub search: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub client_id: Option<Uuid>,
    pub issued: DateRange<NaiveDate>,
}

impl Default for ListInvoicesFilter {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            client_id: None,
            issued: DateRange::unbounded(),
        }
    }
}
