//! Payment model for invoicing-engine.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use domain_core::query::{DateRange, Searchable, SortFields};
use domain_core::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    CreditCard,
    Check,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Check => "check",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "check" => Ok(PaymentMethod::Check),
            other => Err(DomainError::invalid(format!("unknown payment method '{}'", other))),
        }
    }
}

/// Input for recording a payment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub invoice_id: Uuid,
    pub invoice_number: String,
    pub client_name: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub method: PaymentMethod,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A payment received against an invoice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    id: Uuid,
    invoice_id: Uuid,
    invoice_number: String,
    client_name: String,
    date: NaiveDate,
    amount: Decimal,
    method: PaymentMethod,
    reference: Option<String>,
    notes: Option<String>,
}

impl Payment {
    pub fn try_new(input: CreatePayment) -> Result<Self> {
        Self::with_id(Uuid::new_v4(), input)
    }

    /// Validate `input` for a payment that already has an id. The amount
    /// must be positive.
    pub fn with_id(id: Uuid, input: CreatePayment) -> Result<Self> {
        if input.amount <= Decimal::ZERO {
            return Err(DomainError::invalid(format!(
                "payment amount must be positive, got {}",
                input.amount
            )));
        }
        Ok(Self {
            id,
            invoice_id: input.invoice_id,
            invoice_number: input.invoice_number,
            client_name: input.client_name,
            date: input.date,
            amount: input.amount,
            method: input.method,
            reference: input.reference,
            notes: input.notes,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn invoice_id(&self) -> Uuid {
        self.invoice_id
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.invoice_number.as_str(), self.client_name.as_str()];
        if let Some(reference) = &self.reference {
            fields.push(reference.as_str());
        }
        fields
    }
}

impl SortFields for Payment {
    fn sort_date(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    fn sort_amount(&self) -> Decimal {
        self.amount
    }

    fn sort_name(&self) -> &str {
        &self.client_name
    }
}

/// Filter parameters for listing payments. `None` means no filter.
#[derive(Debug, Clone)]
pub struct ListPaymentsFilter {
    pub search: Option<String>,
    pub method: Option<PaymentMethod>,
    pub invoice_id: Option<Uuid>,
    pub received: DateRange<NaiveDate>,
}

impl Default for ListPaymentsFilter {
    fn default() -> Self {
        Self {
            search: None,
            method: None,
            invoice_id: None,
            received: DateRange::unbounded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: &str) -> CreatePayment {
        CreatePayment {
            invoice_id: Uuid::new_v4(),
            invoice_number: "INV-2025-001".to_string(),
            client_name: "Farmer Senad Mehić".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
            amount: amount.parse().unwrap(),
            method: PaymentMethod::BankTransfer,
            reference: Some("TRX-4411".to_string()),
            notes: None,
        }
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(Payment::try_new(input("0")).unwrap_err().is_invalid_argument());
        assert!(Payment::try_new(input("-10")).is_err());
        assert!(Payment::try_new(input("0.01")).is_ok());
    }

    #[test]
    fn method_parses_from_strings() {
        assert_eq!("credit_card".parse::<PaymentMethod>().unwrap(), PaymentMethod::CreditCard);
        assert!("paypal".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn reference_is_searchable() {
        let payment = Payment::try_new(input("100")).unwrap();
        assert!(payment.search_fields().contains(&"TRX-4411"));
    }
}
