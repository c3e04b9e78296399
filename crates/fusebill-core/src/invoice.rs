//! Invoice records and write-off requests.

use serde::{Deserialize, Serialize};

use crate::error::InvoiceError;
use crate::ids::InvoiceId;

/// An invoice as returned by the Fusebill API.
///
/// Only the fields the client consumes are modeled; the API returns many
/// more, which are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// The amount still owed on the invoice.
    pub outstanding_balance: f64,
}

/// A request to write off an invoice's outstanding balance.
///
/// Can only be constructed through [`WriteOff::new`], which enforces that
/// the amount is strictly positive before any request is built.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOff {
    invoice_id: InvoiceId,
    amount: f64,
}

impl WriteOff {
    /// Create a write-off request for `invoice_id` over `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::InvalidAmount`] if `amount` is zero,
    /// negative, or not a finite number.
    pub fn new(invoice_id: InvoiceId, amount: f64) -> Result<Self, InvoiceError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InvoiceError::InvalidAmount { invoice_id, amount });
        }

        Ok(Self { invoice_id, amount })
    }

    /// The invoice being written off.
    #[must_use]
    pub const fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    /// The amount being written off.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_off_requires_positive_amount() {
        let id = InvoiceId::new(8812);

        assert!(WriteOff::new(id, 42.5).is_ok());
        assert!(WriteOff::new(id, 0.0).is_err());
        assert!(WriteOff::new(id, -13.37).is_err());
        assert!(WriteOff::new(id, f64::NAN).is_err());
    }

    #[test]
    fn write_off_wire_format() {
        let write_off = WriteOff::new(InvoiceId::new(8812), 42.5).unwrap();
        let json = serde_json::to_value(&write_off).unwrap();

        assert_eq!(json, serde_json::json!({"invoiceId": 8812, "amount": 42.5}));
    }

    #[test]
    fn invoice_decodes_outstanding_balance() {
        let invoice: Invoice = serde_json::from_str(r#"{"outstandingBalance": 42.5}"#).unwrap();
        assert!((invoice.outstanding_balance - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn invoice_ignores_unknown_fields() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"id": 8812, "customerId": 17, "outstandingBalance": 9.99, "status": "Unpaid"}"#,
        )
        .unwrap();
        assert!((invoice.outstanding_balance - 9.99).abs() < f64::EPSILON);
    }
}
