//! Identifier types for Fusebill records.
//!
//! Fusebill identifies invoices with integer ids on the wire, but call
//! sites frequently hold them as strings (CSV exports, URL segments).
//! [`InvoiceId`] accepts both: it serializes as a bare integer and parses
//! from decimal strings, rejecting anything that is not a valid id
//! instead of silently collapsing to zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Fusebill invoice identifier.
///
/// Serialized as a bare integer (`"invoiceId": 8812` on the wire).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(u64);

impl InvoiceId {
    /// Create an invoice id from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the numeric value of the id.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl FromStr for InvoiceId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.parse::<u64>().map_err(|_| IdError::InvalidInvoiceId {
            input: s.to_string(),
        })?;
        Ok(Self(id))
    }
}

impl From<u64> for InvoiceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvoiceId({})", self.0)
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a valid decimal invoice id.
    #[error("invalid invoice id: {input:?}")]
    InvalidInvoiceId {
        /// The rejected input.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_id_parse_roundtrip() {
        let id: InvoiceId = "8812".parse().unwrap();
        assert_eq!(id, InvoiceId::new(8812));
        assert_eq!(id.to_string(), "8812");
    }

    #[test]
    fn invoice_id_rejects_garbage() {
        assert!("".parse::<InvoiceId>().is_err());
        assert!("12abc".parse::<InvoiceId>().is_err());
        assert!("-4".parse::<InvoiceId>().is_err());
    }

    #[test]
    fn invoice_id_serializes_as_number() {
        let json = serde_json::to_string(&InvoiceId::new(42)).unwrap();
        assert_eq!(json, "42");

        let parsed: InvoiceId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, InvoiceId::new(42));
    }
}
