//! Error types for Fusebill domain operations.

use crate::ids::{IdError, InvoiceId};

/// Result type for Fusebill domain operations.
pub type Result<T> = std::result::Result<T, InvoiceError>;

/// Errors that can occur when constructing Fusebill domain values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvoiceError {
    /// A write-off amount was zero, negative, or not a number.
    #[error("invoice {invoice_id}: write-off amount must be positive, got {amount:.2}")]
    InvalidAmount {
        /// The invoice the write-off targeted.
        invoice_id: InvoiceId,
        /// The rejected amount.
        amount: f64,
    },

    /// Invalid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}
