//! Core types for the Fusebill client.
//!
//! This crate provides the domain types shared by the Fusebill SDK:
//!
//! - **Identifiers**: [`InvoiceId`]
//! - **Invoices**: [`Invoice`], [`WriteOff`]
//!
//! # Amounts
//!
//! Fusebill reports and accepts monetary amounts as decimal numbers
//! (`outstandingBalance`, write-off `amount`). They are carried as `f64`
//! to match the wire format; a [`WriteOff`] can only be constructed with
//! a strictly positive amount.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod invoice;

pub use error::{InvoiceError, Result};
pub use ids::{IdError, InvoiceId};
pub use invoice::{Invoice, WriteOff};
