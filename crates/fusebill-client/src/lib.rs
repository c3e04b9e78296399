//! Fusebill client SDK.
//!
//! This crate provides a client library for the Fusebill
//! subscription-billing service. Two authentication modes are supported,
//! matching the two halves of Fusebill's HTTP surface:
//!
//! - **Token mode** ([`FusebillClient::new`]): the public API, authorized
//!   with a `Basic` token on every request.
//! - **Session mode** ([`FusebillClient::with_session`]): the private
//!   portal API, authorized by a session cookie obtained from a
//!   username/password login.
//!
//! # Example
//!
//! ```no_run
//! use fusebill_client::{Credentials, Environment, FusebillClient, InvoiceId};
//!
//! # async fn example() -> Result<(), fusebill_client::ClientError> {
//! let credentials = Credentials::new("ops@example.com", "hunter2");
//! let client = FusebillClient::with_session(Environment::Staging, credentials);
//!
//! // Logs in on first use, then reuses the session cookie.
//! client.write_off(InvoiceId::new(8812), 42.50).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod types;

pub use client::FusebillClient;
pub use config::{ClientOptions, Credentials, Environment};
pub use error::ClientError;
pub use types::ApiResponse;

pub use fusebill_core::{IdError, Invoice, InvoiceError, InvoiceId, WriteOff};

pub use reqwest::Method;
