//! Fusebill HTTP client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use tokio::sync::Mutex;

use fusebill_core::{Invoice, InvoiceId, WriteOff};

use crate::config::{ClientOptions, Credentials, Environment};
use crate::error::ClientError;
use crate::types::ApiResponse;

/// How a client authorizes its requests.
///
/// Token mode attaches a `Basic` header to every request; session mode
/// relies on the cookie store filled in by [`FusebillClient::login`]. The
/// `established` flag is the only mutable state in the client and is
/// guarded by a mutex so concurrent callers cannot race to log in.
#[derive(Debug)]
enum AuthState {
    Token(String),
    Session {
        credentials: Credentials,
        established: Mutex<bool>,
    },
}

/// Fusebill API client.
///
/// Provides login, generic authorized dispatch, and the invoice
/// operations built on top of it. Cloning is cheap and clones share the
/// underlying connection pool and session state.
#[derive(Debug, Clone)]
pub struct FusebillClient {
    client: Client,
    base_url: String,
    auth: Arc<AuthState>,
}

impl FusebillClient {
    /// Create a client for the public API, authorized with a `Basic` token.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn new(environment: Environment, token: impl Into<String>) -> Self {
        Self::with_options(environment, token, ClientOptions::default())
    }

    /// Create a public-API client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(
        environment: Environment,
        token: impl Into<String>,
        options: ClientOptions,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: resolve_base_url(options.base_url, environment.api_base_url()),
            auth: Arc::new(AuthState::Token(token.into())),
        }
    }

    /// Create a client for the private portal API, authorized by a
    /// session cookie obtained from a username/password login.
    ///
    /// The cookie store is created here, once; [`login`](Self::login)
    /// only fills it in.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_session(environment: Environment, credentials: Credentials) -> Self {
        Self::with_session_options(environment, credentials, ClientOptions::default())
    }

    /// Create a session-mode client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_session_options(
        environment: Environment,
        credentials: Credentials,
        options: ClientOptions,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .cookie_provider(Arc::new(Jar::default()))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: resolve_base_url(options.base_url, environment.portal_base_url()),
            auth: Arc::new(AuthState::Session {
                credentials,
                established: Mutex::new(false),
            }),
        }
    }

    /// The base URL requests are dispatched against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Establish a portal session.
    ///
    /// Idempotent: if a session already exists this returns immediately.
    /// Otherwise the credentials are posted as form data to the login
    /// endpoint and the session cookie from the response is kept in the
    /// client's cookie store for subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Authentication`] on a non-success login
    /// status, [`ClientError::Http`] on transport failure, and
    /// [`ClientError::Configuration`] when called on a token-mode client.
    pub async fn login(&self) -> Result<(), ClientError> {
        match self.auth.as_ref() {
            AuthState::Token(_) => Err(ClientError::Configuration(
                "login requires a session client; token clients are authorized per request"
                    .to_string(),
            )),
            AuthState::Session {
                credentials,
                established,
            } => {
                let mut established = established.lock().await;
                if *established {
                    return Ok(());
                }

                let url = format!("{}/api/Login/", self.base_url);
                let response = self
                    .client
                    .post(&url)
                    .form(&[
                        ("username", credentials.username()),
                        ("password", credentials.password()),
                    ])
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(ClientError::Authentication {
                        status: status.as_u16(),
                    });
                }

                *established = true;
                tracing::debug!(username = credentials.username(), "portal session established");
                Ok(())
            }
        }
    }

    /// Send an authorized request to `endpoint` and return the raw response.
    ///
    /// In token mode the `Basic` authorization header is attached; in
    /// session mode the cookie store supplies the session cookie, so
    /// callers should [`login`](Self::login) first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] carrying the status code and response
    /// body on a non-success status, or [`ClientError::Http`] on
    /// transport failure.
    pub async fn send_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let AuthState::Token(token) = self.auth.as_ref() {
            request = request.header(AUTHORIZATION, format!("Basic {token}"));
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        tracing::debug!(%method, endpoint, status = status.as_u16(), "request completed");

        Ok(ApiResponse {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }

    /// Fetch the outstanding balance of an invoice.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the response body is not a
    /// valid invoice record, plus any error from
    /// [`send_request`](Self::send_request).
    pub async fn get_invoice_balance(&self, invoice_id: InvoiceId) -> Result<f64, ClientError> {
        let response = self
            .send_request(Method::GET, &format!("/invoices/{invoice_id}"), None)
            .await?;

        let invoice: Invoice = serde_json::from_slice(&response.body)?;
        Ok(invoice.outstanding_balance)
    }

    /// Write off an invoice's outstanding balance.
    ///
    /// Validates the amount before any network I/O, ensures a portal
    /// session, then posts the write-off. Session mode only.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invoice`] for a non-positive amount (no
    /// request is sent), any error from [`login`](Self::login), and
    /// [`ClientError::Api`] when the server rejects the write-off.
    pub async fn write_off(&self, invoice_id: InvoiceId, amount: f64) -> Result<(), ClientError> {
        let write_off = WriteOff::new(invoice_id, amount)?;

        self.login().await?;

        self.send_request(
            Method::POST,
            "/api/invoices/writeoff",
            Some(serde_json::to_value(&write_off)?),
        )
        .await?;

        tracing::info!(%invoice_id, amount, "invoice written off");
        Ok(())
    }
}

/// Pick the override URL if present, otherwise the environment default,
/// normalizing away a trailing slash either way.
fn resolve_base_url(base_url: Option<String>, default: &str) -> String {
    base_url
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_client_uses_api_host() {
        let client = FusebillClient::new(Environment::Production, "test-token");
        assert_eq!(client.base_url(), "https://secure.fusebill.com/v1");
    }

    #[test]
    fn session_client_uses_portal_host() {
        let credentials = Credentials::new("ops", "secret");
        let client = FusebillClient::with_session(Environment::Staging, credentials);
        assert_eq!(client.base_url(), "https://stg-secure.fusebill.com");
    }

    #[test]
    fn base_url_override_trims_trailing_slash() {
        let options = ClientOptions::default().with_base_url("http://localhost:8080/");
        let client = FusebillClient::with_options(Environment::Production, "token", options);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn login_on_token_client_is_a_configuration_error() {
        let client = FusebillClient::new(Environment::Staging, "test-token");

        let err = client.login().await.unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[tokio::test]
    async fn write_off_rejects_non_positive_amounts_without_io() {
        // Points at the real staging host; validation must fail before
        // any request is attempted.
        let credentials = Credentials::new("ops", "secret");
        let client = FusebillClient::with_session(Environment::Staging, credentials);

        for amount in [0.0, -42.5] {
            let err = client
                .write_off(InvoiceId::new(8812), amount)
                .await
                .unwrap_err();
            assert!(matches!(err, ClientError::Invoice(_)));
        }
    }
}
