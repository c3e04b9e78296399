//! Client configuration: environments, credentials, and options.

/// The Fusebill environment a client talks to.
///
/// Each environment carries a host pair: the public API host (token
/// authorized, versioned under `/v1`) and the private portal host
/// (session authorized).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Live billing data.
    Production,
    /// The staging sandbox.
    Staging,
}

impl Environment {
    /// Base URL of the public API for this environment.
    #[must_use]
    pub const fn api_base_url(self) -> &'static str {
        match self {
            Self::Production => "https://secure.fusebill.com/v1",
            Self::Staging => "https://stg-secure.fusebill.com/v1",
        }
    }

    /// Base URL of the private portal API for this environment.
    #[must_use]
    pub const fn portal_base_url(self) -> &'static str {
        match self {
            Self::Production => "https://secure.fusebill.com",
            Self::Staging => "https://stg-secure.fusebill.com",
        }
    }
}

/// Portal login credentials.
///
/// Immutable once constructed; the client exchanges them for a session
/// cookie on first use.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The login username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The login password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout in seconds (default: 5).
    pub timeout_seconds: u64,
    /// Override the environment-derived base URL. Used to point the
    /// client at a mock server in tests.
    pub base_url: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 5,
            base_url: None,
        }
    }
}

impl ClientOptions {
    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}
