//! Response types for the generic request dispatch.

/// A raw response from the Fusebill API.
///
/// Returned by [`FusebillClient::send_request`](crate::FusebillClient::send_request)
/// when the server answers with a success status; convenience methods
/// decode the body into typed records.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// The response body as UTF-8 text, with invalid sequences replaced.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
