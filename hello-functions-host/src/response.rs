use crate::IntoWebResponse;
use crate::encoding::Encode;

/// This represents a response from a web function.
/// When constructed, it's a 200 response with no headers or body.
/// You can set the status, headers, and body via [WebResponse::with_status], [WebResponse::with_headers],
/// and [WebResponse::with_body] respectfully.
#[derive(Debug)]
pub struct WebResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Default for WebResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: vec![],
            body: vec![],
        }
    }
}

impl WebResponse {
    /// Creates a new default response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Adds a header to the response.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Overrides the collection of headers for the response.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the response body. If encoding the body fails, returns an error.
    pub fn with_body<E: Encode>(mut self, body: E) -> Result<Self, E::Error> {
        let body = body.try_serialize()?;
        self.body = body;
        Ok(self)
    }

    pub(crate) fn from_parts(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// The response status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The response headers, in the order they were added.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The response body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoWebResponse for WebResponse {
    fn response(self) -> WebResponse {
        self
    }
}
