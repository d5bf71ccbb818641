use crate::encoding::Encode;

/// An inbound HTTP request, as handed to a function by the host.
///
/// The host delivers query parameters as already-decoded name/value pairs;
/// URL decoding, routing, and method restrictions are its concern and never
/// happen here. The body, if the request carried one, is delivered as raw
/// bytes.
#[derive(Debug, Default)]
pub struct WebRequest {
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl WebRequest {
    /// Creates a request with no query parameters and no body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter.
    pub fn with_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets the request body. If encoding the body fails, returns an error.
    pub fn with_body<E: Encode>(mut self, body: E) -> Result<Self, E::Error> {
        self.body = Some(body.try_serialize()?);
        Ok(self)
    }

    /// Looks up a query parameter by name.
    ///
    /// Query parameters can be repeated; the first occurrence wins. Usually
    /// people don't repeat them though.
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(parameter, _)| parameter == name)
            .map(|(_, value)| value.as_str())
    }

    /// The query parameters used in the request, in the order they appeared.
    pub fn query_parameters(&self) -> &[(String, String)] {
        &self.query
    }

    /// The request body, if one was sent.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}
