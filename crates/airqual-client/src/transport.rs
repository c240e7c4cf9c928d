use crate::error::Result;
use std::time::Duration;

/// Raw HTTP response as the query operations consume it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Boundary to the remote service.
///
/// Production code uses [`HttpTransport`]; tests substitute canned responses.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Blocking reqwest-backed transport. One request per invocation, no retries.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("airqual/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!(url, "issuing feature query");
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!(status, bytes = body.len(), "feature query answered");
        Ok(HttpResponse { status, body })
    }
}
