//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// Thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// Use [`ReqwestClient::with_timeout`] for registry queries so that a
/// stalled server cannot hold up the whole run.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use vpn_prefixes::http::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(Duration::from_secs(30), "vpn-prefixes")?;
/// let url = Url::parse("https://stat.ripe.net/data/announced-prefixes/data.json?resource=AS9009")?;
/// let response = client.request(HttpRequest::get(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client with a per-request timeout and a `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self::from_client(inner))
    }

    /// Creates an HTTP client from an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        // The timeout also covers reading the body.
        let body = response
            .bytes()
            .await
            .map_err(map_reqwest_error)?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
