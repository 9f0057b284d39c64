//! HTTP request/response types and client trait.

use super::HttpError;

/// An HTTP request to be sent.
///
/// A plain value that any [`HttpClient`] can execute. Method and headers
/// use the `http` crate types so the registry layer never touches reqwest.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL, including the query string
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL and no headers.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Adds a header to the request.
    ///
    /// Repeated names append rather than replace.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response with a fully buffered body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates a `200 OK` response with the given body and no headers.
    #[must_use]
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(http::StatusCode::OK, http::HeaderMap::new(), body.into())
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for making HTTP requests.
///
/// The registry client is generic over this trait so tests can serve
/// canned registry bodies without a network.
///
/// # Example
///
/// ```ignore
/// use vpn_prefixes::http::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct CannedClient {
///     body: &'static str,
/// }
///
/// impl HttpClient for CannedClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::ok(self.body))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
