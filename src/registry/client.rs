//! Registry client trait and the RIPEstat implementation.

use http::header::{ACCEPT, HeaderValue};
use url::Url;

use crate::http::{HttpClient, HttpRequest};

use super::{Asn, PrefixRecord, RegistryError, parse_announced_prefixes};

/// Default announced-prefixes endpoint (RIPEstat data API).
pub const DEFAULT_REGISTRY_URL: &str = "https://stat.ripe.net/data/announced-prefixes/data.json";

/// Trait for looking up the prefixes an ASN announces.
///
/// # Implementation Notes
///
/// - One call issues at most one request; retries are not the client's job
/// - Records are returned unfiltered; family selection happens downstream
/// - Implementations must not mutate state shared with other lookups
pub trait RegistryClient: Send + Sync {
    /// Fetches the raw prefix records announced by `asn`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] on transport failure, non-success status,
    /// or a response that cannot be parsed. Callers treat every error as an
    /// empty announcement.
    fn announced_prefixes(
        &self,
        asn: &Asn,
    ) -> impl std::future::Future<Output = Result<Vec<PrefixRecord>, RegistryError>> + Send;
}

/// Registry client for the RIPEstat `announced-prefixes` data call.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```
/// use vpn_prefixes::http::ReqwestClient;
/// use vpn_prefixes::registry::RipeStatClient;
///
/// let client = RipeStatClient::new(ReqwestClient::new());
/// assert_eq!(
///     client.query_url(&vpn_prefixes::registry::Asn::new("AS9009").unwrap()).as_str(),
///     "https://stat.ripe.net/data/announced-prefixes/data.json?resource=AS9009",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RipeStatClient<H> {
    client: H,
    base_url: Url,
}

impl<H> RipeStatClient<H> {
    /// Creates a client against [`DEFAULT_REGISTRY_URL`].
    ///
    /// # Panics
    ///
    /// Never; the default URL is a valid constant.
    #[must_use]
    pub fn new(client: H) -> Self {
        let base_url = Url::parse(DEFAULT_REGISTRY_URL).expect("default registry URL is valid");
        Self::with_base_url(client, base_url)
    }

    /// Creates a client against a custom endpoint (mirrors, test servers).
    ///
    /// Any query string already on `base_url` is kept; `resource` is appended.
    #[must_use]
    pub const fn with_base_url(client: H, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.client
    }

    /// Builds the query URL for `asn`.
    ///
    /// The token is passed as the `resource` argument unmodified apart from
    /// URL encoding.
    #[must_use]
    pub fn query_url(&self, asn: &Asn) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("resource", asn.as_str());
        url
    }
}

impl<H: HttpClient> RegistryClient for RipeStatClient<H> {
    async fn announced_prefixes(&self, asn: &Asn) -> Result<Vec<PrefixRecord>, RegistryError> {
        let request = HttpRequest::get(self.query_url(asn))
            .with_header(ACCEPT, HeaderValue::from_static("application/json"));

        tracing::debug!("GET {}", request.url);
        let response = self.client.request(request).await?;

        if !response.is_success() {
            tracing::debug!(
                "{asn}: registry answered {}: {}",
                response.status,
                response.body_text().unwrap_or("<non-UTF-8 body>").trim()
            );
            return Err(RegistryError::Status {
                status: response.status,
            });
        }

        parse_announced_prefixes(&response.body)
    }
}
