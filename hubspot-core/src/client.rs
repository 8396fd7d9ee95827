//! Bearer-token authentication and the single request executor behind
//! every operation.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::Verb;
use crate::envelope::Envelope;

/// HubSpot API credentials.
///
/// Both values are fixed for the process lifetime. A missing token is
/// tolerated at construction and reported per call: every operation on a
/// token-less client returns a synthetic 500 envelope without touching the
/// network.
///
/// # Examples
///
/// ```
/// use hubspot_core::client::Credentials;
///
/// let credentials = Credentials::new("https://api.hubapi.com", "pat-na1-...");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// API base URL, usually [`crate::DEFAULT_BASE_URL`].
    pub base_url: String,
    /// Private-app bearer token. Empty means "not configured".
    pub access_token: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Reads `HUBSPOT_BASE_URL` (falling back to the documented default)
    /// and `HUBSPOT_ACCESS_TOKEN` (falling back to empty) from the
    /// process environment.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(crate::BASE_URL_ENV)
                .unwrap_or_else(|_| crate::DEFAULT_BASE_URL.to_string()),
            access_token: std::env::var(crate::ACCESS_TOKEN_ENV).unwrap_or_default(),
        }
    }
}

/// Errors raised while constructing a [`Client`].
///
/// Expected runtime failures (missing token, transport, remote errors)
/// never surface here; they are reported inside the [`Envelope`] each
/// operation returns.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Required builder parameter was not provided.
    #[error("Missing required attribute: {0}")]
    MissingRequiredAttribute(String),
    /// The configured base URL does not parse.
    #[error("Invalid base URL: {source}")]
    InvalidBaseUrl {
        #[source]
        source: url::ParseError,
    },
    /// The access token cannot be carried in an HTTP header.
    #[error("Invalid authorization header: {source}")]
    InvalidAuthHeader {
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    /// The underlying HTTP client failed to build.
    #[error("Failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },
    /// The access token is absent; detected before any I/O.
    #[error("Missing HubSpot access token in configuration.")]
    MissingAccessToken,
    /// The HTTP round trip failed (DNS, connect, TLS, or timeout).
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
}

/// Builder for constructing a [`Client`].
///
/// # Examples
///
/// ```
/// use hubspot_core::client::{Builder, Credentials};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Builder::new()
///     .credentials(Credentials::new("https://api.hubapi.com", "token"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Builder {
    credentials: Option<Credentials>,
}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials to use.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials were not provided, the base URL is
    /// malformed, or the HTTP client cannot be constructed. An empty
    /// access token is not an error here; it fails each call instead.
    pub fn build(self) -> Result<Client, Error> {
        let mut credentials = self
            .credentials
            .ok_or_else(|| Error::MissingRequiredAttribute("credentials".to_string()))?;

        credentials.base_url = credentials.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&credentials.base_url)
            .map_err(|source| Error::InvalidBaseUrl { source })?;

        use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !credentials.access_token.is_empty() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", credentials.access_token))
                    .map_err(|source| Error::InvalidAuthHeader { source })?,
            );
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(crate::DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|source| Error::HttpClientBuild { source })?;

        Ok(Client {
            credentials: Arc::new(credentials),
            http,
        })
    }
}

/// Authenticated HubSpot API client.
///
/// Cheap to clone and safe to share across tasks: credentials are
/// immutable behind an `Arc` and the pooled HTTP client is itself
/// thread-safe. No per-call state is shared, so concurrent operations
/// need no locking.
///
/// Resource families are reached through accessor methods
/// (`client.contacts()`, `client.files()`, ...), each returning a thin
/// view over this client.
#[derive(Clone, Debug)]
pub struct Client {
    credentials: Arc<Credentials>,
    http: reqwest::Client,
}

impl Client {
    /// Shorthand for [`Builder::new`].
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The configured base URL, trailing slash trimmed.
    pub fn base_url(&self) -> &str {
        &self.credentials.base_url
    }

    /// Performs exactly one HTTP round trip and normalizes the result.
    ///
    /// Preconditions are checked before any I/O: a missing token yields a
    /// synthetic 500 envelope with no network attempt. A JSON body is
    /// attached for POST/PUT/PATCH only. Caller-supplied headers are
    /// applied after the defaults and replace same-named ones. Non-2xx
    /// statuses pass through verbatim with `error` taken from the body's
    /// `message` field when present; an undecodable body leaves the
    /// status untouched and nulls the payload.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub(crate) async fn request(
        &self,
        verb: Verb,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
        headers: &[(&str, &str)],
    ) -> Envelope {
        match self.try_request(verb, path, query, body, headers).await {
            Ok(envelope) => envelope,
            Err(error) => Envelope::fault(error.to_string()),
        }
    }

    async fn try_request(
        &self,
        verb: Verb,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
        headers: &[(&str, &str)],
    ) -> Result<Envelope, Error> {
        if self.credentials.access_token.is_empty() {
            return Err(Error::MissingAccessToken);
        }

        let url = format!("{}/{}", self.credentials.base_url, path.trim_start_matches('/'));

        let mut request = self.http.request(verb.method(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if verb.sends_body() {
            if let Some(body) = body {
                request = request.json(body);
            }
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|source| Error::Transport { source })?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| Error::Transport { source })?;

        // A non-JSON body nulls the payload but never overrides the status.
        let payload: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let error = (status >= 400).then(|| {
            payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("HTTP error")
                .to_string()
        });

        Ok(Envelope {
            status,
            error,
            payload,
        })
    }
}

// Resource-family accessors.
impl Client {
    /// Owner lookups.
    pub fn owners(&self) -> crate::crm::owners::OwnersClient {
        crate::crm::owners::OwnersClient::new(self.clone())
    }

    /// Contact operations.
    pub fn contacts(&self) -> crate::crm::contacts::ContactsClient {
        crate::crm::contacts::ContactsClient::new(self.clone())
    }

    /// Company operations.
    pub fn companies(&self) -> crate::crm::companies::CompaniesClient {
        crate::crm::companies::CompaniesClient::new(self.clone())
    }

    /// Deal operations.
    pub fn deals(&self) -> crate::crm::deals::DealsClient {
        crate::crm::deals::DealsClient::new(self.clone())
    }

    /// Deal pipeline and stage operations.
    pub fn pipelines(&self) -> crate::crm::pipelines::PipelinesClient {
        crate::crm::pipelines::PipelinesClient::new(self.clone())
    }

    /// Associations between contacts, companies, and deals.
    pub fn associations(&self) -> crate::crm::associations::AssociationsClient {
        crate::crm::associations::AssociationsClient::new(self.clone())
    }

    /// Engagement operations.
    pub fn engagements(&self) -> crate::crm::engagements::EngagementsClient {
        crate::crm::engagements::EngagementsClient::new(self.clone())
    }

    /// Contact list operations.
    pub fn lists(&self) -> crate::crm::lists::ListsClient {
        crate::crm::lists::ListsClient::new(self.clone())
    }

    /// Logged-call engagement operations.
    pub fn calls(&self) -> crate::crm::calls::CallsClient {
        crate::crm::calls::CallsClient::new(self.clone())
    }

    /// Ticket operations.
    pub fn tickets(&self) -> crate::crm::tickets::TicketsClient {
        crate::crm::tickets::TicketsClient::new(self.clone())
    }

    /// Product, product property, and product folder operations.
    pub fn products(&self) -> crate::crm::products::ProductsClient {
        crate::crm::products::ProductsClient::new(self.clone())
    }

    /// Line item operations.
    pub fn line_items(&self) -> crate::crm::line_items::LineItemsClient {
        crate::crm::line_items::LineItemsClient::new(self.clone())
    }

    /// Quote operations.
    pub fn quotes(&self) -> crate::crm::quotes::QuotesClient {
        crate::crm::quotes::QuotesClient::new(self.clone())
    }

    /// Custom object operations.
    pub fn custom_objects(&self) -> crate::crm::custom_objects::CustomObjectsClient {
        crate::crm::custom_objects::CustomObjectsClient::new(self.clone())
    }

    /// Object property definition operations.
    pub fn properties(&self) -> crate::crm::properties::PropertiesClient {
        crate::crm::properties::PropertiesClient::new(self.clone())
    }

    /// CRM extension card operations.
    pub fn extension_cards(&self) -> crate::crm::extensions::ExtensionCardsClient {
        crate::crm::extensions::ExtensionCardsClient::new(self.clone())
    }

    /// Form operations.
    pub fn forms(&self) -> crate::marketing::forms::FormsClient {
        crate::marketing::forms::FormsClient::new(self.clone())
    }

    /// Marketing email operations.
    pub fn marketing_emails(&self) -> crate::marketing::emails::MarketingEmailsClient {
        crate::marketing::emails::MarketingEmailsClient::new(self.clone())
    }

    /// Email campaign lookups.
    pub fn campaigns(&self) -> crate::marketing::campaigns::CampaignsClient {
        crate::marketing::campaigns::CampaignsClient::new(self.clone())
    }

    /// Email event lookups.
    pub fn email_events(&self) -> crate::marketing::events::EmailEventsClient {
        crate::marketing::events::EmailEventsClient::new(self.clone())
    }

    /// File manager operations.
    pub fn files(&self) -> crate::files::FilesClient {
        crate::files::FilesClient::new(self.clone())
    }

    /// HubDB table, column, and row operations.
    pub fn hubdb(&self) -> crate::hubdb::HubDbClient {
        crate::hubdb::HubDbClient::new(self.clone())
    }

    /// Webhook subscription and settings operations.
    pub fn webhooks(&self) -> crate::automation::webhooks::WebhooksClient {
        crate::automation::webhooks::WebhooksClient::new(self.clone())
    }

    /// Workflow operations.
    pub fn workflows(&self) -> crate::automation::workflows::WorkflowsClient {
        crate::automation::workflows::WorkflowsClient::new(self.clone())
    }

    /// Analytics report lookups.
    pub fn analytics(&self) -> crate::analytics::AnalyticsClient {
        crate::analytics::AnalyticsClient::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(token: &str) -> Credentials {
        Credentials::new("https://api.hubapi.com", token)
    }

    #[test]
    fn build_without_credentials_fails() {
        let result = Builder::new().build();
        assert!(matches!(
            result,
            Err(Error::MissingRequiredAttribute(attr)) if attr == "credentials"
        ));
    }

    #[test]
    fn build_trims_trailing_slash() {
        let client = Builder::new()
            .credentials(Credentials::new("https://api.hubapi.com/", "token"))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.hubapi.com");
    }

    #[test]
    fn build_rejects_malformed_base_url() {
        let result = Builder::new()
            .credentials(Credentials::new("api.hubapi.com", "token"))
            .build();
        assert!(matches!(result, Err(Error::InvalidBaseUrl { .. })));
    }

    #[test]
    fn build_accepts_empty_token() {
        let client = Builder::new().credentials(credentials("")).build();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn missing_token_fails_without_io() {
        // The base URL is unroutable; reaching the network would error
        // differently than the synthesized pre-flight message.
        let client = Builder::new()
            .credentials(Credentials::new("http://127.0.0.1:1", ""))
            .build()
            .unwrap();

        let envelope = client
            .request(Verb::Get, "/crm/v3/objects/contacts/1", &[], None, &[])
            .await;
        assert_eq!(envelope.status, 500);
        assert_eq!(
            envelope.error.as_deref(),
            Some("Missing HubSpot access token in configuration.")
        );
        assert!(envelope.payload.is_null());
    }

    #[tokio::test]
    async fn connection_failure_maps_to_transport_fault() {
        let client = Builder::new()
            .credentials(Credentials::new("http://127.0.0.1:1", "token"))
            .build()
            .unwrap();

        let envelope = client
            .request(Verb::Get, "/crm/v3/objects/contacts/1", &[], None, &[])
            .await;
        assert_eq!(envelope.status, 500);
        let error = envelope.error.unwrap();
        assert!(error.starts_with("Transport error:"), "got: {error}");
        assert!(envelope.payload.is_null());
    }

    #[test]
    fn client_is_cheap_to_clone() {
        let client = Builder::new().credentials(credentials("token")).build().unwrap();
        let cloned = client.clone();
        assert_eq!(client.base_url(), cloned.base_url());
    }

    #[test]
    fn credentials_from_env_defaults_base_url() {
        // Serialize access to the process environment is not needed here:
        // the variables are read, never written.
        let creds = Credentials::from_env();
        if std::env::var(crate::BASE_URL_ENV).is_err() {
            assert_eq!(creds.base_url, crate::DEFAULT_BASE_URL);
        }
    }

    #[test]
    fn error_display_missing_attribute() {
        let error = Error::MissingRequiredAttribute("credentials".to_string());
        assert_eq!(error.to_string(), "Missing required attribute: credentials");
    }
}
