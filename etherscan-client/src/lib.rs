//! Bindings for the [etherscan.io web api](https://docs.etherscan.io/)
//!
//! Every endpoint method builds a `module`/`action` query, sends it through a [`Transport`] and
//! hands back the decoded [`Response`] once etherscan reports a successful `status`.

use crate::errors::is_blocked_by_cloudflare_response;
use reqwest::IntoUrl;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::{borrow::Cow, sync::Arc, time::Duration};
use tracing::{debug, error, trace};
use url::Url;

pub mod account;
pub mod blocks;
pub mod contract;
pub mod errors;
pub mod gas;
pub mod proxy;
pub mod stats;
pub mod token;
pub mod transaction;
pub mod transports;
pub mod utils;

pub use errors::EtherscanError;
pub use transports::{Http, MockResponse, MockTransport, Transport, TransportError};

pub type Result<T, E = EtherscanError> = std::result::Result<T, E>;

/// The mainnet etherscan API endpoint
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// Environment variable holding the api key, see [`Client::new_from_env`]
pub const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";

/// Environment variable overriding the api endpoint, see [`Client::new_from_env`]
pub const ETHERSCAN_API_URL_VAR: &str = "ETHERSCAN_API_URL";

/// The Etherscan.io API client.
#[derive(Clone, Debug)]
pub struct Client {
    /// Client used to serialize queries into request urls
    client: reqwest::Client,
    /// Backend that executes the GET requests
    transport: Arc<dyn Transport>,
    /// Etherscan API key
    api_key: String,
    /// Etherscan API endpoint like <https://api.etherscan.io/api>
    etherscan_api_url: Url,
}

impl Client {
    /// Creates a `ClientBuilder` to configure a `Client`.
    /// This is the same as `ClientBuilder::default()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use etherscan_client::Client;
    /// let client = Client::builder().with_api_key("<API KEY>").build().unwrap();
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a new client for the mainnet endpoint with the provided API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Client::builder().with_api_key(api_key).build()
    }

    /// Create a new client with the API key from the `ETHERSCAN_API_KEY` environment variable.
    ///
    /// The endpoint can be overridden with `ETHERSCAN_API_URL`.
    pub fn new_from_env() -> Result<Self> {
        let api_key = std::env::var(ETHERSCAN_API_KEY_VAR).map_err(|err| {
            EtherscanError::Configuration(format!("{ETHERSCAN_API_KEY_VAR}: {err}"))
        })?;
        let mut builder = Client::builder().with_api_key(api_key);
        if let Ok(api_url) = std::env::var(ETHERSCAN_API_URL_VAR) {
            builder = builder.with_api_url(api_url)?;
        }
        builder.build()
    }

    /// Returns a client backed by a [`MockTransport`] together with a handle to that transport
    pub fn mocked() -> (Self, MockTransport) {
        let mock = MockTransport::new();
        let client = Client {
            client: reqwest::Client::new(),
            transport: Arc::new(mock.clone()),
            api_key: "mock".to_string(),
            etherscan_api_url: Url::parse(ETHERSCAN_API_URL).expect("valid constant url"),
        };
        (client, mock)
    }

    pub fn etherscan_api_url(&self) -> &Url {
        &self.etherscan_api_url
    }

    /// Builds the query for `module`/`action`, sends it and validates the response.
    ///
    /// Any failure is tagged with `operation`, the name of the calling endpoint method.
    pub(crate) async fn request<T: Serialize>(
        &self,
        operation: &'static str,
        module: &'static str,
        action: &'static str,
        params: T,
    ) -> Result<Response> {
        let query = self.create_query(module, action, params);
        self.get_json(&query).await.map_err(|err| err.in_operation(operation))
    }

    /// Execute a GET request with parameters.
    async fn get_json<Q: Serialize>(&self, query: &Q) -> Result<Response> {
        let url = self.query_url(query)?;
        self.fetch(url).await
    }

    /// Issues a GET for `url` and validates the status discriminator of the JSON body.
    ///
    /// Every failure is reported as [`EtherscanError::Fetch`].
    pub async fn fetch(&self, url: Url) -> Result<Response> {
        trace!(target: "etherscan", url = %utils::redact_api_key(&url), "GET");
        let res = match self.transport.get(url).await {
            Ok(res) => res,
            Err(err) => return Err(EtherscanError::Fetch(Box::new(EtherscanError::from(err)))),
        };
        self.sanitize_response(res).map_err(|err| EtherscanError::Fetch(Box::new(err)))
    }

    /// Perform sanity checks on a response and deserialize it into a [Response].
    fn sanitize_response(&self, res: impl AsRef<str>) -> Result<Response> {
        let res = res.as_ref();
        let value: Value = serde_json::from_str(res).map_err(|err| {
            error!(target: "etherscan", ?res, "Failed to deserialize response: {}", err);
            if is_blocked_by_cloudflare_response(res) {
                EtherscanError::BlockedByCloudflare
            } else {
                EtherscanError::Decode { err, text: res.to_string() }
            }
        })?;

        match value.get("status").and_then(Value::as_str) {
            Some("1") => serde_json::from_value(value)
                .map_err(|err| EtherscanError::Decode { err, text: res.to_string() }),
            status => {
                let status = status.map(str::to_string);
                let message =
                    value.get("message").and_then(Value::as_str).unwrap_or_default().to_string();
                let result = value.get("result").cloned().unwrap_or(Value::Null);
                debug!(target: "etherscan", ?status, %message, %result, "Unsuccessful response");
                Err(EtherscanError::ResponseStatus { status, message, result })
            }
        }
    }

    /// Serializes `query` onto the API endpoint
    fn query_url<Q: Serialize>(&self, query: &Q) -> Result<Url> {
        let request = self
            .client
            .get(self.etherscan_api_url.clone())
            .query(query)
            .build()
            .map_err(TransportError::from)?;
        Ok(request.url().clone())
    }

    fn create_query<T: Serialize>(
        &self,
        module: &'static str,
        action: &'static str,
        other: T,
    ) -> Query<T> {
        Query {
            apikey: Cow::Borrowed(&self.api_key),
            module: Cow::Borrowed(module),
            action: Cow::Borrowed(action),
            other,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ClientBuilder {
    /// Client that executes HTTP requests
    client: Option<reqwest::Client>,
    /// Custom backend replacing the reqwest transport
    transport: Option<Arc<dyn Transport>>,
    /// Etherscan API key
    api_key: Option<String>,
    /// Etherscan API endpoint like <https://api.etherscan.io/api>
    etherscan_api_url: Option<Url>,
    /// Request timeout for the default reqwest client
    timeout: Option<Duration>,
}

// === impl ClientBuilder ===

impl ClientBuilder {
    /// Configures the etherscan api url
    ///
    /// # Errors
    ///
    /// Fails if the `etherscan_api_url` is not a valid `Url`
    pub fn with_api_url(mut self, etherscan_api_url: impl IntoUrl) -> Result<Self> {
        let url = etherscan_api_url
            .into_url()
            .map_err(|err| EtherscanError::Configuration(format!("invalid api url: {err}")))?;
        self.etherscan_api_url = Some(url);
        Ok(self)
    }

    /// Configures the `reqwest::Client`
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Configures the backend that performs the requests, e.g. a [`MockTransport`]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Configures the etherscan api key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Configures a total request timeout.
    ///
    /// Only applies when no custom `reqwest::Client` is configured.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns a Client that uses this ClientBuilder configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`EtherscanError::Configuration`] if the api key is missing or empty
    pub fn build(self) -> Result<Client> {
        let ClientBuilder { client, transport, api_key, etherscan_api_url, timeout } = self;

        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| EtherscanError::Configuration("API key is required".to_string()))?;

        let client = match (client, timeout) {
            (Some(client), _) => client,
            (None, Some(timeout)) => {
                reqwest::Client::builder().timeout(timeout).build().map_err(|err| {
                    EtherscanError::Configuration(format!("failed to build http client: {err}"))
                })?
            }
            (None, None) => reqwest::Client::new(),
        };

        let etherscan_api_url = match etherscan_api_url {
            Some(url) => url,
            None => Url::parse(ETHERSCAN_API_URL)
                .map_err(|err| EtherscanError::Configuration(err.to_string()))?,
        };

        let transport =
            transport.unwrap_or_else(|| Arc::new(Http::new_with_client(client.clone())));

        Ok(Client { client, transport, api_key, etherscan_api_url })
    }
}

/// The API response type.
///
/// Returned verbatim: `message` and `result` are left as raw JSON and any additional top-level
/// fields are kept in `extra`. A key sent as `null` is `Some(Value::Null)`, a missing key is
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Keeps an explicit `null` apart from a missing key
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The type that gets serialized as query
#[derive(Clone, Debug, Serialize)]
struct Query<'a, T: Serialize> {
    apikey: Cow<'a, str>,
    module: Cow<'a, str>,
    action: Cow<'a, str>,
    #[serde(flatten)]
    other: T,
}
