use crate::transports::TransportError;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EtherscanError {
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Validation(String),
    #[error("Not Implemented")]
    NotImplemented,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Deserialization Error: {err}")]
    Decode {
        err: serde_json::Error,
        /// The raw body that failed to decode
        text: String,
    },
    #[error("Block at etherscan was blocked by Cloudflare")]
    BlockedByCloudflare,
    #[error("Response status must to be '1'")]
    ResponseStatus {
        /// The discriminator as received, `None` if the body had no `status` string
        status: Option<String>,
        message: String,
        result: Value,
    },
    #[error("Failed to fetch: {0}")]
    Fetch(#[source] Box<EtherscanError>),
    #[error("{operation} Error: {source}")]
    Operation { operation: &'static str, source: Box<EtherscanError> },
}

impl EtherscanError {
    /// Returns the innermost error, skipping the `Operation` and `Fetch` wrappers.
    ///
    /// ```
    /// use etherscan_client::EtherscanError;
    ///
    /// let err = EtherscanError::Validation("Wrong block type".to_string())
    ///     .in_operation("get_mined_blocks");
    /// assert_eq!(err.to_string(), "get_mined_blocks Error: Wrong block type");
    /// assert!(matches!(err.root_cause(), EtherscanError::Validation(_)));
    /// ```
    pub fn root_cause(&self) -> &EtherscanError {
        match self {
            EtherscanError::Operation { source, .. } => source.root_cause(),
            EtherscanError::Fetch(inner) => inner.root_cause(),
            err => err,
        }
    }

    /// The name of the client method that failed, if the error crossed an operation boundary.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            EtherscanError::Operation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Wraps the error with the name of the failing client method.
    pub fn in_operation(self, operation: &'static str) -> Self {
        EtherscanError::Operation { operation, source: Box::new(self) }
    }

    /// Whether etherscan rejected the request because the key hit its rate limit.
    pub fn is_rate_limit_exceeded(&self) -> bool {
        self.status_result().map_or(false, |result| result.starts_with("Max rate limit reached"))
    }

    /// Whether etherscan rejected the configured api key.
    pub fn is_invalid_api_key(&self) -> bool {
        self.status_result().map_or(false, |result| result.to_lowercase() == "invalid api key")
    }

    fn status_result(&self) -> Option<&str> {
        match self.root_cause() {
            EtherscanError::ResponseStatus { result, .. } => result.as_str(),
            _ => None,
        }
    }
}

/// etherscan/polyscan is protected by cloudflare, which can lead to html responses like `Sorry,
/// you have been blocked` See also <https://community.cloudflare.com/t/sorry-you-have-been-blocked/110790>
///
/// This returns true if the `txt` is a cloudflare error response
pub(crate) fn is_blocked_by_cloudflare_response(txt: &str) -> bool {
    let txt = txt.to_lowercase();
    txt.contains("sorry, you have been blocked") ||
        txt.contains("checking if the site connection is secure")
}
