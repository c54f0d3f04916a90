use async_trait::async_trait;
use auto_impl::auto_impl;
use std::fmt::Debug;
use thiserror::Error;
use url::Url;

mod http;
pub use self::http::Http;

mod mock;
pub use mock::{MockResponse, MockTransport};

#[async_trait]
#[auto_impl(&, Box, Arc)]
/// Trait which must be implemented by HTTP backends to be used with the etherscan [`Client`].
///
/// [`Client`]: crate::Client
pub trait Transport: Debug + Send + Sync {
    /// Issues a GET request for the fully formed `url` and returns the raw response body
    async fn get(&self, url: Url) -> Result<String, TransportError>;
}

#[derive(Error, Debug)]
/// Errors raised while moving a request to etherscan and back
pub enum TransportError {
    /// Thrown if the request failed
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// (De)Serialization error while preparing a mocked response
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// Empty requests queue
    #[error("empty requests queue, please issue some requests")]
    EmptyRequests,

    /// Empty responses queue
    #[error("empty responses queue, please push some responses")]
    EmptyResponses,

    /// Error pushed into a [`MockTransport`]
    #[error("{0}")]
    Mock(String),
}
