use super::{Transport, TransportError};
use async_trait::async_trait;
use reqwest::{header, Client};
use url::Url;

/// A [`Transport`] that performs real HTTP requests through `reqwest`.
///
/// # Example
///
/// ```no_run
/// use etherscan_client::{Http, Transport};
///
/// # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
/// let http = Http::new();
/// let url: url::Url = "https://api.etherscan.io/api?module=stats&action=ethprice".parse()?;
/// let body = http.get(url).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Http {
    client: Client,
}

impl Http {
    /// Initializes a transport with a default `reqwest::Client`
    pub fn new() -> Self {
        Self::new_with_client(Client::new())
    }

    /// Allows to customize the transport by providing your own http client
    pub fn new_with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for Http {
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        let body = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?
            .text()
            .await?;
        Ok(body)
    }
}
