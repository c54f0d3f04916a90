use crate::{Client, Response, Result};

impl Client {
    /// Returns the current amount of Ether in circulation excluding ETH2 Staking rewards
    /// and EIP1559 burnt fees.
    pub async fn eth_supply(&self) -> Result<Response> {
        self.request("eth_supply", "stats", "ethsupply", serde_json::Value::Null).await
    }

    /// Returns the latest price of 1 ETH.
    pub async fn eth_price(&self) -> Result<Response> {
        self.request("eth_price", "stats", "ethprice", serde_json::Value::Null).await
    }
}
