use crate::{Client, Response, Result};
use std::collections::HashMap;

impl Client {
    /// Returns the estimated time, in seconds, for a transaction to be confirmed on the blockchain
    /// for the specified gas price in wei
    pub async fn gas_estimate(&self, gas_price: u64) -> Result<Response> {
        self.request(
            "gas_estimate",
            "gastracker",
            "gasestimate",
            HashMap::from([("gasprice", gas_price.to_string())]),
        )
        .await
    }

    /// Returns the current Safe, Proposed and Fast gas prices
    /// Post EIP-1559 changes:
    /// - Safe/Proposed/Fast gas price recommendations are now modeled as Priority Fees.
    /// - New field `suggestBaseFee`, the baseFee of the next pending block
    /// - New field `gasUsedRatio`, to estimate how busy the network is
    pub async fn gas_oracle(&self) -> Result<Response> {
        self.request("gas_oracle", "gastracker", "gasoracle", serde_json::Value::Null).await
    }
}
