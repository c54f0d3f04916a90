use crate::{Client, Response, Result};
use std::collections::HashMap;

impl Client {
    /// Fetches the ABI of a verified contract.
    ///
    /// The ABI comes back as a JSON string in `result`.
    ///
    /// ```no_run
    /// # use etherscan_client::Client;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    ///     let client = Client::new("API_KEY").unwrap();
    ///     let abi = client
    ///         .get_contract_abi("0xBB9bc244D798123fDe783fCc1C72d3Bb8C189413")
    ///         .await
    ///         .unwrap();
    /// # }
    /// ```
    pub async fn get_contract_abi(&self, address: impl AsRef<str>) -> Result<Response> {
        self.request(
            "get_contract_abi",
            "contract",
            "getabi",
            HashMap::from([("address", address.as_ref())]),
        )
        .await
    }
}
