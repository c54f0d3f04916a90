use std::collections::HashMap;

use crate::{Client, Response, Result};

impl Client {
    /// Returns the status code of a contract execution
    pub async fn check_contract_execution_status(
        &self,
        tx_hash: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "check_contract_execution_status",
            "transaction",
            "getstatus",
            HashMap::from([("txhash", tx_hash.as_ref())]),
        )
        .await
    }

    /// Returns the status code of a transaction execution.
    ///
    /// Only applicable for post Byzantium fork transactions.
    pub async fn check_transaction_receipt_status(
        &self,
        tx_hash: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "check_transaction_receipt_status",
            "transaction",
            "gettxreceiptstatus",
            HashMap::from([("txhash", tx_hash.as_ref())]),
        )
        .await
    }
}
