//! Geth/Parity proxy endpoints, mirroring the node JSON-RPC methods of the same name.
//!
//! Block tags and indices are passed through as given, e.g. `0x10d4f` or `latest`.

use crate::{Client, EtherscanError, Response, Result};
use std::collections::HashMap;

impl Client {
    /// Returns the number of the most recent block
    pub async fn eth_block_number(&self) -> Result<Response> {
        self.request("eth_block_number", "proxy", "eth_blockNumber", serde_json::Value::Null).await
    }

    /// Returns information about a block by block number, including full transaction objects
    pub async fn eth_get_block_by_number(&self, tag: impl AsRef<str>) -> Result<Response> {
        self.request(
            "eth_get_block_by_number",
            "proxy",
            "eth_getBlockByNumber",
            HashMap::from([("tag", tag.as_ref()), ("boolean", "true")]),
        )
        .await
    }

    /// Returns information about an uncle by block number and uncle index
    pub async fn eth_get_uncle_by_block_number_and_index(
        &self,
        tag: impl AsRef<str>,
        index: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "eth_get_uncle_by_block_number_and_index",
            "proxy",
            "eth_getUncleByBlockNumberAndIndex",
            HashMap::from([("tag", tag.as_ref()), ("index", index.as_ref())]),
        )
        .await
    }

    /// Returns the number of transactions in a block
    pub async fn eth_get_block_transaction_count_by_number(
        &self,
        tag: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "eth_get_block_transaction_count_by_number",
            "proxy",
            "eth_getBlockTransactionCountByNumber",
            HashMap::from([("tag", tag.as_ref())]),
        )
        .await
    }

    /// Returns information about a transaction by transaction hash
    pub async fn eth_get_transaction_by_hash(&self, tx_hash: impl AsRef<str>) -> Result<Response> {
        self.request(
            "eth_get_transaction_by_hash",
            "proxy",
            "eth_getTransactionByHash",
            HashMap::from([("txhash", tx_hash.as_ref())]),
        )
        .await
    }

    /// Returns information about a transaction by block number and transaction index position
    pub async fn eth_get_transaction_by_block_number_and_index(
        &self,
        tag: impl AsRef<str>,
        index: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "eth_get_transaction_by_block_number_and_index",
            "proxy",
            "eth_getTransactionByBlockNumberAndIndex",
            HashMap::from([("tag", tag.as_ref()), ("index", index.as_ref())]),
        )
        .await
    }

    /// Returns the number of transactions performed by an address
    pub async fn eth_get_transaction_count(&self, address: impl AsRef<str>) -> Result<Response> {
        self.request(
            "eth_get_transaction_count",
            "proxy",
            "eth_getTransactionCount",
            HashMap::from([("address", address.as_ref()), ("tag", "latest")]),
        )
        .await
    }

    /// Submitting raw transactions is not supported.
    ///
    /// Always fails with [`EtherscanError::NotImplemented`] without contacting etherscan.
    pub async fn eth_send_raw_transaction(&self) -> Result<Response> {
        Err(EtherscanError::NotImplemented.in_operation("eth_send_raw_transaction"))
    }

    /// Returns the receipt of a transaction by transaction hash
    pub async fn eth_get_transaction_receipt(&self, tx_hash: impl AsRef<str>) -> Result<Response> {
        self.request(
            "eth_get_transaction_receipt",
            "proxy",
            "eth_getTransactionReceipt",
            HashMap::from([("txhash", tx_hash.as_ref())]),
        )
        .await
    }

    /// Executing message calls is not supported.
    ///
    /// Always fails with [`EtherscanError::NotImplemented`] without contacting etherscan.
    pub async fn eth_call(&self) -> Result<Response> {
        Err(EtherscanError::NotImplemented.in_operation("eth_call"))
    }

    /// Returns code at a given address
    pub async fn eth_get_code(&self, address: impl AsRef<str>) -> Result<Response> {
        self.request(
            "eth_get_code",
            "proxy",
            "eth_getCode",
            HashMap::from([("address", address.as_ref()), ("tag", "latest")]),
        )
        .await
    }

    /// Returns the value from a storage position at a given address
    pub async fn eth_get_storage_at(
        &self,
        address: impl AsRef<str>,
        position: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "eth_get_storage_at",
            "proxy",
            "eth_getStorageAt",
            HashMap::from([
                ("address", address.as_ref()),
                ("position", position.as_ref()),
                ("tag", "latest"),
            ]),
        )
        .await
    }

    /// Returns the current price per gas in wei
    pub async fn eth_gas_price(&self) -> Result<Response> {
        self.request("eth_gas_price", "proxy", "eth_gasPrice", serde_json::Value::Null).await
    }

    /// Gas estimation through the node proxy is not supported, see [`Client::gas_estimate`]
    /// for the gas tracker estimate.
    ///
    /// Always fails with [`EtherscanError::NotImplemented`] without contacting etherscan.
    pub async fn eth_estimate_gas(&self) -> Result<Response> {
        Err(EtherscanError::NotImplemented.in_operation("eth_estimate_gas"))
    }
}
