use crate::{Client, Response, Result};
use std::collections::HashMap;

impl Client {
    /// Returns the current amount of an ERC-20 token in circulation
    pub async fn get_erc20_token_total_supply(
        &self,
        contract_address: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "get_erc20_token_total_supply",
            "stats",
            "tokensupply",
            HashMap::from([("contractaddress", contract_address.as_ref())]),
        )
        .await
    }

    /// Returns project information and social media links of an ERC-20 token
    pub async fn get_erc20_token_info(
        &self,
        contract_address: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "get_erc20_token_info",
            "token",
            "tokeninfo",
            HashMap::from([("contractaddress", contract_address.as_ref())]),
        )
        .await
    }

    /// Returns the current balance of an ERC-20 token of an address
    pub async fn get_erc20_token_balance(
        &self,
        contract_address: impl AsRef<str>,
        address: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "get_erc20_token_balance",
            "account",
            "tokenbalance",
            HashMap::from([
                ("contractaddress", contract_address.as_ref()),
                ("address", address.as_ref()),
                ("tag", "latest"),
            ]),
        )
        .await
    }
}
