use crate::{Client, EtherscanError, Response, Result};
use std::{
    collections::HashMap,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

/// Which side of a timestamp `getblocknobytime` should resolve to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Closest {
    /// The newest block that occurred prior to the timestamp
    Before,
    /// The oldest block since the timestamp occurred
    After,
}

impl Display for Closest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        match self {
            Closest::Before => write!(f, "before"),
            Closest::After => write!(f, "after"),
        }
    }
}

impl FromStr for Closest {
    type Err = EtherscanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "before" => Ok(Closest::Before),
            "after" => Ok(Closest::After),
            _ => Err(EtherscanError::Validation("Wrong parameter".to_string())),
        }
    }
}

impl Client {
    /// Returns the block and uncle rewards of a block
    pub async fn get_block_reward(&self, block_no: u64) -> Result<Response> {
        self.request(
            "get_block_reward",
            "block",
            "getblockreward",
            HashMap::from([("blockno", block_no.to_string())]),
        )
        .await
    }

    /// Returns the estimated time remaining, in seconds, until a certain block is mined
    pub async fn get_block_countdown(&self, block_no: u64) -> Result<Response> {
        self.request(
            "get_block_countdown",
            "block",
            "getblockcountdown",
            HashMap::from([("blockno", block_no.to_string())]),
        )
        .await
    }

    /// Returns either (1) the oldest block since a particular timestamp occurred or (2) the newest
    /// block that occurred prior to that timestamp
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn foo(client: etherscan_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// // The newest block that occurred prior to 1 January 2020
    /// let block_number_before = client.get_block_by_timestamp(1577836800, "before").await?;
    /// // The oldest block that occurred after 1 January 2020
    /// let block_number_after = client.get_block_by_timestamp(1577836800, "after").await?;
    /// # Ok(()) }
    /// ```
    pub async fn get_block_by_timestamp(&self, timestamp: u64, closest: &str) -> Result<Response> {
        let closest: Closest = closest
            .parse()
            .map_err(|err: EtherscanError| err.in_operation("get_block_by_timestamp"))?;
        self.request(
            "get_block_by_timestamp",
            "block",
            "getblocknobytime",
            HashMap::from([("timestamp", timestamp.to_string()), ("closest", closest.to_string())]),
        )
        .await
    }
}
