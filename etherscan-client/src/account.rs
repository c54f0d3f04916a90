use crate::{Client, EtherscanError, Response, Result};
use std::{
    collections::HashMap,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

/// Largest number of addresses accepted by a single `balancemulti` request
pub const MAX_BALANCE_BATCH: usize = 20;

/// The list sorting preference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sort {
    Asc,
    Desc,
}

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        match self {
            Sort::Asc => write!(f, "asc"),
            Sort::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for Sort {
    type Err = EtherscanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Sort::Asc),
            "desc" => Ok(Sort::Desc),
            _ => Err(EtherscanError::Validation("Wrong sort order".to_string())),
        }
    }
}

/// Common arguments for the transaction list API endpoints
#[derive(Clone, Copy, Debug)]
pub struct TxListParams {
    start_block: u64,
    end_block: u64,
    page: u64,
    offset: u64,
    sort: Sort,
}

impl TxListParams {
    pub fn new(start_block: u64, end_block: u64, page: u64, offset: u64, sort: Sort) -> Self {
        Self { start_block, end_block, page, offset, sort }
    }
}

impl Default for TxListParams {
    fn default() -> Self {
        Self { start_block: 0, end_block: 99999999, page: 1, offset: 10000, sort: Sort::Asc }
    }
}

impl From<TxListParams> for HashMap<&'static str, String> {
    fn from(tx_params: TxListParams) -> Self {
        let mut params = HashMap::new();
        params.insert("startblock", tx_params.start_block.to_string());
        params.insert("endblock", tx_params.end_block.to_string());
        params.insert("page", tx_params.page.to_string());
        params.insert("offset", tx_params.offset.to_string());
        params.insert("sort", tx_params.sort.to_string());
        params
    }
}

/// Pagination arguments for the token transfer API endpoints
#[derive(Clone, Copy, Debug)]
pub struct PageParams {
    page: u64,
    offset: u64,
    sort: Sort,
}

impl PageParams {
    pub fn new(page: u64, offset: u64, sort: Sort) -> Self {
        Self { page, offset, sort }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 1, offset: 100, sort: Sort::Desc }
    }
}

impl From<PageParams> for HashMap<&'static str, String> {
    fn from(page_params: PageParams) -> Self {
        let mut params = HashMap::new();
        params.insert("page", page_params.page.to_string());
        params.insert("offset", page_params.offset.to_string());
        params.insert("sort", page_params.sort.to_string());
        params
    }
}

/// The pre-defined block type for retrieving mined blocks
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BlockType {
    #[default]
    CanonicalBlocks,
    Uncles,
}

impl Display for BlockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        match self {
            BlockType::CanonicalBlocks => write!(f, "blocks"),
            BlockType::Uncles => write!(f, "uncles"),
        }
    }
}

impl FromStr for BlockType {
    type Err = EtherscanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blocks" => Ok(BlockType::CanonicalBlocks),
            "uncles" => Ok(BlockType::Uncles),
            _ => Err(EtherscanError::Validation("Wrong block type".to_string())),
        }
    }
}

impl Client {
    /// Returns the Ether balance of a given address.
    ///
    /// ```no_run
    /// # use etherscan_client::Client;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    ///     let client = Client::new("API_KEY").unwrap();
    ///     let balance = client
    ///         .get_ether_balance_single("0x58eB28A67731c570Ef827C365c89B5751F9E6b0a")
    ///         .await
    ///         .unwrap();
    /// # }
    /// ```
    pub async fn get_ether_balance_single(&self, address: impl AsRef<str>) -> Result<Response> {
        self.request(
            "get_ether_balance_single",
            "account",
            "balance",
            HashMap::from([("address", address.as_ref()), ("tag", "latest")]),
        )
        .await
    }

    /// Returns the balance of the accounts from a list of at most 20 addresses.
    ///
    /// The addresses are sent comma separated, in the given order.
    pub async fn get_ether_balance_multi<A: AsRef<str>>(
        &self,
        addresses: &[A],
    ) -> Result<Response> {
        if addresses.len() > MAX_BALANCE_BATCH {
            return Err(EtherscanError::Validation(format!(
                "maximum of {MAX_BALANCE_BATCH} accounts in a single batch"
            ))
            .in_operation("get_ether_balance_multi"))
        }
        let addrs =
            addresses.iter().map(|address| address.as_ref()).collect::<Vec<&str>>().join(",");
        self.request(
            "get_ether_balance_multi",
            "account",
            "balancemulti",
            HashMap::from([("address", addrs.as_str()), ("tag", "latest")]),
        )
        .await
    }

    /// Returns the list of transactions performed by an address, with pagination.
    pub async fn get_transactions(
        &self,
        address: impl AsRef<str>,
        params: TxListParams,
    ) -> Result<Response> {
        let mut tx_params: HashMap<&str, String> = params.into();
        tx_params.insert("address", address.as_ref().to_string());
        self.request("get_transactions", "account", "txlist", tx_params).await
    }

    /// Returns the list of internal transactions performed by an address, with pagination.
    pub async fn get_internal_transactions_by_address(
        &self,
        address: impl AsRef<str>,
        params: TxListParams,
    ) -> Result<Response> {
        let mut tx_params: HashMap<&str, String> = params.into();
        tx_params.insert("address", address.as_ref().to_string());
        self.request("get_internal_transactions_by_address", "account", "txlistinternal", tx_params)
            .await
    }

    /// Returns the list of internal transactions performed within a transaction.
    pub async fn get_internal_transactions_by_hash(
        &self,
        tx_hash: impl AsRef<str>,
    ) -> Result<Response> {
        self.request(
            "get_internal_transactions_by_hash",
            "account",
            "txlistinternal",
            HashMap::from([("txhash", tx_hash.as_ref())]),
        )
        .await
    }

    /// Returns the list of internal transactions performed within a block range.
    pub async fn get_internal_transactions_by_block_range(
        &self,
        params: TxListParams,
    ) -> Result<Response> {
        let tx_params: HashMap<&str, String> = params.into();
        self.request(
            "get_internal_transactions_by_block_range",
            "account",
            "txlistinternal",
            tx_params,
        )
        .await
    }

    /// Returns the list of ERC-20 tokens transferred by an address, with optional filtering by
    /// token contract.
    ///
    /// ```no_run
    /// # use etherscan_client::{Client, account::PageParams};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    ///     let client = Client::new("API_KEY").unwrap();
    ///     let txs = client
    ///         .get_erc20_token_transfer_events(
    ///             "0x4e83362442b8d1bec281594cea3050c8eb01311c",
    ///             None::<&str>,
    ///             PageParams::default(),
    ///         )
    ///         .await
    ///         .unwrap();
    /// # }
    /// ```
    pub async fn get_erc20_token_transfer_events(
        &self,
        address: impl AsRef<str>,
        contract_address: Option<impl AsRef<str>>,
        params: PageParams,
    ) -> Result<Response> {
        let mut params: HashMap<&str, String> = params.into();
        params.insert("address", address.as_ref().to_string());
        if let Some(contract) = contract_address {
            params.insert("contractaddress", contract.as_ref().to_string());
        }
        self.request("get_erc20_token_transfer_events", "account", "tokentx", params).await
    }

    /// Returns the list of ERC-721 ( NFT ) tokens of the contract transferred by an address.
    pub async fn get_erc721_token_transfer_events(
        &self,
        contract_address: impl AsRef<str>,
        address: impl AsRef<str>,
        params: PageParams,
    ) -> Result<Response> {
        let mut params: HashMap<&str, String> = params.into();
        params.insert("contractaddress", contract_address.as_ref().to_string());
        params.insert("address", address.as_ref().to_string());
        self.request("get_erc721_token_transfer_events", "account", "tokennfttx", params).await
    }

    /// Returns the list of blocks mined by an address.
    ///
    /// `block_type` must be either `blocks` or `uncles`.
    pub async fn get_mined_blocks(
        &self,
        address: impl AsRef<str>,
        block_type: &str,
        page: u64,
        offset: u64,
    ) -> Result<Response> {
        let block_type: BlockType =
            block_type.parse().map_err(|err: EtherscanError| err.in_operation("get_mined_blocks"))?;
        let params = HashMap::from([
            ("address", address.as_ref().to_string()),
            ("blocktype", block_type.to_string()),
            ("page", page.to_string()),
            ("offset", offset.to_string()),
        ]);
        self.request("get_mined_blocks", "account", "getminedblocks", params).await
    }
}
