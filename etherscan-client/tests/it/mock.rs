use crate::*;
use etherscan_client::{
    account::{PageParams, TxListParams},
    MockResponse, TransportError,
};
use serde_json::json;

const ADDRESS: &str = "0xddbd2b932c763ba5b1b7ae3b362eac3e8d40121a";
const TOKEN: &str = "0x57d90b64a1a57749b0f932f1a3395792e12e7055";

#[tokio::test]
async fn successful_body_is_returned_verbatim() {
    let (client, mock) = mocked_client();
    let body = json!({
        "status": "1",
        "message": "OK",
        "result": "40891626854930000000000"
    });
    mock.push(body.clone()).unwrap();

    let res = client.get_ether_balance_single(ADDRESS).await.unwrap();
    assert_eq!(serde_json::to_value(&res).unwrap(), body);

    let url = mock
        .assert_request("account", "balance", &[("address", ADDRESS), ("tag", "latest")])
        .unwrap();
    assert_eq!(url.host_str(), Some("api.etherscan.io"));
    assert_eq!(url.path(), "/api");
}

#[tokio::test]
async fn every_request_carries_the_api_key() {
    let (client, mock) = mocked_client();
    for _ in 0..3 {
        mock.push(json!({"status": "1", "message": "OK", "result": "0"})).unwrap();
    }

    client.eth_supply().await.unwrap();
    client.get_erc20_token_total_supply(TOKEN).await.unwrap();
    client.get_erc20_token_balance(TOKEN, ADDRESS).await.unwrap();

    mock.assert_request("stats", "ethsupply", &[("apikey", "TESTKEY")]).unwrap();
    mock.assert_request(
        "stats",
        "tokensupply",
        &[("apikey", "TESTKEY"), ("contractaddress", TOKEN)],
    )
    .unwrap();
    mock.assert_request(
        "account",
        "tokenbalance",
        &[("apikey", "TESTKEY"), ("contractaddress", TOKEN), ("address", ADDRESS)],
    )
    .unwrap();
    assert!(mock.is_idle());
}

#[tokio::test]
async fn custom_endpoint_is_used() {
    let mock = MockTransport::new();
    mock.push(json!({"status": "1", "message": "OK", "result": {"ethusd": "1650.5"}})).unwrap();
    let client = Client::builder()
        .with_api_key("TESTKEY")
        .with_api_url("https://api-sepolia.etherscan.io/api")
        .unwrap()
        .with_transport(mock.clone())
        .build()
        .unwrap();

    client.eth_price().await.unwrap();
    let url = mock.assert_request("stats", "ethprice", &[]).unwrap();
    assert_eq!(url.host_str(), Some("api-sepolia.etherscan.io"));
}

#[tokio::test]
async fn unsuccessful_status_is_reported_with_operation_name() {
    let (client, mock) = mocked_client();
    mock.push(json!({"status": "0", "message": "No transactions found", "result": []})).unwrap();

    let err = client
        .get_erc20_token_transfer_events(ADDRESS, None::<&str>, PageParams::default())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "get_erc20_token_transfer_events Error: Failed to fetch: Response status must to be '1'"
    );
    match err.root_cause() {
        EtherscanError::ResponseStatus { status, message, result } => {
            assert_eq!(status.as_deref(), Some("0"));
            assert_eq!(message, "No transactions found");
            assert_eq!(result, &json!([]));
        }
        err => panic!("unexpected error {err:?}"),
    }
    mock.assert_request("account", "tokentx", &[("sort", "desc"), ("page", "1")]).unwrap();
}

#[tokio::test]
async fn rate_limit_is_detected() {
    let (client, mock) = mocked_client();
    mock.push(json!({
        "status": "0",
        "message": "NOTOK",
        "result": "Max rate limit reached, please use API Key for higher rate limit"
    }))
    .unwrap();

    let err = client.gas_oracle().await.unwrap_err();
    assert!(err.is_rate_limit_exceeded());
    assert_eq!(err.operation(), Some("gas_oracle"));
}

#[tokio::test]
async fn transport_failures_are_wrapped() {
    let (client, mock) = mocked_client();
    mock.push_response(MockResponse::Error("connection reset by peer".to_string()));

    let err = client.get_block_countdown(16701588).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "get_block_countdown Error: Failed to fetch: connection reset by peer"
    );
    assert!(matches!(err.root_cause(), EtherscanError::Transport(TransportError::Mock(_))));
}

#[tokio::test]
async fn malformed_bodies_are_decode_errors() {
    let (client, mock) = mocked_client();
    mock.push_response(MockResponse::Body("Bad Gateway".to_string()));

    let err = client.check_transaction_receipt_status(ADDRESS).await.unwrap_err();
    assert!(matches!(err.root_cause(), EtherscanError::Decode { .. }));
}

#[tokio::test]
async fn validation_happens_before_any_request() {
    let (client, mock) = mocked_client();
    let addresses = vec![ADDRESS; 21];

    let err = client.get_ether_balance_multi(&addresses).await.unwrap_err();
    assert!(matches!(err.root_cause(), EtherscanError::Validation(_)));

    let err = client.get_mined_blocks(ADDRESS, "orphans", 1, 10).await.unwrap_err();
    assert_eq!(err.to_string(), "get_mined_blocks Error: Wrong block type");

    assert!(mock.is_idle());
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let (client, mock) = mocked_client();
    mock.push(json!({"status": "1", "message": "OK", "result": "x"})).unwrap();
    mock.push(json!({"status": "1", "message": "OK", "result": "x"})).unwrap();
    mock.push(json!({"status": "1", "message": "OK", "result": "x"})).unwrap();

    let (a, b, c) = tokio::join!(
        client.eth_supply(),
        client.get_contract_abi(TOKEN),
        client.get_block_reward(2165403)
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();
    assert_eq!(mock.pending_requests().len(), 3);
}

#[tokio::test]
async fn fetch_accepts_prebuilt_urls() {
    let (client, mock) = mocked_client();
    mock.push(json!({"status": "1", "message": "OK", "result": "1"})).unwrap();

    let url = "https://api.etherscan.io/api?module=transaction&action=getstatus&txhash=0x1"
        .parse()
        .unwrap();
    let res = client.fetch(url).await.unwrap();
    assert_eq!(res.result, Some(json!("1")));
    mock.assert_request("transaction", "getstatus", &[("txhash", "0x1")]).unwrap();
}

#[tokio::test]
async fn every_operation_rejects_notok() {
    let (client, mock) = mocked_client();
    const HASH: &str = "0x40eb908387324f2b575b4879cd9d7188f69c8fc9d87c901b9e2daaea4b442170";
    let list = TxListParams::default();
    let page = PageParams::default();
    for _ in 0..33 {
        mock.push(json!({"status": "0", "message": "NOTOK"})).unwrap();
    }

    let results = vec![
        ("get_ether_balance_single", client.get_ether_balance_single(ADDRESS).await),
        ("get_ether_balance_multi", client.get_ether_balance_multi(&[ADDRESS, TOKEN]).await),
        ("get_transactions", client.get_transactions(ADDRESS, list).await),
        (
            "get_internal_transactions_by_address",
            client.get_internal_transactions_by_address(ADDRESS, list).await,
        ),
        ("get_internal_transactions_by_hash", client.get_internal_transactions_by_hash(HASH).await),
        (
            "get_internal_transactions_by_block_range",
            client.get_internal_transactions_by_block_range(list).await,
        ),
        (
            "get_erc20_token_transfer_events",
            client.get_erc20_token_transfer_events(ADDRESS, Some(TOKEN), page).await,
        ),
        (
            "get_erc721_token_transfer_events",
            client.get_erc721_token_transfer_events(TOKEN, ADDRESS, page).await,
        ),
        ("get_mined_blocks", client.get_mined_blocks(ADDRESS, "uncles", 1, 10).await),
        ("get_contract_abi", client.get_contract_abi(TOKEN).await),
        ("check_contract_execution_status", client.check_contract_execution_status(HASH).await),
        ("check_transaction_receipt_status", client.check_transaction_receipt_status(HASH).await),
        ("get_block_reward", client.get_block_reward(2165403).await),
        ("get_block_countdown", client.get_block_countdown(16701588).await),
        ("get_block_by_timestamp", client.get_block_by_timestamp(1578638524, "after").await),
        ("eth_block_number", client.eth_block_number().await),
        ("eth_get_block_by_number", client.eth_get_block_by_number("0x10d4f").await),
        (
            "eth_get_uncle_by_block_number_and_index",
            client.eth_get_uncle_by_block_number_and_index("0xC63276", "0x0").await,
        ),
        (
            "eth_get_block_transaction_count_by_number",
            client.eth_get_block_transaction_count_by_number("0x10FB78").await,
        ),
        ("eth_get_transaction_by_hash", client.eth_get_transaction_by_hash(HASH).await),
        (
            "eth_get_transaction_by_block_number_and_index",
            client.eth_get_transaction_by_block_number_and_index("0xC6331D", "0x11A").await,
        ),
        ("eth_get_transaction_count", client.eth_get_transaction_count(ADDRESS).await),
        ("eth_get_transaction_receipt", client.eth_get_transaction_receipt(HASH).await),
        ("eth_get_code", client.eth_get_code(TOKEN).await),
        ("eth_get_storage_at", client.eth_get_storage_at(TOKEN, "0x0").await),
        ("eth_gas_price", client.eth_gas_price().await),
        ("get_erc20_token_total_supply", client.get_erc20_token_total_supply(TOKEN).await),
        ("get_erc20_token_info", client.get_erc20_token_info(TOKEN).await),
        ("get_erc20_token_balance", client.get_erc20_token_balance(TOKEN, ADDRESS).await),
        ("gas_estimate", client.gas_estimate(2000000000).await),
        ("gas_oracle", client.gas_oracle().await),
        ("eth_supply", client.eth_supply().await),
        ("eth_price", client.eth_price().await),
    ];
    assert_eq!(results.len(), 33);

    for (operation, result) in results {
        let err = result.unwrap_err();
        assert_eq!(err.operation(), Some(operation));
        match &err {
            EtherscanError::Operation { source, .. } => {
                assert!(matches!(**source, EtherscanError::Fetch(_)), "{operation}: {source:?}")
            }
            other => panic!("{operation}: expected an operation error, got {other:?}"),
        }
        match err.root_cause() {
            EtherscanError::ResponseStatus { status, message, result } => {
                assert_eq!(status.as_deref(), Some("0"), "{operation}");
                assert_eq!(message, "NOTOK", "{operation}");
                assert!(result.is_null(), "{operation}");
            }
            other => panic!("{operation}: unexpected root cause {other:?}"),
        }
    }
    assert_eq!(mock.pending_requests().len(), 33);
}
