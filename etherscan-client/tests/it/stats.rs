use crate::*;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn eth_supply_success() {
    run_with_client(|client| async move {
        let supply = client.eth_supply().await.unwrap();
        assert!(supply.result.unwrap_or_default().as_str().is_some());
    })
    .await
}

#[tokio::test]
#[serial]
async fn eth_price_success() {
    run_with_client(|client| async move {
        let price = client.eth_price().await.unwrap().result.unwrap_or_default();
        assert!(price["ethusd"].is_string());
        assert!(price["ethbtc"].is_string());
    })
    .await
}
