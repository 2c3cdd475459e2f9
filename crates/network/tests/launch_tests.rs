//! Launch workflows against scripted SPN responses.

mod common;

use common::{account, chain_launch, launch_params, FakeChain, FakeTxClient, ScriptedTransport};
use spn_network::{
    collect_events, EventBus, MsgTriggerLaunch, Network, NetworkError, ProgressIndication,
};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

const HOUR: u64 = 3600;

fn setup() -> (Network, Arc<FakeTxClient>, Arc<ScriptedTransport>) {
    let transport = ScriptedTransport::new();
    transport.respond("/spn.launch.Query/Params", launch_params(60, 7 * 24 * 3600));
    let client = FakeTxClient::new(transport.clone());
    let network = Network::builder(client.clone(), account()).build();
    (network, client, transport)
}

fn sent_trigger(client: &FakeTxClient) -> MsgTriggerLaunch {
    let broadcasts = client.broadcasts.lock().unwrap();
    let msgs = broadcasts.last().expect("no broadcast");
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].type_url, "/spn.launch.MsgTriggerLaunch");
    serde_json::from_value(msgs[0].value.clone()).unwrap()
}

#[tokio::test]
async fn trigger_launch_broadcasts_signed_message() {
    let (network, client, _) = setup();

    network
        .trigger_launch(7, Duration::from_secs(HOUR))
        .await
        .unwrap();

    let msg = sent_trigger(&client);
    assert_eq!(msg.launch_id, 7);
    assert_eq!(msg.remaining_time, HOUR);
    assert_eq!(msg.coordinator, network.account_address().unwrap());
}

#[tokio::test]
async fn zero_remaining_time_uses_minimum() {
    let (network, client, _) = setup();

    network.trigger_launch(7, Duration::ZERO).await.unwrap();

    assert_eq!(sent_trigger(&client).remaining_time, 60);
}

#[tokio::test]
async fn remaining_time_outside_range_is_rejected() {
    let (network, client, _) = setup();

    let err = network
        .trigger_launch(7, Duration::from_secs(30))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        NetworkError::LaunchTimeOutOfRange {
            remaining_secs: 30,
            min_secs: 60,
            ..
        }
    ));

    let err = network
        .trigger_launch(7, Duration::from_secs(8 * 24 * 3600))
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::LaunchTimeOutOfRange { .. }));
    assert_eq!(client.broadcast_count(), 0);
}

#[tokio::test]
async fn trigger_launch_reports_progress() {
    let transport = ScriptedTransport::new();
    transport.respond("/spn.launch.Query/Params", launch_params(60, 3600));
    let client = FakeTxClient::new(transport);
    let (bus, mut rx) = EventBus::new();
    let network = Network::new(client, account(), [collect_events(Arc::new(bus))]);

    network
        .trigger_launch(2, Duration::from_secs(600))
        .await
        .unwrap();
    drop(network);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    assert_eq!(events.first().unwrap().progress, ProgressIndication::Start);
    let last = events.last().unwrap();
    assert_eq!(last.progress, ProgressIndication::Finish);
    assert!(last.message.starts_with("Chain 2 will be launched on"));
}

#[tokio::test]
async fn prepare_requires_triggered_launch() {
    let (network, _, transport) = setup();
    transport.respond("/spn.launch.Query/Chain", chain_launch(5, false));
    let chain = FakeChain::new("orbit-1");

    let err = network.prepare(&chain, 5).await.unwrap_err();
    assert!(matches!(err, NetworkError::LaunchNotTriggered(5)));
    assert!(chain.cached.lock().unwrap().is_empty());
}

#[tokio::test]
async fn prepare_caches_binary_and_returns_genesis_path() {
    let (network, _, transport) = setup();
    transport.respond("/spn.launch.Query/Chain", chain_launch(5, true));
    let chain = FakeChain::new("orbit-1");

    let genesis = network.prepare(&chain, 5).await.unwrap();
    assert_eq!(genesis, PathBuf::from("/home/orbit/config/genesis.json"));
    assert_eq!(*chain.cached.lock().unwrap(), vec![5]);
}

#[tokio::test]
async fn prepare_rejects_chain_id_mismatch() {
    let (network, _, transport) = setup();
    transport.respond("/spn.launch.Query/Chain", chain_launch(5, true));
    let chain = FakeChain::new("other-1");

    let err = network.prepare(&chain, 5).await.unwrap_err();
    match err {
        NetworkError::ChainIdMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, "orbit-1");
            assert_eq!(actual, "other-1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unknown_launch_is_not_found() {
    let (network, _, _) = setup();
    let chain = FakeChain::new("orbit-1");

    let err = network.prepare(&chain, 99).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        NetworkError::ObjectNotFound { kind: "chain", .. }
    ));
}

#[tokio::test]
async fn init_chain_resets_genesis_before_trigger() {
    let (network, _, transport) = setup();
    transport.respond("/spn.launch.Query/Chain", chain_launch(5, false));
    let chain = FakeChain::new("orbit-1");

    network.init_chain(&chain, 5).await.unwrap();
    assert_eq!(*chain.cached.lock().unwrap(), vec![5]);
    assert_eq!(chain.genesis_resets.load(Ordering::SeqCst), 1);

    transport.respond("/spn.launch.Query/Chain", chain_launch(5, true));
    let err = network.init_chain(&chain, 5).await.unwrap_err();
    assert!(matches!(err, NetworkError::LaunchAlreadyTriggered(5)));
}

#[tokio::test]
async fn peer_address_joins_node_id_and_address() {
    let (network, _, _) = setup();
    let chain = FakeChain::new("orbit-1");

    let peer = network
        .peer_address(&chain, "1.2.3.4:26656")
        .await
        .unwrap();
    assert_eq!(peer, "e3f1a9@1.2.3.4:26656");
}
