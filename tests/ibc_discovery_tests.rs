// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for IBC index population and IBC amount resolution

mod helpers;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cosmoscan::{
    discover_ibc_index, CurrencyRegistry, CurrencyResolver, ExportError, Resolution,
    TransactionClassifier, UNKNOWN_IBC_DENOM,
};
use helpers::{action, init_tracing, received, tx, MockIbcTraces, ACCOUNT};

const ATOM_HASH: &str = "27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";
const OSMO_HASH: &str = "ED07A3391A112B175915CD8FAF43A2DA8E4790EDE12566649D0C2F97716B8518";

fn ibc(hash: &str) -> String {
    format!("ibc/{hash}")
}

#[tokio::test]
async fn test_discovery_queries_only_ibc_denoms() {
    init_tracing();

    let traces = MockIbcTraces::new(&["ujuno", ibc(ATOM_HASH).as_str(), "uatom"])
        .with_trace(ATOM_HASH, "uatom");
    let index = discover_ibc_index(&traces).await.unwrap();

    assert_eq!(traces.trace_calls(), vec![ATOM_HASH.to_string()]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(ATOM_HASH), "uatom");
}

#[tokio::test]
async fn test_failed_and_empty_traces_are_skipped() {
    init_tracing();

    let traces = MockIbcTraces::new(&[
        ibc(ATOM_HASH).as_str(),
        ibc(OSMO_HASH).as_str(),
        "ibc/DEADBEEF",
    ])
    .with_trace(ATOM_HASH, "uatom")
    .with_failing_trace(OSMO_HASH)
    .with_empty_trace("DEADBEEF");

    let index = discover_ibc_index(&traces).await.unwrap();
    assert_eq!(index.len(), 1);
    assert!(!index.contains(OSMO_HASH));
    assert_eq!(index.get(OSMO_HASH), UNKNOWN_IBC_DENOM);
    assert_eq!(index.get("DEADBEEF"), UNKNOWN_IBC_DENOM);
}

#[tokio::test]
async fn test_supply_failure_aborts_discovery() {
    let traces = MockIbcTraces::new(&[]).with_failing_supply();
    let result = discover_ibc_index(&traces).await;
    assert!(matches!(result, Err(ExportError::IbcDiscovery { .. })));
}

#[tokio::test]
async fn test_ibc_amounts_resolve_through_discovered_index() {
    init_tracing();

    let traces = MockIbcTraces::new(&[ibc(ATOM_HASH).as_str()]).with_trace(ATOM_HASH, "uatom");
    let index = discover_ibc_index(&traces).await.unwrap();
    let resolver = CurrencyResolver::new(CurrencyRegistry::embedded().unwrap(), index);

    let atom = resolver
        .normalize_str(&format!("2500000ibc/{ATOM_HASH}"))
        .unwrap();
    assert_eq!(atom.amount, 2.5);
    assert_eq!(atom.symbol, "ATOM");
    assert_eq!(atom.resolution, Resolution::Registry);

    // Never discovered: resolves as `unknown` through the micro heuristic
    let stray = resolver.normalize_str(&format!("7000000ibc/{OSMO_HASH}")).unwrap();
    assert_eq!(stray.amount, 7.0);
    assert_eq!(stray.symbol, "NKNOWN");
    assert!(stray.resolution.is_guess());
}

#[tokio::test]
async fn test_ibc_transfer_classified_as_deposit() {
    let traces = MockIbcTraces::new(&[ibc(ATOM_HASH).as_str()]).with_trace(ATOM_HASH, "uatom");
    let index = discover_ibc_index(&traces).await.unwrap();
    let resolver = Arc::new(CurrencyResolver::new(CurrencyRegistry::embedded().unwrap(), index));
    let classifier = TransactionClassifier::new(ACCOUNT, resolver);

    let transfer = tx(
        "IBC",
        12,
        vec![
            action("/ibc.core.client.v1.MsgUpdateClient"),
            action("/ibc.core.channel.v1.MsgRecvPacket"),
            received(ACCOUNT, &format!("1000000ibc/{ATOM_HASH}")),
        ],
    );
    let entries = classifier.classify(&transfer, DateTime::<Utc>::UNIX_EPOCH);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].received_amount, 1.0);
    assert_eq!(entries[0].received_currency, "ATOM");
    assert_eq!(
        entries[0].description,
        "coin_received - UpdateClient - RecvPacket"
    );
}
