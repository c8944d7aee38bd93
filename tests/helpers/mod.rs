// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for cosmoscan integration tests
//!
//! Provides mock implementations of the node-facing traits so exports can be
//! tested without a live chain.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use cosmoscan::{
    BlockHeight, BlockTimeSource, CurrencyInfo, CurrencyRegistry, CurrencyResolver, IbcIndex,
    IbcTraceSource, RawEvent, RawTransaction, SearchOrder, SourceError, TxQuery, TxSearchPage,
    TxSearchSource,
};

pub const ACCOUNT: &str = "juno1target";

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Formatted log output captured from the current thread
///
/// # Example
///
/// ```rust,ignore
/// let (logs, _guard) = LogCapture::install();
/// tracing::info!("hello");
/// assert_eq!(logs.count("hello"), 1);
/// ```
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Route this thread's events into a new capture until the guard drops
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    /// Number of captured lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Transaction search whose requests never complete
pub struct StalledTxSource;

#[async_trait]
impl TxSearchSource for StalledTxSource {
    async fn search(
        &self,
        _query: &TxQuery,
        _page: u32,
        _per_page: u32,
        _order: SearchOrder,
    ) -> Result<TxSearchPage, SourceError> {
        futures::future::pending().await
    }
}

/// Mock transaction search serving fixed result lists in pages
///
/// Each query has its own list of transactions. Pages are sliced from that
/// list using the requested `per_page`, and `total_count` is the list length.
///
/// # Example
///
/// ```rust,ignore
/// let source = MockTxSource::new()
///     .with_received(vec![tx_a.clone()])
///     .with_spent(vec![tx_a, tx_b])
///     .fail_on("spent", 2);
/// ```
#[derive(Default)]
pub struct MockTxSource {
    received: Vec<RawTransaction>,
    spent: Vec<RawTransaction>,
    failures: HashSet<(&'static str, u32)>,
    calls: Mutex<Vec<(&'static str, u32, u32)>>,
}

impl MockTxSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_received(mut self, txs: Vec<RawTransaction>) -> Self {
        self.received = txs;
        self
    }

    pub fn with_spent(mut self, txs: Vec<RawTransaction>) -> Self {
        self.spent = txs;
        self
    }

    /// Make the given page of the named query ("received" or "spent") fail
    pub fn fail_on(mut self, query: &'static str, page: u32) -> Self {
        self.failures.insert((query, page));
        self
    }

    /// Every `(query, page, per_page)` requested so far
    pub fn calls(&self) -> Vec<(&'static str, u32, u32)> {
        self.calls.lock().unwrap().clone()
    }

    /// Pages requested for the named query, in request order
    pub fn pages_requested(&self, query: &str) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter(|(name, _, _)| *name == query)
            .map(|(_, page, _)| page)
            .collect()
    }
}

#[async_trait]
impl TxSearchSource for MockTxSource {
    async fn search(
        &self,
        query: &TxQuery,
        page: u32,
        per_page: u32,
        _order: SearchOrder,
    ) -> Result<TxSearchPage, SourceError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.name(), page, per_page));

        if self.failures.contains(&(query.name(), page)) {
            return Err(SourceError::transport("connection reset by peer"));
        }

        let txs = match query {
            TxQuery::Received { .. } => &self.received,
            TxQuery::Spent { .. } => &self.spent,
        };
        let start = ((page - 1) * per_page) as usize;
        let page_txs = txs
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(TxSearchPage {
            total_count: txs.len() as u64,
            txs: page_txs,
        })
    }
}

/// Block times derived from the height: `height` seconds after 2022-01-01
#[derive(Default)]
pub struct FixedBlockTimes {
    failing: HashSet<BlockHeight>,
}

impl FixedBlockTimes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(mut self, height: BlockHeight) -> Self {
        self.failing.insert(height);
        self
    }

    pub fn time_of(height: BlockHeight) -> DateTime<Utc> {
        let base = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        base + chrono::Duration::seconds(height as i64)
    }
}

#[async_trait]
impl BlockTimeSource for FixedBlockTimes {
    async fn block_time(&self, height: BlockHeight) -> Result<DateTime<Utc>, SourceError> {
        if self.failing.contains(&height) {
            return Err(SourceError::transport(format!("block {height} not found")));
        }
        Ok(Self::time_of(height))
    }
}

/// Mock supply and denom trace queries
#[derive(Default)]
pub struct MockIbcTraces {
    supply: Vec<String>,
    traces: HashMap<String, Option<String>>,
    failing_traces: HashSet<String>,
    supply_fails: bool,
    trace_calls: Mutex<Vec<String>>,
}

impl MockIbcTraces {
    pub fn new(supply: &[&str]) -> Self {
        Self {
            supply: supply.iter().map(|d| d.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_trace(mut self, hash: &str, base_denom: &str) -> Self {
        self.traces
            .insert(hash.to_string(), Some(base_denom.to_string()));
        self
    }

    pub fn with_empty_trace(mut self, hash: &str) -> Self {
        self.traces.insert(hash.to_string(), None);
        self
    }

    pub fn with_failing_trace(mut self, hash: &str) -> Self {
        self.failing_traces.insert(hash.to_string());
        self
    }

    pub fn with_failing_supply(mut self) -> Self {
        self.supply_fails = true;
        self
    }

    pub fn trace_calls(&self) -> Vec<String> {
        self.trace_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IbcTraceSource for MockIbcTraces {
    async fn supply_denoms(&self) -> Result<Vec<String>, SourceError> {
        if self.supply_fails {
            return Err(SourceError::transport("supply query timed out"));
        }
        Ok(self.supply.clone())
    }

    async fn denom_trace(&self, hash: &str) -> Result<Option<String>, SourceError> {
        self.trace_calls.lock().unwrap().push(hash.to_string());
        if self.failing_traces.contains(hash) {
            return Err(SourceError::decode("unexpected trace response"));
        }
        Ok(self.traces.get(hash).cloned().flatten())
    }
}

/// Resolver with a small registry and no IBC hashes
pub fn test_resolver() -> Arc<CurrencyResolver> {
    let mut registry = CurrencyRegistry::new();
    registry.insert("ujuno", CurrencyInfo::new(6, "JUNO", "juno"));
    registry.insert("uatom", CurrencyInfo::new(6, "ATOM", "cosmoshub"));
    registry.insert("aevmos", CurrencyInfo::new(18, "EVMOS", "evmos"));
    Arc::new(CurrencyResolver::new(registry, IbcIndex::new()))
}

pub fn action(value: &str) -> RawEvent {
    RawEvent::new("message", [("action", value)])
}

pub fn spent(account: &str, amount: &str) -> RawEvent {
    RawEvent::new("coin_spent", [("spender", account), ("amount", amount)])
}

pub fn received(account: &str, amount: &str) -> RawEvent {
    RawEvent::new("coin_received", [("receiver", account), ("amount", amount)])
}

pub fn tx(hash: &str, height: BlockHeight, events: Vec<RawEvent>) -> RawTransaction {
    RawTransaction::new(hash, height, events)
}

/// A plain `MsgSend` paying `amount` from `from` to `to`, fee paid by `from`
pub fn send_tx(hash: &str, height: BlockHeight, from: &str, to: &str, amount: &str) -> RawTransaction {
    tx(
        hash,
        height,
        vec![
            spent(from, "2500ujuno"),
            action("/cosmos.bank.v1beta1.MsgSend"),
            spent(from, amount),
            received(to, amount),
        ],
    )
}
