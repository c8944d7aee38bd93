// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Node-facing collaborators
//!
//! The classification core performs no I/O. Everything it needs from a node
//! comes through the traits in this module, so any transport (Tendermint RPC,
//! gRPC, an archive dump, a test fixture) can drive an export.
//!
//! # Example: Implementing a block time source
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use chrono::{DateTime, Utc};
//! use cosmoscan::{BlockTimeSource, SourceError};
//!
//! struct RpcBlockTimes { client: RpcClient }
//!
//! #[async_trait]
//! impl BlockTimeSource for RpcBlockTimes {
//!     async fn block_time(&self, height: u64) -> Result<DateTime<Utc>, SourceError> {
//!         let block = self.client.block(height).await
//!             .map_err(|e| SourceError::transport(e.to_string()))?;
//!         Ok(block.header.time)
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{BlockHeight, RawTransaction, SourceError};

/// Ordering requested from the node's transaction search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchOrder {
    Ascending,
    #[default]
    Descending,
}

impl SearchOrder {
    /// The `order_by` value Tendermint expects
    pub const fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Ascending => "asc",
            SearchOrder::Descending => "desc",
        }
    }
}

/// Account-filtered transaction search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TxQuery {
    /// Transactions in which the account received coins
    Received { account: String },
    /// Transactions in which the account spent coins
    Spent { account: String },
}

impl TxQuery {
    /// The two queries that together cover every coin movement of an account
    pub fn for_account(account: &str) -> [TxQuery; 2] {
        [
            TxQuery::Received {
                account: account.to_string(),
            },
            TxQuery::Spent {
                account: account.to_string(),
            },
        ]
    }

    /// Tendermint event query string
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmoscan::TxQuery;
    ///
    /// let [received, spent] = TxQuery::for_account("juno1abc");
    /// assert_eq!(received.to_query_string(), "coin_received.receiver = 'juno1abc'");
    /// assert_eq!(spent.to_query_string(), "coin_spent.spender = 'juno1abc'");
    /// ```
    pub fn to_query_string(&self) -> String {
        match self {
            TxQuery::Received { account } => format!("coin_received.receiver = '{account}'"),
            TxQuery::Spent { account } => format!("coin_spent.spender = '{account}'"),
        }
    }

    /// Short name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            TxQuery::Received { .. } => "received",
            TxQuery::Spent { .. } => "spent",
        }
    }
}

impl std::fmt::Display for TxQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// One page of transaction search results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxSearchPage {
    /// Total matches across all pages
    pub total_count: u64,
    pub txs: Vec<RawTransaction>,
}

/// Paginated, account-filtered transaction search
///
/// Pages are 1-based. Implementations may re-deliver a transaction on more
/// than one page or under both queries; the exporter deduplicates by hash.
#[async_trait]
pub trait TxSearchSource: Send + Sync {
    async fn search(
        &self,
        query: &TxQuery,
        page: u32,
        per_page: u32,
        order: SearchOrder,
    ) -> Result<TxSearchPage, SourceError>;
}

/// Block height → block time lookup
#[async_trait]
pub trait BlockTimeSource: Send + Sync {
    async fn block_time(&self, height: BlockHeight) -> Result<DateTime<Utc>, SourceError>;
}

/// Chain state queries used to populate the IBC index
#[async_trait]
pub trait IbcTraceSource: Send + Sync {
    /// Every denomination in the chain's total supply
    async fn supply_denoms(&self) -> Result<Vec<String>, SourceError>;

    /// Base denomination of an IBC hash (without its `ibc/` prefix)
    ///
    /// Returns `Ok(None)` if the trace exists but names no base denomination.
    async fn denom_trace(&self, hash: &str) -> Result<Option<String>, SourceError>;
}
