// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # cosmoscan
//!
//! Classify the transaction history of a Cosmos SDK account into an
//! accounting ledger.
//!
//! Cosmos SDK nodes report value movements as `coin_spent` and
//! `coin_received` events carrying raw on-chain amounts such as
//! `1500000uatom` or `25ibc/27394FB0...`. cosmoscan turns those into
//! human-scale, labeled ledger entries suitable for crypto tax tools:
//!
//! - **Amount normalization**: raw integers are scaled by each
//!   denomination's precision, IBC hashes are traced back to their base
//!   denomination, and unknown denominations are resolved heuristically
//! - **Classification**: spends and receipts of the account become
//!   withdrawals and deposits, staking and governance flows become rewards
//!   and costs, and delegated principal is recognised as a non-taxable
//!   movement
//! - **Contract claims**: airdrop claims that never surface as coin events are
//!   synthesized by pluggable [`ClaimDetector`]s
//! - **Export**: a concurrent, deduplicating [`LedgerExporter`] drives the
//!   account's transaction searches and writes the sorted ledger as CSV
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::Utc;
//! use cosmoscan::{CurrencyRegistry, CurrencyResolver, IbcIndex, RawEvent, RawTransaction, TransactionClassifier};
//!
//! let registry = CurrencyRegistry::embedded().unwrap();
//! let resolver = Arc::new(CurrencyResolver::new(registry, IbcIndex::new()));
//! let classifier = TransactionClassifier::new("cosmos1me", resolver);
//!
//! let tx = RawTransaction::new("AB12", 9_000_000, vec![
//!     RawEvent::new("coin_spent", [("spender", "cosmos1me"), ("amount", "5000uatom")]),
//!     RawEvent::new("message", [("action", "/cosmos.staking.v1beta1.MsgDelegate")]),
//!     RawEvent::new("coin_spent", [("spender", "cosmos1me"), ("amount", "10000000uatom")]),
//! ]);
//!
//! // The fee is a cost; the delegated principal isn't a taxable movement
//! let entries = classifier.classify(&tx, Utc::now());
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].sent_amount, 0.005);
//! assert_eq!(entries[0].sent_currency, "ATOM");
//! assert_eq!(entries[0].label.as_str(), "cost");
//! ```
//!
//! ## Data sources
//!
//! cosmoscan performs no network I/O of its own. Implement [`TxSearchSource`],
//! [`BlockTimeSource`] and [`IbcTraceSource`] over your node client of choice.

// Error types
mod errors;
pub use errors::{AmountError, CosmoscanError, CurrencyError, ExportError, SourceError};

// Strong types
mod types;
pub use types::config::PageSize;
pub use types::currency::{CurrencyInfo, Precision, Resolution};
pub use types::ledger::{EntryLabel, LedgerEntry, SYNTHETIC_ENTRY_INDEX};
pub use types::tx::{
    BlockHeight, EventAttribute, RawEvent, RawTransaction, COIN_RECEIVED, COIN_SPENT,
};

// Amount parsing and currency normalization
mod amount;
pub use amount::{parse_coins, RawCoin, IBC_PREFIX};

pub mod currency;
pub use currency::{
    discover_ibc_index, CurrencyRegistry, CurrencyResolver, IbcIndex, NormalizedCoin,
    ResolvedCurrency, UNKNOWN_IBC_DENOM,
};

// Classification
pub mod classify;
pub use classify::{
    attribute_event, ActionSummary, Direction, EventAttribution, TransactionClassifier,
    AUTHZ_CLAIM_SEGMENT, AUTHZ_EXEC_ACTION, AUTHZ_REWARD_SIGNATURE, VOTE_SIGNATURE,
};

pub mod claims;
pub use claims::{
    ClaimDetector, ClaimDetectors, ClaimedTokens, Cw20AirdropClaim, CW20_CLAIM_SIGNATURE,
    MARBLE_AIRDROP_CONTRACT,
};

// Export pipeline
mod config;
pub use config::{ExportConfig, ExportConfigBuilder, DEFAULT_PROGRESS_INTERVAL};

mod source;
pub use source::{
    BlockTimeSource, IbcTraceSource, SearchOrder, TxQuery, TxSearchPage, TxSearchSource,
};

mod ledger;
pub use ledger::{FinalizedLedger, Ledger, LedgerProgress};

mod export;
pub use export::{write_csv, CSV_HEADER};

mod pipeline;
pub use pipeline::LedgerExporter;

// Tracing spans (internal)
mod spans;
