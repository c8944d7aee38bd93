// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for cosmoscan operations.
//!
//! This module keeps telemetry concerns apart from business logic. Instead of
//! using `#[instrument]` attributes directly on functions, each instrumented
//! operation has a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param_value))
//!     .await
//! }
//! ```

use tracing::{Level, Span};

use crate::BlockHeight;

/// Create span for classifying a single transaction.
///
/// Parent: search_page span
/// Children: None (classification performs no I/O)
#[inline]
pub(crate) fn classify_transaction(tx_hash: &str, height: BlockHeight) -> Span {
    tracing::trace_span!(
        "cosmoscan.classify_transaction",
        tx_hash = %tx_hash,
        height = height,
    )
}

/// Create span for fetching and processing one page of a transaction search.
///
/// Parent: export_ledger span
/// Children: classify_transaction spans (one per new transaction)
#[inline]
pub(crate) fn search_page(query: &str, page: u32) -> Span {
    tracing::debug_span!("cosmoscan.search_page", query = %query, page = page)
}

/// Create span for building the IBC index from the chain's supply.
///
/// Parent: None (runs once before an export)
/// Children: None
#[inline]
pub(crate) fn discover_ibc_index() -> Span {
    tracing::span!(Level::INFO, "cosmoscan.discover_ibc_index")
}

/// Create span for a complete ledger export of one account.
///
/// This is the main public API entry point.
///
/// Parent: None (root span for this operation)
/// Children: search_page spans for both account queries
#[inline]
pub(crate) fn export_ledger(account: &str) -> Span {
    tracing::span!(Level::INFO, "cosmoscan.export_ledger", account = %account)
}
