// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for ledger export runs.
//!
//! Every variant here is irrecoverable: the run stops and no partially
//! classified ledger is handed to the caller.

use super::SourceError;

/// Errors that terminate a ledger export run.
///
/// # Examples
///
/// ```rust,ignore
/// use cosmoscan::{ExportError, LedgerExporter};
///
/// match exporter.run().await {
///     Ok(ledger) => println!("{} entries", ledger.len()),
///     Err(ExportError::BlockTime { height, .. }) => {
///         eprintln!("could not determine block time for {height}, this is fatal");
///     }
///     Err(e) => eprintln!("export failed: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A page of the transaction search could not be fetched.
    #[error("Transaction search {query:?} failed on page {page}")]
    TxSearch {
        /// The search query string
        query: String,
        /// The 1-based page that failed
        page: u32,
        /// The underlying source error
        #[source]
        source: SourceError,
    },

    /// The block time for a transaction's height could not be resolved.
    #[error("Could not determine block time for height {height}")]
    BlockTime {
        /// Height of the block whose time was requested
        height: u64,
        /// The underlying source error
        #[source]
        source: SourceError,
    },

    /// Listing the chain's denominations for IBC discovery failed.
    #[error("IBC denomination discovery failed")]
    IbcDiscovery {
        /// The underlying source error
        #[source]
        source: SourceError,
    },

    /// The export configuration is unusable.
    #[error("Invalid configuration: {details}")]
    InvalidConfig {
        /// What was wrong with the configuration
        details: String,
    },

    /// Writing the exported ledger failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create a `TxSearch` error.
    pub fn tx_search(query: impl Into<String>, page: u32, source: SourceError) -> Self {
        ExportError::TxSearch {
            query: query.into(),
            page,
            source,
        }
    }

    /// Create a `BlockTime` error.
    pub fn block_time(height: u64, source: SourceError) -> Self {
        ExportError::BlockTime { height, source }
    }

    /// Create an `InvalidConfig` error with details.
    pub fn invalid_config(details: impl Into<String>) -> Self {
        ExportError::InvalidConfig {
            details: details.into(),
        }
    }
}
