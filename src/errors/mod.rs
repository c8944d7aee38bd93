// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the cosmoscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`AmountError`],
//!   [`CurrencyError`], [`ExportError`])
//! - **Unified error type** ([`CosmoscanError`]) for callers that don't need to
//!   distinguish between error sources
//!
//! # Error severity
//!
//! Classification never fails. Malformed and zero amounts are reported as
//! [`AmountError`] values that the classifier logs (or ignores) before moving
//! on, and unknown denominations are resolved by a prefix heuristic. Only
//! upstream failures ([`ExportError`]) terminate a run.
//!
//! # Examples
//!
//! ```rust,ignore
//! use cosmoscan::{CosmoscanError, CurrencyRegistry, LedgerExporter};
//!
//! async fn export() -> Result<(), CosmoscanError> {
//!     let registry = CurrencyRegistry::load("currencies.json").await?;
//!     let ledger = exporter.run().await?;
//!     ledger.write_csv_file("history.csv").await?;
//!     Ok(())
//! }
//! ```

mod amount;
mod currency;
mod export;
mod source;

pub use amount::AmountError;
pub use currency::CurrencyError;
pub use export::ExportError;
pub use source::SourceError;

/// Unified error type for all cosmoscan operations.
///
/// All module-specific error types convert into `CosmoscanError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum CosmoscanError {
    /// Error from amount parsing.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from currency registry or IBC index population.
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    /// Error from an upstream data source.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Error that terminated a ledger export.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
