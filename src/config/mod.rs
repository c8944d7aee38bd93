// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for ledger export runs
//!
//! # Example: Using defaults
//!
//! ```rust
//! use cosmoscan::ExportConfig;
//!
//! // 100 transactions per page, newest first, progress every 10 seconds
//! let config = ExportConfig::new("juno1abc").unwrap();
//! assert_eq!(config.page_size.as_u32(), 100);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use cosmoscan::{ExportConfigBuilder, SearchOrder};
//! use std::time::Duration;
//!
//! let config = ExportConfigBuilder::new("juno1abc")
//!     .page_size(50)
//!     .order(SearchOrder::Ascending)
//!     .progress_interval(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```

use std::time::Duration;

use crate::{ExportError, PageSize, SearchOrder};

/// How often a running export logs its progress by default
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(10);

/// Configuration for a single account export
///
/// Use [`ExportConfigBuilder`] to construct instances; it validates the
/// account and page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Bech32 address whose history is exported
    pub account: String,

    /// Transactions requested per search page
    /// Default: 100 (Tendermint's maximum)
    pub page_size: PageSize,

    /// Order requested from the transaction search
    /// Default: descending. The ledger is sorted afterwards either way.
    pub order: SearchOrder,

    /// Interval between progress log lines
    /// Default: 10 seconds. `None` disables progress logging.
    pub progress_interval: Option<Duration>,
}

impl ExportConfig {
    /// Default configuration for `account`
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidConfig`] if the account is empty.
    pub fn new(account: impl Into<String>) -> Result<Self, ExportError> {
        ExportConfigBuilder::new(account).build()
    }
}

/// Builder for [`ExportConfig`]
///
/// # Example
///
/// ```rust
/// use cosmoscan::ExportConfigBuilder;
///
/// let config = ExportConfigBuilder::new("cosmos1xyz")
///     .page_size(25)
///     .no_progress()
///     .build()
///     .unwrap();
/// assert!(config.progress_interval.is_none());
///
/// assert!(ExportConfigBuilder::new("").build().is_err());
/// assert!(ExportConfigBuilder::new("cosmos1xyz").page_size(0).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            config: ExportConfig {
                account: account.into(),
                page_size: PageSize::default(),
                order: SearchOrder::default(),
                progress_interval: Some(DEFAULT_PROGRESS_INTERVAL),
            },
        }
    }

    /// Set transactions per search page
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = PageSize::new(size);
        self
    }

    /// Set the search order
    pub fn order(mut self, order: SearchOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Set the progress log interval
    pub fn progress_interval(mut self, interval: Duration) -> Self {
        self.config.progress_interval = Some(interval);
        self
    }

    /// Disable progress logging
    pub fn no_progress(mut self) -> Self {
        self.config.progress_interval = None;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidConfig`] if the account is empty, the page
    /// size is zero, or the progress interval is zero.
    pub fn build(self) -> Result<ExportConfig, ExportError> {
        let config = self.config;
        if config.account.trim().is_empty() {
            return Err(ExportError::invalid_config("account must not be empty"));
        }
        if !config.page_size.is_valid() {
            return Err(ExportError::invalid_config("page size must be at least 1"));
        }
        if config.progress_interval == Some(Duration::ZERO) {
            return Err(ExportError::invalid_config(
                "progress interval must be non-zero",
            ));
        }
        Ok(config)
    }
}
