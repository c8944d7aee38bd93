// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Account history export
//!
//! [`LedgerExporter`] drives both account queries (coins received, coins
//! spent) concurrently. Each query pages through its search results and, for
//! every transaction not seen before, looks up the block time, classifies the
//! transaction and appends the entries to a shared [`Ledger`]. When both
//! queries are exhausted the ledger is sorted into chain order.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cosmoscan::{
//!     discover_ibc_index, ClaimDetectors, CurrencyRegistry, CurrencyResolver, ExportConfig,
//!     LedgerExporter,
//! };
//!
//! let ibc = discover_ibc_index(rpc.as_ref()).await?;
//! let resolver = CurrencyResolver::new(CurrencyRegistry::embedded()?, ibc);
//!
//! let ledger = LedgerExporter::new(ExportConfig::new("juno1...")?, rpc.clone(), rpc, Arc::new(resolver))
//!     .with_claim_detectors(ClaimDetectors::juno())
//!     .run()
//!     .await?;
//! ledger.write_csv_file("juno1.csv").await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use tokio::task::JoinHandle;
use tracing::{debug, info, Instrument};

use crate::{
    spans, BlockTimeSource, ClaimDetectors, CurrencyResolver, ExportConfig, ExportError,
    FinalizedLedger, Ledger, LedgerProgress, RawTransaction, TransactionClassifier, TxQuery,
    TxSearchSource,
};

/// Exports the classified history of one account
pub struct LedgerExporter {
    config: ExportConfig,
    txs: Arc<dyn TxSearchSource>,
    block_times: Arc<dyn BlockTimeSource>,
    classifier: TransactionClassifier,
}

impl LedgerExporter {
    /// Create an exporter without contract claim detectors
    pub fn new(
        config: ExportConfig,
        txs: Arc<dyn TxSearchSource>,
        block_times: Arc<dyn BlockTimeSource>,
        resolver: Arc<CurrencyResolver>,
    ) -> Self {
        let classifier = TransactionClassifier::new(config.account.clone(), resolver);
        Self {
            config,
            txs,
            block_times,
            classifier,
        }
    }

    /// Detect contract claims with these detectors
    pub fn with_claim_detectors(mut self, claims: impl Into<Arc<ClaimDetectors>>) -> Self {
        self.classifier = self.classifier.with_claim_detectors(claims);
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn classifier(&self) -> &TransactionClassifier {
        &self.classifier
    }

    /// Run the export to completion
    ///
    /// # Errors
    ///
    /// Any failed search page or block time lookup aborts the whole run; no
    /// partial ledger is returned.
    pub async fn run(&self) -> Result<FinalizedLedger, ExportError> {
        let account = self.config.account.as_str();
        async {
            info!("Starting ledger export");
            let ledger = Ledger::new();
            let ticker = self.spawn_progress(&ledger);

            let queries = TxQuery::for_account(account);
            let result =
                try_join_all(queries.iter().map(|query| self.collect(query, &ledger))).await;

            drop(ticker);
            result?;

            let transactions = ledger.seen_count();
            let finalized = ledger.finalize();
            info!(
                entries = finalized.len(),
                transactions,
                "Collection finished"
            );
            Ok(finalized)
        }
        .instrument(spans::export_ledger(account))
        .await
    }

    /// Page through one query until its results are exhausted
    async fn collect(&self, query: &TxQuery, ledger: &Ledger) -> Result<(), ExportError> {
        let page_size = self.config.page_size;
        let mut page = 1;
        loop {
            let (total_count, fetched) = async {
                let result = self
                    .txs
                    .search(query, page, page_size.as_u32(), self.config.order)
                    .await
                    .map_err(|e| ExportError::tx_search(query.to_query_string(), page, e))?;
                self.process_transactions(ledger, &result.txs).await?;
                Ok::<_, ExportError>((result.total_count, result.txs.len()))
            }
            .instrument(spans::search_page(query.name(), page))
            .await?;

            debug!(
                query = query.name(),
                page,
                fetched,
                total_count,
                "Processed search page"
            );

            // An empty page means the node has nothing more, whatever the total claims
            if fetched == 0 || !page_size.has_more(total_count, page) {
                return Ok(());
            }
            page += 1;
        }
    }

    /// Classify the transactions of one page into `ledger`
    ///
    /// Transactions already recorded in the ledger are skipped. Returns the
    /// number of newly processed transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::BlockTime`] if a block time can't be determined.
    pub async fn process_transactions(
        &self,
        ledger: &Ledger,
        txs: &[RawTransaction],
    ) -> Result<usize, ExportError> {
        let mut processed = 0;
        for tx in txs {
            if ledger.is_duplicate(&tx.hash) {
                debug!(tx_hash = %tx.hash, "Skipping already processed transaction");
                continue;
            }
            let timestamp = self
                .block_times
                .block_time(tx.height)
                .await
                .map_err(|e| ExportError::block_time(tx.height, e))?;
            ledger.extend(self.classifier.classify(tx, timestamp));
            processed += 1;
        }
        Ok(processed)
    }

    fn spawn_progress(&self, ledger: &Ledger) -> Option<ProgressTicker> {
        let interval = self.config.progress_interval?;
        Some(ProgressTicker::spawn(ledger.progress(), interval))
    }
}

impl std::fmt::Debug for LedgerExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerExporter")
            .field("config", &self.config)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

/// Background task logging ledger growth at a fixed interval
///
/// The task is aborted when the ticker is dropped, including when the export
/// future itself is dropped before completing.
struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    fn spawn(progress: LedgerProgress, period: Duration) -> Self {
        let handle = tokio::spawn(
            async move {
                let mut interval = tokio::time::interval(period);
                // first tick completes immediately
                interval.tick().await;
                loop {
                    interval.tick().await;
                    info!(
                        transactions = progress.transactions(),
                        entries = progress.entries(),
                        "Export in progress"
                    );
                }
            }
            .in_current_span(),
        );
        Self { handle }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
