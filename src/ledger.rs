// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared ledger accumulation and finalization
//!
//! Producers (one per transaction query) feed a single [`Ledger`] concurrently.
//! The ledger owns the set of already-processed transaction hashes, so a
//! transaction delivered by both queries, or twice by one of them, is
//! classified once. Once every producer is done, [`Ledger::finalize`] sorts the
//! entries into chain order.

use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::{export, ExportError, LedgerEntry};

#[derive(Debug, Default)]
struct LedgerState {
    seen: HashSet<String>,
    entries: Vec<LedgerEntry>,
}

/// Concurrent sink for classified entries
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use cosmoscan::{Ledger, LedgerEntry};
///
/// let ledger = Ledger::new();
/// assert!(!ledger.is_duplicate("AA"));
/// assert!(ledger.is_duplicate("AA"));
///
/// let mut entry = LedgerEntry::new(Utc::now(), "AA", 10, 0, "coin_received");
/// entry.received_amount = 1.0;
/// ledger.append(entry);
///
/// let finalized = ledger.finalize();
/// assert_eq!(finalized.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Ledger {
    state: Mutex<LedgerState>,
    progress: LedgerProgress,
}

#[derive(Debug, Default)]
struct Counters {
    transactions: AtomicUsize,
    entries: AtomicUsize,
}

/// Read-only view of a ledger's growth
///
/// The handle can be cloned into background tasks without sharing the
/// ledger itself, and stays readable after the ledger is finalized.
///
/// # Examples
///
/// ```
/// use cosmoscan::Ledger;
///
/// let ledger = Ledger::new();
/// let progress = ledger.progress();
/// assert!(!ledger.is_duplicate("AA"));
///
/// let _ = ledger.finalize();
/// assert_eq!(progress.transactions(), 1);
/// assert_eq!(progress.entries(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LedgerProgress {
    counters: Arc<Counters>,
}

impl LedgerProgress {
    /// Distinct transactions marked as seen
    pub fn transactions(&self) -> usize {
        self.counters.transactions.load(Ordering::Relaxed)
    }

    /// Entries appended
    pub fn entries(&self) -> usize {
        self.counters.entries.load(Ordering::Relaxed)
    }

    fn add_transaction(&self) {
        self.counters.transactions.fetch_add(1, Ordering::Relaxed);
    }

    fn add_entries(&self, count: usize) {
        self.counters.entries.fetch_add(count, Ordering::Relaxed);
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking producer can't leave the state half-updated: every mutation
    // below is a single insert or push.
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Check a transaction hash and mark it as seen
    ///
    /// Returns `true` if the hash was already marked. Check and mark happen
    /// under one lock, so of two producers racing on the same hash exactly one
    /// gets `false`.
    pub fn is_duplicate(&self, tx_hash: &str) -> bool {
        let mut state = self.lock();
        if state.seen.contains(tx_hash) {
            return true;
        }
        state.seen.insert(tx_hash.to_string());
        self.progress.add_transaction();
        false
    }

    pub fn append(&self, entry: LedgerEntry) {
        self.lock().entries.push(entry);
        self.progress.add_entries(1);
    }

    /// Append all entries of one transaction under a single lock
    pub fn extend(&self, entries: impl IntoIterator<Item = LedgerEntry>) {
        let mut state = self.lock();
        let before = state.entries.len();
        state.entries.extend(entries);
        self.progress.add_entries(state.entries.len() - before);
    }

    /// Handle for observing growth from elsewhere
    pub fn progress(&self) -> LedgerProgress {
        self.progress.clone()
    }

    /// Number of entries appended so far
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Number of distinct transaction hashes seen so far
    pub fn seen_count(&self) -> usize {
        self.lock().seen.len()
    }

    /// Sort entries into chain order
    ///
    /// Entries are ordered by ascending `(height, index)`. The sort is stable,
    /// so entries that tie keep the order in which they were appended. The
    /// ledger is consumed, so nothing can be appended afterwards.
    pub fn finalize(self) -> FinalizedLedger {
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        let mut entries = state.entries;
        entries.sort_by_key(|entry| (entry.height, entry.index));

        debug!(
            entries = entries.len(),
            transactions = state.seen.len(),
            "Finalized ledger"
        );
        FinalizedLedger { entries }
    }
}

/// Ledger entries in chain order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalizedLedger {
    entries: Vec<LedgerEntry>,
}

impl FinalizedLedger {
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEntry> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> Vec<LedgerEntry> {
        self.entries
    }

    /// Write the ledger as CSV, header first
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), ExportError> {
        export::write_csv(writer, &self.entries)
    }

    /// Write the ledger as CSV to a file, replacing any existing file
    pub async fn write_csv_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        tokio::fs::write(path, buffer).await?;

        info!(
            path = %path.display(),
            entries = self.entries.len(),
            "Wrote ledger CSV"
        );
        Ok(())
    }
}

impl IntoIterator for FinalizedLedger {
    type Item = LedgerEntry;
    type IntoIter = std::vec::IntoIter<LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FinalizedLedger {
    type Item = &'a LedgerEntry;
    type IntoIter = std::slice::Iter<'a, LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
