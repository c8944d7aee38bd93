// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction classification into ledger entries

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use super::state::{SpendDecision, SpendState};
use crate::{
    attribute_event, spans, ActionSummary, ClaimDetectors, CurrencyResolver, EntryLabel,
    LedgerEntry, RawTransaction, SYNTHETIC_ENTRY_INDEX,
};

/// Description prefix of synthesized airdrop entries
const AIRDROP_DESCRIPTION: &str = "airdrop claim";

/// Classifies transactions into ledger entries for one account
///
/// Classification is pure: it reads the shared resolver and claim detectors
/// and performs no I/O, so one classifier can serve many concurrent producers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chrono::Utc;
/// use cosmoscan::{CurrencyResolver, EntryLabel, RawEvent, RawTransaction, TransactionClassifier};
///
/// let classifier = TransactionClassifier::new("juno1me", Arc::new(CurrencyResolver::default()));
/// let tx = RawTransaction::new("AB", 7, vec![
///     RawEvent::new("message", [("action", "/cosmos.bank.v1beta1.MsgSend")]),
///     RawEvent::new("coin_received", [("receiver", "juno1me"), ("amount", "1500000ujuno")]),
/// ]);
///
/// let entries = classifier.classify(&tx, Utc::now());
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].received_amount, 1.5);
/// assert_eq!(entries[0].received_currency, "JUNO");
/// assert_eq!(entries[0].label, EntryLabel::Deposit);
/// assert_eq!(entries[0].description, "coin_received - Send");
/// ```
#[derive(Debug, Clone)]
pub struct TransactionClassifier {
    account: String,
    resolver: Arc<CurrencyResolver>,
    claims: Arc<ClaimDetectors>,
}

impl TransactionClassifier {
    /// Create a classifier with no contract claim detectors
    pub fn new(account: impl Into<String>, resolver: Arc<CurrencyResolver>) -> Self {
        Self {
            account: account.into(),
            resolver,
            claims: Arc::new(ClaimDetectors::new()),
        }
    }

    /// Use these claim detectors for contract side effects
    pub fn with_claim_detectors(mut self, claims: impl Into<Arc<ClaimDetectors>>) -> Self {
        self.claims = claims.into();
        self
    }

    /// The account whose movements are classified
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Classify one transaction
    ///
    /// Entries come out in event order, followed by at most one synthesized
    /// airdrop entry. Every returned entry carries value.
    pub fn classify(&self, tx: &RawTransaction, timestamp: DateTime<Utc>) -> Vec<LedgerEntry> {
        let span = spans::classify_transaction(&tx.hash, tx.height);
        let _guard = span.enter();

        let summary = ActionSummary::from_transaction(tx);
        let mut state = SpendState::initial(&summary);
        let mut entries = Vec::new();

        for (index, event) in (0u32..).zip(tx.events.iter()) {
            if !event.is_coin_movement() {
                continue;
            }
            if state.on_event(event) == SpendDecision::Discard {
                trace!(index, "Discarding suppressed spend");
                continue;
            }
            let Some(attribution) =
                attribute_event(event, &summary, &self.account, &self.resolver)
            else {
                continue;
            };
            state.after_attribution(attribution.suppress_next_spend);

            for coin in attribution.coins {
                let mut entry = LedgerEntry::new(
                    timestamp,
                    &tx.hash,
                    tx.height,
                    index,
                    format!("{}{}", event.kind, summary),
                );
                attribution.direction.apply(&mut entry, coin);
                if let Some(mut entry) = entry.into_persistable() {
                    relabel_in_context(&mut entry, &summary);
                    entries.push(entry);
                }
            }
        }

        // a claim only counts when the account itself moved coins in the tx
        let claim = if entries.is_empty() {
            None
        } else {
            self.claims.detect(&summary, tx, &self.account)
        };
        if let Some(claim) = claim {
            let mut entry = LedgerEntry::new(
                timestamp,
                &tx.hash,
                tx.height,
                SYNTHETIC_ENTRY_INDEX,
                format!("{AIRDROP_DESCRIPTION}{summary}"),
            );
            entry.received_amount = claim.amount;
            entry.received_currency = claim.symbol;
            entry.label = EntryLabel::Airdrop;
            if let Some(entry) = entry.into_persistable() {
                entries.push(entry);
            }
        }

        debug!(entries = entries.len(), summary = %summary, "Classified transaction");
        entries
    }
}

/// Staking and governance movements are rewards or costs, not transfers
fn relabel_in_context(entry: &mut LedgerEntry, summary: &ActionSummary) {
    if !summary.is_reward_context() {
        return;
    }
    if entry.received_amount > 0.0 {
        entry.label = EntryLabel::Reward;
    } else if entry.sent_amount > 0.0 {
        entry.label = EntryLabel::Cost;
    }
}
