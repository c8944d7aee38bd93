// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ledger entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tx::BlockHeight;

/// Index given to entries synthesized from contract side effects
///
/// It is larger than any real event position, so synthesized entries sort
/// after every other entry of their transaction.
pub const SYNTHETIC_ENTRY_INDEX: u32 = u32::MAX;

/// Tax treatment of a ledger entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryLabel {
    Deposit,
    Withdrawal,
    Reward,
    Cost,
    Airdrop,
    #[default]
    #[serde(rename = "")]
    Unlabeled,
}

impl EntryLabel {
    /// The label as written to the export
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntryLabel::Deposit => "deposit",
            EntryLabel::Withdrawal => "withdrawal",
            EntryLabel::Reward => "reward",
            EntryLabel::Cost => "cost",
            EntryLabel::Airdrop => "airdrop",
            EntryLabel::Unlabeled => "",
        }
    }
}

impl std::fmt::Display for EntryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified value movement of the target account
///
/// Amounts are human-scale (already divided by the denomination's
/// precision). A zero amount means the leg is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub timestamp: DateTime<Utc>,
    pub sent_amount: f64,
    pub sent_currency: String,
    pub received_amount: f64,
    pub received_currency: String,
    pub fee_amount: f64,
    pub fee_currency: String,
    pub label: EntryLabel,
    pub description: String,
    pub tx_hash: String,
    /// Position of the originating event within the transaction
    pub index: u32,
    pub height: BlockHeight,
}

impl LedgerEntry {
    /// Create an entry with no legs for an event of a transaction
    pub fn new(
        timestamp: DateTime<Utc>,
        tx_hash: impl Into<String>,
        height: BlockHeight,
        index: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sent_amount: 0.0,
            sent_currency: String::new(),
            received_amount: 0.0,
            received_currency: String::new(),
            fee_amount: 0.0,
            fee_currency: String::new(),
            label: EntryLabel::Unlabeled,
            description: description.into(),
            tx_hash: tx_hash.into(),
            index,
            height,
        }
    }

    /// Whether any of the sent, received or fee legs is non-zero
    pub fn has_value(&self) -> bool {
        self.sent_amount != 0.0 || self.received_amount != 0.0 || self.fee_amount != 0.0
    }

    /// Move a lone fee onto the sent leg
    ///
    /// Bookkeeping imports reject a value-losing row without an outbound leg,
    /// so a fee-only entry is rewritten as a send of the same value.
    pub fn promote_fee_only(&mut self) {
        if self.sent_amount == 0.0 && self.received_amount == 0.0 && self.fee_amount != 0.0 {
            self.sent_amount = self.fee_amount;
            self.sent_currency = std::mem::take(&mut self.fee_currency);
            self.fee_amount = 0.0;
        }
    }

    /// Apply the fee-only rewrite and keep the entry only if it carries value
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use cosmoscan::LedgerEntry;
    ///
    /// let mut entry = LedgerEntry::new(Utc::now(), "AB", 1, 0, "coin_spent");
    /// entry.fee_amount = 0.005;
    /// entry.fee_currency = "ATOM".into();
    ///
    /// let entry = entry.into_persistable().unwrap();
    /// assert_eq!(entry.sent_amount, 0.005);
    /// assert_eq!(entry.sent_currency, "ATOM");
    /// assert!(entry.fee_currency.is_empty());
    ///
    /// assert!(LedgerEntry::new(Utc::now(), "AB", 1, 0, "").into_persistable().is_none());
    /// ```
    pub fn into_persistable(mut self) -> Option<Self> {
        if !self.has_value() {
            return None;
        }
        self.promote_fee_only();
        Some(self)
    }

    /// Composite reference written to the export: `{tx_hash}-{index}`
    pub fn reference(&self) -> String {
        format!("{}-{}", self.tx_hash, self.index)
    }

    /// Whether this entry was synthesized rather than read from an event
    pub fn is_synthetic(&self) -> bool {
        self.index == SYNTHETIC_ENTRY_INDEX
    }
}
