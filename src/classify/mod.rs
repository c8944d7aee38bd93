// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction event classification
//!
//! Turns a [`RawTransaction`](crate::RawTransaction) into the ledger entries
//! it means for one account:
//!
//! 1. [`ActionSummary`] condenses the transaction's `action` attributes
//! 2. [`attribute_event`] reads each `coin_spent`/`coin_received` event
//! 3. A per-transaction state machine discards delegated principals and
//!    spends paid by an authz relayer
//! 4. [`TransactionClassifier`] relabels staking movements as rewards and
//!    costs, and folds in contract airdrop claims

mod actions;
mod attributor;
mod classifier;
mod state;

pub use actions::{
    ActionSummary, AUTHZ_CLAIM_SEGMENT, AUTHZ_EXEC_ACTION, AUTHZ_REWARD_SIGNATURE, VOTE_SIGNATURE,
};
pub use attributor::{attribute_event, Direction, EventAttribution};
pub use classifier::TransactionClassifier;
