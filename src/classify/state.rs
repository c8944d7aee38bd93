// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-transaction spend suppression

use crate::{ActionSummary, RawEvent, COIN_SPENT};

/// What to do with a coin event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpendDecision {
    Attribute,
    Discard,
}

/// Tracks which `coin_spent` events of a transaction are real costs
///
/// Transitions:
///
/// ```text
/// Normal ──delegate fee attributed──▶ AwaitingDelegateSuppression
/// AwaitingDelegateSuppression ──coin_spent (discarded)──▶ Normal
/// AuthzClaimSuppressed: terminal, every coin_spent is discarded
/// ```
///
/// `coin_received` events are always attributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpendState {
    Normal,
    AwaitingDelegateSuppression,
    AuthzClaimSuppressed,
}

impl SpendState {
    pub(crate) fn initial(summary: &ActionSummary) -> Self {
        if summary.is_authz_claim() {
            SpendState::AuthzClaimSuppressed
        } else {
            SpendState::Normal
        }
    }

    /// Decide on a coin event before it is attributed
    pub(crate) fn on_event(&mut self, event: &RawEvent) -> SpendDecision {
        if event.kind != COIN_SPENT {
            return SpendDecision::Attribute;
        }
        match self {
            SpendState::Normal => SpendDecision::Attribute,
            SpendState::AwaitingDelegateSuppression => {
                *self = SpendState::Normal;
                SpendDecision::Discard
            }
            SpendState::AuthzClaimSuppressed => SpendDecision::Discard,
        }
    }

    /// Record the suppression signal of an attributed event
    pub(crate) fn after_attribution(&mut self, suppress_next_spend: bool) {
        if suppress_next_spend && *self == SpendState::Normal {
            *self = SpendState::AwaitingDelegateSuppression;
        }
    }
}
