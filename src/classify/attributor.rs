// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Attribution of a single coin event to the target account

use tracing::{debug, warn};

use crate::{
    parse_coins, ActionSummary, CurrencyResolver, EntryLabel, LedgerEntry, NormalizedCoin,
    RawEvent, COIN_RECEIVED, COIN_SPENT,
};

/// Which side of the account a coin event moves value on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sent,
    Received,
}

impl Direction {
    /// Label given before any context-dependent relabeling
    pub const fn label(&self) -> EntryLabel {
        match self {
            Direction::Sent => EntryLabel::Withdrawal,
            Direction::Received => EntryLabel::Deposit,
        }
    }

    /// Write a coin onto the matching leg of an entry
    pub fn apply(&self, entry: &mut LedgerEntry, coin: NormalizedCoin) {
        match self {
            Direction::Sent => {
                entry.sent_amount = coin.amount;
                entry.sent_currency = coin.symbol;
            }
            Direction::Received => {
                entry.received_amount = coin.amount;
                entry.received_currency = coin.symbol;
            }
        }
        entry.label = self.label();
    }
}

/// A coin event that moved value for the target account
#[derive(Debug, Clone, PartialEq)]
pub struct EventAttribution {
    pub direction: Direction,
    /// Coins that parsed to a non-zero amount; empty if none did
    pub coins: Vec<NormalizedCoin>,
    /// The next `coin_spent` of this transaction is a delegated principal
    /// and must be discarded
    pub suppress_next_spend: bool,
}

/// Attribute a `coin_spent` or `coin_received` event to `account`
///
/// Returns `None` when the event is of another type, names another account,
/// or lacks an `amount`. A `coin_spent` is never attributed inside an authz
/// reward claim, where the relaying account pays the fee.
///
/// Amounts that fail to parse are logged and skipped; the attribution is
/// still returned (with fewer coins) so that suppression signals survive.
pub fn attribute_event(
    event: &RawEvent,
    summary: &ActionSummary,
    account: &str,
    resolver: &CurrencyResolver,
) -> Option<EventAttribution> {
    let (direction, party_key) = match event.kind.as_str() {
        COIN_SPENT => {
            if summary.is_authz_claim() {
                return None;
            }
            (Direction::Sent, "spender")
        }
        COIN_RECEIVED => (Direction::Received, "receiver"),
        _ => return None,
    };

    let mut matched = false;
    let mut amount = None;
    for attribute in &event.attributes {
        if attribute.key == party_key && attribute.value == account {
            matched = true;
        } else if attribute.key == "amount" {
            amount = Some(attribute.value.as_str());
        }
    }

    let amount = amount.filter(|_| matched)?;
    let coins = parse_coins(amount)
        .into_iter()
        .filter_map(|parsed| match parsed {
            Ok(coin) => Some(resolver.normalize(&coin)),
            Err(e) if e.is_zero() => {
                debug!(amount = %amount, "Zero amount, nothing to record");
                None
            }
            Err(e) => {
                warn!(event_type = %event.kind, error = %e, "Skipping unparsable amount");
                None
            }
        })
        .collect();

    Some(EventAttribution {
        direction,
        coins,
        suppress_next_spend: direction == Direction::Sent && summary.is_delegate(),
    })
}
