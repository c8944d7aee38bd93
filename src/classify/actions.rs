// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction-level action summaries
//!
//! Every `action` attribute in a transaction contributes its last
//! dot-separated segment, minus any `Msg` prefix, to a summary such as
//! `" - Send"` or `" - ExecuteContract - claim - transfer"`. The summary is
//! the context that decides how the transaction's coin movements are read.

use crate::RawTransaction;

/// Action emitted by an authz `MsgExec`
pub const AUTHZ_EXEC_ACTION: &str = "/cosmos.authz.v1beta1.MsgExec";

/// Segment appended when an authz exec relays a distribution message
pub const AUTHZ_CLAIM_SEGMENT: &str = "Authz Claim";

/// Summary of a reward claim executed through authz
pub const AUTHZ_REWARD_SIGNATURE: &str = " - Exec - Authz Claim";

/// Summary of a governance vote, whose only movement is the fee
pub const VOTE_SIGNATURE: &str = " - Vote";

const ACTION_KEY: &str = "action";
const MODULE_KEY: &str = "module";
const DISTRIBUTION_MODULE: &str = "distribution";
const SEGMENT_SEPARATOR: &str = " - ";

/// Substrings marking staking activity whose movements are rewards or costs
const STAKING_MARKERS: [&str; 3] = ["Withdraw", "Delegate", "BeginRedelegate"];

/// De-duplicated action segments of a transaction
///
/// # Examples
///
/// ```
/// use cosmoscan::{ActionSummary, RawEvent, RawTransaction};
///
/// let tx = RawTransaction::new("AB", 1, vec![
///     RawEvent::new("message", [("action", "/cosmos.bank.v1beta1.MsgSend")]),
///     RawEvent::new("message", [("action", "/cosmos.bank.v1beta1.MsgSend")]),
/// ]);
/// assert_eq!(ActionSummary::from_transaction(&tx).as_str(), " - Send");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSummary {
    description: String,
}

impl ActionSummary {
    /// Summarize the `action` attributes of a transaction
    ///
    /// Segments keep the order in which they first appear. When the
    /// transaction is an authz exec and any event names the `distribution`
    /// module, an `Authz Claim` segment is appended.
    pub fn from_transaction(tx: &RawTransaction) -> Self {
        let mut segments: Vec<&str> = Vec::new();
        let mut authz_relay = false;
        let mut distribution = false;

        for attribute in tx.attributes() {
            match attribute.key.as_str() {
                ACTION_KEY => {
                    if attribute.value == AUTHZ_EXEC_ACTION {
                        authz_relay = true;
                    }
                    let segment = action_segment(&attribute.value);
                    if !segments.contains(&segment) {
                        segments.push(segment);
                    }
                }
                MODULE_KEY if attribute.value == DISTRIBUTION_MODULE => distribution = true,
                _ => {}
            }
        }

        if authz_relay && distribution {
            segments.push(AUTHZ_CLAIM_SEGMENT);
        }

        let description = segments
            .iter()
            .map(|segment| format!("{SEGMENT_SEPARATOR}{segment}"))
            .collect();
        Self { description }
    }

    pub fn as_str(&self) -> &str {
        &self.description
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
    }

    /// Whether the summary is exactly `signature`
    pub fn matches(&self, signature: &str) -> bool {
        self.description == signature
    }

    /// A reward claim relayed through authz; the relaying account pays no fee
    pub fn is_authz_claim(&self) -> bool {
        self.description.contains(AUTHZ_CLAIM_SEGMENT)
    }

    /// A delegation, whose second spend is the delegated principal
    pub fn is_delegate(&self) -> bool {
        self.description.contains("Delegate")
    }

    /// Whether movements should be relabeled as rewards and costs
    pub fn is_reward_context(&self) -> bool {
        STAKING_MARKERS
            .iter()
            .any(|marker| self.description.contains(marker))
            || self.matches(AUTHZ_REWARD_SIGNATURE)
            || self.matches(VOTE_SIGNATURE)
    }
}

impl std::fmt::Display for ActionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

fn action_segment(action: &str) -> &str {
    let last = action.rsplit('.').next().unwrap_or(action);
    last.strip_prefix("Msg").unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawEvent;

    fn tx(events: Vec<RawEvent>) -> RawTransaction {
        RawTransaction::new("AA", 1, events)
    }

    fn action(value: &str) -> RawEvent {
        RawEvent::new("message", [("action", value)])
    }

    #[test]
    fn test_segment_extraction() {
        assert_eq!(action_segment("/cosmos.bank.v1beta1.MsgSend"), "Send");
        assert_eq!(action_segment("delegate"), "delegate");
        assert_eq!(action_segment("claim"), "claim");
        assert_eq!(action_segment("a.b.Message"), "Message");
    }

    #[test]
    fn test_segments_deduplicated_in_first_seen_order() {
        let summary = ActionSummary::from_transaction(&tx(vec![
            action("/cosmwasm.wasm.v1.MsgExecuteContract"),
            RawEvent::new("wasm", [("action", "claim"), ("amount", "5")]),
            RawEvent::new("wasm", [("action", "transfer")]),
            action("/cosmwasm.wasm.v1.MsgExecuteContract"),
        ]));
        assert_eq!(summary.as_str(), " - ExecuteContract - claim - transfer");
    }

    #[test]
    fn test_no_actions_is_empty() {
        let summary = ActionSummary::from_transaction(&tx(vec![RawEvent::new(
            "transfer",
            [("amount", "1uatom")],
        )]));
        assert!(summary.is_empty());
        assert!(!summary.is_reward_context());
    }

    #[test]
    fn test_authz_claim_segment() {
        let summary = ActionSummary::from_transaction(&tx(vec![
            action(AUTHZ_EXEC_ACTION),
            RawEvent::new("message", [("module", "distribution"), ("sender", "x")]),
        ]));
        assert_eq!(summary.as_str(), AUTHZ_REWARD_SIGNATURE);
        assert!(summary.is_authz_claim());
        assert!(summary.is_reward_context());
    }

    #[test]
    fn test_authz_exec_without_distribution() {
        let summary = ActionSummary::from_transaction(&tx(vec![
            action(AUTHZ_EXEC_ACTION),
            RawEvent::new("message", [("module", "staking")]),
        ]));
        assert_eq!(summary.as_str(), " - Exec");
        assert!(!summary.is_authz_claim());
    }

    #[test]
    fn test_distribution_without_authz() {
        let summary = ActionSummary::from_transaction(&tx(vec![
            action("/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward"),
            RawEvent::new("message", [("module", "distribution")]),
        ]));
        assert_eq!(summary.as_str(), " - WithdrawDelegatorReward");
        assert!(!summary.is_authz_claim());
        assert!(summary.is_reward_context());
    }

    #[test]
    fn test_staking_contexts() {
        let delegate = ActionSummary::from_transaction(&tx(vec![action(
            "/cosmos.staking.v1beta1.MsgDelegate",
        )]));
        assert!(delegate.is_delegate());
        assert!(delegate.is_reward_context());

        let redelegate = ActionSummary::from_transaction(&tx(vec![action(
            "/cosmos.staking.v1beta1.MsgBeginRedelegate",
        )]));
        assert!(redelegate.is_reward_context());

        let send = ActionSummary::from_transaction(&tx(vec![action(
            "/cosmos.bank.v1beta1.MsgSend",
        )]));
        assert!(!send.is_delegate());
        assert!(!send.is_reward_context());
    }

    #[test]
    fn test_vote_is_reward_context_only_when_alone() {
        let vote =
            ActionSummary::from_transaction(&tx(vec![action("/cosmos.gov.v1beta1.MsgVote")]));
        assert!(vote.matches(VOTE_SIGNATURE));
        assert!(vote.is_reward_context());

        let vote_and_send = ActionSummary::from_transaction(&tx(vec![
            action("/cosmos.gov.v1beta1.MsgVote"),
            action("/cosmos.bank.v1beta1.MsgSend"),
        ]));
        assert!(!vote_and_send.is_reward_context());
    }
}
