// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract claim detection
//!
//! Some value movements happen inside smart contracts and never surface as
//! `coin_received` events. A CW20 airdrop claim, for example, only shows up as
//! a `wasm` event carrying the claimed amount. Implement [`ClaimDetector`] to
//! recognise such a side effect and register it in [`ClaimDetectors`] under
//! the action summary of the transactions it applies to.
//!
//! # Example: Implementing ClaimDetector
//!
//! ```rust
//! use cosmoscan::{ClaimDetector, ClaimDetectors, ClaimedTokens, RawTransaction};
//!
//! struct StakedropClaim;
//!
//! impl ClaimDetector for StakedropClaim {
//!     fn name(&self) -> &str {
//!         "stakedrop"
//!     }
//!
//!     fn detect(&self, tx: &RawTransaction, account: &str) -> Option<ClaimedTokens> {
//!         let event = tx.events.iter().find(|e| {
//!             e.kind == "wasm" && e.attribute("recipient") == Some(account)
//!         })?;
//!         let amount = event.attribute("amount")?.parse().ok()?;
//!         Some(ClaimedTokens::new(amount, "DROP"))
//!     }
//! }
//!
//! let mut detectors = ClaimDetectors::new();
//! detectors.register(" - ExecuteContract - claim_stakedrop", StakedropClaim);
//! assert_eq!(detectors.len(), 1);
//! ```

mod cw20;

use std::collections::HashMap;

use tracing::info;

use crate::{ActionSummary, RawTransaction};

pub use cw20::{Cw20AirdropClaim, CW20_CLAIM_SIGNATURE, MARBLE_AIRDROP_CONTRACT};

/// Tokens claimed from a contract
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimedTokens {
    /// Human-scale amount
    pub amount: f64,
    pub symbol: String,
}

impl ClaimedTokens {
    pub fn new(amount: f64, symbol: impl Into<String>) -> Self {
        Self {
            amount,
            symbol: symbol.into(),
        }
    }
}

/// Recognises a chain-specific contract claim inside a transaction
///
/// Implementations are synchronous and must not perform I/O; they only
/// inspect the transaction's events.
pub trait ClaimDetector: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Tokens `account` claimed in `tx`, or `None` if this isn't such a claim
    fn detect(&self, tx: &RawTransaction, account: &str) -> Option<ClaimedTokens>;
}

/// Claim detectors keyed by the exact action summary they apply to
#[derive(Default)]
pub struct ClaimDetectors {
    by_signature: HashMap<String, Vec<Box<dyn ClaimDetector>>>,
}

impl ClaimDetectors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detectors for the Juno network's known airdrop contracts
    pub fn juno() -> Self {
        let mut detectors = Self::new();
        detectors.register(CW20_CLAIM_SIGNATURE, Cw20AirdropClaim::marble());
        detectors
    }

    /// Register a detector for transactions whose summary equals `signature`
    ///
    /// Several detectors may share a signature; they are consulted in
    /// registration order and the first match wins.
    pub fn register(&mut self, signature: impl Into<String>, detector: impl ClaimDetector + 'static) {
        self.by_signature
            .entry(signature.into())
            .or_default()
            .push(Box::new(detector));
    }

    /// Run the detectors registered for this transaction's summary
    pub fn detect(
        &self,
        summary: &ActionSummary,
        tx: &RawTransaction,
        account: &str,
    ) -> Option<ClaimedTokens> {
        let detectors = self.by_signature.get(summary.as_str())?;
        detectors.iter().find_map(|detector| {
            let claim = detector.detect(tx, account)?;
            info!(
                detector = detector.name(),
                tx_hash = %tx.hash,
                amount = claim.amount,
                symbol = %claim.symbol,
                "Detected contract claim"
            );
            Some(claim)
        })
    }

    /// Total number of registered detectors
    pub fn len(&self) -> usize {
        self.by_signature.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_signature.is_empty()
    }
}

impl std::fmt::Debug for ClaimDetectors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (signature, detectors) in &self.by_signature {
            let names: Vec<&str> = detectors.iter().map(|d| d.name()).collect();
            map.entry(signature, &names);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawEvent;

    struct Fixed(&'static str, Option<f64>);

    impl ClaimDetector for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        fn detect(&self, _tx: &RawTransaction, _account: &str) -> Option<ClaimedTokens> {
            self.1.map(|amount| ClaimedTokens::new(amount, self.0))
        }
    }

    fn claim_tx() -> RawTransaction {
        RawTransaction::new(
            "AA",
            1,
            vec![RawEvent::new("message", [("action", "/cosmwasm.wasm.v1.MsgExecuteContract")])],
        )
    }

    #[test]
    fn test_unregistered_signature_detects_nothing() {
        let detectors = ClaimDetectors::new();
        let tx = claim_tx();
        let summary = ActionSummary::from_transaction(&tx);
        assert!(detectors.detect(&summary, &tx, "a").is_none());
        assert!(detectors.is_empty());
    }

    #[test]
    fn test_first_matching_detector_wins() {
        let mut detectors = ClaimDetectors::new();
        detectors.register(" - ExecuteContract", Fixed("miss", None));
        detectors.register(" - ExecuteContract", Fixed("first", Some(1.0)));
        detectors.register(" - ExecuteContract", Fixed("second", Some(2.0)));
        assert_eq!(detectors.len(), 3);

        let tx = claim_tx();
        let summary = ActionSummary::from_transaction(&tx);
        let claim = detectors.detect(&summary, &tx, "a").unwrap();
        assert_eq!(claim, ClaimedTokens::new(1.0, "first"));
    }

    #[test]
    fn test_juno_defaults() {
        let detectors = ClaimDetectors::juno();
        assert_eq!(detectors.len(), 1);
        assert!(format!("{detectors:?}").contains("MARBLE"));
    }
}
