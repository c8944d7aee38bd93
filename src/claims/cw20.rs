// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! CW20 airdrop contract claims

use std::str::FromStr;

use bigdecimal::BigDecimal;
use tracing::warn;

use super::{ClaimDetector, ClaimedTokens};
use crate::amount::scale_down;
use crate::{Precision, RawTransaction};

/// Action summary of a CW20 airdrop `claim` execution
pub const CW20_CLAIM_SIGNATURE: &str = " - ExecuteContract - claim - transfer";

/// Juno MARBLE airdrop contract
pub const MARBLE_AIRDROP_CONTRACT: &str =
    "juno1unjfruscnz39mh42dtekak489s7mnzyh7ry20t80errfkf5j3spqetewaq";

/// Detects claims from a CW20 merkle-airdrop contract
///
/// The contract emits a `wasm` event with `_contract_address`, `action`,
/// `address` and `amount` attributes. A claim matches when all four are
/// present, the contract is this detector's, and `address` is the account.
/// Only the first matching event is considered; an unparsable amount there
/// means no claim.
///
/// # Examples
///
/// ```
/// use cosmoscan::{ClaimDetector, Cw20AirdropClaim, RawEvent, RawTransaction, MARBLE_AIRDROP_CONTRACT};
///
/// let tx = RawTransaction::new("AB", 1, vec![RawEvent::new("wasm", [
///     ("_contract_address", MARBLE_AIRDROP_CONTRACT),
///     ("action", "claim"),
///     ("address", "juno1me"),
///     ("amount", "12.5"),
/// ])]);
///
/// let claim = Cw20AirdropClaim::marble().detect(&tx, "juno1me").unwrap();
/// assert_eq!(claim.amount, 12.5);
/// assert_eq!(claim.symbol, "MARBLE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cw20AirdropClaim {
    contract: String,
    symbol: String,
    precision: Precision,
}

impl Cw20AirdropClaim {
    /// Detector for `contract`, scaling reported amounts by `precision`
    pub fn new(contract: impl Into<String>, symbol: impl Into<String>, precision: Precision) -> Self {
        Self {
            contract: contract.into(),
            symbol: symbol.into(),
            precision,
        }
    }

    /// The MARBLE airdrop, whose reported amounts are used as-is
    pub fn marble() -> Self {
        Self::new(MARBLE_AIRDROP_CONTRACT, "MARBLE", Precision::new(0))
    }

    fn scale(&self, amount: &str) -> Option<f64> {
        let raw = BigDecimal::from_str(amount)
            .map_err(|e| warn!(amount = %amount, error = %e, "Unparsable airdrop claim amount"))
            .ok()?;
        scale_down(&raw, self.precision).to_string().parse().ok()
    }
}

impl ClaimDetector for Cw20AirdropClaim {
    fn name(&self) -> &str {
        &self.symbol
    }

    fn detect(&self, tx: &RawTransaction, account: &str) -> Option<ClaimedTokens> {
        for event in &tx.events {
            let mut contract = "";
            let mut action = "";
            let mut address = "";
            let mut amount = "";
            for attribute in &event.attributes {
                match attribute.key.as_str() {
                    "_contract_address" => contract = attribute.value.as_str(),
                    "action" => action = attribute.value.as_str(),
                    "address" => address = attribute.value.as_str(),
                    "amount" => amount = attribute.value.as_str(),
                    _ => {}
                }
            }
            if [contract, action, address, amount].iter().any(|v| v.is_empty()) {
                continue;
            }
            if address != account || contract != self.contract {
                continue;
            }
            // the first matching event decides, even when its amount is bad
            return self
                .scale(amount)
                .map(|amount| ClaimedTokens::new(amount, self.symbol.clone()));
        }
        None
    }
}
