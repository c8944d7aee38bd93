// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! IBC hash → base denomination index
//!
//! IBC vouchers appear on chain as `ibc/<sha256 of trace path>`. The index maps
//! those hashes back to the base denomination on the origin chain so they can
//! be resolved against the currency registry. It is populated once by
//! [`discover_ibc_index`] and treated as read-only afterwards.

use std::collections::HashMap;

use tracing::{debug, info, warn, Instrument};

use crate::amount::IBC_PREFIX;
use crate::{spans, CurrencyError, ExportError, IbcTraceSource};

/// Denomination returned for IBC hashes missing from the index
pub const UNKNOWN_IBC_DENOM: &str = "unknown";

/// Mapping from IBC hash (without its `ibc/` prefix) to base denomination
///
/// # Examples
///
/// ```
/// use cosmoscan::IbcIndex;
///
/// let mut index = IbcIndex::new();
/// index.insert("ibc/ABC", "uatom").unwrap();
///
/// assert_eq!(index.get("ABC"), "uatom");
/// assert_eq!(index.get("ibc/ABC"), "uatom");
/// assert_eq!(index.get("DEF"), "unknown");
/// assert!(index.insert("", "uatom").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IbcIndex {
    hashes: HashMap<String, String>,
}

impl IbcIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the base denomination of an IBC hash
    ///
    /// The hash may be given with or without its `ibc/` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::EmptyIbcEntry`] if the hash or denomination is empty.
    pub fn insert(&mut self, hash: &str, denom: &str) -> Result<(), CurrencyError> {
        let key = strip_ibc_prefix(hash);
        if key.is_empty() || denom.is_empty() {
            return Err(CurrencyError::empty_ibc_entry(hash, denom));
        }
        self.hashes.insert(key.to_string(), denom.to_string());
        Ok(())
    }

    /// Base denomination of an IBC hash, or [`UNKNOWN_IBC_DENOM`]
    pub fn get(&self, hash: &str) -> &str {
        self.hashes
            .get(strip_ibc_prefix(hash))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_IBC_DENOM)
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.hashes.contains_key(strip_ibc_prefix(hash))
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

fn strip_ibc_prefix(hash: &str) -> &str {
    hash.strip_prefix(IBC_PREFIX).unwrap_or(hash)
}

/// Build an [`IbcIndex`] from the chain's current supply
///
/// Every `ibc/` denomination in the supply has its trace queried. A trace that
/// fails or comes back without a base denomination is logged and skipped, so
/// those hashes later resolve as [`UNKNOWN_IBC_DENOM`].
///
/// # Errors
///
/// Returns [`ExportError::IbcDiscovery`] if the supply itself can't be listed.
pub async fn discover_ibc_index<S>(source: &S) -> Result<IbcIndex, ExportError>
where
    S: IbcTraceSource + ?Sized,
{
    async {
        let denoms = source
            .supply_denoms()
            .await
            .map_err(|source| ExportError::IbcDiscovery { source })?;

        let mut index = IbcIndex::new();
        for hash in denoms.iter().filter_map(|d| d.strip_prefix(IBC_PREFIX)) {
            match source.denom_trace(hash).await {
                Ok(Some(base_denom)) => {
                    if let Err(e) = index.insert(hash, &base_denom) {
                        warn!(hash = %hash, error = %e, "Skipping IBC trace");
                    }
                }
                Ok(None) => {
                    debug!(hash = %hash, "IBC trace has no base denom, skipping");
                }
                Err(e) => {
                    warn!(hash = %hash, error = %e, "Error getting DenomTrace");
                }
            }
        }

        info!(
            supply_denoms = denoms.len(),
            ibc_denoms = index.len(),
            "Discovered IBC denominations"
        );
        Ok(index)
    }
    .instrument(spans::discover_ibc_index())
    .await
}
