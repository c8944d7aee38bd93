// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Static denomination registry

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{CurrencyError, CurrencyInfo};

const EMBEDDED_REGISTRY: &str = include_str!("currencies.json");

/// Mapping from denomination code to its display metadata
///
/// The registry is loaded once before classification starts and is never
/// mutated afterwards. The on-disk format is:
///
/// ```json
/// { "denoms": { "uatom": { "precision": 6, "token_symbol": "ATOM", "chain": "cosmoshub" } } }
/// ```
///
/// # Examples
///
/// ```
/// use cosmoscan::CurrencyRegistry;
///
/// let registry = CurrencyRegistry::embedded().unwrap();
/// assert_eq!(registry.get("uatom").unwrap().symbol, "ATOM");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRegistry {
    denoms: HashMap<String, CurrencyInfo>,
}

impl CurrencyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry bundled with the crate
    pub fn embedded() -> Result<Self, CurrencyError> {
        Self::from_json_str(EMBEDDED_REGISTRY)
    }

    /// Decode a registry document
    pub fn from_json_str(json: &str) -> Result<Self, CurrencyError> {
        serde_json::from_str(json).map_err(|e| CurrencyError::registry_load(e.to_string()))
    }

    /// Read and decode a registry file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CurrencyError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let registry = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            denoms = registry.len(),
            "Loaded currency registry"
        );
        Ok(registry)
    }

    /// Add or replace a denomination
    pub fn insert(&mut self, denom: impl Into<String>, info: CurrencyInfo) -> Option<CurrencyInfo> {
        self.denoms.insert(denom.into(), info)
    }

    /// Exact lookup of a denomination code
    pub fn get(&self, denom: &str) -> Option<&CurrencyInfo> {
        self.denoms.get(denom)
    }

    pub fn len(&self) -> usize {
        self.denoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.denoms.is_empty()
    }
}

impl FromIterator<(String, CurrencyInfo)> for CurrencyRegistry {
    fn from_iter<T: IntoIterator<Item = (String, CurrencyInfo)>>(iter: T) -> Self {
        Self {
            denoms: iter.into_iter().collect(),
        }
    }
}
