// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for loading currency registries from disk

use std::io::Write;

use cosmoscan::{CurrencyError, CurrencyInfo, CurrencyRegistry, CurrencyResolver, IbcIndex};

#[tokio::test]
async fn test_load_registry_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{"denoms": {{
            "ustars": {{"precision": 6, "token_symbol": "STARS", "chain": "stargaze"}},
            "basecro": {{"precision": 8, "token_symbol": "CRO", "chain": "cronos"}}
        }}}}"#
    )?;

    let registry = CurrencyRegistry::load(file.path()).await?;
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.get("basecro"),
        Some(&CurrencyInfo::new(8, "CRO", "cronos"))
    );

    let resolver = CurrencyResolver::new(registry, IbcIndex::new());
    let cro = resolver.normalize_str("150000000basecro")?;
    assert_eq!(cro.amount, 1.5);
    assert_eq!(cro.symbol, "CRO");
    Ok(())
}

#[tokio::test]
async fn test_missing_registry_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CurrencyRegistry::load(dir.path().join("absent.json")).await;
    assert!(matches!(result, Err(CurrencyError::Io(_))));
}

#[tokio::test]
async fn test_malformed_registry_file_is_rejected() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"denoms:\n  uatom: 6\n")?;

    let result = CurrencyRegistry::load(file.path()).await;
    assert!(matches!(result, Err(CurrencyError::RegistryLoad { .. })));
    Ok(())
}
