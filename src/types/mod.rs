// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across cosmoscan.
//!
//! This module provides the data model shared by every stage:
//! - Raw transactions and events as delivered by the node
//! - Ledger entries and their labels
//! - Currency metadata (precision, symbol, chain)
//! - Configuration values (page sizes)

pub mod config;
pub mod currency;
pub mod ledger;
pub mod tx;

// Note: Public types are re-exported from lib.rs, not here
