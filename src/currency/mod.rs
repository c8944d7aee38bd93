// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency resolution: static registry, IBC index and the resolver over both.
//!
//! # Population phase
//!
//! Both tables are built single-threaded before any classification starts:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cosmoscan::{discover_ibc_index, CurrencyRegistry, CurrencyResolver};
//!
//! let registry = CurrencyRegistry::embedded()?;
//! let ibc = discover_ibc_index(&node).await?;
//! let resolver = Arc::new(CurrencyResolver::new(registry, ibc));
//! ```
//!
//! After that the resolver is only ever read, so it is shared without locks.

mod ibc;
mod registry;
mod resolver;

pub use ibc::{discover_ibc_index, IbcIndex, UNKNOWN_IBC_DENOM};
pub use registry::CurrencyRegistry;
pub use resolver::{CurrencyResolver, NormalizedCoin, ResolvedCurrency};
