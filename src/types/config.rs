// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration value types

use serde::{Deserialize, Serialize};

/// Number of transactions requested per search page
///
/// # Examples
///
/// ```
/// use cosmoscan::PageSize;
///
/// let size = PageSize::new(50);
/// assert_eq!(size.as_u32(), 50);
/// assert!(size.is_valid());
/// assert!(!PageSize::new(0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(u32);

impl PageSize {
    /// Tendermint's maximum `per_page`
    pub const MAX: Self = Self(100);

    pub const fn new(size: u32) -> Self {
        Self(size)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }

    /// Whether results beyond `page` (1-based) remain for `total_count` matches
    pub fn has_more(&self, total_count: u64, page: u32) -> bool {
        total_count > u64::from(self.0) * u64::from(page)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::MAX
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} per page", self.0)
    }
}
