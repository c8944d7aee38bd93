// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by upstream data sources.
//!
//! Implementations of [`TxSearchSource`](crate::TxSearchSource),
//! [`BlockTimeSource`](crate::BlockTimeSource) and
//! [`IbcTraceSource`](crate::IbcTraceSource) return these.

/// Failure reported by a node-facing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The request could not be delivered or the node returned an error.
    #[error("Transport failure: {details}")]
    Transport {
        /// Details about the failure
        details: String,
    },

    /// The node answered but the response could not be decoded.
    #[error("Failed to decode response: {details}")]
    Decode {
        /// Details about why decoding failed
        details: String,
    },
}

impl SourceError {
    /// Create a `Transport` error with details.
    pub fn transport(details: impl Into<String>) -> Self {
        SourceError::Transport {
            details: details.into(),
        }
    }

    /// Create a `Decode` error with details.
    pub fn decode(details: impl Into<String>) -> Self {
        SourceError::Decode {
            details: details.into(),
        }
    }
}
