// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw transactions as delivered by a node's transaction search.

use serde::{Deserialize, Serialize};

/// Block height of a transaction
pub type BlockHeight = u64;

/// Event type emitted when coins leave an account
pub const COIN_SPENT: &str = "coin_spent";

/// Event type emitted when coins arrive at an account
pub const COIN_RECEIVED: &str = "coin_received";

/// A single key/value attribute of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

impl EventAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An event emitted while executing a transaction
///
/// The attribute order is preserved exactly as the node reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Event type tag, e.g. `coin_spent` or `message`
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: Vec<EventAttribute>,
}

impl RawEvent {
    /// Create an event from a type tag and `(key, value)` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmoscan::RawEvent;
    ///
    /// let event = RawEvent::new("coin_received", [("receiver", "juno1abc"), ("amount", "5ujuno")]);
    /// assert_eq!(event.attribute("amount"), Some("5ujuno"));
    /// ```
    pub fn new<K, V>(kind: impl Into<String>, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind: kind.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| EventAttribute::new(k, v))
                .collect(),
        }
    }

    /// First value stored under `key`, if any
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    /// Whether this event moves coins (`coin_spent` or `coin_received`)
    pub fn is_coin_movement(&self) -> bool {
        self.kind == COIN_SPENT || self.kind == COIN_RECEIVED
    }
}

/// A transaction observed on chain, immutable once delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Hex-encoded content hash
    pub hash: String,
    pub height: BlockHeight,
    pub events: Vec<RawEvent>,
}

impl RawTransaction {
    pub fn new(hash: impl Into<String>, height: BlockHeight, events: Vec<RawEvent>) -> Self {
        Self {
            hash: hash.into(),
            height,
            events,
        }
    }

    /// Iterate over every attribute of every event, in transaction order
    pub fn attributes(&self) -> impl Iterator<Item = &EventAttribute> {
        self.events.iter().flat_map(|event| event.attributes.iter())
    }
}
