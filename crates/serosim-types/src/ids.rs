//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Agents carry a strongly-typed ID so that per-agent bookkeeping (such as
//! the daily onward-transmission log) cannot be keyed by a bare integer or
//! confused with other values. IDs use UUID v7 (time-ordered), which keeps
//! `BTreeMap` keys roughly in creation order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an agent in the simulated population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AgentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AgentId> for Uuid {
    fn from(id: AgentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = AgentId::new();
        let b = AgentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn id_roundtrips_through_uuid() {
        let id = AgentId::new();
        let raw: Uuid = id.into();
        assert_eq!(AgentId::from(raw), id);
        assert_eq!(id.into_inner(), raw);
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = AgentId::new();
        assert_eq!(id.to_string(), id.0.to_string());
    }
}
