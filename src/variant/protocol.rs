//! Protocol default table
//!
//! Per-board seed values for the mesh scheduler's periodic broadcasts.

use core::time::Duration;

/// Named protocol timing default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolDefault {
    /// Interval between node-info broadcasts
    NodeInfoBroadcast,
    /// Interval between position broadcasts
    PositionBroadcast,
}

impl ProtocolDefault {
    pub const ALL: [ProtocolDefault; 2] = [Self::NodeInfoBroadcast, Self::PositionBroadcast];

    pub const fn name(self) -> &'static str {
        match self {
            Self::NodeInfoBroadcast => "DEFAULT_NODE_INFO_BROADCAST_SECS",
            Self::PositionBroadcast => "DEFAULT_POSITION_BROADCAST_SECS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|default| default.name() == name)
    }
}

/// Broadcast intervals in seconds
///
/// Every variant defines every field; there is no fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolDefaults {
    pub node_info_broadcast_secs: u32,
    pub position_broadcast_secs: u32,
}

impl ProtocolDefaults {
    /// Build from intervals given in minutes
    pub const fn from_minutes(node_info: u32, position: u32) -> Self {
        Self {
            node_info_broadcast_secs: node_info * 60,
            position_broadcast_secs: position * 60,
        }
    }

    /// Interval in seconds
    pub const fn get(&self, default: ProtocolDefault) -> u32 {
        match default {
            ProtocolDefault::NodeInfoBroadcast => self.node_info_broadcast_secs,
            ProtocolDefault::PositionBroadcast => self.position_broadcast_secs,
        }
    }

    pub const fn interval(&self, default: ProtocolDefault) -> Duration {
        Duration::from_secs(self.get(default) as u64)
    }
}
