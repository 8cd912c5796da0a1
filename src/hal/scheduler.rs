//! Mesh scheduler seed values

use core::time::Duration;

use crate::variant::{BoardVariant, ProtocolDefault};

/// Initial periods of the scheduler's broadcast timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerSeed {
    pub node_info: Duration,
    pub position: Duration,
}

impl SchedulerSeed {
    pub fn from_variant(variant: &BoardVariant) -> Self {
        Self {
            node_info: variant.protocol.interval(ProtocolDefault::NodeInfoBroadcast),
            position: variant.protocol.interval(ProtocolDefault::PositionBroadcast),
        }
    }
}
