//! Broadcast scheduler task
//!
//! Runs the periodic node-info and position timers seeded from the active
//! variant and announces each expiry to the mesh layer.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pubsub::PubSubChannel;
use embassy_time::{Duration, Ticker};
use log::info;

use crate::hal::SchedulerSeed;
use crate::tasks::led::{LedFlashDuration, LedSender};

/// Broadcast that has fallen due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastDue {
    NodeInfo,
    Position,
}

/// Broadcast timer expiries
///
/// Publishers never block; when subscribers fall behind the oldest message
/// is dropped.
///
/// Parameters: CAP=4 messages, SUBS=2 subscribers, PUBS=1 publisher (scheduler task)
pub static BROADCAST_CHANNEL: PubSubChannel<CriticalSectionRawMutex, BroadcastDue, 4, 2, 1> =
    PubSubChannel::new();

fn ticker(period: core::time::Duration) -> Ticker {
    Ticker::every(Duration::from_secs(period.as_secs()))
}

/// Task that fires the periodic broadcast timers
pub async fn scheduler_task(seed: SchedulerSeed, led_sender: Option<LedSender>) {
    let mut node_info = ticker(seed.node_info);
    let mut position = ticker(seed.position);
    let publisher = BROADCAST_CHANNEL.immediate_publisher();

    info!(
        "broadcast timers: node info every {}s, position every {}s",
        seed.node_info.as_secs(),
        seed.position.as_secs()
    );

    loop {
        let due = match select(node_info.next(), position.next()).await {
            Either::First(()) => BroadcastDue::NodeInfo,
            Either::Second(()) => BroadcastDue::Position,
        };

        info!("{:?} broadcast due", due);
        publisher.publish_immediate(due);

        if let Some(sender) = &led_sender {
            let _ = sender.try_send(LedFlashDuration::Default);
        }
    }
}
