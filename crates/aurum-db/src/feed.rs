//! # Rate Feed
//!
//! Broadcast channel for rate-configuration changes.
//!
//! ## Why
//! The billing screen prices items against an in-memory [`RateConfig`]
//! snapshot. When the settings screen changes the gold rate, GST rate or
//! a category, open billing sessions need to hear about it without
//! polling the database.
//!
//! ## Flow
//! ```text
//! Settings screen ──► update_gold_rate() ──► db
//!        │
//!        └──► feed.publish(db.rate_config().await?)
//!                     │
//!                     ▼  (tokio watch channel)
//!        Billing screen: receiver.changed().await → re-read snapshot
//! ```
//!
//! Watch semantics fit here: subscribers only ever care about the latest
//! configuration, never the history of intermediate ones.

use tokio::sync::watch;
use tracing::debug;

use aurum_core::RateConfig;

/// Publisher side of the rate-configuration feed.
///
/// Cheap to clone; all clones publish into the same channel.
#[derive(Debug, Clone)]
pub struct RateFeed {
    tx: watch::Sender<RateConfig>,
}

impl RateFeed {
    /// Creates a feed seeded with the given configuration.
    pub fn new(initial: RateConfig) -> Self {
        let (tx, _rx) = watch::channel(initial);
        RateFeed { tx }
    }

    /// Publishes a new configuration to all subscribers.
    ///
    /// Subscribers that lag only see the most recent value.
    pub fn publish(&self, config: RateConfig) {
        debug!(
            gold_rate_paise = config.gold_rate_paise,
            gst_bps = config.gst_bps,
            categories = config.categories.len(),
            "Publishing rate configuration"
        );
        // send() only fails when every receiver is gone; the feed keeps
        // the latest value either way, so new subscribers still see it.
        let _ = self.tx.send(config);
    }

    /// Subscribes to configuration changes.
    ///
    /// The receiver immediately holds the latest published value.
    pub fn subscribe(&self) -> watch::Receiver<RateConfig> {
        self.tx.subscribe()
    }

    /// Returns the latest published configuration.
    pub fn current(&self) -> RateConfig {
        self.tx.borrow().clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aurum_core::{Category, GstRate, Money};

    fn config(gold_paise: i64) -> RateConfig {
        RateConfig::new(
            Money::from_paise(gold_paise),
            GstRate::from_bps(300),
            vec![Category::new("cat-1", "Ring", Money::from_paise(20_000))],
        )
    }

    #[tokio::test]
    async fn test_subscriber_sees_latest_value() {
        let feed = RateFeed::new(config(600_000));
        let mut rx = feed.subscribe();

        assert_eq!(rx.borrow().gold_rate_paise, 600_000);

        feed.publish(config(650_000));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().gold_rate_paise, 650_000);
    }

    #[tokio::test]
    async fn test_lagging_subscriber_skips_to_newest() {
        let feed = RateFeed::new(config(600_000));
        let mut rx = feed.subscribe();

        feed.publish(config(610_000));
        feed.publish(config(620_000));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().gold_rate_paise, 620_000);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_keeps_value() {
        let feed = RateFeed::new(config(600_000));
        feed.publish(config(700_000));

        assert_eq!(feed.current().gold_rate_paise, 700_000);

        // A late subscriber still sees the latest value.
        let rx = feed.subscribe();
        assert_eq!(rx.borrow().gold_rate_paise, 700_000);
    }
}
