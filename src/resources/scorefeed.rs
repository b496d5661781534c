//! Out-of-world score listeners.
//!
//! ECS observers of [`ScoreChangedEvent`](crate::events::score::ScoreChangedEvent)
//! are the in-world listeners. Code living outside the world (a frontend, a
//! logger, a test) subscribes here and receives every published score on a
//! crossbeam channel, in publication order.

use bevy_ecs::prelude::Resource;
use crossbeam_channel::{Receiver, Sender, unbounded};

#[derive(Resource, Debug, Default)]
pub struct ScoreFeed {
    subscribers: Vec<Sender<u32>>,
}

impl ScoreFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Every later publication is delivered to it.
    pub fn subscribe(&mut self) -> Receiver<u32> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver a score to every live subscriber. Subscribers whose receiver
    /// was dropped are forgotten.
    pub fn publish(&mut self, score: u32) {
        self.subscribers.retain(|tx| tx.send(score).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishes_in_order_to_all_subscribers() {
        let mut feed = ScoreFeed::new();
        let a = feed.subscribe();
        let b = feed.subscribe();
        feed.publish(1);
        feed.publish(2);
        assert_eq!(a.try_iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(b.try_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut feed = ScoreFeed::new();
        let kept = feed.subscribe();
        drop(feed.subscribe());
        feed.publish(5);
        assert_eq!(feed.subscriber_count(), 1);
        assert_eq!(kept.try_recv(), Ok(5));
    }
}
