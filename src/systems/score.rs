//! Score channel listeners.
//!
//! Both observers react to [`ScoreChangedEvent`]: one keeps the
//! [`Hud`] score line in sync, the other forwards the value to every
//! out-of-world [`ScoreFeed`] subscriber.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::score::ScoreChangedEvent;
use crate::resources::hud::Hud;
use crate::resources::scorefeed::ScoreFeed;

pub fn hud_score_observer(trigger: On<ScoreChangedEvent>, mut hud: ResMut<Hud>) {
    hud.score = trigger.event().score;
}

pub fn score_feed_observer(trigger: On<ScoreChangedEvent>, mut feed: ResMut<ScoreFeed>) {
    let score = trigger.event().score;
    debug!(
        "Publishing score {} to {} subscriber(s)",
        score,
        feed.subscriber_count()
    );
    feed.publish(score);
}
