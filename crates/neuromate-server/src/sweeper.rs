use std::sync::Arc;
use std::time::Duration;

use jiff::{SignedDuration, Timestamp};

use neuromate_session::SessionStore;

/// Periodically evict sessions idle for longer than `ttl`. Runs until the
/// runtime shuts down.
pub async fn run(sessions: Arc<SessionStore>, ttl: SignedDuration, every: Duration) {
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let evicted = sessions.evict_idle(ttl, Timestamp::now()).await;
        tracing::debug!(evicted, "session sweep finished");
    }
}
