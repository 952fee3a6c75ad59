//! Idle loop between startup and shutdown.

use std::future::Future;
use std::time::Duration;
use tokio::time;

/// Park the calling task until `stop` resolves, waking every `wake` to do
/// nothing. The wakes only keep the task scheduled.
pub async fn idle_until<F>(wake: Duration, stop: F)
where
    F: Future<Output = ()>,
{
    let mut ticker = time::interval(wake);
    ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    tokio::pin!(stop);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                tracing::trace!("Idle wake");
            }
            _ = &mut stop => break,
        }
    }
}
