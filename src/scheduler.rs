use std::time::Duration;

use tokio::time::{self, Instant};

/// Sleeps out whatever remains of `period` since `cycle_started`. A cycle
/// that overran its interval gets no sleep at all; the next one starts
/// immediately.
pub async fn idle_until_next_cycle(cycle_started: Instant, period: Duration) {
    let elapsed = cycle_started.elapsed();
    match period.checked_sub(elapsed) {
        Some(remaining) if !remaining.is_zero() => {
            log::info!("Cycle took {elapsed:.1?}, sleeping {remaining:.1?}");
            time::sleep(remaining).await;
        }
        _ => {
            log::warn!("Cycle overran the {period:?} interval (took {elapsed:.1?})");
        }
    }
}
