//! The elapsed timer's tick loop, free of Dioxus so it runs under a plain
//! async test runtime.

use std::future::Future;
use std::time::Duration;

/// Sleep one interval, then tick, for as long as `running` holds. The flag is
/// checked again after every sleep so a stopped timer never gets a late tick.
/// Returns the number of ticks sent.
pub async fn drive<S, F>(
    interval: Duration,
    mut sleep: S,
    running: impl Fn() -> bool,
    mut tick: impl FnMut(),
) -> u64
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut sent = 0;
    while running() {
        sleep(interval).await;
        if !running() {
            break;
        }
        tick();
        sent += 1;
    }
    sent
}
