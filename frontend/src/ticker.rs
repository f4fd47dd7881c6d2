//! One-interval sleep for the elapsed timer, per platform.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(interval: Duration) {
    tokio::time::sleep(interval).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(interval: Duration) {
    gloo_timers::future::sleep(interval).await;
}
