//! Executor glue for the polling core.
//!
//! In the browser timers are `gloo-timers` futures and tasks run on the
//! JS event loop through `wasm-bindgen-futures`. Native builds (tests and
//! tooling) use tokio's current-thread primitives, so callers must be inside
//! a `tokio::task::LocalSet`.

use std::future::Future;

/// Waits for `delay_ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(delay_ms: u32) {
    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
}

/// Waits for `delay_ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(delay_ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
}

/// Runs a future to completion in the background on the current thread.
#[cfg(target_arch = "wasm32")]
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Runs a future to completion in the background on the current thread.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    // Detached: timer tasks stop when their cancel handle is dropped.
    drop(tokio::task::spawn_local(future));
}
