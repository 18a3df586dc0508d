use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;

use chrono::Utc;
use futures::channel::oneshot;
use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use tracing::{debug, info, warn};

use super::config::{PollingConfig, PollingConfigUpdate};
use super::runtime;
use super::state::PollingState;

type Producer<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, String>>>;
type Listener<T> = Rc<dyn Fn(&PollingState<T>)>;

/// What started a fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// First fetch after the source is started.
    Initial,
    /// Periodic tick of the interval timer.
    Interval,
    /// Explicit `refresh()` call.
    Manual,
    /// Scheduled retry after a failure.
    Retry,
    /// Polling re-enabled after a pause.
    Resume,
}

/// Result of a single fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Succeeded,
    Failed,
    /// Not run: another cycle was in flight or the source was torn down.
    Skipped,
    /// The producer settled after teardown; its result was dropped.
    Discarded,
}

struct Inner<T> {
    name: &'static str,
    config: PollingConfig,
    state: PollingState<T>,
    active: bool,
    disposed: bool,
    in_flight: bool,
    // Dropping a handle cancels the timer task holding its receiver.
    interval_timer: Option<oneshot::Sender<()>>,
    retry_timer: Option<oneshot::Sender<()>>,
    listener: Option<Listener<T>>,
}

impl<T> Inner<T> {
    fn polls_automatically(&self) -> bool {
        self.active && !self.disposed && self.config.enabled
    }
}

/// Periodically runs an async producer and caches its latest result.
///
/// The source owns two timers: the interval timer drives regular fetches
/// while enabled, and a one-shot retry timer re-runs any failed fetch after
/// `retry_delay_ms` until `max_retries` is spent. Disabling cancels a pending
/// retry but does not prevent a manual refresh from scheduling one. At most
/// one producer call is ever in flight; a refresh, tick or retry arriving
/// while a cycle runs is skipped, not queued.
///
/// Handles are cheap to clone and share the same state. Everything runs on
/// the current thread, so the type is deliberately `!Send`.
pub struct PollingDataSource<T> {
    inner: Rc<RefCell<Inner<T>>>,
    producer: Producer<T>,
}

impl<T> Clone for PollingDataSource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T> PartialEq for PollingDataSource<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> PollingDataSource<T> {
    /// Creates an inactive source. `config` is merged over the defaults.
    ///
    /// Producer errors are converted to their `Display` message and never
    /// escape the source.
    pub fn new<F, Fut, E>(producer: F, config: PollingConfigUpdate) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display,
    {
        let producer: Producer<T> = Rc::new(move || {
            let fetch = producer();
            async move { fetch.await.map_err(|e| e.to_string()) }.boxed_local()
        });

        Self {
            inner: Rc::new(RefCell::new(Inner {
                name: "polling",
                config: PollingConfig::default().merged(config),
                state: PollingState::default(),
                active: false,
                disposed: false,
                in_flight: false,
                interval_timer: None,
                retry_timer: None,
                listener: None,
            })),
            producer,
        }
    }

    /// Labels the source in log output.
    pub fn named(self, name: &'static str) -> Self {
        self.inner.borrow_mut().name = name;
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PollingState<T> {
        self.inner.borrow().state.clone()
    }

    pub fn config(&self) -> PollingConfig {
        self.inner.borrow().config
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().config.enabled
    }

    /// Returns true between `start()` and `teardown()`.
    pub fn is_active(&self) -> bool {
        let inner = self.inner.borrow();
        inner.active && !inner.disposed
    }

    /// Returns true while a producer call is in flight.
    pub fn is_fetching(&self) -> bool {
        self.inner.borrow().in_flight
    }

    /// Registers the listener notified with a snapshot on every state change.
    /// Replaces any previous listener.
    pub fn subscribe(&self, listener: impl Fn(&PollingState<T>) + 'static) {
        let mut inner = self.inner.borrow_mut();
        if !inner.disposed {
            inner.listener = Some(Rc::new(listener));
        }
    }

    /// Activates the source: fetches immediately and arms the interval
    /// timer when enabled. Repeated calls do nothing.
    pub fn start(&self) {
        let (name, enabled) = {
            let mut inner = self.inner.borrow_mut();
            if inner.active || inner.disposed {
                return;
            }
            inner.active = true;
            (inner.name, inner.config.enabled)
        };

        info!(source = name, enabled, "polling source started");
        if enabled {
            self.resume(FetchKind::Initial);
        }
    }

    /// Runs one fetch cycle now.
    ///
    /// Resolves once this attempt settles; a retry it schedules runs later
    /// on the retry timer. Returns [`CycleOutcome::Skipped`] without calling
    /// the producer if a cycle is already in flight.
    pub async fn refresh(&self) -> CycleOutcome {
        self.run_cycle(FetchKind::Manual).await
    }

    /// Flips automatic polling on or off.
    pub fn toggle(&self) {
        let enabled = self.is_enabled();
        self.set_enabled(!enabled);
    }

    /// Enables or disables automatic polling.
    ///
    /// Disabling cancels the interval and retry timers; a fetch already in
    /// flight still completes and updates state. Enabling fetches at once
    /// and re-arms the interval timer.
    pub fn set_enabled(&self, enabled: bool) {
        let (name, active) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.config.enabled == enabled {
                return;
            }
            inner.config.enabled = enabled;
            (inner.name, inner.active)
        };

        if enabled {
            info!(source = name, "polling resumed");
            if active {
                self.resume(FetchKind::Resume);
            }
        } else {
            info!(source = name, "polling paused");
            self.disarm_timers();
        }
    }

    /// Merges `update` into the configuration.
    ///
    /// A new interval re-arms the interval timer; a change of `enabled`
    /// behaves like [`set_enabled`](Self::set_enabled).
    pub fn update_config(&self, update: PollingConfigUpdate) {
        let (was_enabled, interval_changed) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            let previous = inner.config;
            let mut next = previous.merged(update);
            // `enabled` goes through set_enabled so the timers follow.
            next.enabled = previous.enabled;
            inner.config = next;
            (
                previous.enabled,
                next.effective_interval_ms() != previous.effective_interval_ms(),
            )
        };

        match update.enabled_value() {
            Some(enabled) if enabled != was_enabled => self.set_enabled(enabled),
            _ => {
                if interval_changed && self.inner.borrow().polls_automatically() {
                    self.arm_interval();
                }
            }
        }
    }

    /// Stops the source for good. Pending timers are cancelled and any
    /// result still in flight is dropped. Safe to call more than once.
    pub fn teardown(&self) {
        let name = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.active = false;
            inner.interval_timer = None;
            inner.retry_timer = None;
            inner.listener = None;
            inner.name
        };
        info!(source = name, "polling source torn down");
    }

    fn resume(&self, kind: FetchKind) {
        let source = self.clone();
        runtime::spawn_local(async move {
            source.run_cycle(kind).await;
        });
        self.arm_interval();
    }

    fn disarm_timers(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.interval_timer = None;
        inner.retry_timer = None;
    }

    fn arm_interval(&self) {
        let (mut cancelled, interval_ms) = {
            let mut inner = self.inner.borrow_mut();
            let (timer, cancelled) = oneshot::channel();
            // Replacing the handle stops the previous loop.
            inner.interval_timer = Some(timer);
            (cancelled, inner.config.effective_interval_ms())
        };

        let source = self.clone();
        runtime::spawn_local(async move {
            while sleep_unless_cancelled(interval_ms, &mut cancelled).await {
                let tick = source.clone();
                runtime::spawn_local(async move {
                    tick.run_cycle(FetchKind::Interval).await;
                });
            }
        });
    }

    fn schedule_retry(&self) {
        let (mut cancelled, delay_ms) = {
            let mut inner = self.inner.borrow_mut();
            let (timer, cancelled) = oneshot::channel();
            inner.retry_timer = Some(timer);
            (cancelled, inner.config.effective_retry_delay_ms())
        };

        let source = self.clone();
        runtime::spawn_local(async move {
            if sleep_unless_cancelled(delay_ms, &mut cancelled).await {
                source.run_cycle(FetchKind::Retry).await;
            }
        });
    }

    async fn run_cycle(&self, kind: FetchKind) -> CycleOutcome {
        let started = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.in_flight {
                None
            } else {
                inner.in_flight = true;
                if kind != FetchKind::Retry {
                    // A fresh attempt supersedes a pending retry.
                    inner.retry_timer = None;
                }
                let is_refresh = inner.state.has_data();
                inner.state.begin_fetch(is_refresh);
                Some((
                    inner.name,
                    is_refresh,
                    inner.state.clone(),
                    inner.listener.clone(),
                ))
            }
        };

        let Some((name, is_refresh, snapshot, listener)) = started else {
            debug!(?kind, "fetch skipped");
            return CycleOutcome::Skipped;
        };
        debug!(source = name, ?kind, is_refresh, "fetch started");
        notify(listener.as_ref(), &snapshot);

        let result = (self.producer)().await;

        let (outcome, retry, snapshot, listener) = {
            let mut inner = self.inner.borrow_mut();
            inner.in_flight = false;
            if inner.disposed {
                debug!(source = name, ?kind, "result dropped after teardown");
                return CycleOutcome::Discarded;
            }

            let (outcome, retry) = match result {
                Ok(data) => {
                    inner.state.record_success(data, Utc::now());
                    debug!(source = name, ?kind, "fetch succeeded");
                    (CycleOutcome::Succeeded, false)
                }
                Err(message) => {
                    inner.state.record_failure(message);
                    let retry_count = inner.state.retry_count;
                    let max_retries = inner.config.max_retries;
                    let retry = retry_count <= max_retries;
                    warn!(
                        source = name,
                        ?kind,
                        retry_count,
                        max_retries,
                        error = inner.state.error.as_deref().unwrap_or_default(),
                        will_retry = retry,
                        "fetch failed"
                    );
                    (CycleOutcome::Failed, retry)
                }
            };
            (outcome, retry, inner.state.clone(), inner.listener.clone())
        };

        notify(listener.as_ref(), &snapshot);
        if retry {
            self.schedule_retry();
        }
        outcome
    }
}

/// Waits `delay_ms`, returning false as soon as the timer handle is dropped.
async fn sleep_unless_cancelled(delay_ms: u32, cancelled: &mut oneshot::Receiver<()>) -> bool {
    let elapsed = pin!(runtime::sleep(delay_ms));
    // `select` polls the cancellation first, so a dropped handle always wins.
    matches!(future::select(cancelled, elapsed).await, Either::Right(_))
}

fn notify<T>(listener: Option<&Listener<T>>, state: &PollingState<T>) {
    if let Some(listener) = listener {
        listener(state);
    }
}
