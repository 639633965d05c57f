use crate::api::LobbyApi;
use crate::view::LobbyView;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);
const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Seconds left until the next scheduled refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    interval_secs: u64,
    remaining: u64,
}

impl Countdown {
    pub fn new(interval: Duration) -> Self {
        let interval_secs = interval.as_secs();
        Self {
            interval_secs,
            remaining: interval_secs,
        }
    }

    /// Returns the value to display, then counts down one second.
    /// Wraps back to the full interval instead of going below zero.
    pub fn tick(&mut self) -> u64 {
        let shown = self.remaining;
        self.remaining = self.remaining.checked_sub(1).unwrap_or(self.interval_secs);
        shown
    }

    pub fn reset(&mut self) {
        self.remaining = self.interval_secs;
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

/// State shared between the owner and its timer tasks
struct PollShared {
    active: AtomicBool,
    generation: AtomicU64,
    username: Mutex<String>,
    countdown: Mutex<Countdown>,
}

impl PollShared {
    /// Renders are only allowed for the generation that is still on screen
    fn is_current(&self, generation: u64) -> bool {
        self.active.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == generation
    }

    fn username(&self) -> String {
        self.username
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn countdown(&self) -> std::sync::MutexGuard<'_, Countdown> {
        self.countdown.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct Timers {
    poll: JoinHandle<()>,
    countdown: JoinHandle<()>,
}

/// Keeps the rendered games list in step with the server by polling.
///
/// Owns its two timers (the poll interval and the one-second countdown);
/// they only live between [`start`](Self::start) and [`stop`](Self::stop).
pub struct PollingClient<A, V> {
    api: Arc<A>,
    view: Arc<V>,
    interval: Duration,
    shared: Arc<PollShared>,
    timers: Option<Timers>,
}

impl<A: LobbyApi, V: LobbyView> PollingClient<A, V> {
    pub fn new(api: Arc<A>, view: Arc<V>, interval: Duration) -> Self {
        Self {
            api,
            view,
            interval,
            shared: Arc::new(PollShared {
                active: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                username: Mutex::new(String::new()),
                countdown: Mutex::new(Countdown::new(interval)),
            }),
            timers: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timers.is_some()
    }

    /// Timer tasks currently alive
    pub fn active_timers(&self) -> usize {
        self.timers.as_ref().map_or(0, |timers| {
            [&timers.poll, &timers.countdown]
                .iter()
                .filter(|handle| !handle.is_finished())
                .count()
        })
    }

    /// Fetch immediately, then every interval. Any previous timers are
    /// cancelled first so repeated starts never stack up intervals.
    ///
    /// The countdown only starts ticking once the first fetch has completed,
    /// so a slow first response does not show the full interval twice.
    pub fn start(&mut self, username: &str) {
        self.stop();

        *self
            .shared
            .username
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = username.to_string();
        self.shared.countdown().reset();
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.active.store(true, Ordering::SeqCst);

        let (first_fetch_tx, first_fetch_rx) = oneshot::channel();

        let poll = {
            let api = self.api.clone();
            let view = self.view.clone();
            let shared = self.shared.clone();
            let period = self.interval;
            tokio::spawn(async move {
                let mut ticker = interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                let mut first_fetch = Some(first_fetch_tx);
                loop {
                    ticker.tick().await;
                    refresh(&*api, &*view, &shared, generation).await;
                    if let Some(tx) = first_fetch.take() {
                        let _ = tx.send(());
                    }
                }
            })
        };

        let countdown = {
            let view = self.view.clone();
            let shared = self.shared.clone();
            tokio::spawn(async move {
                if first_fetch_rx.await.is_err() {
                    return;
                }
                let mut ticker = interval(COUNTDOWN_TICK);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    let shown = shared.countdown().tick();
                    if shared.is_current(generation) {
                        view.show_countdown(shown);
                    }
                }
            })
        };

        info!(username, interval = ?self.interval, "Polling started");
        self.timers = Some(Timers { poll, countdown });
    }

    /// Cancel both timers. Returns how many were cancelled, so a second
    /// call without a `start` in between returns 0.
    pub fn stop(&mut self) -> usize {
        self.shared.active.store(false, Ordering::SeqCst);
        self.shared.generation.fetch_add(1, Ordering::SeqCst);

        let Some(timers) = self.timers.take() else {
            return 0;
        };
        timers.poll.abort();
        timers.countdown.abort();
        info!("Polling stopped");
        2
    }

    /// Out-of-band fetch, used right after the user creates or deletes a game
    pub async fn refresh_now(&self) -> bool {
        if !self.is_running() {
            debug!("Skipping refresh outside the lobby");
            return false;
        }
        let generation = self.shared.generation.load(Ordering::SeqCst);
        refresh(&*self.api, &*self.view, &self.shared, generation).await
    }

    pub fn countdown(&self) -> Countdown {
        *self.shared.countdown()
    }
}

impl<A, V> Drop for PollingClient<A, V> {
    fn drop(&mut self) {
        if let Some(timers) = self.timers.take() {
            timers.poll.abort();
            timers.countdown.abort();
        }
    }
}

/// One fetch-and-render pass. Failures are logged and left for the next tick.
async fn refresh<A: LobbyApi, V: LobbyView>(
    api: &A,
    view: &V,
    shared: &PollShared,
    generation: u64,
) -> bool {
    let result = api.list_games().await;

    if !shared.is_current(generation) {
        debug!("Discarding games list for a lobby that is no longer shown");
        return false;
    }
    shared.countdown().reset();

    match result {
        Ok(games) => {
            debug!(count = games.len(), "Games list updated");
            view.render_games(&games, &shared.username());
            true
        }
        Err(e) => {
            warn!(error = %e, "Failed to update games list");
            false
        }
    }
}
