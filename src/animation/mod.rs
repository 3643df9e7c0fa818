//! Fixed-delay tick scheduling for the wave widget.
//!
//! The ticker thread never sees the wave model. It only bumps a saturating
//! tick counter and asks the host to repaint; the UI thread takes the count
//! and advances the model itself.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use eframe::egui;
use tracing::{debug, error, info, warn};

use crate::wave::{Result, WaveError};

/// Nominal delay between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Most ticks held for a consumer that has stopped draining.
pub const MAX_PENDING_TICKS: usize = 8;

/// Host hook that schedules a redraw on the host's own frame cycle.
pub trait Invalidate: Send + 'static {
    fn invalidate(&self);
}

impl Invalidate for egui::Context {
    fn invalidate(&self) {
        self.request_repaint();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Owns at most one ticker thread. Dropping the driver cancels it.
pub struct AnimationDriver {
    interval: Duration,
    task: Option<AnimationTask>,
}

struct AnimationTask {
    stop: Sender<()>,
    pending: Arc<AtomicUsize>,
    join: Option<JoinHandle<()>>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::with_interval(TICK_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> DriverState {
        if self.task.is_some() {
            DriverState::Running
        } else {
            DriverState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    /// Starts ticking. Returns `false` without spawning anything when a
    /// ticker is already running.
    pub fn start<I: Invalidate>(&mut self, invalidate: I) -> Result<bool> {
        if self.task.is_some() {
            return Ok(false);
        }
        let interval = self.interval;
        let (stop_tx, stop_rx) = channel();
        let pending = Arc::new(AtomicUsize::new(0));
        let ticker_pending = Arc::clone(&pending);
        let join = thread::Builder::new()
            .name("wave-ticker".to_string())
            .spawn(move || run_ticker(interval, stop_rx, ticker_pending, invalidate))
            .map_err(|err| {
                error!(error = %err, "failed to spawn wave ticker thread");
                WaveError::new(err.to_string())
            })?;
        info!(interval_ms = interval.as_millis() as u64, "wave animation started");
        self.task = Some(AnimationTask {
            stop: stop_tx,
            pending,
            join: Some(join),
        });
        Ok(true)
    }

    /// Stops the ticker and waits for it to exit. No-op when idle.
    pub fn cancel(&mut self) {
        if self.task.take().is_some() {
            info!("wave animation cancelled");
        }
    }

    /// Ticks emitted since the previous call, at most [`MAX_PENDING_TICKS`].
    pub fn take_ticks(&mut self) -> usize {
        self.task
            .as_ref()
            .map_or(0, |task| task.pending.swap(0, Ordering::AcqRel))
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationTask {
    fn drop(&mut self) {
        let _ = self.stop.send(());
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!("wave ticker thread panicked");
            }
        }
    }
}

fn run_ticker<I: Invalidate>(
    interval: Duration,
    stop: Receiver<()>,
    pending: Arc<AtomicUsize>,
    invalidate: I,
) {
    loop {
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {
                let _ = pending.fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                    (count < MAX_PENDING_TICKS).then_some(count + 1)
                });
                invalidate.invalidate();
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!("wave ticker exited");
}
