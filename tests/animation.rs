use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use eframe::egui;
use waveview::animation::{AnimationDriver, DriverState, Invalidate, MAX_PENDING_TICKS};
use waveview::ui::components::wave_view::{WaveView, MAX_CATCH_UP_TICKS};
use waveview::wave::WaveConfig;

const FAST_TICK: Duration = Duration::from_millis(2);
const WAIT_LIMIT: Duration = Duration::from_secs(5);

#[derive(Clone, Default)]
struct CountingInvalidate {
    count: Arc<AtomicUsize>,
}

impl Invalidate for CountingInvalidate {
    fn invalidate(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + WAIT_LIMIT;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(1));
    }
    false
}

#[test]
fn running_driver_emits_ticks_and_invalidates() {
    let invalidate = CountingInvalidate::default();
    let count = Arc::clone(&invalidate.count);
    let mut driver = AnimationDriver::with_interval(FAST_TICK);
    assert!(driver.start(invalidate).unwrap());
    assert_eq!(driver.state(), DriverState::Running);

    let mut ticks = 0;
    assert!(wait_until(|| {
        ticks += driver.take_ticks();
        ticks >= 3
    }));
    assert!(count.load(Ordering::SeqCst) >= 3);
    driver.cancel();
}

#[test]
fn cancel_stops_ticking() {
    let invalidate = CountingInvalidate::default();
    let count = Arc::clone(&invalidate.count);
    let mut driver = AnimationDriver::with_interval(FAST_TICK);
    driver.start(invalidate).unwrap();
    assert!(wait_until(|| count.load(Ordering::SeqCst) > 0));

    driver.cancel();
    assert_eq!(driver.state(), DriverState::Idle);
    let after_cancel = count.load(Ordering::SeqCst);
    thread::sleep(FAST_TICK * 10);
    assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    assert_eq!(driver.take_ticks(), 0);
}

#[test]
fn refocus_does_not_spawn_a_second_ticker() {
    let first = CountingInvalidate::default();
    let second = CountingInvalidate::default();
    let second_count = Arc::clone(&second.count);
    let mut driver = AnimationDriver::with_interval(FAST_TICK);
    assert!(driver.start(first).unwrap());
    assert!(!driver.start(second).unwrap());
    thread::sleep(FAST_TICK * 10);
    assert_eq!(second_count.load(Ordering::SeqCst), 0);
    driver.cancel();
}

#[test]
fn driver_restarts_after_cancel() {
    let mut driver = AnimationDriver::with_interval(FAST_TICK);
    driver.start(CountingInvalidate::default()).unwrap();
    driver.cancel();
    assert!(driver.start(CountingInvalidate::default()).unwrap());
    assert!(wait_until(|| driver.take_ticks() > 0));
}

#[test]
fn view_advances_model_on_ticks() {
    let ctx = egui::Context::default();
    let mut view = WaveView::with_driver(
        WaveConfig::default(),
        100.0,
        AnimationDriver::with_interval(FAST_TICK),
    );
    view.model_mut().initialize(100.0, 100.0);
    view.on_focus(&ctx);
    view.on_focus(&ctx);
    assert!(view.is_animating());

    assert!(wait_until(|| view.pump() > 0));
    assert!(view.model().move_len() > 0.0);

    view.on_detach();
    assert!(!view.is_animating());
    let moved = view.model().move_len();
    thread::sleep(FAST_TICK * 10);
    assert_eq!(view.pump(), 0);
    assert_eq!(view.model().move_len(), moved);
}

#[test]
fn view_caps_catch_up_ticks() {
    let ctx = egui::Context::default();
    let mut view = WaveView::with_driver(
        WaveConfig::default(),
        100.0,
        AnimationDriver::with_interval(Duration::from_millis(1)),
    );
    view.model_mut().initialize(100.0, 100.0);
    view.on_focus(&ctx);
    thread::sleep(Duration::from_millis(60));
    let applied = view.pump();
    assert!(applied <= MAX_CATCH_UP_TICKS);
    assert_eq!(view.model().move_len(), applied as f32 * 2.0);
    view.on_detach();
}

#[test]
fn stalled_consumer_leaves_bounded_backlog() {
    let invalidate = CountingInvalidate::default();
    let count = Arc::clone(&invalidate.count);
    let mut driver = AnimationDriver::with_interval(Duration::from_millis(1));
    driver.start(invalidate).unwrap();
    assert!(wait_until(|| count.load(Ordering::SeqCst) > 4 * MAX_PENDING_TICKS));

    let backlog = driver.take_ticks();
    assert!(backlog > 0);
    assert!(backlog <= MAX_PENDING_TICKS);
    driver.cancel();
}
