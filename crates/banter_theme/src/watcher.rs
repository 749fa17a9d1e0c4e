//! System appearance watcher (polls for OS theme changes)
//!
//! Feeds [`crate::ThemeHost::set_appearance`] so `Auto` mode tracks the host.
//! On macOS a flip must hold for a debounce window before it is applied —
//! rapid OS-level transitions otherwise flicker the whole UI. Other
//! platforms apply flips immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::platform::detect_system_appearance;
use crate::state::ThemeHost;
use crate::theme::ColorScheme;

/// Watcher tuning. Defaults: poll every 2 s, debounce 300 ms on macOS and
/// none elsewhere.
#[derive(Clone, Copy, Debug)]
pub struct WatcherConfig {
    pub poll_interval: Duration,
    pub debounce: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            debounce: default_debounce(),
        }
    }
}

#[cfg(target_os = "macos")]
fn default_debounce() -> Duration {
    Duration::from_millis(300)
}

#[cfg(not(target_os = "macos"))]
fn default_debounce() -> Duration {
    Duration::ZERO
}

/// Background thread polling the host appearance.
pub struct SystemAppearanceWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SystemAppearanceWatcher {
    /// Spawn the watcher. It reports into the global [`ThemeHost`]; if the
    /// host is not initialized yet, observations are dropped until it is.
    pub fn spawn(config: WatcherConfig) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = std::thread::Builder::new()
            .name("banter-appearance-watcher".into())
            .spawn(move || run(config, &stop_flag))
            .expect("failed to spawn appearance watcher thread");

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Signal the thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SystemAppearanceWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Debounce state machine for appearance flips.
///
/// A flip away from the reported scheme must hold for the full debounce
/// window before it is applied; observing the reported scheme again within
/// the window cancels the pending flip. A zero window applies immediately.
struct FlipDebouncer {
    reported: ColorScheme,
    pending: Option<(ColorScheme, Instant)>,
    debounce: Duration,
}

impl FlipDebouncer {
    fn new(initial: ColorScheme, debounce: Duration) -> Self {
        Self {
            reported: initial,
            pending: None,
            debounce,
        }
    }

    fn waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed one poll observation. Returns the scheme to report, if the flip
    /// has held long enough.
    fn observe(&mut self, observed: ColorScheme, now: Instant) -> Option<ColorScheme> {
        if observed == self.reported {
            self.pending = None;
            return None;
        }
        if self.debounce.is_zero() {
            self.reported = observed;
            return Some(observed);
        }
        match self.pending {
            Some((scheme, since)) if scheme == observed => {
                if now.duration_since(since) >= self.debounce {
                    self.reported = observed;
                    self.pending = None;
                    Some(observed)
                } else {
                    None
                }
            }
            _ => {
                self.pending = Some((observed, now));
                None
            }
        }
    }
}

fn run(config: WatcherConfig, stop: &AtomicBool) {
    let mut debouncer = FlipDebouncer::new(detect_system_appearance(), config.debounce);

    while !stop.load(Ordering::SeqCst) {
        // poll faster while a flip is waiting out its debounce window
        let interval = if debouncer.waiting() {
            config.debounce.min(config.poll_interval)
        } else {
            config.poll_interval
        };
        sleep_interruptibly(interval, stop);
        if stop.load(Ordering::SeqCst) {
            break;
        }

        if let Some(applied) = debouncer.observe(detect_system_appearance(), Instant::now()) {
            apply(applied);
        }
    }
}

fn sleep_interruptibly(total: Duration, stop: &AtomicBool) {
    let slice = Duration::from_millis(50);
    let deadline = Instant::now() + total;
    while Instant::now() < deadline && !stop.load(Ordering::SeqCst) {
        std::thread::sleep(slice.min(deadline.saturating_duration_since(Instant::now())));
    }
}

fn apply(observed: ColorScheme) {
    tracing::debug!(appearance = ?observed, "system appearance changed");
    if let Some(host) = ThemeHost::try_get() {
        host.set_appearance(observed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn flip_applies_only_after_the_window_elapses() {
        let t0 = Instant::now();
        let mut debouncer = FlipDebouncer::new(ColorScheme::Light, WINDOW);

        assert_eq!(debouncer.observe(ColorScheme::Dark, t0), None);
        assert!(debouncer.waiting());
        assert_eq!(
            debouncer.observe(ColorScheme::Dark, t0 + Duration::from_millis(100)),
            None
        );
        assert_eq!(
            debouncer.observe(ColorScheme::Dark, t0 + WINDOW),
            Some(ColorScheme::Dark)
        );
        assert!(!debouncer.waiting());
        // once reported, the new scheme is steady state
        assert_eq!(
            debouncer.observe(ColorScheme::Dark, t0 + Duration::from_millis(700)),
            None
        );
    }

    #[test]
    fn flip_back_within_the_window_cancels_the_pending_change() {
        let t0 = Instant::now();
        let mut debouncer = FlipDebouncer::new(ColorScheme::Light, WINDOW);

        assert_eq!(debouncer.observe(ColorScheme::Dark, t0), None);
        // the OS settles back on light before the window elapses
        assert_eq!(
            debouncer.observe(ColorScheme::Light, t0 + Duration::from_millis(100)),
            None
        );
        assert!(!debouncer.waiting());

        // a later flip restarts the window from scratch
        let t1 = t0 + Duration::from_millis(150);
        assert_eq!(debouncer.observe(ColorScheme::Dark, t1), None);
        assert_eq!(
            debouncer.observe(ColorScheme::Dark, t1 + Duration::from_millis(250)),
            None
        );
        assert_eq!(
            debouncer.observe(ColorScheme::Dark, t1 + WINDOW),
            Some(ColorScheme::Dark)
        );
    }

    #[test]
    fn zero_debounce_applies_immediately() {
        let t0 = Instant::now();
        let mut debouncer = FlipDebouncer::new(ColorScheme::Light, Duration::ZERO);

        assert_eq!(
            debouncer.observe(ColorScheme::Dark, t0),
            Some(ColorScheme::Dark)
        );
        assert_eq!(
            debouncer.observe(ColorScheme::Light, t0),
            Some(ColorScheme::Light)
        );
    }

    #[test]
    fn steady_observation_never_reports() {
        let t0 = Instant::now();
        let mut debouncer = FlipDebouncer::new(ColorScheme::Light, WINDOW);
        for millis in [0u64, 300, 900] {
            assert_eq!(
                debouncer.observe(ColorScheme::Light, t0 + Duration::from_millis(millis)),
                None
            );
        }
    }
}
