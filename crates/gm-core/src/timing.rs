//! Stage timers.
//!
//! Inert unless switched on with [`enable_timing`] or the `GM_TIMING`
//! environment variable. Measurements are emitted as `tracing` events so
//! they land wherever the caller's subscriber sends them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static TIMING_ON: AtomicBool = AtomicBool::new(false);

pub fn enable_timing() {
    TIMING_ON.store(true, Ordering::Relaxed);
}

pub fn disable_timing() {
    TIMING_ON.store(false, Ordering::Relaxed);
}

/// True when timing was enabled in code or `GM_TIMING` is set.
pub fn is_enabled() -> bool {
    TIMING_ON.load(Ordering::Relaxed) || std::env::var_os("GM_TIMING").is_some()
}

/// Wall-clock timer for one pipeline stage.
pub struct Timer {
    stage: &'static str,
    // None when timing was off at start
    started: Option<Instant>,
}

impl Timer {
    pub fn start(stage: &'static str) -> Self {
        Self {
            stage,
            started: is_enabled().then(Instant::now),
        }
    }

    /// Elapsed seconds, or `None` if timing was off when the timer started.
    pub fn stop(self) -> Option<f64> {
        self.started.map(|t0| t0.elapsed().as_secs_f64())
    }

    pub fn stop_and_log(self) {
        let stage = self.stage;
        if let Some(elapsed_s) = self.stop() {
            tracing::debug!(stage, elapsed_s, "stage timing");
        }
    }
}
