//! Long-operation progress reporting for the status area.
//!
//! Import and regeneration jobs report a fraction and a caption as they go.
//! Every running update redraws the bar and pumps pending input so the UI
//! stays responsive during the load. When a job finishes, the final 100%
//! frame is held briefly so the bar is legible, but only for jobs that ran
//! past a threshold; very short jobs skip the hold entirely.

use std::time::{Duration, Instant};

/// Outcome of a progress update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    /// The job is still running.
    Running,
    /// The job reported completion. `held` is true when the job ran long
    /// enough that the tracker paused on the final frame.
    Finished { held: bool },
}

/// Tracks one job's progress fraction and caption.
pub struct ProgressTracker {
    value: f32,
    caption: String,
    started: Instant,
    completion_threshold: Duration,
    completion_hold: Duration,
    pump: Option<Box<dyn Fn()>>,
    invalidate: Option<Box<dyn Fn(f32, &str)>>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            caption: String::new(),
            started: Instant::now(),
            completion_threshold: Duration::from_millis(200),
            completion_hold: Duration::from_millis(200),
            pump: None,
            invalidate: None,
        }
    }

    /// How long a job must run to earn the final-frame hold, and how long
    /// that hold lasts.
    pub fn with_timing(mut self, threshold: Duration, hold: Duration) -> Self {
        self.completion_threshold = threshold;
        self.completion_hold = hold;
        self
    }

    /// Callback that lets the event loop breathe between updates.
    pub fn on_pump<F: Fn() + 'static>(&mut self, pump: F) {
        self.pump = Some(Box::new(pump));
    }

    /// Callback invoked with the fraction and caption whenever the bar
    /// should redraw.
    pub fn on_invalidate<F: Fn(f32, &str) + 'static>(&mut self, invalidate: F) {
        self.invalidate = Some(Box::new(invalidate));
    }

    /// Restart the stopwatch for a new job.
    pub fn begin(&mut self) {
        self.value = 0.0;
        self.caption.clear();
        self.started = Instant::now();
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Report progress. `value` is clamped to `0.0..=1.0`; `1.0` marks the
    /// job finished. Every call redraws the bar and pumps pending input.
    pub fn update(&mut self, value: f32, caption: &str) -> ProgressPhase {
        self.value = value.clamp(0.0, 1.0);
        if caption != self.caption {
            self.caption.clear();
            self.caption.push_str(caption);
        }

        if let Some(invalidate) = &self.invalidate {
            invalidate(self.value, &self.caption);
        }
        if let Some(pump) = &self.pump {
            pump();
        }

        if self.value >= 1.0 {
            let held = self.started.elapsed() >= self.completion_threshold;
            if held {
                std::thread::sleep(self.completion_hold);
            }
            return ProgressPhase::Finished { held };
        }
        ProgressPhase::Running
    }
}
