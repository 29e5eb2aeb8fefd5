//! Display fade pulse.
//!
//! Every accepted key press dips the display text toward half opacity and
//! snaps it back to full, a short visual acknowledgement of the input.
//! While a pulse is running the app needs timed repaints; when it is not,
//! egui sleeps until the next input event. [`DisplayFade::schedule_repaint`]
//! enforces that discipline so an idle calculator burns no frames.

use std::time::Duration;

/// Opacity at which the pulse ends and snaps back to full.
const FADE_FLOOR: f32 = 0.5;

/// Opacity lost per second while a pulse is running.
const FADE_RATE: f32 = 5.0;

/// Frame interval while a pulse is running.
const REPAINT_INTERVAL: Duration = Duration::from_millis(20);

/// Per-press alpha pulse for the display text.
pub struct DisplayFade {
    alpha: f32,
    active: bool,
}

impl Default for DisplayFade {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayFade {
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            active: false,
        }
    }

    /// Restart the pulse. Call on every accepted key event.
    pub fn trigger(&mut self) {
        self.alpha = 1.0;
        self.active = true;
    }

    /// Advance the pulse by `dt` seconds. On reaching the floor the
    /// display snaps back to full opacity and the pulse ends.
    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.alpha -= FADE_RATE * dt;
        if self.alpha <= FADE_FLOOR {
            self.alpha = 1.0;
            self.active = false;
        }
    }

    /// Current display opacity in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Schedule the next frame if the pulse is still running.
    pub fn schedule_repaint(&self, ctx: &egui::Context) {
        if self.active {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
    }
}
