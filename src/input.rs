//! Pointer input helpers for hosts.
//!
//! The engine's shape toggles react to *multi*-clicks (double, quadruple,
//! ...), but most windowing layers only deliver raw press/release events.
//! [`ClickTracker`] rebuilds the click multiplicity from raw clicks so a host
//! can feed [`Engine::on_multi_click`](crate::Engine::on_multi_click):
//!
//! ```
//! use std::time::Instant;
//! use swarm2d::input::{ClickTracker, MouseButton};
//!
//! let mut tracker = ClickTracker::new();
//! let t0 = Instant::now();
//! assert_eq!(tracker.click_at(MouseButton::Left, t0), 1);
//! // A second click inside the window makes it a double click.
//! let clicks = tracker.click_at(MouseButton::Left, t0 + tracker.window() / 2);
//! assert_eq!(clicks, 2);
//! ```

use std::time::{Duration, Instant};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Folds raw clicks into a running multiplicity.
///
/// Successive clicks of the same button, each within the multi-click window
/// of the previous one, count 1, 2, 3, ... — mirroring how desktop toolkits
/// report `click_count`. A different button or an expired window restarts the
/// count at 1.
#[derive(Debug)]
pub struct ClickTracker {
    window: Duration,
    last_click: Option<(MouseButton, Instant)>,
    count: u32,
}

impl ClickTracker {
    /// Default multi-click window, matching common desktop settings.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(400);

    /// Create a tracker with the default multi-click window.
    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    /// Create a tracker with a custom multi-click window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            last_click: None,
            count: 0,
        }
    }

    /// The configured multi-click window.
    #[inline]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Register a click happening now and return its multiplicity.
    pub fn click(&mut self, button: MouseButton) -> u32 {
        self.click_at(button, Instant::now())
    }

    /// Register a click at an explicit instant and return its multiplicity.
    pub fn click_at(&mut self, button: MouseButton, at: Instant) -> u32 {
        let continues_run = matches!(
            self.last_click,
            Some((last_button, last_at))
                if last_button == button && at.duration_since(last_at) <= self.window
        );

        self.count = if continues_run { self.count + 1 } else { 1 };
        self.last_click = Some((button, at));
        self.count
    }

    /// Forget any in-progress click run.
    pub fn reset(&mut self) {
        self.last_click = None;
        self.count = 0;
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_is_single() {
        let mut tracker = ClickTracker::new();
        assert_eq!(tracker.click_at(MouseButton::Left, Instant::now()), 1);
    }

    #[test]
    fn test_rapid_clicks_accumulate() {
        let mut tracker = ClickTracker::new();
        let t0 = Instant::now();
        let step = tracker.window() / 4;

        assert_eq!(tracker.click_at(MouseButton::Left, t0), 1);
        assert_eq!(tracker.click_at(MouseButton::Left, t0 + step), 2);
        assert_eq!(tracker.click_at(MouseButton::Left, t0 + step * 2), 3);
        assert_eq!(tracker.click_at(MouseButton::Left, t0 + step * 3), 4);
    }

    #[test]
    fn test_slow_click_restarts_run() {
        let mut tracker = ClickTracker::new();
        let t0 = Instant::now();

        assert_eq!(tracker.click_at(MouseButton::Left, t0), 1);
        let late = t0 + tracker.window() + Duration::from_millis(1);
        assert_eq!(tracker.click_at(MouseButton::Left, late), 1);
    }

    #[test]
    fn test_button_change_restarts_run() {
        let mut tracker = ClickTracker::new();
        let t0 = Instant::now();
        let step = tracker.window() / 4;

        assert_eq!(tracker.click_at(MouseButton::Left, t0), 1);
        assert_eq!(tracker.click_at(MouseButton::Right, t0 + step), 1);
        assert_eq!(tracker.click_at(MouseButton::Right, t0 + step * 2), 2);
    }

    #[test]
    fn test_reset_clears_run() {
        let mut tracker = ClickTracker::new();
        let t0 = Instant::now();

        tracker.click_at(MouseButton::Left, t0);
        tracker.reset();
        assert_eq!(tracker.click_at(MouseButton::Left, t0), 1);
    }
}
