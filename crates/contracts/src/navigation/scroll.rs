//! Scroll-to-anchor state machine.
//!
//! The machine is clock-free: the driver (the frontend) reports ticks and DOM
//! measurements, the machine answers with the scroll to perform and when to tick
//! next.
//!
//! ```text
//! Idle ──hash──▶ Polling ──found──▶ Snapped ──tick──▶ Rechecking ──last──▶ Idle
//!   ▲               │ timeout                             │ target gone
//!   └───────────────┴─────────────────────────────────────┘
//! ```

/// Timing and tolerance constants.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTimings {
    pub poll_interval_ms: u32,
    pub poll_timeout_ms: u32,
    /// Re-measure delays counted from the snap.
    pub recheck_delays_ms: Vec<u32>,
    /// Drift at or below this is left alone.
    pub drift_tolerance_px: f64,
    /// Drift at or below this is fixed with a relative scroll, above it with a full snap.
    pub correction_threshold_px: f64,
    /// Distance kept between the viewport top and the anchor (sticky header).
    pub anchor_offset_px: f64,
}

impl Default for ScrollTimings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            poll_timeout_ms: 2000,
            recheck_delays_ms: vec![120, 240, 420],
            drift_tolerance_px: 1.0,
            correction_threshold_px: 6.0,
            anchor_offset_px: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollPhase {
    Idle,
    Polling { target: String, elapsed_ms: u32 },
    Snapped { target: String },
    Rechecking { target: String, step: usize },
}

/// Measurement of the anchor element taken by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetMetrics {
    /// `getBoundingClientRect().top` of the element.
    pub element_top: f64,
    /// Current `window.scrollY`.
    pub scroll_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    Nothing,
    /// Jump to the top of the page.
    ToTop,
    /// Jump (no smooth behaviour) to an absolute vertical offset.
    SnapTo(f64),
    /// Relative correction.
    Nudge(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub action: ScrollAction,
    /// Delay before the next tick; `None` ends the cycle.
    pub next_tick_ms: Option<u32>,
}

impl ScrollStep {
    fn done(action: ScrollAction) -> Self {
        Self {
            action,
            next_tick_ms: None,
        }
    }

    fn then(action: ScrollAction, delay_ms: u32) -> Self {
        Self {
            action,
            next_tick_ms: Some(delay_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    timings: ScrollTimings,
    phase: ScrollPhase,
    generation: u64,
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new(ScrollTimings::default())
    }
}

impl ScrollCoordinator {
    pub fn new(timings: ScrollTimings) -> Self {
        Self {
            timings,
            phase: ScrollPhase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &ScrollPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ScrollPhase::Idle
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a new cycle for a route or hash change and cancels the previous one.
    ///
    /// Returns the generation the driver must pass back with every tick. Without a
    /// hash the page jumps to the top right away.
    pub fn on_navigation(&mut self, hash: Option<&str>) -> (u64, ScrollStep) {
        self.generation += 1;
        let target = hash
            .map(|h| h.trim_start_matches('#'))
            .map(|h| h.split('?').next().unwrap_or_default().trim())
            .filter(|h| !h.is_empty());

        match target {
            None => {
                self.phase = ScrollPhase::Idle;
                (self.generation, ScrollStep::done(ScrollAction::ToTop))
            }
            Some(target) => {
                self.phase = ScrollPhase::Polling {
                    target: target.to_string(),
                    elapsed_ms: 0,
                };
                (self.generation, ScrollStep::then(ScrollAction::Nothing, 0))
            }
        }
    }

    /// Element id currently being scrolled to.
    pub fn target(&self) -> Option<&str> {
        match &self.phase {
            ScrollPhase::Idle => None,
            ScrollPhase::Polling { target, .. }
            | ScrollPhase::Snapped { target }
            | ScrollPhase::Rechecking { target, .. } => Some(target),
        }
    }

    /// Advances the machine. `metrics` is `None` when the element is not in the DOM.
    ///
    /// Ticks from an older generation are ignored.
    pub fn on_tick(&mut self, generation: u64, metrics: Option<TargetMetrics>) -> ScrollStep {
        if generation != self.generation {
            return ScrollStep::done(ScrollAction::Nothing);
        }

        let phase = std::mem::replace(&mut self.phase, ScrollPhase::Idle);
        match (phase, metrics) {
            (ScrollPhase::Idle, _) => ScrollStep::done(ScrollAction::Nothing),

            (ScrollPhase::Polling { target, .. }, Some(metrics)) => {
                let top = self.anchor_top(metrics);
                self.phase = ScrollPhase::Snapped { target };
                match self.timings.recheck_delays_ms.first() {
                    Some(&delay) => ScrollStep::then(ScrollAction::SnapTo(top), delay),
                    None => {
                        self.phase = ScrollPhase::Idle;
                        ScrollStep::done(ScrollAction::SnapTo(top))
                    }
                }
            }
            (ScrollPhase::Polling { target, elapsed_ms }, None) => {
                let elapsed_ms = elapsed_ms + self.timings.poll_interval_ms;
                if elapsed_ms > self.timings.poll_timeout_ms {
                    ScrollStep::done(ScrollAction::Nothing)
                } else {
                    self.phase = ScrollPhase::Polling { target, elapsed_ms };
                    ScrollStep::then(ScrollAction::Nothing, self.timings.poll_interval_ms)
                }
            }

            (ScrollPhase::Snapped { .. } | ScrollPhase::Rechecking { .. }, None) => {
                ScrollStep::done(ScrollAction::Nothing)
            }
            (ScrollPhase::Snapped { target }, Some(metrics)) => self.recheck(target, 0, metrics),
            (ScrollPhase::Rechecking { target, step }, Some(metrics)) => {
                self.recheck(target, step + 1, metrics)
            }
        }
    }

    fn anchor_top(&self, metrics: TargetMetrics) -> f64 {
        (metrics.scroll_y + metrics.element_top - self.timings.anchor_offset_px).max(0.0)
    }

    fn recheck(&mut self, target: String, step: usize, metrics: TargetMetrics) -> ScrollStep {
        let drift = metrics.element_top - self.timings.anchor_offset_px;
        let action = if drift.abs() <= self.timings.drift_tolerance_px {
            ScrollAction::Nothing
        } else if drift.abs() <= self.timings.correction_threshold_px {
            ScrollAction::Nudge(drift)
        } else {
            ScrollAction::SnapTo(self.anchor_top(metrics))
        };

        let delays = &self.timings.recheck_delays_ms;
        match (delays.get(step), delays.get(step + 1)) {
            (Some(&current), Some(&next)) => {
                self.phase = ScrollPhase::Rechecking { target, step };
                ScrollStep::then(action, next.saturating_sub(current))
            }
            _ => ScrollStep::done(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(element_top: f64, scroll_y: f64) -> Option<TargetMetrics> {
        Some(TargetMetrics {
            element_top,
            scroll_y,
        })
    }

    #[test]
    fn test_no_hash_scrolls_to_top() {
        let mut coordinator = ScrollCoordinator::default();
        let (_, step) = coordinator.on_navigation(None);
        assert_eq!(step.action, ScrollAction::ToTop);
        assert_eq!(step.next_tick_ms, None);
        assert!(coordinator.is_idle());

        let (_, step) = coordinator.on_navigation(Some("#"));
        assert_eq!(step.action, ScrollAction::ToTop);
    }

    #[test]
    fn test_polls_until_target_then_rechecks() {
        let mut coordinator = ScrollCoordinator::default();
        let (generation, step) = coordinator.on_navigation(Some("#form?intent=quote"));
        assert_eq!(coordinator.target(), Some("form"));
        assert_eq!(step.next_tick_ms, Some(0));

        let step = coordinator.on_tick(generation, None);
        assert_eq!(step, ScrollStep::then(ScrollAction::Nothing, 50));

        let step = coordinator.on_tick(generation, measure(300.0, 100.0));
        assert_eq!(step, ScrollStep::then(ScrollAction::SnapTo(400.0), 120));
        assert!(matches!(coordinator.phase(), ScrollPhase::Snapped { .. }));

        // 120 ms: layout settled
        let step = coordinator.on_tick(generation, measure(0.4, 400.0));
        assert_eq!(step, ScrollStep::then(ScrollAction::Nothing, 120));
        // 240 ms: an image above loaded and pushed the anchor 4 px down
        let step = coordinator.on_tick(generation, measure(4.0, 400.0));
        assert_eq!(step, ScrollStep::then(ScrollAction::Nudge(4.0), 180));
        // 420 ms: a big shift, snap again and finish
        let step = coordinator.on_tick(generation, measure(-50.0, 404.0));
        assert_eq!(step, ScrollStep::done(ScrollAction::SnapTo(354.0)));
        assert!(coordinator.is_idle());
    }

    #[test]
    fn test_polling_gives_up_after_timeout() {
        let mut coordinator = ScrollCoordinator::default();
        let (generation, _) = coordinator.on_navigation(Some("#missing"));
        let mut ticks = 0;
        loop {
            let step = coordinator.on_tick(generation, None);
            ticks += 1;
            if step.next_tick_ms.is_none() {
                break;
            }
            assert!(ticks < 100, "polling never stopped");
        }
        // first tick at 0 ms, then every 50 ms up to 2000 ms
        assert_eq!(ticks, 41);
        assert!(coordinator.is_idle());
    }

    #[test]
    fn test_new_navigation_cancels_stale_ticks() {
        let mut coordinator = ScrollCoordinator::default();
        let (old, _) = coordinator.on_navigation(Some("#servicios"));
        let (current, _) = coordinator.on_navigation(Some("#clientes"));
        assert_ne!(old, current);

        let stale = coordinator.on_tick(old, measure(10.0, 0.0));
        assert_eq!(stale, ScrollStep::done(ScrollAction::Nothing));
        assert_eq!(coordinator.target(), Some("clientes"));

        let step = coordinator.on_tick(current, measure(10.0, 0.0));
        assert_eq!(step.action, ScrollAction::SnapTo(10.0));
    }

    #[test]
    fn test_target_removed_during_recheck_ends_cycle() {
        let mut coordinator = ScrollCoordinator::default();
        let (generation, _) = coordinator.on_navigation(Some("proyectos"));
        coordinator.on_tick(generation, measure(50.0, 0.0));
        let step = coordinator.on_tick(generation, None);
        assert_eq!(step, ScrollStep::done(ScrollAction::Nothing));
        assert!(coordinator.is_idle());
    }

    #[test]
    fn test_anchor_offset_is_applied() {
        let mut coordinator = ScrollCoordinator::new(ScrollTimings {
            anchor_offset_px: 80.0,
            ..ScrollTimings::default()
        });
        let (generation, _) = coordinator.on_navigation(Some("#nosotros"));
        let step = coordinator.on_tick(generation, measure(500.0, 0.0));
        assert_eq!(step.action, ScrollAction::SnapTo(420.0));
        let step = coordinator.on_tick(generation, measure(80.0, 420.0));
        assert_eq!(step.action, ScrollAction::Nothing);
    }
}
