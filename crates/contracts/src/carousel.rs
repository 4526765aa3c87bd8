//! Logo carousel behaviour: responsive page size, paging, autoplay and pointer drag.

/// Items per view for each breakpoint (640/768/1024/1280 px).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responsive {
    pub base: u32,
    pub sm: Option<u32>,
    pub md: Option<u32>,
    pub lg: Option<u32>,
    pub xl: Option<u32>,
}

impl Default for Responsive {
    fn default() -> Self {
        Self {
            base: 1,
            sm: Some(2),
            md: Some(3),
            lg: Some(4),
            xl: Some(6),
        }
    }
}

impl Responsive {
    pub fn items_per_view(&self, viewport_width: f64) -> u32 {
        let picked = [
            (1280.0, self.xl),
            (1024.0, self.lg),
            (768.0, self.md),
            (640.0, self.sm),
        ]
        .into_iter()
        .filter(|(min_width, _)| viewport_width >= *min_width)
        .find_map(|(_, count)| count);
        picked.unwrap_or(self.base).max(1)
    }

    /// Width of one slot as a percentage of the track.
    pub fn item_width_percent(&self, viewport_width: f64) -> f64 {
        100.0 / f64::from(self.items_per_view(viewport_width))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub responsive: Responsive,
    pub gap_px: f64,
    /// `None` disables autoplay.
    pub autoplay_ms: Option<u32>,
    pub drag_threshold_px: f64,
    pub edge_tolerance_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            responsive: Responsive::default(),
            gap_px: 24.0,
            autoplay_ms: Some(3500),
            drag_threshold_px: 6.0,
            edge_tolerance_px: 5.0,
        }
    }
}

/// Scroll geometry of the track element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    fn clamp(&self, left: f64) -> f64 {
        left.clamp(0.0, self.max_scroll_left())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselPhase {
    Idle,
    Autoplaying,
    Paused,
    Dragging {
        origin_x: f64,
        origin_scroll: f64,
        moved: bool,
    },
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    config: CarouselConfig,
    phase: CarouselPhase,
    hovered: bool,
    focused: bool,
    suppress_click: bool,
}

impl CarouselState {
    pub fn new(config: CarouselConfig) -> Self {
        let mut state = Self {
            config,
            phase: CarouselPhase::Idle,
            hovered: false,
            focused: false,
            suppress_click: false,
        };
        state.settle();
        state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging { .. })
    }

    pub fn can_scroll_left(&self, metrics: &ScrollMetrics) -> bool {
        metrics.scroll_left > self.config.edge_tolerance_px
    }

    pub fn can_scroll_right(&self, metrics: &ScrollMetrics) -> bool {
        metrics.scroll_left < metrics.scroll_width - metrics.client_width - self.config.edge_tolerance_px
    }

    pub fn page_step(&self, metrics: &ScrollMetrics) -> f64 {
        (metrics.client_width + self.config.gap_px).round()
    }

    /// Target `scroll_left` for an arrow click or arrow key.
    pub fn page_target(&self, direction: Direction, metrics: &ScrollMetrics) -> f64 {
        let step = self.page_step(metrics);
        match direction {
            Direction::Left => metrics.clamp(metrics.scroll_left - step),
            Direction::Right => metrics.clamp(metrics.scroll_left + step),
        }
    }

    /// Autoplay advance; wraps to the start once the end is reached.
    pub fn autoplay_tick(&self, metrics: &ScrollMetrics) -> Option<f64> {
        if self.phase != CarouselPhase::Autoplaying || metrics.max_scroll_left() <= 0.0 {
            return None;
        }
        if self.can_scroll_right(metrics) {
            Some(self.page_target(Direction::Right, metrics))
        } else {
            Some(0.0)
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.settle();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.settle();
    }

    pub fn pointer_down(&mut self, x: f64, metrics: &ScrollMetrics) {
        self.suppress_click = false;
        self.phase = CarouselPhase::Dragging {
            origin_x: x,
            origin_scroll: metrics.scroll_left,
            moved: false,
        };
    }

    /// New `scroll_left` while dragging; `None` below the drag threshold or when
    /// no drag is in progress.
    pub fn pointer_move(&mut self, x: f64, metrics: &ScrollMetrics) -> Option<f64> {
        let CarouselPhase::Dragging {
            origin_x,
            origin_scroll,
            moved,
        } = self.phase
        else {
            return None;
        };

        let dx = x - origin_x;
        if !moved && dx.abs() < self.config.drag_threshold_px {
            return None;
        }
        self.phase = CarouselPhase::Dragging {
            origin_x,
            origin_scroll,
            moved: true,
        };
        Some(metrics.clamp(origin_scroll - dx))
    }

    /// Ends a drag. Returns `true` when the pointer actually dragged, in which case
    /// the click that follows must be swallowed.
    pub fn pointer_up(&mut self) -> bool {
        let dragged = matches!(self.phase, CarouselPhase::Dragging { moved: true, .. });
        if self.is_dragging() {
            self.phase = CarouselPhase::Idle;
            self.settle();
        }
        self.suppress_click = dragged;
        dragged
    }

    /// Consumes the click-suppression flag set by [`pointer_up`](Self::pointer_up).
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }

    fn settle(&mut self) {
        if self.is_dragging() {
            return;
        }
        self.phase = match self.config.autoplay_ms {
            None => CarouselPhase::Idle,
            Some(_) if self.hovered || self.focused => CarouselPhase::Paused,
            Some(_) => CarouselPhase::Autoplaying,
        };
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width: 2000.0,
            client_width: 800.0,
        }
    }

    #[test]
    fn test_items_per_view() {
        let responsive = Responsive::default();
        assert_eq!(responsive.items_per_view(375.0), 1);
        assert_eq!(responsive.items_per_view(640.0), 2);
        assert_eq!(responsive.items_per_view(800.0), 3);
        assert_eq!(responsive.items_per_view(1100.0), 4);
        assert_eq!(responsive.items_per_view(1920.0), 6);

        let sparse = Responsive { base: 2, sm: None, md: Some(4), lg: None, xl: None };
        assert_eq!(sparse.items_per_view(700.0), 2);
        assert_eq!(sparse.items_per_view(1500.0), 4);
        assert_eq!(sparse.item_width_percent(1500.0), 25.0);
    }

    #[test]
    fn test_edges() {
        let state = CarouselState::default();
        assert!(!state.can_scroll_left(&metrics(0.0)));
        assert!(state.can_scroll_right(&metrics(0.0)));
        assert!(state.can_scroll_left(&metrics(600.0)));
        assert!(!state.can_scroll_right(&metrics(1196.0)));
    }

    #[test]
    fn test_paging_is_clamped() {
        let state = CarouselState::default();
        assert_eq!(state.page_step(&metrics(0.0)), 824.0);
        assert_eq!(state.page_target(Direction::Right, &metrics(0.0)), 824.0);
        assert_eq!(state.page_target(Direction::Right, &metrics(824.0)), 1200.0);
        assert_eq!(state.page_target(Direction::Left, &metrics(300.0)), 0.0);
    }

    #[test]
    fn test_autoplay_wraps_and_pauses() {
        let mut state = CarouselState::default();
        assert_eq!(state.phase(), CarouselPhase::Autoplaying);
        assert_eq!(state.autoplay_tick(&metrics(0.0)), Some(824.0));
        assert_eq!(state.autoplay_tick(&metrics(1200.0)), Some(0.0));

        state.set_hovered(true);
        assert_eq!(state.phase(), CarouselPhase::Paused);
        assert_eq!(state.autoplay_tick(&metrics(0.0)), None);
        state.set_hovered(false);
        state.set_focused(true);
        assert_eq!(state.phase(), CarouselPhase::Paused);
        state.set_focused(false);
        assert_eq!(state.phase(), CarouselPhase::Autoplaying);

        let no_overflow = ScrollMetrics { scroll_left: 0.0, scroll_width: 800.0, client_width: 800.0 };
        assert_eq!(state.autoplay_tick(&no_overflow), None);
    }

    #[test]
    fn test_without_autoplay_stays_idle() {
        let mut state = CarouselState::new(CarouselConfig { autoplay_ms: None, ..CarouselConfig::default() });
        assert_eq!(state.phase(), CarouselPhase::Idle);
        state.set_hovered(true);
        assert_eq!(state.phase(), CarouselPhase::Idle);
        assert_eq!(state.autoplay_tick(&metrics(0.0)), None);
    }

    #[test]
    fn test_drag_scrolls_and_suppresses_click() {
        let mut state = CarouselState::default();
        state.pointer_down(500.0, &metrics(400.0));
        assert!(state.is_dragging());
        assert_eq!(state.autoplay_tick(&metrics(400.0)), None);

        assert_eq!(state.pointer_move(503.0, &metrics(400.0)), None);
        assert_eq!(state.pointer_move(400.0, &metrics(400.0)), Some(500.0));
        // once dragging, small moves count too
        assert_eq!(state.pointer_move(498.0, &metrics(500.0)), Some(402.0));
        assert_eq!(state.pointer_move(-2000.0, &metrics(402.0)), Some(1200.0));

        assert!(state.pointer_up());
        assert_eq!(state.phase(), CarouselPhase::Autoplaying);
        assert!(state.take_click_suppression());
        assert!(!state.take_click_suppression());
    }

    #[test]
    fn test_tap_is_not_a_drag() {
        let mut state = CarouselState::default();
        state.set_hovered(true);
        state.pointer_down(100.0, &metrics(0.0));
        assert_eq!(state.pointer_move(102.0, &metrics(0.0)), None);
        assert!(!state.pointer_up());
        assert!(!state.take_click_suppression());
        assert_eq!(state.phase(), CarouselPhase::Paused);
        assert_eq!(state.pointer_move(50.0, &metrics(0.0)), None);
    }
}
