//! Presentation navigation.
//!
//! All mutable presentation state lives in one [`NavState`] passed by
//! reference into the event and render paths, so transitions are testable
//! without a live window. The slide index is signed while events apply;
//! [`NavState::wrap`] folds it back into range once per frame, which is
//! what makes navigation circular.

/// A discrete navigation input, already decoupled from its key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    First,
    Last,
    Forward,
    Backward,
    ToggleGrid,
    Quit,
}

/// Pointer buttons the viewer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy)]
pub struct NavState {
    /// Signed so backward steps can go below zero before wrapping.
    pub slide: i64,
    pub grid: bool,
    /// Set on any press; pointer presses navigate whether or not it was
    /// already set.
    #[allow(dead_code)]
    pub pointer_armed: bool,
}

impl NavState {
    /// Start at a 1-based page, falling back to the first slide when the
    /// request is out of range.
    pub fn new(start_page: usize, slide_count: usize) -> Self {
        let page = if start_page == 0 || start_page > slide_count {
            1
        } else {
            start_page
        };
        Self {
            slide: page as i64 - 1,
            grid: false,
            pointer_armed: false,
        }
    }

    /// Apply one event. `last` is the highest valid slide index. Quit is a
    /// no-op here; the frame loop owns process teardown.
    pub fn apply(&mut self, event: NavEvent, last: i64) {
        match event {
            NavEvent::First => self.slide = 0,
            NavEvent::Last => self.slide = last,
            NavEvent::Forward => self.slide += 1,
            NavEvent::Backward => self.slide -= 1,
            NavEvent::ToggleGrid => self.grid = !self.grid,
            NavEvent::Quit => {}
        }
    }

    /// Map a pointer press to its navigation event and arm the pointer.
    pub fn pointer_press(&mut self, button: PointerButton) -> NavEvent {
        self.pointer_armed = true;
        match button {
            PointerButton::Primary => NavEvent::Forward,
            PointerButton::Secondary => NavEvent::Backward,
            PointerButton::Middle => NavEvent::First,
        }
    }

    /// Fold the index back into `0..=last`, wrapping around either edge.
    pub fn wrap(&mut self, last: i64) {
        if self.slide > last {
            self.slide = 0;
        }
        if self.slide < 0 {
            self.slide = last;
        }
    }

    /// Current slide as an in-range index.
    pub fn index(&self) -> usize {
        self.slide.max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_at(slide: i64) -> NavState {
        NavState {
            slide,
            grid: false,
            pointer_armed: false,
        }
    }

    #[test]
    fn test_forward_wraps_to_first() {
        let mut nav = nav_at(4);
        nav.apply(NavEvent::Forward, 4);
        nav.wrap(4);
        assert_eq!(nav.slide, 0);
    }

    #[test]
    fn test_backward_wraps_to_last() {
        let mut nav = nav_at(0);
        nav.apply(NavEvent::Backward, 4);
        nav.wrap(4);
        assert_eq!(nav.slide, 4);
    }

    #[test]
    fn test_jump_to_last_from_anywhere() {
        for start in 0..5 {
            let mut nav = nav_at(start);
            nav.apply(NavEvent::Last, 4);
            nav.wrap(4);
            assert_eq!(nav.slide, 4);
        }
    }

    #[test]
    fn test_events_apply_in_order() {
        let mut nav = nav_at(0);
        for ev in [NavEvent::Forward, NavEvent::Forward, NavEvent::Backward] {
            nav.apply(ev, 4);
        }
        nav.wrap(4);
        assert_eq!(nav.slide, 1);
    }

    #[test]
    fn test_grid_toggle() {
        let mut nav = nav_at(0);
        nav.apply(NavEvent::ToggleGrid, 4);
        assert!(nav.grid);
        nav.apply(NavEvent::ToggleGrid, 4);
        assert!(!nav.grid);
    }

    #[test]
    fn test_start_page_clamping() {
        assert_eq!(NavState::new(1, 5).slide, 0);
        assert_eq!(NavState::new(3, 5).slide, 2);
        assert_eq!(NavState::new(0, 5).slide, 0);
        assert_eq!(NavState::new(99, 5).slide, 0);
    }

    #[test]
    fn test_pointer_mapping_and_arming() {
        let mut nav = nav_at(2);
        assert!(!nav.pointer_armed);
        assert_eq!(nav.pointer_press(PointerButton::Primary), NavEvent::Forward);
        assert!(nav.pointer_armed);
        assert_eq!(
            nav.pointer_press(PointerButton::Secondary),
            NavEvent::Backward
        );
        assert_eq!(nav.pointer_press(PointerButton::Middle), NavEvent::First);
    }

    #[test]
    fn test_quit_leaves_state_alone() {
        let mut nav = nav_at(2);
        nav.apply(NavEvent::Quit, 4);
        assert_eq!(nav.slide, 2);
        assert!(!nav.grid);
    }
}
