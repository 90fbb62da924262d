//! Slider state machine: which slide is centered and which dot is lit.
//!
//! Every move goes through [`SliderState::move_to`], which turns the old dot
//! off before turning the new one on. Moves are applied to a fresh copy inside
//! [`Reducible::reduce`], so a component never renders a half-applied move.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::error::PageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideAction {
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    dots: Vec<bool>,
}

impl SliderState {
    /// One inactive dot per slide, then the first dot switched on.
    pub fn new(slides: usize) -> Self {
        let mut state = Self {
            current: 0,
            dots: vec![false; slides],
        };
        if slides > 0 {
            state.toggle_dot(0);
        }
        state
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn dots(&self) -> &[bool] {
        &self.dots
    }

    /// Offsets (in percent) for every slide at the current position.
    pub fn offsets(&self) -> Vec<i64> {
        render(self.current, self.len())
    }

    /// Panics when `index` has no dot; callers only pass indices they own.
    pub fn toggle_dot(&mut self, index: usize) {
        self.dots[index] = !self.dots[index];
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.move_to((self.current + 1) % self.len());
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.move_to((self.current + self.len() - 1) % self.len());
    }

    /// Jumps straight to `target`. Re-selecting the current slide still
    /// toggles its dot twice.
    pub fn go_to(&mut self, target: usize) {
        if self.is_empty() {
            return;
        }
        self.move_to(target);
    }

    pub fn apply(&mut self, action: SlideAction) {
        match action {
            SlideAction::Next => self.next(),
            SlideAction::Previous => self.previous(),
            SlideAction::GoTo(target) => self.go_to(target),
        }
    }

    fn move_to(&mut self, target: usize) {
        self.toggle_dot(self.current);
        self.current = target;
        self.toggle_dot(self.current);
    }
}

impl Reducible for SliderState {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        debug!("slider {:?}: {} -> {}", action, self.current, next.current);
        Rc::new(next)
    }
}

/// Horizontal offset of the slide at `position` when `index` is centered.
pub fn slide_offset(position: usize, index: usize) -> i64 {
    100 * (position as i64 - index as i64)
}

pub fn render(index: usize, slides: usize) -> Vec<i64> {
    (0..slides).map(|position| slide_offset(position, index)).collect()
}

/// Arrow keys drive the slider from anywhere on the page.
pub fn key_action(key: &str) -> Option<SlideAction> {
    match key {
        "ArrowLeft" => Some(SlideAction::Previous),
        "ArrowRight" => Some(SlideAction::Next),
        _ => None,
    }
}

/// Reads the `data-slide` value of a clicked dot.
pub fn parse_dot_index(raw: &str, slides: usize) -> Result<usize, PageError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index < slides)
        .ok_or_else(|| PageError::InvalidDotIndex {
            raw: raw.to_string(),
            slides,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn active_dots(state: &SliderState) -> Vec<usize> {
        state
            .dots()
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }

    fn centered_slides(state: &SliderState) -> Vec<usize> {
        state
            .offsets()
            .iter()
            .enumerate()
            .filter_map(|(i, offset)| (*offset == 0).then_some(i))
            .collect()
    }

    #[test]
    fn starts_on_first_slide() {
        let state = SliderState::new(3);
        assert_eq!(state.current(), 0);
        assert_eq!(state.dots(), &[true, false, false]);
        assert_eq!(state.offsets(), vec![0, 100, 200]);
    }

    #[test]
    fn render_places_slides_around_index() {
        assert_eq!(render(2, 4), vec![-200, -100, 0, 100]);
        assert_eq!(slide_offset(0, 0), 0);
    }

    #[test]
    fn offsets_track_current_slide() {
        let mut state = SliderState::new(4);
        state.go_to(2);
        assert_eq!(state.offsets(), vec![-200, -100, 0, 100]);
        state.next();
        assert_eq!(state.offsets(), render(3, 4));
        assert_eq!(state.offsets(), vec![-300, -200, -100, 0]);
    }

    #[test]
    fn previous_wraps_then_next_walks_forward() {
        let mut state = SliderState::new(5);
        state.previous();
        assert_eq!(state.current(), 4);
        assert!(state.dots()[4]);
        assert!(!state.dots()[0]);
        assert_eq!(state.offsets()[4], 0);

        state.next();
        state.next();
        assert_eq!(state.current(), 1);
        assert_eq!(active_dots(&state), vec![1]);
    }

    #[test]
    fn dot_jump_ignores_prior_position() {
        for start in 0..5 {
            let mut state = SliderState::new(5);
            state.go_to(start);
            state.go_to(3);
            assert_eq!(state.current(), 3);
            assert_eq!(active_dots(&state), vec![3]);
        }
    }

    #[test]
    fn reselecting_active_dot_is_net_noop() {
        let mut state = SliderState::new(5);
        state.go_to(2);
        let before = state.clone();
        state.go_to(2);
        assert_eq!(state, before);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut state = SliderState::new(1);
        state.next();
        state.previous();
        assert_eq!(state.current(), 0);
        assert_eq!(state.dots(), &[true]);
    }

    #[test]
    fn empty_slider_ignores_moves() {
        let mut state = SliderState::new(0);
        state.next();
        state.previous();
        state.go_to(0);
        assert_eq!(state.current(), 0);
        assert!(state.offsets().is_empty());
    }

    #[test]
    fn reducer_leaves_previous_state_untouched() {
        let before = Rc::new(SliderState::new(3));
        let after = before.clone().reduce(SlideAction::Next);
        assert_eq!(before.current(), 0);
        assert_eq!(after.current(), 1);
        assert_eq!(after.dots(), &[false, true, false]);
    }

    #[test]
    fn arrow_keys_map_to_moves() {
        assert_eq!(key_action("ArrowLeft"), Some(SlideAction::Previous));
        assert_eq!(key_action("ArrowRight"), Some(SlideAction::Next));
        assert_eq!(key_action("ArrowUp"), None);
        assert_eq!(key_action("Escape"), None);
    }

    #[test]
    fn dot_index_is_coerced_at_the_boundary() {
        assert_eq!(parse_dot_index("3", 5), Ok(3));
        assert_eq!(parse_dot_index(" 0 ", 5), Ok(0));
        for raw in ["5", "-1", "abc", "", "1.5"] {
            assert_eq!(
                parse_dot_index(raw, 5),
                Err(PageError::InvalidDotIndex {
                    raw: raw.to_string(),
                    slides: 5,
                })
            );
        }
    }

    fn moves() -> impl Strategy<Value = Vec<SlideAction>> {
        prop::collection::vec(
            prop_oneof![Just(SlideAction::Next), Just(SlideAction::Previous)],
            0..64,
        )
    }

    proptest! {
        #[test]
        fn index_stays_in_range(slides in 1usize..12, actions in moves()) {
            let mut state = SliderState::new(slides);
            for action in actions {
                state.apply(action);
                prop_assert!(state.current() < slides);
                prop_assert_eq!(active_dots(&state), vec![state.current()]);
                prop_assert_eq!(centered_slides(&state), vec![state.current()]);
            }
        }

        #[test]
        fn full_cycle_returns_home(slides in 1usize..12, start in 0usize..12) {
            let start = start % slides;
            let mut state = SliderState::new(slides);
            state.go_to(start);
            for _ in 0..slides {
                state.next();
            }
            prop_assert_eq!(state.current(), start);
        }

        #[test]
        fn jumps_keep_one_dot_lit(
            slides in 1usize..12,
            targets in prop::collection::vec(0usize..12, 0..32),
        ) {
            let mut state = SliderState::new(slides);
            for target in targets {
                state.go_to(target % slides);
                prop_assert_eq!(active_dots(&state), vec![target % slides]);
            }
        }
    }
}
