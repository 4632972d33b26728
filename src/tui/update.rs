//! Pure state transitions.
//!
//! `update` is the slider itself: (Slider, Action) → Slider, with the
//! value saturating at both bounds. `handle` sits one level up for the
//! picker, turning Confirm/Cancel into a finished session.

use tracing::{debug, trace};

use crate::types::Outcome;

use super::state::{Action, Slider, Transition};

/// Apply one action to the slider.
///
/// Increment and decrement move `value` by `step`, clamped to
/// `[min, max]`. Every other action returns the slider unchanged.
pub fn update(slider: Slider, action: &Action) -> Slider {
    let value = match action {
        Action::Increment => slider.value.saturating_add(slider.step).min(slider.max),
        Action::Decrement => slider.value.saturating_sub(slider.step).max(slider.min),
        _ => return slider,
    };

    if value == slider.value {
        debug!(value, ?action, "slider at bound, step ignored");
    } else {
        trace!(from = slider.value, to = value, ?action, "slider moved");
    }

    Slider { value, ..slider }
}

/// Picker-level transition: steps go through `update`, Confirm and
/// Cancel end the session.
pub fn handle(slider: Slider, action: &Action) -> Transition {
    match action {
        Action::Confirm => Transition::Finish(Outcome::Picked(slider.value)),
        Action::Cancel => Transition::Finish(Outcome::Cancelled),
        Action::Increment | Action::Decrement => Transition::Slider(update(slider, action)),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: i64) -> Slider {
        Slider { value, ..Slider::new() }
    }

    #[test]
    fn three_increments_from_stock_reach_three() {
        let s = (0..3).fold(Slider::new(), |s, _| update(s, &Action::Increment));
        assert_eq!(s.value, 3);
    }

    #[test]
    fn increment_saturates_at_max() {
        let s = update(at(10), &Action::Increment);
        assert_eq!(s.value, 10);
        let s = update(s, &Action::Increment);
        assert_eq!(s.value, 10);
    }

    #[test]
    fn decrement_saturates_at_min() {
        let s = update(at(0), &Action::Decrement);
        assert_eq!(s.value, 0);
    }

    #[test]
    fn step_larger_than_remaining_clamps() {
        let s = Slider { step: 4, value: 8, ..Slider::new() };
        assert_eq!(update(s.clone(), &Action::Increment).value, 10);

        let s = Slider { value: 3, ..s };
        assert_eq!(update(s, &Action::Decrement).value, 0);
    }

    #[test]
    fn negative_range_steps_correctly() {
        let s = Slider { min: -50, max: -10, step: 15, value: -20, ..Slider::new() };
        assert_eq!(update(s.clone(), &Action::Increment).value, -10);
        assert_eq!(update(s, &Action::Decrement).value, -35);
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let s = Slider { min: i64::MIN, max: i64::MAX, step: i64::MAX, value: i64::MAX - 1, ..Slider::new() };
        assert_eq!(update(s.clone(), &Action::Increment).value, i64::MAX);

        let s = Slider { value: i64::MIN + 1, ..s };
        assert_eq!(update(s, &Action::Decrement).value, i64::MIN);
    }

    #[test]
    fn non_step_actions_leave_slider_untouched() {
        let s = at(5);
        assert_eq!(update(s.clone(), &Action::Confirm), s);
        assert_eq!(update(s.clone(), &Action::Cancel), s);
    }

    #[test]
    fn update_only_touches_value() {
        let s = Slider { width: 12, filling: true, ..at(5) };
        let next = update(s.clone(), &Action::Increment);
        assert_eq!(next, Slider { value: 6, ..s });
    }

    #[test]
    fn handle_confirm_picks_current_value() {
        assert_eq!(
            handle(at(7), &Action::Confirm),
            Transition::Finish(Outcome::Picked(7))
        );
    }

    #[test]
    fn handle_cancel_finishes_without_value() {
        assert_eq!(
            handle(at(7), &Action::Cancel),
            Transition::Finish(Outcome::Cancelled)
        );
    }

    #[test]
    fn handle_steps_delegate_to_update() {
        assert_eq!(
            handle(at(7), &Action::Decrement),
            Transition::Slider(at(6))
        );
    }
}
