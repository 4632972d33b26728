//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Clamping — value stays in [min, max] under any action sequence
//! 2. Saturation — stepping past a bound is a no-op
//! 3. Step correctness — one step moves by exactly `step` unless clamped
//! 4. Width stability — rendered width does not depend on value

use proptest::prelude::*;
use range_slider::tui::state::{Action, Slider};
use range_slider::tui::update::update;
use range_slider::tui::view::{handle_position, lines, rendered_size};

// ── Strategies (proptest) ────────────────────────────────────────────

/// A valid slider: min < max, step > 0, width > 0, value in range.
fn arb_slider() -> impl Strategy<Value = Slider> {
    (-1_000i64..1_000, 1i64..1_000, 1i64..50, 1u16..80, 0.0..=1.0_f64).prop_map(
        |(min, span, step, width, at)| {
            let max = min + span;
            Slider {
                min,
                max,
                step,
                width,
                value: min + (span as f64 * at) as i64,
                ..Slider::new()
            }
        },
    )
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Increment),
        Just(Action::Decrement),
        Just(Action::Confirm),
        Just(Action::Cancel),
    ]
}

// ── 1. Clamping ──────────────────────────────────────────────────────

proptest! {
    /// Any sequence of actions keeps value within bounds.
    #[test]
    fn value_stays_in_range(
        slider in arb_slider(),
        actions in prop::collection::vec(arb_action(), 0..200),
    ) {
        let mut s = slider;
        for action in &actions {
            s = update(s, action);
            prop_assert!(s.min <= s.value && s.value <= s.max);
            prop_assert!(handle_position(&s) <= s.width);
        }
    }
}

// ── 2. Saturation ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn increment_at_max_is_noop(slider in arb_slider(), times in 1usize..10) {
        let at_max = Slider { value: slider.max, ..slider };
        let s = (0..times).fold(at_max.clone(), |s, _| update(s, &Action::Increment));
        prop_assert_eq!(s, at_max);
    }

    #[test]
    fn decrement_at_min_is_noop(slider in arb_slider(), times in 1usize..10) {
        let at_min = Slider { value: slider.min, ..slider };
        let s = (0..times).fold(at_min.clone(), |s, _| update(s, &Action::Decrement));
        prop_assert_eq!(s, at_min);
    }
}

// ── 3. Step correctness ──────────────────────────────────────────────

proptest! {
    #[test]
    fn one_step_moves_by_step_or_clamps(slider in arb_slider()) {
        let v = slider.value;
        let up = update(slider.clone(), &Action::Increment);
        prop_assert_eq!(up.value, (v + slider.step).min(slider.max));

        let down = update(slider.clone(), &Action::Decrement);
        prop_assert_eq!(down.value, (v - slider.step).max(slider.min));
    }
}

// ── 4. Width stability ───────────────────────────────────────────────

proptest! {
    #[test]
    fn rendered_width_independent_of_value(
        slider in arb_slider(),
        hi_lo: bool,
        left: bool,
        right: bool,
    ) {
        let s = Slider {
            show_hi_lo: hi_lo,
            show_value_left: left,
            show_value_right: right,
            ..slider
        };
        let low = Slider { value: s.min, ..s.clone() };
        let high = Slider { value: s.max, ..s.clone() };

        let widths = |s: &Slider| lines(s).iter().map(|l| l.width()).collect::<Vec<_>>();
        prop_assert_eq!(widths(&low), widths(&s));
        prop_assert_eq!(widths(&high), widths(&s));
        prop_assert_eq!(rendered_size(&low), rendered_size(&high));
    }

    #[test]
    fn rendering_twice_is_identical(slider in arb_slider(), filling: bool) {
        let s = Slider { filling, show_hi_lo: true, ..slider };
        prop_assert_eq!(lines(&s), lines(&s));
    }
}
