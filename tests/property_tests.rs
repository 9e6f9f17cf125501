//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use reckon::builder::CalculatorBuilder;
use reckon::core::{evaluate, round_result, CalcError, Digit, EngineState, Operator};
use reckon::effects::Event;
use proptest::prelude::*;

fn type_text(state: EngineState, text: &str) -> EngineState {
    text.chars().fold(state, |s, c| {
        if c == '.' {
            s.input_decimal_point()
        } else {
            s.input_digit(Digit::try_from(c).unwrap())
        }
    })
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

prop_compose! {
    fn arbitrary_operand()(whole in -1_000_000i64..1_000_000, frac in 0u32..10_000) -> f64 {
        whole as f64 + f64::from(frac) / 10_000.0
    }
}

prop_compose! {
    fn small_operand()(whole in -300i64..300, frac in 0u32..10_000) -> f64 {
        whole as f64 + f64::from(frac) / 10_000.0
    }
}

proptest! {
    #[test]
    fn typed_operand_is_preserved(text in "[1-9][0-9]{0,5}(\\.[0-9]{1,5})?") {
        let state = type_text(EngineState::new(), &text);
        prop_assert_eq!(state.current_value(), text.as_str());
    }

    #[test]
    fn typed_operand_is_truncated_to_twelve_characters(text in "[1-9][0-9]{11,20}") {
        let state = type_text(EngineState::new(), &text);
        prop_assert_eq!(state.current_value(), &text[..12]);
    }

    #[test]
    fn division_by_zero_always_fails(a in arbitrary_operand()) {
        prop_assert_eq!(evaluate(a, 0.0, Operator::Divide), Err(CalcError::DivideByZero));
    }

    #[test]
    fn division_by_zero_never_mutates_state(text in "[1-9][0-9]{0,5}") {
        let state = type_text(EngineState::new(), &text)
            .input_operator(Operator::Divide)
            .unwrap();
        let state = type_text(state, "0");
        let before = state.clone();

        prop_assert_eq!(state.calculate_result(), Err(CalcError::DivideByZero));
        prop_assert_eq!(state.input_operator(Operator::Add), Err(CalcError::DivideByZero));
        prop_assert_eq!(state, before);
    }

    #[test]
    fn addition_is_commutative(a in arbitrary_operand(), b in arbitrary_operand()) {
        prop_assert_eq!(evaluate(a, b, Operator::Add), evaluate(b, a, Operator::Add));
    }

    #[test]
    fn multiplication_is_commutative(a in arbitrary_operand(), b in arbitrary_operand()) {
        prop_assert_eq!(
            evaluate(a, b, Operator::Multiply),
            evaluate(b, a, Operator::Multiply)
        );
    }

    #[test]
    fn rounding_is_idempotent(
        a in small_operand(),
        b in small_operand(),
        op in arbitrary_operator()
    ) {
        let a = round_result(a);
        let b = round_result(b);
        if let Ok(result) = evaluate(a, b, op) {
            prop_assert_eq!(round_result(result), result);
        }
    }

    #[test]
    fn evaluation_is_deterministic(
        a in arbitrary_operand(),
        b in arbitrary_operand(),
        op in arbitrary_operator()
    ) {
        prop_assert_eq!(evaluate(a, b, op), evaluate(a, b, op));
    }

    #[test]
    fn current_value_stays_valid(keys in prop::collection::vec(0..25u8, 0..60)) {
        let mut calc = CalculatorBuilder::new().build().unwrap();
        for key in keys {
            let event = match key {
                0..=9 => Event::Digit(Digit::new(key).unwrap()),
                10 => Event::DecimalPoint,
                11 => Event::Operator(Operator::Add),
                12 => Event::Operator(Operator::Subtract),
                13 => Event::Operator(Operator::Multiply),
                14 => Event::Operator(Operator::Divide),
                15 => Event::Equals,
                16 => Event::Backspace,
                17 => Event::Percentage,
                18 => Event::ClearEntry,
                19 => Event::MemoryAdd,
                20 => Event::MemorySubtract,
                21 => Event::MemoryRecall,
                22 => Event::RecallHistory(0),
                23 => Event::ClearAll,
                _ => Event::MemoryClear,
            };
            // Errors leave the state untouched; keep going.
            let _ = calc.dispatch(event);
            prop_assert!(calc.state().has_valid_operand(), "{:?}", calc.state());
        }
    }
}

#[test]
fn history_keeps_fifty_most_recent_of_fifty_one() {
    let mut calc = CalculatorBuilder::new().build().unwrap();

    for i in 1..=51u8 {
        let mut events: Vec<Event> = i
            .to_string()
            .chars()
            .map(|c| Event::Digit(Digit::try_from(c).unwrap()))
            .collect();
        events.push(Event::Operator(Operator::Add));
        events.push(Event::Digit(Digit::new(0).unwrap()));
        events.push(Event::Equals);
        calc.dispatch_all(events).unwrap();
    }

    let history = calc.history();
    assert_eq!(history.len(), 50);
    assert_eq!(history.entries()[0].expression, "51 + 0 = 51");
    assert_eq!(history.entries()[49].expression, "2 + 0 = 2");

    let results: Vec<f64> = history.entries().iter().map(|e| e.result).collect();
    let expected: Vec<f64> = (2..=51u8).rev().map(f64::from).collect();
    assert_eq!(results, expected);
}
