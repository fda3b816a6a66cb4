//! Edge case tests for the calculator engine.
//!
//! Scripts are replayed through the library the same way the CLI does it.

use keypad_calc::{
    CalculatorEngine, DecimalPointPolicy, EngineConfig, ErrorDisplay, KeyEvent, OperatorKind,
    PendingCalculation, ScriptRunner,
};
use std::io::Cursor;

fn run_keys_with(config: EngineConfig, keys: &[&str]) -> ScriptRunner {
    let mut csv = String::from("key\n");
    for key in keys {
        csv.push_str(key);
        csv.push('\n');
    }

    let mut runner = ScriptRunner::new(config);
    runner.process_csv(Cursor::new(csv)).unwrap();
    runner
}

fn display_after(keys: &[&str]) -> String {
    run_keys_with(EngineConfig::default(), keys)
        .engine()
        .display_text()
        .to_string()
}

// ==================== INPUT ECHO ====================

#[test]
fn test_typed_decimal_is_echoed_verbatim() {
    for input in ["0", "7", "42", "3.14", "0.001", "100.", "000123"] {
        let keys: Vec<String> = input.chars().map(|c| c.to_string()).collect();
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
        assert_eq!(display_after(&keys), input);
    }
}

#[test]
fn test_duplicate_decimal_point_ignored() {
    assert_eq!(display_after(&["3", ".", "."]), "3.");
    assert_eq!(display_after(&["3", ".", "1", ".", "4"]), "3.14");
}

#[test]
fn test_empty_engine_displays_blank() {
    assert_eq!(CalculatorEngine::new().display_text(), "");
}

// ==================== EVALUATION ====================

#[test]
fn test_each_operator() {
    assert_eq!(display_after(&["6", "x", "7", "="]), "42");
    assert_eq!(display_after(&["7", ":", "2", "="]), "3.5");
    assert_eq!(display_after(&["5", "+", "3", "="]), "8");
    assert_eq!(display_after(&["3", "-", "5", "="]), "-2");
}

#[test]
fn test_chained_operators_evaluate_left_to_right() {
    assert_eq!(display_after(&["5", "+", "3", "+", "2", "="]), "10");
    // No precedence: 2 + 3 × 4 is (2 + 3) × 4
    assert_eq!(display_after(&["2", "+", "3", "x", "4", "="]), "20");
}

#[test]
fn test_chain_shows_intermediate_result() {
    assert_eq!(display_after(&["5", "+", "3", "+"]), "8");
    assert_eq!(display_after(&["5", "+", "3", "+", "2"]), "2");
}

#[test]
fn test_division_by_zero_is_infinite() {
    assert_eq!(display_after(&["1", "/", "0", "="]), "inf");
    assert_eq!(display_after(&["0", "/", "0", "="]), "NaN");
}

#[test]
fn test_negative_infinity_from_subtraction_chain() {
    // 0 - 1 = -1 at the chained ÷, then -1 ÷ 0
    assert_eq!(display_after(&["0", "-", "1", "/", "0", "="]), "-inf");
}

#[test]
fn test_float_result_uses_shortest_representation() {
    assert_eq!(display_after(&[".", "1", "+", ".", "2", "="]), "0.30000000000000004");
    assert_eq!(display_after(&["2", ".", "5", "x", "4", "="]), "10");
}

#[test]
fn test_chain_driven_by_key_events() {
    let mut engine = CalculatorEngine::new();
    engine.apply(KeyEvent::Digit('9'));
    engine.apply(KeyEvent::Operator(OperatorKind::Addition));
    engine.apply(KeyEvent::Digit('3'));
    engine.apply(KeyEvent::Operator(OperatorKind::Subtraction));
    engine.apply(KeyEvent::Digit('2'));
    let snapshot = engine.apply(KeyEvent::Equals);
    assert_eq!(snapshot.display, "10");
}

// ==================== EQUALS EDGE CASES ====================

#[test]
fn test_equals_on_empty_buffer_is_noop() {
    assert_eq!(display_after(&["="]), "");
    assert_eq!(display_after(&["5", "+", "3", "=", "="]), "8");
    assert_eq!(display_after(&["5", "+", "="]), "");
}

#[test]
fn test_equals_without_operator_commits_operand() {
    let runner = run_keys_with(EngineConfig::default(), &["5", "="]);
    let engine = runner.engine();
    assert_eq!(engine.display_text(), "5");
    assert_eq!(*engine.pending(), PendingCalculation::First(5.0));
}

#[test]
fn test_operand_committed_twice_without_operator() {
    // 5 = commits operand1; typing on extends the same buffer, and the next
    // = fills operand2. The operator then completes the record, and the
    // following = overwrites operand2 before evaluating.
    let runner = run_keys_with(
        EngineConfig::default(),
        &["5", "=", "3", "=", "+", "2", "="],
    );
    assert_eq!(runner.engine().display_text(), "7");
}

#[test]
fn test_lone_decimal_point_never_commits() {
    let runner = run_keys_with(EngineConfig::default(), &["5", "+", ".", "="]);
    let engine = runner.engine();
    assert_eq!(engine.display_text(), ".");
    assert_eq!(
        *engine.pending(),
        PendingCalculation::FirstOp(5.0, OperatorKind::Addition)
    );
}

#[test]
fn test_failed_operator_does_not_replace_pending_operator() {
    let runner = run_keys_with(
        EngineConfig::default(),
        &["5", "+", ".", "x", "=", "5", "="],
    );
    // The rejected × and = leave "." in the buffer, so this is 5 + 0.5
    assert_eq!(runner.engine().display_text(), "5.5");
}

// ==================== CLEAR EDGE CASES ====================

#[test]
fn test_clear_after_result_is_full_reset() {
    assert_eq!(display_after(&["5", "+", "3", "=", "Delete", "7"]), "7");
    assert_eq!(display_after(&["5", "+", "3", "=", "Delete", "7", "="]), "7");
}

#[test]
fn test_clear_after_chained_result_drops_pending() {
    let runner = run_keys_with(
        EngineConfig::default(),
        &["5", "+", "3", "+", "Delete"],
    );
    assert_eq!(*runner.engine().pending(), PendingCalculation::Empty);
}

#[test]
fn test_backspace_removes_last_character() {
    assert_eq!(display_after(&["4", "2", "Delete"]), "4");
    assert_eq!(display_after(&["4", "2", "Delete", "Delete"]), "");
    assert_eq!(display_after(&["4", "2", "Delete", "Delete", "Delete"]), "");
    assert_eq!(display_after(&["1", ".", "Delete", "."]), "1.");
}

#[test]
fn test_backspace_keeps_pending_calculation() {
    assert_eq!(display_after(&["8", "-", "3", "5", "Delete", "="]), "5");
}

// ==================== OPERATOR EDGE CASES ====================

#[test]
fn test_operator_with_nothing_typed_is_ignored() {
    let runner = run_keys_with(EngineConfig::default(), &["+", "x", "5"]);
    let engine = runner.engine();
    assert_eq!(engine.display_text(), "5");
    assert_eq!(*engine.pending(), PendingCalculation::Empty);
}

#[test]
fn test_operator_after_result_is_rejected() {
    // The shown result is not an operand; only typed input commits.
    let runner = run_keys_with(
        EngineConfig::default(),
        &["5", "+", "3", "=", "+", "2", "="],
    );
    let engine = runner.engine();
    assert_eq!(engine.display_text(), "2");
    assert_eq!(*engine.pending(), PendingCalculation::First(2.0));
}

// ==================== CONFIGURATION ====================

#[test]
fn test_leading_decimal_point_allowed_by_default() {
    assert_eq!(display_after(&[".", "5"]), ".5");
    assert_eq!(display_after(&["5", "+", "3", "=", "."]), ".");
}

#[test]
fn test_leading_decimal_point_rejected_when_required() {
    let config = EngineConfig::new(
        DecimalPointPolicy::RequireLeadingDigit,
        ErrorDisplay::Silent,
    );

    let runner = run_keys_with(config, &[".", "5", ".", "5"]);
    assert_eq!(runner.engine().display_text(), "5.5");

    // A rejected point does not clear the shown result
    let runner = run_keys_with(config, &["5", "+", "3", "=", "."]);
    assert_eq!(runner.engine().display_text(), "8");
}

#[test]
fn test_show_errors_surfaces_failed_commit() {
    let config = EngineConfig::new(DecimalPointPolicy::AllowLeading, ErrorDisplay::Show);

    let runner = run_keys_with(config, &["5", "+", ".", "="]);
    assert_eq!(runner.engine().display_text(), "Error");

    let runner = run_keys_with(config, &["5", "+", "3", "=", "x"]);
    assert_eq!(runner.engine().display_text(), "Error");

    // The rejected buffer survives behind the error text
    let runner = run_keys_with(config, &["5", "+", ".", "=", "4"]);
    assert_eq!(runner.engine().display_text(), ".4");
}

// ==================== SNAPSHOTS ====================

#[test]
fn test_snapshot_reflects_pending_state() {
    let mut engine = CalculatorEngine::new();
    engine.apply(KeyEvent::Digit('1'));
    engine.apply(KeyEvent::Digit('2'));
    let snapshot = engine.apply(KeyEvent::Operator(OperatorKind::Division));

    assert_eq!(snapshot.display, "");
    assert_eq!(snapshot.buffer, "");
    assert!(!snapshot.result_shown);
    assert_eq!(snapshot.operand1, Some(12.0));
    assert_eq!(snapshot.operand2, None);
    assert_eq!(snapshot.operator, Some(OperatorKind::Division));
}

#[test]
fn test_snapshot_is_detached_from_engine() {
    let mut engine = CalculatorEngine::new();
    let before = engine.apply(KeyEvent::Digit('3'));
    engine.apply(KeyEvent::Digit('4'));
    assert_eq!(before.display, "3");
    assert_eq!(engine.display_text(), "34");
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CalculatorEngine>();
}
