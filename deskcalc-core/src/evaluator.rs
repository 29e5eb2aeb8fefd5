//! The input/evaluation state machine.
//!
//! The evaluator is strictly sequential: no operator precedence, no
//! expression tree. Each operator keystroke commits the pending operator
//! against the accumulator and the number currently on the display, then
//! remembers the new operator for the next commit. `Equals` doubles as the
//! initial "replace" state, so the first commit simply adopts the entered
//! number as the accumulator.
//!
//! Zero-divisor errors surface as the `"Error"` display text and never
//! abort the session; the next clear or digit entry recovers.

use thiserror::Error;

use crate::format::{format_result, ERROR_TEXT};

/// The six calculator operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Equals,
}

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("division by zero")]
    DivideByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("display is not a number: {0:?}")]
    Parse(String),
}

/// Apply `op` to the accumulator `a` and the entered operand `x`.
fn apply(op: Operator, a: f64, x: f64) -> Result<f64, EvalError> {
    match op {
        Operator::Add => Ok(a + x),
        Operator::Sub => Ok(a - x),
        Operator::Mul => Ok(a * x),
        Operator::Div => {
            if x == 0.0 {
                Err(EvalError::DivideByZero)
            } else {
                Ok(a / x)
            }
        }
        Operator::Mod => {
            if x == 0.0 {
                Err(EvalError::ModuloByZero)
            } else {
                Ok(a % x)
            }
        }
        Operator::Equals => Ok(x),
    }
}

/// Sequential evaluator driving the calculator display.
pub struct Evaluator {
    /// Last committed result.
    accumulator: f64,
    /// Operator awaiting application on the next commit.
    pending: Operator,
    /// Current textual content of the display. Never empty.
    display: String,
    /// True when the next digit starts a new number instead of appending.
    fresh_entry: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            pending: Operator::Equals,
            display: "0".to_string(),
            fresh_entry: true,
        }
    }

    /// The string the presentation layer should show right now.
    pub fn current_display_text(&self) -> &str {
        &self.display
    }

    /// A digit key, `'0'..='9'` or `'.'`.
    ///
    /// Note there is no guard against a second decimal point; a display
    /// like `"1..5"` can be built and later fails to parse, at which point
    /// the operator/negate keystroke is dropped (see [`Self::on_operator`]).
    pub fn on_digit(&mut self, d: char) {
        if self.fresh_entry {
            self.display = d.to_string();
            self.fresh_entry = false;
        } else {
            self.display.push(d);
        }
    }

    /// The clear key: back to the initial state.
    pub fn on_clear(&mut self) {
        self.accumulator = 0.0;
        self.pending = Operator::Equals;
        self.display = "0".to_string();
        self.fresh_entry = true;
    }

    /// The sign-toggle key. Leaves the accumulator, the pending operator,
    /// and the fresh-entry flag alone; only the displayed number flips.
    pub fn on_negate(&mut self) {
        if let Ok(value) = self.parse_display() {
            self.display = format_result(-value);
        }
    }

    /// The backspace key: drop the last display character. An emptied
    /// display resets to `"0"` and the next digit starts a new number.
    pub fn on_backspace(&mut self) {
        if !self.display.is_empty() {
            self.display.pop();
            if self.display.is_empty() {
                self.display = "0".to_string();
                self.fresh_entry = true;
            }
        }
    }

    /// An operator key, including equals.
    ///
    /// With no number entered since the last commit (`fresh_entry`), the
    /// keystroke is a no-op: pressing an operator twice in a row, or right
    /// after equals/clear, changes nothing. Otherwise the pending operator
    /// is committed and `op` becomes the new pending operator.
    ///
    /// On a zero divisor the display shows `"Error"` and entry restarts,
    /// but the accumulator and pending operator keep their previous
    /// values, so the next committed number continues from there.
    pub fn on_operator(&mut self, op: Operator) {
        if self.fresh_entry {
            return;
        }
        let x = match self.parse_display() {
            Ok(x) => x,
            // malformed display (unguarded '.' entry): drop the keystroke
            Err(_) => return,
        };
        match apply(self.pending, self.accumulator, x) {
            Ok(result) => {
                self.accumulator = result;
                self.display = format_result(result);
                self.pending = op;
            }
            Err(_) => {
                self.display = ERROR_TEXT.to_string();
            }
        }
        self.fresh_entry = true;
    }

    fn parse_display(&self) -> Result<f64, EvalError> {
        self.display
            .parse()
            .map_err(|_| EvalError::Parse(self.display.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_digits(ev: &mut Evaluator, digits: &str) {
        for d in digits.chars() {
            ev.on_digit(d);
        }
    }

    #[test]
    fn test_initial_display_is_zero() {
        let ev = Evaluator::new();
        assert_eq!(ev.current_display_text(), "0");
    }

    #[test]
    fn test_digit_concatenation() {
        let mut ev = Evaluator::new();
        press_digits(&mut ev, "123");
        assert_eq!(ev.current_display_text(), "123");
    }

    #[test]
    fn test_first_digit_replaces_initial_zero() {
        let mut ev = Evaluator::new();
        ev.on_digit('7');
        assert_eq!(ev.current_display_text(), "7");
    }

    #[test]
    fn test_decimal_entry() {
        let mut ev = Evaluator::new();
        press_digits(&mut ev, "3.14");
        assert_eq!(ev.current_display_text(), "3.14");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut ev = Evaluator::new();
        press_digits(&mut ev, "42");
        ev.on_operator(Operator::Add);
        press_digits(&mut ev, "8");
        ev.on_clear();
        assert_eq!(ev.current_display_text(), "0");
        // pending was reset to the replace state: 5 = gives 5, not 42+8+5
        ev.on_digit('5');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "5");
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        let mut ev = Evaluator::new();
        ev.on_digit('5');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "5");
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "5");
    }

    #[test]
    fn test_consecutive_operators_are_noops() {
        let mut ev = Evaluator::new();
        ev.on_digit('4');
        ev.on_operator(Operator::Add);
        // second press: nothing entered yet, nothing happens
        ev.on_operator(Operator::Add);
        ev.on_digit('2');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "6");
    }

    #[test]
    fn test_sequential_evaluation_without_precedence() {
        // 2 + 3 * 4 = evaluates left to right: (2+3)*4
        let mut ev = Evaluator::new();
        ev.on_digit('2');
        ev.on_operator(Operator::Add);
        ev.on_digit('3');
        ev.on_operator(Operator::Mul);
        assert_eq!(ev.current_display_text(), "5");
        ev.on_digit('4');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "20");
    }

    #[test]
    fn test_integral_division_has_no_trailing_point() {
        let mut ev = Evaluator::new();
        ev.on_digit('6');
        ev.on_operator(Operator::Div);
        ev.on_digit('3');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "2");
    }

    #[test]
    fn test_subtraction_below_zero() {
        let mut ev = Evaluator::new();
        ev.on_digit('9');
        ev.on_operator(Operator::Sub);
        press_digits(&mut ev, "14");
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "-5");
    }

    #[test]
    fn test_modulo() {
        let mut ev = Evaluator::new();
        ev.on_digit('7');
        ev.on_operator(Operator::Mod);
        ev.on_digit('3');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "1");
    }

    #[test]
    fn test_divide_by_zero_shows_error() {
        let mut ev = Evaluator::new();
        ev.on_digit('5');
        ev.on_operator(Operator::Div);
        ev.on_digit('0');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "Error");
    }

    #[test]
    fn test_modulo_by_zero_shows_error() {
        let mut ev = Evaluator::new();
        ev.on_digit('5');
        ev.on_operator(Operator::Mod);
        ev.on_digit('0');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "Error");
    }

    #[test]
    fn test_error_keeps_accumulator_and_pending() {
        // 5 / 0 = errors, but the accumulator (5) and the pending divide
        // survive, so a fresh entry continues the interrupted division.
        let mut ev = Evaluator::new();
        ev.on_digit('5');
        ev.on_operator(Operator::Div);
        ev.on_digit('0');
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "Error");
        ev.on_digit('8');
        assert_eq!(ev.current_display_text(), "8");
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "0.625");
    }

    #[test]
    fn test_error_recovers_via_clear() {
        let mut ev = Evaluator::new();
        ev.on_digit('1');
        ev.on_operator(Operator::Div);
        ev.on_digit('0');
        ev.on_operator(Operator::Equals);
        ev.on_clear();
        assert_eq!(ev.current_display_text(), "0");
    }

    #[test]
    fn test_negate_round_trip() {
        let mut ev = Evaluator::new();
        press_digits(&mut ev, "12.5");
        ev.on_negate();
        assert_eq!(ev.current_display_text(), "-12.5");
        ev.on_negate();
        assert_eq!(ev.current_display_text(), "12.5");
    }

    #[test]
    fn test_negate_keeps_entry_state() {
        // negating a committed result must not count as a new entry
        let mut ev = Evaluator::new();
        ev.on_digit('5');
        ev.on_operator(Operator::Add);
        ev.on_negate();
        assert_eq!(ev.current_display_text(), "-5");
        ev.on_digit('3');
        assert_eq!(ev.current_display_text(), "3");
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "8");
    }

    #[test]
    fn test_negate_on_error_is_noop() {
        let mut ev = Evaluator::new();
        ev.on_digit('1');
        ev.on_operator(Operator::Div);
        ev.on_digit('0');
        ev.on_operator(Operator::Equals);
        ev.on_negate();
        assert_eq!(ev.current_display_text(), "Error");
    }

    #[test]
    fn test_backspace_drops_last_digit() {
        let mut ev = Evaluator::new();
        press_digits(&mut ev, "123");
        ev.on_backspace();
        assert_eq!(ev.current_display_text(), "12");
    }

    #[test]
    fn test_backspace_to_empty_resets_entry() {
        let mut ev = Evaluator::new();
        ev.on_digit('7');
        ev.on_backspace();
        assert_eq!(ev.current_display_text(), "0");
        // next digit starts fresh, it does not append to the "0"
        ev.on_digit('5');
        assert_eq!(ev.current_display_text(), "5");
    }

    #[test]
    fn test_backspace_keeps_pending_operator() {
        let mut ev = Evaluator::new();
        ev.on_digit('9');
        ev.on_operator(Operator::Sub);
        press_digits(&mut ev, "41");
        ev.on_backspace();
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "5");
    }

    #[test]
    fn test_double_decimal_point_drops_operator_keystroke() {
        // digit entry does not guard against a second '.', so the display
        // can stop being a number; the operator press is then ignored
        let mut ev = Evaluator::new();
        press_digits(&mut ev, "1..5");
        assert_eq!(ev.current_display_text(), "1..5");
        ev.on_operator(Operator::Add);
        assert_eq!(ev.current_display_text(), "1..5");
        ev.on_clear();
        assert_eq!(ev.current_display_text(), "0");
    }

    #[test]
    fn test_operator_right_after_clear_is_noop() {
        let mut ev = Evaluator::new();
        ev.on_operator(Operator::Add);
        assert_eq!(ev.current_display_text(), "0");
        ev.on_operator(Operator::Equals);
        assert_eq!(ev.current_display_text(), "0");
    }

    #[test]
    fn test_apply_table() {
        assert_eq!(apply(Operator::Add, 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(apply(Operator::Sub, 2.0, 3.0).unwrap(), -1.0);
        assert_eq!(apply(Operator::Mul, 2.0, 3.0).unwrap(), 6.0);
        assert_eq!(apply(Operator::Div, 3.0, 2.0).unwrap(), 1.5);
        assert_eq!(apply(Operator::Mod, 7.0, 3.0).unwrap(), 1.0);
        assert_eq!(apply(Operator::Equals, 2.0, 3.0).unwrap(), 3.0);
        assert!(matches!(
            apply(Operator::Div, 1.0, 0.0),
            Err(EvalError::DivideByZero)
        ));
        assert!(matches!(
            apply(Operator::Mod, 1.0, 0.0),
            Err(EvalError::ModuloByZero)
        ));
    }
}
