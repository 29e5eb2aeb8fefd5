//! deskcalc-core — sequential arithmetic evaluator for the deskcalc app.
//!
//! Owns the accumulator / pending-operator / display-text state machine.
//! The presentation layer forwards discrete button events (`on_digit`,
//! `on_operator`, `on_clear`, `on_negate`, `on_backspace`) and reads back
//! [`Evaluator::current_display_text`] after each one. No UI types leak in
//! here; the crate has no knowledge of windows, buttons, or repaints.

pub mod evaluator;
pub mod format;

pub use evaluator::{EvalError, Evaluator, Operator};
pub use format::{format_result, ERROR_TEXT};
