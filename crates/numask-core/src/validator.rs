//! Incremental validation of numeric text input.
//!
//! A text field that only accepts numbers cannot use a strict number parser to
//! gate keystrokes: `"-"` and `"."` are not numbers, but they are the states a
//! user passes through while typing `"-.5"`. The validators in this module
//! accept every string that could still become a valid number.
//!
//! # Validation States
//!
//! - [`ValidationState::Invalid`]: no amount of further typing can fix the input
//! - [`ValidationState::Intermediate`]: incomplete but could become valid
//! - [`ValidationState::Acceptable`]: a complete value
//!
//! # Example
//!
//! ```
//! use numask_core::validator::{is_valid_double, is_valid_integer};
//!
//! assert!(is_valid_double("-."));
//! assert!(!is_valid_double("1..1"));
//! assert!(is_valid_integer("-5"));
//! assert!(!is_valid_integer("999999999999"));
//! ```

use std::fmt;
use std::sync::Arc;

/// The result of validating input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationState {
    /// The input cannot be made valid by further editing.
    Invalid,
    /// The input is incomplete but could become valid with more input.
    Intermediate,
    /// The input is a complete value.
    Acceptable,
}

impl ValidationState {
    /// Returns `true` unless the state is [`ValidationState::Invalid`].
    pub fn is_valid(self) -> bool {
        !matches!(self, ValidationState::Invalid)
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationState::Invalid => write!(f, "Invalid"),
            ValidationState::Intermediate => write!(f, "Intermediate"),
            ValidationState::Acceptable => write!(f, "Acceptable"),
        }
    }
}

/// Trait for input validators.
///
/// Validators must be `Send + Sync` so one instance can be shared between
/// several fields.
pub trait Validator: Send + Sync {
    /// Validate the whole prospective text of a field.
    fn validate(&self, input: &str) -> ValidationState;

    /// Returns `true` if the input is acceptable or could still become so.
    fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_valid()
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }
}

/// Validator for signed 32-bit integer input.
///
/// The empty string is intermediate (the user cleared the field). Anything else
/// must parse as an `i32`: optional leading sign, ASCII digits, no whitespace.
/// A lone sign does not parse and is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerValidator;

impl IntegerValidator {
    /// Create a new integer validator.
    pub fn new() -> Self {
        Self
    }
}

impl Validator for IntegerValidator {
    fn validate(&self, input: &str) -> ValidationState {
        if input.is_empty() {
            return ValidationState::Intermediate;
        }

        match input.parse::<i32>() {
            Ok(_) => ValidationState::Acceptable,
            Err(err) => {
                crate::numask_trace!(input, %err, "rejected integer input");
                ValidationState::Invalid
            }
        }
    }
}

/// Validator for decimal input that is still being typed.
///
/// Accepts an optional leading `+` or `-`, then ASCII digits with at most one
/// `.` anywhere among them. The decimal separator is always `.`, whatever the
/// host locale. Leading zeros are kept as typed.
///
/// Inputs without a digit, or ending in `.`, are intermediate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleValidator;

impl DoubleValidator {
    /// Create a new double validator.
    pub fn new() -> Self {
        Self
    }
}

impl Validator for DoubleValidator {
    fn validate(&self, input: &str) -> ValidationState {
        if input.is_empty() {
            return ValidationState::Intermediate;
        }

        let mut has_dot = false;
        let mut has_digit = false;
        for (i, c) in input.chars().enumerate() {
            match c {
                '0'..='9' => has_digit = true,
                '.' if !has_dot => has_dot = true,
                '+' | '-' if i == 0 => {}
                _ => {
                    crate::numask_trace!(input, position = i, "rejected double input");
                    return ValidationState::Invalid;
                }
            }
        }

        if has_digit && !input.ends_with('.') {
            ValidationState::Acceptable
        } else {
            ValidationState::Intermediate
        }
    }
}

/// Returns `true` if `input` is empty or a valid `i32`.
pub fn is_valid_integer(input: &str) -> bool {
    IntegerValidator.is_valid(input)
}

/// Returns `true` if `input` is empty or could still become a valid decimal.
pub fn is_valid_double(input: &str) -> bool {
    DoubleValidator.is_valid(input)
}

static_assertions::assert_impl_all!(IntegerValidator: Send, Sync);
static_assertions::assert_impl_all!(DoubleValidator: Send, Sync);
