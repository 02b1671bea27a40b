//! Input filters: the capability a text field consults before applying an edit.
//!
//! A filter sees the whole prospective text of the field (see
//! [`numask_core::prospective`]) and answers whether the edit may go through.
//! Filters are injected into [`EditGate`](crate::gate::EditGate) and
//! [`MaskedField`](crate::field::MaskedField) at construction time.
//!
//! # Example
//!
//! ```
//! use numask::filter::{InputFilter, NumericFilter};
//!
//! let filter = NumericFilter::double();
//! assert!(filter.should_accept("-."));
//! assert!(!filter.should_accept("1-"));
//! ```

use std::fmt;
use std::sync::Arc;

use numask_core::{is_valid_double, is_valid_integer, Validator};
use serde::{Deserialize, Serialize};

/// Which kind of number a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Signed 32-bit integers only.
    Integer,
    /// Signed decimals with `.` as the separator.
    #[default]
    Double,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Integer => write!(f, "integer"),
            InputMode::Double => write!(f, "double"),
        }
    }
}

/// Decides whether a field may take on a prospective text.
pub trait InputFilter: Send + Sync {
    /// Returns `true` if the field may contain `prospective` after the edit.
    fn should_accept(&self, prospective: &str) -> bool;
}

impl<F: InputFilter + ?Sized> InputFilter for Arc<F> {
    fn should_accept(&self, prospective: &str) -> bool {
        (**self).should_accept(prospective)
    }
}

impl<F: InputFilter + ?Sized> InputFilter for Box<F> {
    fn should_accept(&self, prospective: &str) -> bool {
        (**self).should_accept(prospective)
    }
}

impl<F: InputFilter + ?Sized> InputFilter for &F {
    fn should_accept(&self, prospective: &str) -> bool {
        (**self).should_accept(prospective)
    }
}

/// Filter restricting a field to integer or double-like text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericFilter {
    mode: InputMode,
}

impl NumericFilter {
    /// Create a filter for the given mode.
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    /// Filter accepting integers.
    pub fn integer() -> Self {
        Self::new(InputMode::Integer)
    }

    /// Filter accepting doubles.
    pub fn double() -> Self {
        Self::new(InputMode::Double)
    }

    /// Get the mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Set the mode.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }
}

impl InputFilter for NumericFilter {
    fn should_accept(&self, prospective: &str) -> bool {
        match self.mode {
            InputMode::Integer => is_valid_integer(prospective),
            InputMode::Double => is_valid_double(prospective),
        }
    }
}

/// Adapts any [`Validator`] into an [`InputFilter`].
///
/// Intermediate input is accepted so the user can keep typing.
#[derive(Debug, Clone, Default)]
pub struct ValidatorFilter<V> {
    validator: V,
}

impl<V: Validator> ValidatorFilter<V> {
    /// Wrap a validator.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Get the wrapped validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<V: Validator> InputFilter for ValidatorFilter<V> {
    fn should_accept(&self, prospective: &str) -> bool {
        self.validator.is_valid(prospective)
    }
}

static_assertions::assert_impl_all!(NumericFilter: Send, Sync);
