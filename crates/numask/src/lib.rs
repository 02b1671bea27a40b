//! numask - numeric input masking for text fields.
//!
//! This is the umbrella crate: it re-exports [`numask_core`] and adds the
//! pieces a host widget plugs into.
//!
//! - [`filter`]: the [`InputFilter`] capability and the integer/double [`NumericFilter`]
//! - [`gate`]: the `before_text_change` / `before_paste` hooks
//! - [`field`]: a field model with caret, selection and an injected filter
//! - [`config`]: per-field modes loaded from TOML
//!
//! # Example
//!
//! ```
//! use numask::{EditDecision, EditGate, FieldState, NumericFilter, PastePayload};
//!
//! let gate = EditGate::new(NumericFilter::integer());
//!
//! // "12" selected in "1234", the user pastes "x".
//! let field = FieldState::new("1234", 0, 2);
//! let decision = gate.before_paste(&field, &PastePayload::text("x"));
//! assert_eq!(decision, EditDecision::Reject);
//! ```

pub use numask_core::*;

pub mod config;
mod error;
pub mod field;
pub mod filter;
pub mod gate;

pub use config::{FieldConfig, MaskConfig};
pub use error::{Error, Result};
pub use field::MaskedField;
pub use filter::{InputFilter, InputMode, NumericFilter, ValidatorFilter};
pub use gate::{EditDecision, EditGate, FieldState, PastePayload};
