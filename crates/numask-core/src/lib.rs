//! Core of numask.
//!
//! This crate holds the toolkit-independent pieces of numeric input masking:
//!
//! - **Validation**: incremental integer and double validators that accept
//!   partially typed numbers such as `"-"` or `"."`
//! - **Prospective text**: splicing a pending edit into a field's text to get
//!   the string that would result, without mutating anything
//!
//! # Example
//!
//! ```
//! use numask_core::{build_prospective_text, is_valid_double};
//!
//! // The field holds "1.5" with the caret at the end; the user types ".".
//! let prospective = build_prospective_text("1.5", 3, 0, ".").unwrap();
//! assert_eq!(prospective, "1.5.");
//! assert!(!is_valid_double(&prospective));
//! ```

mod error;
pub mod logging;
pub mod prospective;
pub mod validator;

pub use error::{EditError, Result};
pub use prospective::{build_prospective_text, TextEdit};
pub use validator::{
    is_valid_double, is_valid_integer, DoubleValidator, IntegerValidator, ValidationState,
    Validator,
};

#[doc(hidden)]
pub use tracing as __tracing;
