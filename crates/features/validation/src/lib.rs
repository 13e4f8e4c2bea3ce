//! # Validation Rules
//!
//! Pure, side-effect free checks for every registration field plus the password
//! strength analyzer.
//!
//! ## Architecture
//!
//! 1.  **Rule Set ([`rules`]):** the static patterns, the punctuation set and the
//!     message attached to each `(field, reason)` pair.
//! 2.  **Validators ([`validator`]):** one predicate per field returning a
//!     [`ValidationResult`].
//! 3.  **Strength ([`strength`]):** weighted character-class score, its qualitative band
//!     and the three requirement indicators.
//!
//! ```rust
//! use regform_validation::validator::validate_password;
//!
//! assert!(validate_password("abc123!@").is_valid());
//! assert!(!validate_password("abc12345").is_valid());
//! ```

mod error;
pub mod rules;
pub mod strength;
pub mod validator;

pub use crate::error::{ValidationResult, Violation};
pub use crate::strength::{Requirements, StrengthLevel, StrengthReport};
pub use regform_domain::{FailureReason, FieldId};
