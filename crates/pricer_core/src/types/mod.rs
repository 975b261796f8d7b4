//! Core option and error types.
//!
//! This module provides:
//! - `option`: The option type (call or put) with payoff helpers
//! - `greek`: Names of the first- and second-order sensitivities
//! - `error`: Structured error types shared by the pricing crates
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option`
//! - [`Greek`] from `greek`
//! - [`PricingError`] from `error`

pub mod error;
pub mod greek;
pub mod option;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use greek::Greek;
pub use option::OptionType;
