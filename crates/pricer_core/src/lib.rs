//! # pricer_core: Foundation Types for the BSM Pricing Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option type: `OptionType` (`types::option`)
//! - Greek names: `Greek` (`types::greek`)
//! - Error types: `PricingError` (`types::error`)
//! - Evaluation grids: `linspace` (`math::grid`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates. Its only external dependency is optional:
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::grid::linspace;
//! use pricer_core::types::{Greek, OptionType};
//!
//! let option_type: OptionType = "put".parse().unwrap();
//! assert_eq!(option_type, OptionType::Put);
//! assert_eq!(option_type.intrinsic(90.0, 100.0), 10.0);
//!
//! let greek: Greek = "vega".parse().unwrap();
//! assert_eq!(greek.name(), "vega");
//!
//! let grid = linspace(0.05, 1.0, 20).unwrap();
//! assert_eq!(grid.len(), 20);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`, `Greek` and `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
