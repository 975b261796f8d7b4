//! # Pricer Models (L2: Pricing Kernel)
//!
//! Closed-form pricing of European vanilla options under Black-Scholes-Merton
//! assumptions.
//!
//! This crate provides:
//! - The pricing engine: fair value for a call or a put (`analytical`)
//! - Analytical Greeks for both option types in one pass (`analytical`)
//! - Greek and price profiles along a single input axis (`profile`)
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: `BlackScholes::new` rejects inputs for which
//!   the formulas are undefined, so every later computation is total
//! - **Shared intermediates**: d₁, d₂, φ(d₁) and Φ(±d) are computed once and
//!   feed both the call and the put record
//! - **Stateless**: every value is `Copy`, nothing is cached or mutated
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::OptionType;
//! use pricer_models::analytical::{compute_greeks, compute_price};
//!
//! let call = compute_price(100.0, 100.0, 1.0, 0.02, 0.25, OptionType::Call).unwrap();
//! let put = compute_price(100.0, 100.0, 1.0, 0.02, 0.25, OptionType::Put).unwrap();
//! let parity = 100.0 - 100.0 * (-0.02_f64).exp();
//! assert!((call - put - parity).abs() < 1e-9);
//!
//! let greeks = compute_greeks(100.0, 100.0, 1.0, 0.02, 0.25).unwrap();
//! assert_eq!(greeks.call.gamma, greeks.put.gamma);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod profile;
