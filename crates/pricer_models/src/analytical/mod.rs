//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Plain `f64`**: callers supply scalars and receive scalars
//! - **Explicit domain errors**: non-positive inputs never reach `ln`/`sqrt`
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in the tails

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{compute_greeks, compute_price, BlackScholes, DTerms};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{Greeks, GreeksPair};
