//! Numerical helpers shared across the workspace.
//!
//! - `grid`: Evenly spaced evaluation grids

pub mod grid;

pub use grid::linspace;
