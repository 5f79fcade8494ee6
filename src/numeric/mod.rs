//! Numerical building blocks underneath the solver: nearest-neighbor search
//! over sorted sample timestamps, adaptive quadrature, and the integral-bound
//! root-finder built on top of it.

pub mod closest;
pub mod integral_bound;
pub mod quadrature;

pub use closest::closest_sorted_array_search;
pub use integral_bound::{find_integral_bound, NumericalOptions};
