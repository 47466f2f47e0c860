//! Builder API for calculator sessions.
//!
//! Provides a fluent builder that collects limits, an optional starting state
//! and an optional seeded history, validating them before a
//! [`Calculator`](crate::session::Calculator) is created.

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
