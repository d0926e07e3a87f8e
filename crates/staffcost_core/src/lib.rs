//! Hire-vs-raise cost comparison library
//!
//! This crate computes the incremental cost of replacing an employee and
//! compares it against the cost of giving the incumbent a raise. It
//! provides:
//! - A strongly-typed parameter set with documented defaults
//! - Industry templates (Tech, Healthcare, Retail, Finance) applied as
//!   pure bulk overwrites
//! - A pure, deterministic comparison engine producing itemized category
//!   breakdowns and two directly comparable totals
//!
//! The engine is stateless: it reads an immutable parameter snapshot on
//! every call and recomputes the full result.

#![warn(clippy::all)]

pub mod compare;
pub mod error;
pub mod model;

#[cfg(test)]
mod tests;

pub use compare::compare;
pub use error::ParseIndustryError;
pub use model::{
    CategoryBreakdown, CostComparison, Industry, LineItem, Parameters, Recommendation,
    SalaryBreakdown, TemplateOverrides, apply_template,
};
