//! Data model for the cost comparison: inputs, presets and outputs

pub mod params;
pub mod results;
pub mod templates;

pub use params::Parameters;
pub use results::{CategoryBreakdown, CostComparison, LineItem, Recommendation, SalaryBreakdown};
pub use templates::{Industry, TemplateOverrides, apply_template};
