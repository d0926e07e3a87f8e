pub mod comparison;
pub mod parameters;

pub use comparison::ComparisonScreen;
pub use parameters::ParametersScreen;
