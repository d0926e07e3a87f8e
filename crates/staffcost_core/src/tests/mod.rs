//! Tests for the comparison engine
//!
//! Organized by topic:
//! - `compare` - Engine arithmetic, totals and known-value scenarios
//! - `templates` - Industry presets and template application
//! - `properties` - Randomized invariants (proptest)

mod compare;
mod properties;
