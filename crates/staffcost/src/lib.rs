//! Terminal front end for the hire-vs-raise cost comparison
//!
//! Renders an editable parameter form and a live comparison view on top
//! of the pure engine in `staffcost_core`. The engine result is
//! recomputed from the current parameters on every draw; nothing is
//! cached between edits.

pub mod app;
pub mod components;
pub mod fields;
pub mod logging;
pub mod report;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
