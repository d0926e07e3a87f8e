//! Application state
//!
//! Owns the parameter set (the single mutable store the form edits) and
//! the transient UI state. The engine never sees this struct; it gets an
//! immutable snapshot of `params` per call.

use std::path::PathBuf;

use staffcost_core::{CostComparison, Industry, Parameters, apply_template, compare};

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Parameters,
    Comparison,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Parameters, TabId::Comparison];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Parameters => "Parameters",
            TabId::Comparison => "Comparison",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Parameters => 0,
            TabId::Comparison => 1,
        }
    }
}

pub struct AppState {
    /// Current parameter set; starts from the documented defaults
    pub params: Parameters,
    pub active_tab: TabId,
    pub exit: bool,

    /// Cursor into the parameter form (index into `ParamField::ALL`)
    pub field_cursor: usize,
    /// In-progress numeric input for the selected field, when editing
    pub edit_buffer: Option<String>,
    /// Template highlighted for the next apply
    pub template_cursor: Industry,

    pub error_message: Option<String>,
    pub status_message: Option<String>,

    pub data_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            params: Parameters::default(),
            active_tab: TabId::Parameters,
            exit: false,
            field_cursor: 0,
            edit_buffer: None,
            template_cursor: Industry::Tech,
            error_message: None,
            status_message: None,
            data_dir: PathBuf::from("."),
        }
    }
}

impl AppState {
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::default()
        }
    }

    /// Run the engine against the current parameters. Called on every
    /// draw; the full result is recomputed, never cached.
    pub fn results(&self) -> CostComparison {
        compare(&self.params)
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    /// Apply the highlighted industry template as a bulk overwrite
    pub fn apply_highlighted_template(&mut self) {
        self.params = apply_template(&self.params, self.template_cursor);
        self.set_status(format!("Applied {} template", self.template_cursor.name()));
        tracing::info!("template applied: {}", self.template_cursor.name());
    }

    /// Reset every parameter to its default
    pub fn reset_params(&mut self) {
        self.params = Parameters::default();
        self.edit_buffer = None;
        self.set_status("Parameters reset to defaults".to_string());
        tracing::info!("parameters reset to defaults");
    }

    pub fn set_error(&mut self, message: String) {
        self.status_message = None;
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_status(&mut self, message: String) {
        self.error_message = None;
        self.status_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_track_edits() {
        let mut state = AppState::default();
        let before = state.results().total_hire;

        state.params.training_cost += 500.0;
        let after = state.results().total_hire;

        assert!((after - before - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_template_sets_industry() {
        let mut state = AppState::default();
        state.template_cursor = Industry::Retail;
        state.apply_highlighted_template();

        assert_eq!(state.params.industry, "Retail");
        assert_eq!(state.params.hire_salary, 35_000.0);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = AppState::default();
        state.params.hire_salary = 123_456.0;
        state.edit_buffer = Some("42".to_string());

        state.reset_params();

        assert_eq!(state.params, Parameters::default());
        assert!(state.edit_buffer.is_none());
    }

    #[test]
    fn test_status_and_error_exclusive() {
        let mut state = AppState::default();
        state.set_status("ok".to_string());
        state.set_error("boom".to_string());
        assert!(state.status_message.is_none());

        state.set_status("ok again".to_string());
        assert!(state.error_message.is_none());
    }
}
