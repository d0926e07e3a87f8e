//! Industry templates
//!
//! Named presets that overwrite the sector-sensitive subset of the
//! parameter set. Loading a template is a bulk overwrite, not a merge:
//! applying the same template twice yields the same parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIndustryError;

use super::params::Parameters;

/// Sector preset selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Tech,
    Healthcare,
    Retail,
    Finance,
}

/// The parameter subset a template overwrites
#[derive(Debug, Clone, Copy)]
pub struct TemplateOverrides {
    pub hire_salary: f64,
    pub current_salary: f64,
    pub vacancy_months: u32,
    pub social_percent: f64,
    pub benefits_percent: f64,
    pub prod_loss_percent: f64,
    pub consultant_percent: f64,
    pub interview_hours: f64,
    pub interview_rate: f64,
    pub training_cost: f64,
}

impl Industry {
    pub const ALL: [Industry; 4] = [
        Industry::Tech,
        Industry::Healthcare,
        Industry::Retail,
        Industry::Finance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Industry::Tech => "Tech",
            Industry::Healthcare => "Healthcare",
            Industry::Retail => "Retail",
            Industry::Finance => "Finance",
        }
    }

    /// Preset values for this sector
    pub fn overrides(&self) -> TemplateOverrides {
        match self {
            Industry::Tech => TemplateOverrides {
                hire_salary: 85_000.0,
                current_salary: 75_000.0,
                vacancy_months: 4,
                social_percent: 22.0,
                benefits_percent: 12.0,
                prod_loss_percent: 50.0,
                consultant_percent: 30.0,
                interview_hours: 15.0,
                interview_rate: 80.0,
                training_cost: 2_000.0,
            },
            Industry::Healthcare => TemplateOverrides {
                hire_salary: 65_000.0,
                current_salary: 58_000.0,
                vacancy_months: 3,
                social_percent: 24.0,
                benefits_percent: 15.0,
                prod_loss_percent: 40.0,
                consultant_percent: 20.0,
                interview_hours: 10.0,
                interview_rate: 70.0,
                training_cost: 1_500.0,
            },
            Industry::Retail => TemplateOverrides {
                hire_salary: 35_000.0,
                current_salary: 32_000.0,
                vacancy_months: 2,
                social_percent: 20.0,
                benefits_percent: 8.0,
                prod_loss_percent: 30.0,
                consultant_percent: 15.0,
                interview_hours: 8.0,
                interview_rate: 50.0,
                training_cost: 500.0,
            },
            Industry::Finance => TemplateOverrides {
                hire_salary: 75_000.0,
                current_salary: 68_000.0,
                vacancy_months: 5,
                social_percent: 23.0,
                benefits_percent: 18.0,
                prod_loss_percent: 45.0,
                consultant_percent: 25.0,
                interview_hours: 12.0,
                interview_rate: 90.0,
                training_cost: 2_500.0,
            },
        }
    }

    /// The next template in display order, wrapping around
    pub fn next(&self) -> Industry {
        match self {
            Industry::Tech => Industry::Healthcare,
            Industry::Healthcare => Industry::Retail,
            Industry::Retail => Industry::Finance,
            Industry::Finance => Industry::Tech,
        }
    }
}

impl FromStr for Industry {
    type Err = ParseIndustryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .iter()
            .copied()
            .find(|i| i.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseIndustryError(s.to_string()))
    }
}

/// Apply an industry template to a base parameter set, returning the new
/// set. The base is untouched; fields outside the template keep their
/// current values.
pub fn apply_template(base: &Parameters, industry: Industry) -> Parameters {
    let t = industry.overrides();
    Parameters {
        hire_salary: t.hire_salary,
        current_salary: t.current_salary,
        vacancy_months: t.vacancy_months,
        social_percent: t.social_percent,
        benefits_percent: t.benefits_percent,
        prod_loss_percent: t.prod_loss_percent,
        consultant_percent: t.consultant_percent,
        interview_hours: t.interview_hours,
        interview_rate: t.interview_rate,
        training_cost: t.training_cost,
        industry: industry.name().to_string(),
        ..base.clone()
    }
}
