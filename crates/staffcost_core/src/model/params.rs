//! Parameter set for the cost comparison
//!
//! A flat, strongly-typed bundle of every input the engine reads. The
//! defaults here are the ones a fresh session starts from; industry
//! templates overwrite a subset of them (see [`super::templates`]).

use serde::{Deserialize, Serialize};

/// Complete input set for a single cost comparison.
///
/// All monetary values are annual euro amounts unless the field name says
/// otherwise (`*_monthly`, `*_rate`, `*_price`). Percentages are stored as
/// whole numbers (22 means 22%). The engine reads this as an immutable
/// snapshot and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    // Basic assumptions
    /// Proposed annual salary for the replacement hire
    pub hire_salary: f64,
    /// Incumbent's current annual salary
    pub current_salary: f64,
    /// Months the position stays unfilled
    pub vacancy_months: u32,
    /// Statutory social contributions, % of salary
    pub social_percent: f64,
    /// Non-wage benefits, % of salary
    pub benefits_percent: f64,
    /// Productivity shortfall during ramp-up, % of full output
    pub prod_loss_percent: f64,
    /// Industry label, set by template loads
    pub industry: String,

    // Recruiting
    pub job_ad_qty: f64,
    pub job_ad_price: f64,
    /// Recruiting agency fee, % of hire salary
    pub consultant_percent: f64,
    pub interview_hours: f64,
    pub interview_rate: f64,
    pub assessment_qty: f64,
    pub assessment_price: f64,
    pub travel_qty: f64,
    pub travel_price: f64,
    pub background_qty: f64,
    pub background_price: f64,

    // Vacancy period
    /// Estimated lost output per vacant month
    pub lost_productivity_monthly: f64,
    pub overtime_hours: f64,
    pub overtime_rate: f64,
    pub external_days: f64,
    pub external_rate: f64,
    /// Monthly salary not paid while the position is vacant (offsets costs)
    pub salary_saved_monthly: f64,

    // Onboarding
    pub hr_hours: f64,
    pub hr_rate: f64,
    pub peer_hours: f64,
    pub peer_rate: f64,
    pub training_cost: f64,
    pub it_setup_cost: f64,
    pub mentor_hours: f64,
    pub mentor_rate: f64,

    // Other one-time / soft costs (flat annual estimates)
    pub error_cost: f64,
    pub knowhow_cost: f64,
    pub customer_cost: f64,
    pub team_morale_cost: f64,

    // Salary increase alternative
    /// Raise, % of current salary
    pub increase_percent: f64,
    /// Social contributions on the raise, % of the increase amount
    pub social_increase_percent: f64,
    /// Benefits on the raise, % of the increase amount
    pub benefits_increase_percent: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            hire_salary: 60_000.0,
            current_salary: 55_000.0,
            vacancy_months: 3,
            social_percent: 22.0,
            benefits_percent: 8.0,
            prod_loss_percent: 40.0,
            industry: "General".to_string(),

            job_ad_qty: 2.0,
            job_ad_price: 800.0,
            consultant_percent: 25.0,
            interview_hours: 12.0,
            interview_rate: 70.0,
            assessment_qty: 1.0,
            assessment_price: 1_500.0,
            travel_qty: 2.0,
            travel_price: 300.0,
            background_qty: 1.0,
            background_price: 200.0,

            lost_productivity_monthly: 6_000.0,
            overtime_hours: 30.0,
            overtime_rate: 50.0,
            external_days: 20.0,
            external_rate: 400.0,
            salary_saved_monthly: 6_000.0,

            hr_hours: 10.0,
            hr_rate: 50.0,
            peer_hours: 15.0,
            peer_rate: 60.0,
            training_cost: 1_000.0,
            it_setup_cost: 1_200.0,
            mentor_hours: 6.0,
            mentor_rate: 60.0,

            error_cost: 1_400.0,
            knowhow_cost: 2_000.0,
            customer_cost: 2_500.0,
            team_morale_cost: 2_000.0,

            increase_percent: 8.0,
            social_increase_percent: 22.0,
            benefits_increase_percent: 8.0,
        }
    }
}

impl Parameters {
    /// Annual salary gap between the replacement hire and the incumbent.
    /// Positive when the new hire would earn more.
    pub fn salary_gap(&self) -> f64 {
        self.hire_salary - self.current_salary
    }
}
