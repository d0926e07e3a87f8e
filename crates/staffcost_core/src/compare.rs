//! Cost comparison engine
//!
//! A single pure pass over the parameter set producing the two comparable
//! totals: the incremental cost of hiring a replacement and the cost of
//! raising the incumbent's pay instead.
//!
//! Everything here is incremental. Baseline salary is paid under either
//! option and therefore never enters a total; only the grossed-up salary
//! *difference* does. The salary-savings line during the vacancy is the
//! one intentionally negative item and may pull the vacancy sum below
//! zero. The salary difference keeps its sign: a cheaper new hire reduces
//! the hire total.

use crate::model::params::Parameters;
use crate::model::results::{
    CategoryBreakdown, CostComparison, LineItem, SalaryBreakdown,
};

/// Run the comparison. Deterministic, stateless and side-effect free;
/// called on every interaction cycle, never cached.
pub fn compare(params: &Parameters) -> CostComparison {
    let recruiting = recruiting_costs(params);
    let vacancy = vacancy_costs(params);
    let onboarding = onboarding_costs(params);
    let productivity = productivity_loss(params);
    let other = other_costs(params);
    let salary_difference = salary_difference(params);

    let total_hire = recruiting.sum
        + vacancy.sum
        + onboarding.sum
        + productivity
        + other.sum
        + salary_difference;

    let salary_breakdown = salary_increase(params);
    let total_salary_increase =
        salary_breakdown.increase + salary_breakdown.social + salary_breakdown.benefits;

    CostComparison {
        recruiting,
        vacancy,
        onboarding,
        productivity,
        other,
        salary_difference,
        total_hire,
        total_salary_increase,
        salary_breakdown,
    }
}

/// One-time costs of finding the replacement
fn recruiting_costs(p: &Parameters) -> CategoryBreakdown {
    CategoryBreakdown::from_items(vec![
        LineItem {
            label: "Job advertisements",
            amount: p.job_ad_qty * p.job_ad_price,
        },
        LineItem {
            label: "Recruiting agency",
            amount: p.hire_salary * (p.consultant_percent / 100.0),
        },
        LineItem {
            label: "Interviews",
            amount: p.interview_hours * p.interview_rate,
        },
        LineItem {
            label: "Assessment center",
            amount: p.assessment_qty * p.assessment_price,
        },
        LineItem {
            label: "Travel expenses",
            amount: p.travel_qty * p.travel_price,
        },
        LineItem {
            label: "Background checks",
            amount: p.background_qty * p.background_price,
        },
    ])
}

/// Costs accrued while the position is unfilled. The forgone salary is
/// subtracted: not paying the departed employee offsets the other
/// vacancy costs.
fn vacancy_costs(p: &Parameters) -> CategoryBreakdown {
    let months = f64::from(p.vacancy_months);
    CategoryBreakdown::from_items(vec![
        LineItem {
            label: "Lost productivity",
            amount: months * p.lost_productivity_monthly,
        },
        LineItem {
            label: "Team overtime",
            amount: p.overtime_hours * p.overtime_rate,
        },
        LineItem {
            label: "External support",
            amount: p.external_days * p.external_rate,
        },
        LineItem {
            label: "Salary savings",
            amount: -(months * p.salary_saved_monthly),
        },
    ])
}

/// One-time costs of getting the new hire up and running
fn onboarding_costs(p: &Parameters) -> CategoryBreakdown {
    CategoryBreakdown::from_items(vec![
        LineItem {
            label: "HR effort",
            amount: p.hr_hours * p.hr_rate,
        },
        LineItem {
            label: "Peer onboarding",
            amount: p.peer_hours * p.peer_rate,
        },
        LineItem {
            label: "Training",
            amount: p.training_cost,
        },
        LineItem {
            label: "IT setup & equipment",
            amount: p.it_setup_cost,
        },
        LineItem {
            label: "Mentor program",
            amount: p.mentor_hours * p.mentor_rate,
        },
    ])
}

/// Fully-loaded monthly cost of the new hire times the output fraction
/// missing during ramp-up, accrued over the vacancy/ramp period
fn productivity_loss(p: &Parameters) -> f64 {
    let monthly = (p.hire_salary / 12.0)
        * (1.0 + p.social_percent / 100.0)
        * (p.prod_loss_percent / 100.0);
    monthly * f64::from(p.vacancy_months)
}

/// Flat soft-cost estimates, no rate x quantity structure
fn other_costs(p: &Parameters) -> CategoryBreakdown {
    CategoryBreakdown::from_items(vec![
        LineItem {
            label: "Error rate",
            amount: p.error_cost,
        },
        LineItem {
            label: "Know-how loss",
            amount: p.knowhow_cost,
        },
        LineItem {
            label: "Customer retention",
            amount: p.customer_cost,
        },
        LineItem {
            label: "Team morale",
            amount: p.team_morale_cost,
        },
    ])
}

/// Annualized incremental cost of paying the new hire a different base
/// salary, grossed up by social and benefits overhead. Sign-preserving:
/// negative when the replacement earns less than the incumbent.
fn salary_difference(p: &Parameters) -> f64 {
    p.salary_gap() * (1.0 + p.social_percent / 100.0 + p.benefits_percent / 100.0)
}

/// The raise alternative. Derived solely from the current salary and the
/// three increase percentages; the hire salary must not leak in here.
fn salary_increase(p: &Parameters) -> SalaryBreakdown {
    let increase = p.current_salary * (p.increase_percent / 100.0);
    SalaryBreakdown {
        increase,
        social: increase * (p.social_increase_percent / 100.0),
        benefits: increase * (p.benefits_increase_percent / 100.0),
    }
}
