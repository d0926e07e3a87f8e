//! Comparison results
//!
//! Output types from a single engine run: itemized category breakdowns,
//! the two comparable totals and helper accessors for charts and reports.

use serde::Serialize;

/// A single named cost line within a category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LineItem {
    pub label: &'static str,
    pub amount: f64,
}

/// An itemized cost category with its total
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub items: Vec<LineItem>,
    pub sum: f64,
}

impl CategoryBreakdown {
    /// Build a breakdown from its line items, summing as-is (no rounding)
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let sum = items.iter().map(|i| i.amount).sum();
        Self { items, sum }
    }
}

/// Components of the salary-increase alternative
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalaryBreakdown {
    /// Raw raise amount (current salary x increase percent)
    pub increase: f64,
    /// Social contributions on the raise
    pub social: f64,
    /// Benefits on the raise
    pub benefits: f64,
}

/// Which of the two options costs less
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    SalaryIncrease,
    NewHire,
}

/// Complete results from one comparison run.
///
/// `total_hire` is the *incremental* cost of replacing the employee: the
/// category sums plus the grossed-up salary difference, never the new
/// hire's full employment cost. `total_salary_increase` is already a pure
/// incremental cost by construction, so the two are directly comparable.
#[derive(Debug, Clone, Serialize)]
pub struct CostComparison {
    pub recruiting: CategoryBreakdown,
    pub vacancy: CategoryBreakdown,
    pub onboarding: CategoryBreakdown,
    /// Ramp-up productivity loss (no itemization, single formula)
    pub productivity: f64,
    pub other: CategoryBreakdown,
    /// Annualized salary difference incl. social and benefits overhead.
    /// Negative when the new hire earns less than the incumbent.
    pub salary_difference: f64,
    /// Grand incremental cost of the new-hire path
    pub total_hire: f64,
    /// Grand cost of the raise alternative
    pub total_salary_increase: f64,
    pub salary_breakdown: SalaryBreakdown,
}

impl CostComparison {
    /// Percentage share of `amount` against the hire total.
    ///
    /// Returns 0 when the total is zero so report generators can divide
    /// every category without a NaN guard of their own.
    pub fn share_of_total(&self, amount: f64) -> f64 {
        if self.total_hire == 0.0 {
            0.0
        } else {
            amount / self.total_hire * 100.0
        }
    }

    /// The named category sums in display order
    pub fn categories(&self) -> [(&'static str, f64); 6] {
        [
            ("Recruiting", self.recruiting.sum),
            ("Vacancy", self.vacancy.sum),
            ("Onboarding", self.onboarding.sum),
            ("Productivity loss", self.productivity),
            ("Other costs", self.other.sum),
            ("Salary difference", self.salary_difference),
        ]
    }

    /// Signed cost delta of hiring over raising.
    /// Positive means the raise is the cheaper option.
    pub fn savings(&self) -> f64 {
        self.total_hire - self.total_salary_increase
    }

    /// Which option costs less (ties go to the new hire, matching the
    /// savings sign convention)
    pub fn cheaper_option(&self) -> Recommendation {
        if self.total_hire > self.total_salary_increase {
            Recommendation::SalaryIncrease
        } else {
            Recommendation::NewHire
        }
    }

    /// Relative savings in percent of the cheaper option's total.
    /// Zero when the cheaper total is zero.
    pub fn savings_percent(&self) -> f64 {
        let base = self.total_hire.min(self.total_salary_increase);
        if base == 0.0 {
            0.0
        } else {
            self.savings().abs() / base * 100.0
        }
    }
}
