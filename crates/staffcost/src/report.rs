//! CSV report export
//!
//! Renders the full comparison into a line-based CSV report (header,
//! executive summary, parameters, itemized breakdown with percentage
//! shares) and writes it atomically into `{data_dir}/reports/`.

use std::io;
use std::path::{Path, PathBuf};

use staffcost_core::{CostComparison, Parameters, Recommendation};

use crate::util::format::{format_eur, format_eur_signed, format_percent};
use crate::util::io::atomic_write;

/// Render the detailed report for the given parameters and result
pub fn render_report(params: &Parameters, result: &CostComparison) -> String {
    let now = jiff::Zoned::now();
    let mut lines: Vec<String> = Vec::new();

    lines.push("HR COST COMPARISON - DETAILED REPORT".to_string());
    lines.push("=".repeat(50));
    lines.push(String::new());
    lines.push(format!("Created: {}", now.strftime("%d.%m.%Y %H:%M")));
    lines.push(format!("Industry: {}", params.industry));
    lines.push(String::new());

    lines.push("EXECUTIVE SUMMARY".to_string());
    lines.push("-".repeat(20));
    let recommendation = match result.cheaper_option() {
        Recommendation::SalaryIncrease => format!(
            "Salary increase is cheaper by {}",
            format_eur(result.savings().abs())
        ),
        Recommendation::NewHire => format!(
            "Replacement hire is cheaper by {}",
            format_eur(result.savings().abs())
        ),
    };
    lines.push(format!("Recommendation: {recommendation}"));
    lines.push(format!(
        "Replacement hire (additional cost): {}",
        format_eur(result.total_hire)
    ));
    lines.push(format!(
        "Salary increase cost: {}",
        format_eur(result.total_salary_increase)
    ));
    lines.push(String::new());

    lines.push("PARAMETERS".to_string());
    lines.push("-".repeat(20));
    lines.push(format!(
        "Annual salary (new hire): {}",
        format_eur(params.hire_salary)
    ));
    lines.push(format!(
        "Annual salary (current): {}",
        format_eur(params.current_salary)
    ));
    lines.push(format!(
        "Salary gap: {}",
        format_eur_signed(params.salary_gap())
    ));
    lines.push(format!("Vacancy duration: {} months", params.vacancy_months));
    lines.push(format!(
        "Productivity loss: {}",
        format_percent(params.prod_loss_percent)
    ));
    lines.push(String::new());

    lines.push("COST BREAKDOWN - REPLACEMENT HIRE (ADDITIONAL COST)".to_string());
    lines.push("-".repeat(40));
    for (name, sum) in result.categories() {
        lines.push(format!(
            "{name}: {} ({})",
            format_eur(sum),
            format_percent(result.share_of_total(sum))
        ));
    }
    lines.push(format!(
        "TOTAL ADDITIONAL COST: {}",
        format_eur(result.total_hire)
    ));
    lines.push(String::new());

    lines.push("ITEMIZED COSTS".to_string());
    lines.push("-".repeat(40));
    for (name, category) in [
        ("Recruiting", &result.recruiting),
        ("Vacancy", &result.vacancy),
        ("Onboarding", &result.onboarding),
        ("Other costs", &result.other),
    ] {
        lines.push(format!("{name}:"));
        for item in &category.items {
            lines.push(format!("  {}: {}", item.label, format_eur(item.amount)));
        }
    }
    lines.push(String::new());

    lines.push("SALARY INCREASE BREAKDOWN".to_string());
    lines.push("-".repeat(40));
    lines.push(format!(
        "Increase: {}",
        format_eur(result.salary_breakdown.increase)
    ));
    lines.push(format!(
        "Social contributions: {}",
        format_eur(result.salary_breakdown.social)
    ));
    lines.push(format!(
        "Benefits: {}",
        format_eur(result.salary_breakdown.benefits)
    ));
    lines.push(format!(
        "TOTAL: {}",
        format_eur(result.total_salary_increase)
    ));
    lines.push(String::new());

    lines.join("\n")
}

/// Write the report to `{data_dir}/reports/` with a timestamped name,
/// returning the path written
pub fn write_report(
    data_dir: &Path,
    params: &Parameters,
    result: &CostComparison,
) -> io::Result<PathBuf> {
    let reports_dir = data_dir.join("reports");
    std::fs::create_dir_all(&reports_dir)?;

    let stamp = jiff::Zoned::now().strftime("%Y%m%d_%H%M%S").to_string();
    let path = reports_dir.join(format!("comparison_{stamp}.csv"));

    atomic_write(&path, &render_report(params, result))?;
    tracing::info!("report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffcost_core::compare;
    use tempfile::tempdir;

    #[test]
    fn test_report_sections_present() {
        let params = Parameters::default();
        let result = compare(&params);
        let report = render_report(&params, &result);

        assert!(report.contains("EXECUTIVE SUMMARY"));
        assert!(report.contains("PARAMETERS"));
        assert!(report.contains("COST BREAKDOWN"));
        assert!(report.contains("SALARY INCREASE BREAKDOWN"));
        assert!(report.contains("Industry: General"));

        // Defaults favor the raise
        assert!(report.contains("Salary increase is cheaper by"));
        // Known values from the default scenario
        assert!(report.contains("Salary difference: 6,500 €"));
        assert!(report.contains("Productivity loss: 7,320 €"));
    }

    /// Zero totals must still render; shares come out as 0.0% instead
    /// of NaN
    #[test]
    fn test_report_zero_total() {
        let params = Parameters {
            hire_salary: 0.0,
            current_salary: 0.0,
            vacancy_months: 0,
            job_ad_qty: 0.0,
            consultant_percent: 0.0,
            interview_hours: 0.0,
            assessment_qty: 0.0,
            travel_qty: 0.0,
            background_qty: 0.0,
            lost_productivity_monthly: 0.0,
            overtime_hours: 0.0,
            external_days: 0.0,
            salary_saved_monthly: 0.0,
            hr_hours: 0.0,
            peer_hours: 0.0,
            training_cost: 0.0,
            it_setup_cost: 0.0,
            mentor_hours: 0.0,
            error_cost: 0.0,
            knowhow_cost: 0.0,
            customer_cost: 0.0,
            team_morale_cost: 0.0,
            ..Parameters::default()
        };
        let result = compare(&params);
        assert_eq!(result.total_hire, 0.0);

        let report = render_report(&params, &result);
        assert!(!report.contains("NaN"));
        assert!(report.contains("Recruiting: 0 € (0.0%)"));
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempdir().unwrap();
        let params = Parameters::default();
        let result = compare(&params);

        let path = write_report(dir.path(), &params, &result).unwrap();

        assert!(path.exists());
        assert!(path.starts_with(dir.path().join("reports")));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("HR COST COMPARISON"));
    }
}
