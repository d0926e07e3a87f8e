//! Tests for the comparison engine arithmetic
//!
//! These tests verify:
//! - The hire total is exactly the sum of its category sums
//! - The salary difference is incremental and sign-preserving
//! - The raise path never depends on the hire salary
//! - Known-value scenarios computed by hand

use crate::compare::compare;
use crate::model::Parameters;

const EPS: f64 = 1e-9;

/// Total hire cost must be the sum of the six category sums, nothing
/// double-counted or dropped
#[test]
fn test_total_hire_additivity() {
    let params = Parameters::default();
    let result = compare(&params);

    let expected = result.recruiting.sum
        + result.vacancy.sum
        + result.onboarding.sum
        + result.productivity
        + result.other.sum
        + result.salary_difference;

    assert!(
        (result.total_hire - expected).abs() < EPS,
        "total_hire {} != category sum {}",
        result.total_hire,
        expected
    );
}

/// Category sums must equal the sum of their own line items
#[test]
fn test_category_sums_match_items() {
    let result = compare(&Parameters::default());

    for category in [&result.recruiting, &result.vacancy, &result.onboarding, &result.other] {
        let items: f64 = category.items.iter().map(|i| i.amount).sum();
        assert!(
            (category.sum - items).abs() < EPS,
            "category sum {} != item sum {}",
            category.sum,
            items
        );
    }
}

/// Defaults scenario: salary difference and productivity loss computed
/// by hand from the documented default parameters
#[test]
fn test_default_scenario_known_values() {
    let params = Parameters::default();
    let result = compare(&params);

    // (60000 - 55000) * (1 + 0.22 + 0.08)
    assert!((result.salary_difference - 6_500.0).abs() < EPS);

    // (60000 / 12) * 1.22 * 0.40 * 3
    assert!((result.productivity - 7_320.0).abs() < EPS);
}

/// Raise scenario: 8% of 55000 plus 22% social and 8% benefits on the
/// increase amount
#[test]
fn test_salary_increase_known_values() {
    let params = Parameters::default();
    let result = compare(&params);

    assert!((result.salary_breakdown.increase - 4_400.0).abs() < EPS);
    assert!((result.salary_breakdown.social - 968.0).abs() < EPS);
    assert!((result.salary_breakdown.benefits - 352.0).abs() < EPS);
    assert!((result.total_salary_increase - 5_720.0).abs() < EPS);
}

/// Equal salaries: the difference term vanishes exactly and the hire
/// total reduces to the remaining categories
#[test]
fn test_equal_salaries_zero_difference() {
    let params = Parameters {
        hire_salary: 60_000.0,
        current_salary: 60_000.0,
        ..Parameters::default()
    };
    let result = compare(&params);

    assert_eq!(result.salary_difference, 0.0);

    let without_difference = result.recruiting.sum
        + result.vacancy.sum
        + result.onboarding.sum
        + result.productivity
        + result.other.sum;
    assert!((result.total_hire - without_difference).abs() < EPS);
}

/// A cheaper new hire produces a negative difference that reduces the
/// hire total, not a clamped zero
#[test]
fn test_salary_difference_sign_preserved() {
    let params = Parameters {
        hire_salary: 50_000.0,
        current_salary: 55_000.0,
        ..Parameters::default()
    };
    let result = compare(&params);

    // (50000 - 55000) * 1.30
    assert!((result.salary_difference - (-6_500.0)).abs() < EPS);

    let baseline = compare(&Parameters {
        hire_salary: 55_000.0,
        ..params.clone()
    });
    assert!(
        result.total_hire < baseline.total_hire,
        "negative salary difference must lower the hire total"
    );
}

/// The raise total depends only on the current salary and the three
/// increase percentages; the hire salary must not leak in
#[test]
fn test_raise_independent_of_hire_salary() {
    let base = Parameters::default();
    let bumped = Parameters {
        hire_salary: base.hire_salary + 40_000.0,
        ..base.clone()
    };

    let a = compare(&base);
    let b = compare(&bumped);

    assert_eq!(a.total_salary_increase, b.total_salary_increase);
    assert_eq!(a.salary_breakdown.increase, b.salary_breakdown.increase);
    assert_eq!(a.salary_breakdown.social, b.salary_breakdown.social);
    assert_eq!(a.salary_breakdown.benefits, b.salary_breakdown.benefits);
}

/// Raising the forgone monthly salary strictly lowers the vacancy sum,
/// since it is the subtracted offset line
#[test]
fn test_salary_savings_offsets_vacancy() {
    let base = Parameters::default();
    let more_saved = Parameters {
        salary_saved_monthly: base.salary_saved_monthly + 1_000.0,
        ..base.clone()
    };

    let a = compare(&base);
    let b = compare(&more_saved);

    assert!(
        b.vacancy.sum < a.vacancy.sum,
        "vacancy sum {} should drop below {}",
        b.vacancy.sum,
        a.vacancy.sum
    );

    // The offset line itself is the only negative item
    let savings_line = a
        .vacancy
        .items
        .iter()
        .find(|i| i.label == "Salary savings")
        .expect("vacancy breakdown has a salary savings line");
    assert!(savings_line.amount < 0.0);
}

/// All-zero inputs: zero total, and percentage shares return 0 instead
/// of NaN so report generators can divide blindly
#[test]
fn test_zero_total_share_guard() {
    let params = Parameters {
        hire_salary: 0.0,
        current_salary: 0.0,
        vacancy_months: 0,
        social_percent: 0.0,
        benefits_percent: 0.0,
        prod_loss_percent: 0.0,
        job_ad_qty: 0.0,
        job_ad_price: 0.0,
        consultant_percent: 0.0,
        interview_hours: 0.0,
        interview_rate: 0.0,
        assessment_qty: 0.0,
        assessment_price: 0.0,
        travel_qty: 0.0,
        travel_price: 0.0,
        background_qty: 0.0,
        background_price: 0.0,
        lost_productivity_monthly: 0.0,
        overtime_hours: 0.0,
        overtime_rate: 0.0,
        external_days: 0.0,
        external_rate: 0.0,
        salary_saved_monthly: 0.0,
        hr_hours: 0.0,
        hr_rate: 0.0,
        peer_hours: 0.0,
        peer_rate: 0.0,
        training_cost: 0.0,
        it_setup_cost: 0.0,
        mentor_hours: 0.0,
        mentor_rate: 0.0,
        error_cost: 0.0,
        knowhow_cost: 0.0,
        customer_cost: 0.0,
        team_morale_cost: 0.0,
        increase_percent: 0.0,
        social_increase_percent: 0.0,
        benefits_increase_percent: 0.0,
        ..Parameters::default()
    };
    let result = compare(&params);

    assert_eq!(result.total_hire, 0.0);
    for (_, sum) in result.categories() {
        let share = result.share_of_total(sum);
        assert_eq!(share, 0.0);
        assert!(!share.is_nan());
    }
}

/// Recommendation follows the cheaper total
#[test]
fn test_recommendation_follows_totals() {
    use crate::model::Recommendation;

    // Defaults: hiring carries recruiting/vacancy/onboarding overhead,
    // so the raise wins
    let result = compare(&Parameters::default());
    assert!(result.total_hire > result.total_salary_increase);
    assert_eq!(result.cheaper_option(), Recommendation::SalaryIncrease);
    assert!(result.savings() > 0.0);

    // A steep raise on a much cheaper new hire flips it
    let params = Parameters {
        hire_salary: 30_000.0,
        current_salary: 90_000.0,
        increase_percent: 30.0,
        ..Parameters::default()
    };
    let result = compare(&params);
    assert!(result.total_hire < result.total_salary_increase);
    assert_eq!(result.cheaper_option(), Recommendation::NewHire);
    assert!(result.savings() < 0.0);
}
