//! Randomized invariants over the parameter space

use proptest::prelude::*;

use crate::compare::compare;
use crate::model::Parameters;

prop_compose! {
    /// Parameters with the engine-relevant fields drawn from the ranges
    /// the input widgets allow
    fn arb_parameters()(
        hire_salary in 20_000.0f64..200_000.0,
        current_salary in 20_000.0f64..200_000.0,
        vacancy_months in 0u32..24,
        social_percent in 15.0f64..30.0,
        benefits_percent in 5.0f64..25.0,
        prod_loss_percent in 0.0f64..100.0,
        consultant_percent in 0.0f64..50.0,
        salary_saved_monthly in 0.0f64..20_000.0,
        increase_percent in 0.0f64..30.0,
    ) -> Parameters {
        Parameters {
            hire_salary,
            current_salary,
            vacancy_months,
            social_percent,
            benefits_percent,
            prod_loss_percent,
            consultant_percent,
            salary_saved_monthly,
            increase_percent,
            ..Parameters::default()
        }
    }
}

proptest! {
    /// The hire total is always the exact sum of its categories
    #[test]
    fn prop_total_hire_additive(params in arb_parameters()) {
        let result = compare(&params);
        let expected = result.recruiting.sum
            + result.vacancy.sum
            + result.onboarding.sum
            + result.productivity
            + result.other.sum
            + result.salary_difference;
        prop_assert!(
            (result.total_hire - expected).abs() < 1e-6,
            "total {} vs categories {}",
            result.total_hire,
            expected
        );
    }

    /// Changing only the hire salary never moves the raise total
    #[test]
    fn prop_raise_ignores_hire_salary(
        params in arb_parameters(),
        other_hire in 20_000.0f64..200_000.0,
    ) {
        let a = compare(&params);
        let b = compare(&Parameters { hire_salary: other_hire, ..params });
        prop_assert_eq!(a.total_salary_increase, b.total_salary_increase);
    }

    /// More forgone salary during the vacancy never raises the vacancy
    /// sum, and strictly lowers it when months are nonzero
    #[test]
    fn prop_salary_savings_monotone(
        params in arb_parameters(),
        extra in 1.0f64..10_000.0,
    ) {
        let a = compare(&params);
        let b = compare(&Parameters {
            salary_saved_monthly: params.salary_saved_monthly + extra,
            ..params.clone()
        });
        if params.vacancy_months > 0 {
            prop_assert!(b.vacancy.sum < a.vacancy.sum);
        } else {
            prop_assert_eq!(a.vacancy.sum, b.vacancy.sum);
        }
    }

    /// Shares are finite for every random parameter set
    #[test]
    fn prop_shares_never_nan(params in arb_parameters()) {
        let result = compare(&params);
        for (_, sum) in result.categories() {
            prop_assert!(result.share_of_total(sum).is_finite());
        }
    }
}
