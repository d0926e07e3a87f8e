//! Editable parameter fields
//!
//! One descriptor per engine input. The parameters screen drives its
//! cursor, labels and edit steps off this table, and all range clamping
//! lives here rather than in the engine.

use staffcost_core::Parameters;

/// Display grouping for the parameter form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamGroup {
    Basic,
    Recruiting,
    Vacancy,
    Onboarding,
    Other,
    Raise,
}

impl ParamGroup {
    pub fn title(&self) -> &'static str {
        match self {
            ParamGroup::Basic => "Basic assumptions",
            ParamGroup::Recruiting => "Recruiting",
            ParamGroup::Vacancy => "Vacancy period",
            ParamGroup::Onboarding => "Onboarding",
            ParamGroup::Other => "Other costs",
            ParamGroup::Raise => "Salary increase",
        }
    }
}

/// A single editable engine input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    HireSalary,
    CurrentSalary,
    VacancyMonths,
    SocialPercent,
    BenefitsPercent,
    ProdLossPercent,

    JobAdQty,
    JobAdPrice,
    ConsultantPercent,
    InterviewHours,
    InterviewRate,
    AssessmentQty,
    AssessmentPrice,
    TravelQty,
    TravelPrice,
    BackgroundQty,
    BackgroundPrice,

    LostProductivityMonthly,
    OvertimeHours,
    OvertimeRate,
    ExternalDays,
    ExternalRate,
    SalarySavedMonthly,

    HrHours,
    HrRate,
    PeerHours,
    PeerRate,
    TrainingCost,
    ItSetupCost,
    MentorHours,
    MentorRate,

    ErrorCost,
    KnowhowCost,
    CustomerCost,
    TeamMoraleCost,

    IncreasePercent,
    SocialIncreasePercent,
    BenefitsIncreasePercent,
}

impl ParamField {
    /// Every field in form order, grouped
    pub const ALL: [ParamField; 38] = [
        ParamField::HireSalary,
        ParamField::CurrentSalary,
        ParamField::VacancyMonths,
        ParamField::SocialPercent,
        ParamField::BenefitsPercent,
        ParamField::ProdLossPercent,
        ParamField::JobAdQty,
        ParamField::JobAdPrice,
        ParamField::ConsultantPercent,
        ParamField::InterviewHours,
        ParamField::InterviewRate,
        ParamField::AssessmentQty,
        ParamField::AssessmentPrice,
        ParamField::TravelQty,
        ParamField::TravelPrice,
        ParamField::BackgroundQty,
        ParamField::BackgroundPrice,
        ParamField::LostProductivityMonthly,
        ParamField::OvertimeHours,
        ParamField::OvertimeRate,
        ParamField::ExternalDays,
        ParamField::ExternalRate,
        ParamField::SalarySavedMonthly,
        ParamField::HrHours,
        ParamField::HrRate,
        ParamField::PeerHours,
        ParamField::PeerRate,
        ParamField::TrainingCost,
        ParamField::ItSetupCost,
        ParamField::MentorHours,
        ParamField::MentorRate,
        ParamField::ErrorCost,
        ParamField::KnowhowCost,
        ParamField::CustomerCost,
        ParamField::TeamMoraleCost,
        ParamField::IncreasePercent,
        ParamField::SocialIncreasePercent,
        ParamField::BenefitsIncreasePercent,
    ];

    pub fn group(&self) -> ParamGroup {
        use ParamField::*;
        match self {
            HireSalary | CurrentSalary | VacancyMonths | SocialPercent | BenefitsPercent
            | ProdLossPercent => ParamGroup::Basic,
            JobAdQty | JobAdPrice | ConsultantPercent | InterviewHours | InterviewRate
            | AssessmentQty | AssessmentPrice | TravelQty | TravelPrice | BackgroundQty
            | BackgroundPrice => ParamGroup::Recruiting,
            LostProductivityMonthly | OvertimeHours | OvertimeRate | ExternalDays
            | ExternalRate | SalarySavedMonthly => ParamGroup::Vacancy,
            HrHours | HrRate | PeerHours | PeerRate | TrainingCost | ItSetupCost
            | MentorHours | MentorRate => ParamGroup::Onboarding,
            ErrorCost | KnowhowCost | CustomerCost | TeamMoraleCost => ParamGroup::Other,
            IncreasePercent | SocialIncreasePercent | BenefitsIncreasePercent => {
                ParamGroup::Raise
            }
        }
    }

    pub fn label(&self) -> &'static str {
        use ParamField::*;
        match self {
            HireSalary => "Annual salary (new hire)",
            CurrentSalary => "Annual salary (current)",
            VacancyMonths => "Vacancy duration",
            SocialPercent => "Social contributions",
            BenefitsPercent => "Benefits",
            ProdLossPercent => "Productivity loss",
            JobAdQty => "Job ads (count)",
            JobAdPrice => "Job ad price",
            ConsultantPercent => "Agency fee",
            InterviewHours => "Interview hours",
            InterviewRate => "Interview rate",
            AssessmentQty => "Assessment centers",
            AssessmentPrice => "Assessment price",
            TravelQty => "Candidate trips",
            TravelPrice => "Travel price",
            BackgroundQty => "Background checks",
            BackgroundPrice => "Background check price",
            LostProductivityMonthly => "Lost output per month",
            OvertimeHours => "Team overtime hours",
            OvertimeRate => "Overtime rate",
            ExternalDays => "External support days",
            ExternalRate => "External day rate",
            SalarySavedMonthly => "Salary saved per month",
            HrHours => "HR hours",
            HrRate => "HR rate",
            PeerHours => "Peer onboarding hours",
            PeerRate => "Peer rate",
            TrainingCost => "Training",
            ItSetupCost => "IT setup & equipment",
            MentorHours => "Mentor hours",
            MentorRate => "Mentor rate",
            ErrorCost => "Error rate",
            KnowhowCost => "Know-how loss",
            CustomerCost => "Customer retention",
            TeamMoraleCost => "Team morale",
            IncreasePercent => "Raise",
            SocialIncreasePercent => "Social on raise",
            BenefitsIncreasePercent => "Benefits on raise",
        }
    }

    /// Unit suffix shown after the value
    pub fn unit(&self) -> &'static str {
        use ParamField::*;
        match self {
            HireSalary | CurrentSalary | JobAdPrice | AssessmentPrice | TravelPrice
            | BackgroundPrice | TrainingCost | ItSetupCost | ErrorCost | KnowhowCost
            | CustomerCost | TeamMoraleCost => "€",
            LostProductivityMonthly | SalarySavedMonthly => "€/mo",
            InterviewRate | OvertimeRate | HrRate | PeerRate | MentorRate => "€/h",
            ExternalRate => "€/day",
            SocialPercent | BenefitsPercent | ProdLossPercent | ConsultantPercent
            | IncreasePercent | SocialIncreasePercent | BenefitsIncreasePercent => "%",
            InterviewHours | OvertimeHours | HrHours | PeerHours | MentorHours => "h",
            VacancyMonths => "months",
            ExternalDays => "days",
            JobAdQty | AssessmentQty | TravelQty | BackgroundQty => "x",
        }
    }

    /// Increment applied by +/- stepping
    pub fn step(&self) -> f64 {
        use ParamField::*;
        match self {
            HireSalary | CurrentSalary => 1_000.0,
            LostProductivityMonthly | SalarySavedMonthly => 500.0,
            JobAdPrice | AssessmentPrice | TrainingCost | ItSetupCost | ErrorCost
            | KnowhowCost | CustomerCost | TeamMoraleCost => 100.0,
            TravelPrice | BackgroundPrice => 50.0,
            InterviewRate | OvertimeRate | ExternalRate | HrRate | PeerRate | MentorRate => 5.0,
            ProdLossPercent => 5.0,
            InterviewHours | OvertimeHours | ExternalDays | HrHours | PeerHours
            | MentorHours => 1.0,
            SocialPercent | BenefitsPercent | ConsultantPercent | IncreasePercent
            | SocialIncreasePercent | BenefitsIncreasePercent => 1.0,
            VacancyMonths | JobAdQty | AssessmentQty | TravelQty | BackgroundQty => 1.0,
        }
    }

    /// Whether the field only takes whole numbers
    pub fn is_integer(&self) -> bool {
        matches!(self, ParamField::VacancyMonths)
    }

    pub fn get(&self, p: &Parameters) -> f64 {
        use ParamField::*;
        match self {
            HireSalary => p.hire_salary,
            CurrentSalary => p.current_salary,
            VacancyMonths => f64::from(p.vacancy_months),
            SocialPercent => p.social_percent,
            BenefitsPercent => p.benefits_percent,
            ProdLossPercent => p.prod_loss_percent,
            JobAdQty => p.job_ad_qty,
            JobAdPrice => p.job_ad_price,
            ConsultantPercent => p.consultant_percent,
            InterviewHours => p.interview_hours,
            InterviewRate => p.interview_rate,
            AssessmentQty => p.assessment_qty,
            AssessmentPrice => p.assessment_price,
            TravelQty => p.travel_qty,
            TravelPrice => p.travel_price,
            BackgroundQty => p.background_qty,
            BackgroundPrice => p.background_price,
            LostProductivityMonthly => p.lost_productivity_monthly,
            OvertimeHours => p.overtime_hours,
            OvertimeRate => p.overtime_rate,
            ExternalDays => p.external_days,
            ExternalRate => p.external_rate,
            SalarySavedMonthly => p.salary_saved_monthly,
            HrHours => p.hr_hours,
            HrRate => p.hr_rate,
            PeerHours => p.peer_hours,
            PeerRate => p.peer_rate,
            TrainingCost => p.training_cost,
            ItSetupCost => p.it_setup_cost,
            MentorHours => p.mentor_hours,
            MentorRate => p.mentor_rate,
            ErrorCost => p.error_cost,
            KnowhowCost => p.knowhow_cost,
            CustomerCost => p.customer_cost,
            TeamMoraleCost => p.team_morale_cost,
            IncreasePercent => p.increase_percent,
            SocialIncreasePercent => p.social_increase_percent,
            BenefitsIncreasePercent => p.benefits_increase_percent,
        }
    }

    /// Write a value back, clamping negatives to zero. The engine itself
    /// performs no validation; this is the form's job.
    pub fn set(&self, p: &mut Parameters, value: f64) {
        use ParamField::*;
        let v = value.max(0.0);
        match self {
            HireSalary => p.hire_salary = v,
            CurrentSalary => p.current_salary = v,
            VacancyMonths => p.vacancy_months = v.round() as u32,
            SocialPercent => p.social_percent = v,
            BenefitsPercent => p.benefits_percent = v,
            ProdLossPercent => p.prod_loss_percent = v,
            JobAdQty => p.job_ad_qty = v,
            JobAdPrice => p.job_ad_price = v,
            ConsultantPercent => p.consultant_percent = v,
            InterviewHours => p.interview_hours = v,
            InterviewRate => p.interview_rate = v,
            AssessmentQty => p.assessment_qty = v,
            AssessmentPrice => p.assessment_price = v,
            TravelQty => p.travel_qty = v,
            TravelPrice => p.travel_price = v,
            BackgroundQty => p.background_qty = v,
            BackgroundPrice => p.background_price = v,
            LostProductivityMonthly => p.lost_productivity_monthly = v,
            OvertimeHours => p.overtime_hours = v,
            OvertimeRate => p.overtime_rate = v,
            ExternalDays => p.external_days = v,
            ExternalRate => p.external_rate = v,
            SalarySavedMonthly => p.salary_saved_monthly = v,
            HrHours => p.hr_hours = v,
            HrRate => p.hr_rate = v,
            PeerHours => p.peer_hours = v,
            PeerRate => p.peer_rate = v,
            TrainingCost => p.training_cost = v,
            ItSetupCost => p.it_setup_cost = v,
            MentorHours => p.mentor_hours = v,
            MentorRate => p.mentor_rate = v,
            ErrorCost => p.error_cost = v,
            KnowhowCost => p.knowhow_cost = v,
            CustomerCost => p.customer_cost = v,
            TeamMoraleCost => p.team_morale_cost = v,
            IncreasePercent => p.increase_percent = v,
            SocialIncreasePercent => p.social_increase_percent = v,
            BenefitsIncreasePercent => p.benefits_increase_percent = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every field reads back the value written to it
    #[test]
    fn test_get_set_roundtrip() {
        let mut params = Parameters::default();
        for field in ParamField::ALL {
            field.set(&mut params, 17.0);
            assert_eq!(field.get(&params), 17.0, "field {field:?}");
        }
    }

    /// Negatives are clamped at zero by the form layer
    #[test]
    fn test_set_clamps_negative() {
        let mut params = Parameters::default();
        for field in ParamField::ALL {
            field.set(&mut params, -5.0);
            assert_eq!(field.get(&params), 0.0, "field {field:?}");
        }
    }

    /// Integer fields round instead of truncating
    #[test]
    fn test_vacancy_months_rounds() {
        let mut params = Parameters::default();
        ParamField::VacancyMonths.set(&mut params, 3.6);
        assert_eq!(params.vacancy_months, 4);
    }

    /// Form order keeps each group contiguous
    #[test]
    fn test_groups_contiguous() {
        let mut seen: Vec<ParamGroup> = Vec::new();
        for field in ParamField::ALL {
            let group = field.group();
            if seen.last() != Some(&group) {
                assert!(
                    !seen.contains(&group),
                    "group {group:?} appears in two separate runs"
                );
                seen.push(group);
            }
        }
    }
}
