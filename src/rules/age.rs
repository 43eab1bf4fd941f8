use chrono::NaiveDate;

use crate::domain::applicant::age_on;
use crate::domain::{RejectReason, RuleResult};
use crate::rules::traits::{EvaluationContext, StopCheck};

/// Youngest age at which an application may be approved.
pub const MINIMUM_AGE: u32 = 20;

/// Returns true if the applicant is at least [`MINIMUM_AGE`] on `today`.
pub fn check_age(birth_date: NaiveDate, today: NaiveDate) -> bool {
    age_on(birth_date, today) >= MINIMUM_AGE
}

/// Minimum age gate. Always runs first.
#[derive(Debug, Default)]
pub struct AgeRule;

impl AgeRule {
    pub const ID: &'static str = "AGE";
}

impl StopCheck for AgeRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> RuleResult {
        if ctx.age >= MINIMUM_AGE {
            return RuleResult::pass();
        }

        RuleResult::reject(RejectReason::AgeBelowMinimum {
            age: ctx.age,
            minimum: MINIMUM_AGE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Applicant, Application};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exactly_twenty_passes() {
        assert!(check_age(date(2004, 3, 1), date(2024, 3, 1)));
    }

    #[test]
    fn test_day_before_twentieth_birthday_fails() {
        assert!(!check_age(date(2004, 3, 1), date(2024, 2, 29)));
    }

    #[test]
    fn test_rule_reports_age() {
        let application = Application::new(
            Applicant::new(date(2005, 1, 1), date(2019, 1, 1)),
            Vec::new(),
        );
        let ctx = EvaluationContext::new(&application, date(2024, 6, 1));

        match AgeRule.evaluate(&ctx) {
            RuleResult::Reject(RejectReason::AgeBelowMinimum { age, minimum }) => {
                assert_eq!(age, 19);
                assert_eq!(minimum, MINIMUM_AGE);
            }
            other => panic!("expected age rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_rule_passes_adult() {
        let application = Application::new(
            Applicant::new(date(1980, 1, 1), date(2025, 1, 1)),
            Vec::new(),
        );
        let ctx = EvaluationContext::new(&application, date(2024, 6, 1));

        assert!(AgeRule.evaluate(&ctx).is_pass());
    }
}
