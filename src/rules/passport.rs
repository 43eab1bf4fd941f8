use chrono::NaiveDate;

use crate::domain::applicant::birthday;
use crate::domain::{RejectReason, RuleResult};
use crate::rules::traits::{EvaluationContext, StopCheck};

/// Birthdays after which the passport must have been reissued, latest first.
pub const PASSPORT_MILESTONES: [u32; 2] = [45, 20];

/// The latest milestone the applicant has reached, if any.
pub fn applicable_milestone(age: u32) -> Option<u32> {
    PASSPORT_MILESTONES.into_iter().find(|milestone| age >= *milestone)
}

/// Returns true if the passport was issued on or after the latest
/// milestone birthday the applicant has reached.
///
/// Only that one milestone is consulted: an applicant of 45 or older is
/// never measured against the 20th birthday.
pub fn check_passport_validity(age: u32, birth_date: NaiveDate, passport_issued_at: NaiveDate) -> bool {
    match applicable_milestone(age) {
        None => true,
        Some(milestone) => match birthday(birth_date, milestone) {
            Some(renewal_due) => passport_issued_at >= renewal_due,
            None => false,
        },
    }
}

/// Passport renewal check. Depends on the age computed for the age gate.
#[derive(Debug, Default)]
pub struct PassportRule;

impl PassportRule {
    pub const ID: &'static str = "PASSPORT";
}

impl StopCheck for PassportRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> RuleResult {
        let birth_date = ctx.applicant.birth_date;
        let issued_at = ctx.applicant.passport.issued_at;

        if check_passport_validity(ctx.age, birth_date, issued_at) {
            return RuleResult::pass();
        }

        // only reachable once some milestone applies
        let milestone = applicable_milestone(ctx.age).unwrap_or(PASSPORT_MILESTONES[0]);
        RuleResult::reject(RejectReason::PassportNotRenewed {
            milestone,
            renewal_due: birthday(birth_date, milestone).unwrap_or(NaiveDate::MAX),
            issued_at,
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
    fn test_milestone_selection() {
        assert_eq!(applicable_milestone(19), None);
        assert_eq!(applicable_milestone(20), Some(20));
        assert_eq!(applicable_milestone(44), Some(20));
        assert_eq!(applicable_milestone(45), Some(45));
        assert_eq!(applicable_milestone(80), Some(45));
    }

    #[test]
    fn test_issued_on_twentieth_birthday_passes() {
        let birth = date(1990, 4, 10);
        assert!(check_passport_validity(30, birth, date(2010, 4, 10)));
        assert!(!check_passport_validity(30, birth, date(2010, 4, 9)));
    }

    #[test]
    fn test_issued_on_forty_fifth_birthday_passes() {
        let birth = date(1970, 4, 10);
        assert!(check_passport_validity(50, birth, date(2015, 4, 10)));
        assert!(!check_passport_validity(50, birth, date(2015, 4, 9)));
    }

    #[test]
    fn test_twentieth_threshold_ignored_after_forty_five() {
        let birth = date(1970, 4, 10);
        // renewed at 20 but never at 45
        assert!(!check_passport_validity(50, birth, date(1995, 6, 1)));
    }

    #[test]
    fn test_under_twenty_has_no_milestone() {
        assert!(check_passport_validity(18, date(2006, 1, 1), date(2020, 1, 1)));
    }

    #[test]
    fn test_rule_reports_renewal_due() {
        let application = Application::new(
            Applicant::new(date(1975, 9, 1), date(2000, 1, 1)),
            Vec::new(),
        );
        let ctx = EvaluationContext::new(&application, date(2024, 9, 1));

        match PassportRule.evaluate(&ctx) {
            RuleResult::Reject(RejectReason::PassportNotRenewed {
                milestone,
                renewal_due,
                issued_at,
            }) => {
                assert_eq!(milestone, 45);
                assert_eq!(renewal_due, date(2020, 9, 1));
                assert_eq!(issued_at, date(2000, 1, 1));
            }
            other => panic!("expected passport rejection, got {other:?}"),
        }
    }
}
