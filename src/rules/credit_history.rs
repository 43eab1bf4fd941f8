use crate::domain::{CreditRecord, RejectReason, RuleResult};
use crate::rules::traits::{EvaluationContext, StopCheck};

/// Longest tolerated overdue streak on a credit card.
pub const CREDIT_CARD_MAX_OVERDUE_DAYS: u64 = 30;

/// Longest tolerated overdue streak on any other loan.
pub const LOAN_MAX_OVERDUE_DAYS: u64 = 60;

/// Overdue streak above which a non-card loan counts as moderately delinquent.
pub const MODERATE_OVERDUE_DAYS: u64 = 15;

/// How many moderately delinquent non-card loans are tolerated.
pub const MAX_MODERATELY_DELINQUENT_LOANS: usize = 2;

/// Check a single record against the per-record limits.
///
/// Returns the rejection reason, if any. Unpaid debt is checked before the
/// overdue streak.
pub fn check_record(record: &CreditRecord) -> Option<RejectReason> {
    if record.is_credit_card() {
        if record.has_overdue_debt() {
            return Some(RejectReason::CreditCardOverdueDebt {
                debt: record.current_overdue_debt,
            });
        }
        if record.days_overdue > CREDIT_CARD_MAX_OVERDUE_DAYS {
            return Some(RejectReason::CreditCardOverdueDays {
                days: record.days_overdue,
                limit: CREDIT_CARD_MAX_OVERDUE_DAYS,
            });
        }
        return None;
    }

    if record.has_overdue_debt() {
        return Some(RejectReason::LoanOverdueDebt {
            loan_type: record.loan_type.clone(),
            debt: record.current_overdue_debt,
        });
    }
    if record.days_overdue > LOAN_MAX_OVERDUE_DAYS {
        return Some(RejectReason::LoanOverdueDays {
            loan_type: record.loan_type.clone(),
            days: record.days_overdue,
            limit: LOAN_MAX_OVERDUE_DAYS,
        });
    }
    None
}

/// Returns true if a non-card record passed its limits but still counts
/// toward the moderate delinquency tally.
fn is_moderately_delinquent(record: &CreditRecord) -> bool {
    !record.is_credit_card() && record.days_overdue > MODERATE_OVERDUE_DAYS
}

/// Evaluate the whole credit history.
///
/// Records are scanned in the order given and the first one that fails its
/// own limits ends the check. The moderate delinquency tally is only judged
/// once every record has been seen.
pub fn check_credit_history(records: &[CreditRecord]) -> RuleResult {
    let mut moderately_delinquent = 0usize;

    for record in records {
        if let Some(reason) = check_record(record) {
            return RuleResult::reject(reason);
        }
        if is_moderately_delinquent(record) {
            moderately_delinquent += 1;
        }
    }

    if moderately_delinquent > MAX_MODERATELY_DELINQUENT_LOANS {
        return RuleResult::reject(RejectReason::TooManyDelinquentLoans {
            count: moderately_delinquent,
            limit: MAX_MODERATELY_DELINQUENT_LOANS,
            threshold_days: MODERATE_OVERDUE_DAYS,
        });
    }

    RuleResult::pass()
}

/// Credit bureau delinquency check. The most expensive check, run last.
#[derive(Debug, Default)]
pub struct CreditHistoryRule;

impl CreditHistoryRule {
    pub const ID: &'static str = "CREDIT_HISTORY";
}

impl StopCheck for CreditHistoryRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> RuleResult {
        check_credit_history(ctx.credit_history)
    }
}
