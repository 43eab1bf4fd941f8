use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a stop check rejected an application.
///
/// Each variant carries the observed value that tripped the check so the
/// reporter can explain the rejection without re-running anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    /// Applicant is younger than the minimum age
    AgeBelowMinimum { age: u32, minimum: u32 },

    /// Passport was issued before the latest milestone birthday reached
    PassportNotRenewed {
        milestone: u32,
        renewal_due: NaiveDate,
        issued_at: NaiveDate,
    },

    /// Credit card carries unpaid overdue debt
    CreditCardOverdueDebt { debt: u64 },

    /// Credit card has been overdue longer than allowed
    CreditCardOverdueDays { days: u64, limit: u64 },

    /// Non-card loan carries unpaid overdue debt
    LoanOverdueDebt { loan_type: String, debt: u64 },

    /// Non-card loan has been overdue longer than allowed
    LoanOverdueDays {
        loan_type: String,
        days: u64,
        limit: u64,
    },

    /// Too many non-card loans overdue past the moderate threshold
    TooManyDelinquentLoans {
        count: usize,
        limit: usize,
        threshold_days: u64,
    },
}

impl RejectReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::AgeBelowMinimum { .. } => "AGE_BELOW_MINIMUM",
            RejectReason::PassportNotRenewed { .. } => "PASSPORT_NOT_RENEWED",
            RejectReason::CreditCardOverdueDebt { .. } => "CREDIT_CARD_OVERDUE_DEBT",
            RejectReason::CreditCardOverdueDays { .. } => "CREDIT_CARD_OVERDUE_DAYS",
            RejectReason::LoanOverdueDebt { .. } => "LOAN_OVERDUE_DEBT",
            RejectReason::LoanOverdueDays { .. } => "LOAN_OVERDUE_DAYS",
            RejectReason::TooManyDelinquentLoans { .. } => "TOO_MANY_DELINQUENT_LOANS",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::AgeBelowMinimum { age, minimum } => {
                write!(f, "age below minimum ({age} < {minimum})")
            }
            RejectReason::PassportNotRenewed {
                milestone,
                renewal_due,
                issued_at,
            } => write!(
                f,
                "passport not renewed after applicable age milestone \
                 ({milestone}th birthday {renewal_due}, issued {issued_at})"
            ),
            RejectReason::CreditCardOverdueDebt { .. } => {
                write!(f, "unpaid overdue debt on credit card")
            }
            RejectReason::CreditCardOverdueDays { limit, .. } => {
                write!(f, "credit card overdue more than {limit} days")
            }
            RejectReason::LoanOverdueDebt { loan_type, .. } => {
                write!(f, "unpaid overdue debt on loan type \"{loan_type}\"")
            }
            RejectReason::LoanOverdueDays {
                loan_type, limit, ..
            } => write!(f, "loan type \"{loan_type}\" overdue more than {limit} days"),
            RejectReason::TooManyDelinquentLoans {
                limit,
                threshold_days,
                ..
            } => write!(
                f,
                "more than {limit} loans overdue beyond {threshold_days} days"
            ),
        }
    }
}
