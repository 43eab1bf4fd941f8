use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::credit::CreditRecord;

/// Identity document of the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passport {
    /// Date the current passport was issued
    pub issued_at: NaiveDate,
}

/// The person applying for the loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub birth_date: NaiveDate,
    pub passport: Passport,
}

impl Applicant {
    pub fn new(birth_date: NaiveDate, passport_issued_at: NaiveDate) -> Self {
        Applicant {
            birth_date,
            passport: Passport {
                issued_at: passport_issued_at,
            },
        }
    }

    /// Whole years lived as of `today`. A birth date in the future yields 0.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_on(self.birth_date, today)
    }

    /// Date of the given birthday. Feb 29 births fall on Feb 28 in common years.
    pub fn birthday(&self, years: u32) -> Option<NaiveDate> {
        birthday(self.birth_date, years)
    }
}

/// Whole calendar years between `birth_date` and `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth_date).unwrap_or(0)
}

/// `birth_date` shifted by `years`, clamped to the end of the month.
pub fn birthday(birth_date: NaiveDate, years: u32) -> Option<NaiveDate> {
    birth_date.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Everything the stop checks need about one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub applicant: Applicant,

    /// Credit bureau records in the order they were reported
    #[serde(default)]
    pub credit_history: Vec<CreditRecord>,
}

impl Application {
    pub fn new(applicant: Applicant, credit_history: Vec<CreditRecord>) -> Self {
        Application {
            applicant,
            credit_history,
        }
    }
}
