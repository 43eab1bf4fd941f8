use serde::{Deserialize, Serialize};

/// Bureau category that marks a record as a credit card.
pub const CREDIT_CARD_TYPE: &str = "Кредитная карта";

/// One entry of the applicant's credit history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreditRecord {
    /// Free-text loan category; empty when the bureau omitted it
    #[serde(default)]
    pub loan_type: String,

    /// Overdue amount still unpaid
    #[serde(default)]
    pub current_overdue_debt: u64,

    /// Longest overdue streak in days
    #[serde(default)]
    pub days_overdue: u64,
}

impl CreditRecord {
    pub fn new(loan_type: impl Into<String>, current_overdue_debt: u64, days_overdue: u64) -> Self {
        CreditRecord {
            loan_type: loan_type.into(),
            current_overdue_debt,
            days_overdue,
        }
    }

    /// Create a credit card record.
    pub fn credit_card(current_overdue_debt: u64, days_overdue: u64) -> Self {
        CreditRecord::new(CREDIT_CARD_TYPE, current_overdue_debt, days_overdue)
    }

    /// Returns true if the record is a credit card.
    #[inline]
    pub fn is_credit_card(&self) -> bool {
        self.loan_type == CREDIT_CARD_TYPE
    }

    /// Returns true if there is unpaid overdue debt.
    #[inline]
    pub fn has_overdue_debt(&self) -> bool {
        self.current_overdue_debt > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card_detection() {
        assert!(CreditRecord::credit_card(0, 0).is_credit_card());
        assert!(!CreditRecord::new("Ипотека", 0, 0).is_credit_card());
        assert!(!CreditRecord::default().is_credit_card());
    }

    #[test]
    fn test_category_match_is_exact() {
        assert!(!CreditRecord::new("кредитная карта", 0, 0).is_credit_card());
        assert!(!CreditRecord::new(" Кредитная карта", 0, 0).is_credit_card());
    }

    #[test]
    fn test_overdue_debt() {
        assert!(CreditRecord::new("Автокредит", 1, 0).has_overdue_debt());
        assert!(!CreditRecord::new("Автокредит", 0, 90).has_overdue_debt());
    }
}
