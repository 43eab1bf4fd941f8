pub mod age;
pub mod credit_history;
pub mod passport;
pub mod traits;

pub use age::{check_age, AgeRule};
pub use credit_history::{check_credit_history, CreditHistoryRule};
pub use passport::{check_passport_validity, PassportRule};
pub use traits::{EvaluationContext, StopCheck};

use std::sync::Arc;

/// Ordered collection of stop checks.
///
/// The order is part of the contract: evaluation stops at the first
/// check that rejects.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub checks: Vec<Arc<dyn StopCheck>>,
}

impl RuleSet {
    /// The fixed underwriting sequence: age, then passport, then credit history.
    pub fn standard() -> Self {
        RuleSet {
            checks: vec![
                Arc::new(AgeRule),
                Arc::new(PassportRule),
                Arc::new(CreditHistoryRule),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::standard()
    }
}
