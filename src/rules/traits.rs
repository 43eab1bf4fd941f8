use chrono::NaiveDate;
use std::fmt::Debug;

use crate::domain::{Applicant, Application, CreditRecord, RuleResult};

/// Inputs shared by every stop check during one evaluation.
///
/// Age is computed once, up front, against the evaluation date.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub applicant: &'a Applicant,
    pub credit_history: &'a [CreditRecord],
    pub age: u32,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(application: &'a Application, today: NaiveDate) -> Self {
        EvaluationContext {
            applicant: &application.applicant,
            credit_history: &application.credit_history,
            age: application.applicant.age_on(today),
        }
    }
}

/// A single underwriting stop check.
///
/// Checks are pure: they read the context and report pass or a reason,
/// and never print or log the verdict themselves.
pub trait StopCheck: Send + Sync + Debug {
    /// Unique identifier for this check.
    fn id(&self) -> &str;

    /// Evaluate the check against one application.
    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> RuleResult;
}
