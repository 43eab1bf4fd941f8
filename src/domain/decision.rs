use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::outcome::CheckRecord;
use super::reason::RejectReason;
use crate::error::EvaluationError;

/// Underwriting outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Application approved
    Approve,
    /// Application rejected by a stop check or by unusable input
    Reject,
}

impl Decision {
    #[inline]
    pub fn is_approved(&self) -> bool {
        *self == Decision::Approve
    }
}

impl Default for Decision {
    /// Anything undecided is a rejection.
    fn default() -> Self {
        Decision::Reject
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approve => write!(f, "APPROVE"),
            Decision::Reject => write!(f, "REJECT"),
        }
    }
}

/// Unique evaluation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationId(pub String);

impl EvaluationId {
    pub fn new() -> Self {
        EvaluationId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        EvaluationId::new()
    }
}

impl fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final result of evaluating one application.
///
/// At most one of `reason` and `error` is set, and only when the decision
/// is [`Decision::Reject`].
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub evaluation_id: EvaluationId,

    /// The date ages and milestones were computed against
    pub evaluated_on: NaiveDate,

    pub decision: Decision,

    /// The stop check reason, when a check rejected
    pub reason: Option<RejectReason>,

    /// The input problem, when the record could not be evaluated
    pub error: Option<EvaluationError>,

    /// Checks run, in order, up to and including the first rejection
    pub checks: Vec<CheckRecord>,
}

impl Verdict {
    /// Create an approving verdict.
    pub fn approved(evaluated_on: NaiveDate, checks: Vec<CheckRecord>) -> Self {
        Verdict {
            evaluation_id: EvaluationId::new(),
            evaluated_on,
            decision: Decision::Approve,
            reason: None,
            error: None,
            checks,
        }
    }

    /// Create a verdict rejected by a stop check.
    pub fn rejected(evaluated_on: NaiveDate, reason: RejectReason, checks: Vec<CheckRecord>) -> Self {
        Verdict {
            evaluation_id: EvaluationId::new(),
            evaluated_on,
            decision: Decision::Reject,
            reason: Some(reason),
            error: None,
            checks,
        }
    }

    /// Create a verdict rejected because the input was unusable.
    pub fn failed(evaluated_on: NaiveDate, error: EvaluationError) -> Self {
        Verdict {
            evaluation_id: EvaluationId::new(),
            evaluated_on,
            decision: Decision::Reject,
            reason: None,
            error: Some(error),
            checks: Vec::new(),
        }
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        self.decision.is_approved()
    }

    /// Machine code of whatever caused a rejection; "OK" when approved.
    pub fn code(&self) -> &'static str {
        match (&self.reason, &self.error) {
            (Some(reason), _) => reason.code(),
            (None, Some(error)) => error.code(),
            (None, None) => "OK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_decision_default_is_reject() {
        assert_eq!(Decision::default(), Decision::Reject);
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_string(&Decision::Approve).unwrap();
        assert_eq!(json, "\"APPROVE\"");

        let parsed: Decision = serde_json::from_str("\"REJECT\"").unwrap();
        assert_eq!(parsed, Decision::Reject);
    }

    #[test]
    fn test_verdict_codes() {
        assert_eq!(Verdict::approved(today(), Vec::new()).code(), "OK");

        let rejected = Verdict::rejected(
            today(),
            RejectReason::AgeBelowMinimum { age: 19, minimum: 20 },
            Vec::new(),
        );
        assert!(!rejected.is_approved());
        assert_eq!(rejected.code(), "AGE_BELOW_MINIMUM");

        let failed = Verdict::failed(today(), EvaluationError::missing("creditHistory"));
        assert!(!failed.is_approved());
        assert!(failed.reason.is_none());
        assert_eq!(failed.code(), "MISSING_FIELD");
    }

    #[test]
    fn test_evaluation_ids_are_unique() {
        assert_ne!(EvaluationId::new(), EvaluationId::new());
    }
}
