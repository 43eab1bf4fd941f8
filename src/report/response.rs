use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{CheckRecord, Decision, EvaluationId, RejectReason, Verdict};

/// Serializable view of a verdict.
#[derive(Debug, Serialize)]
pub struct VerdictReport {
    pub evaluation_id: EvaluationId,

    /// The decision outcome
    pub decision: Decision,

    pub approved: bool,

    /// Machine code of the rejection cause, "OK" when approved
    pub code: String,

    /// Human-readable rejection cause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Structured stop check reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,

    /// Input problem description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub evaluated_on: NaiveDate,

    /// Checks run, in order
    pub checks: Vec<CheckReport>,
}

/// Outcome of one check in the report.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub check_id: String,
    pub passed: bool,
}

impl From<&CheckRecord> for CheckReport {
    fn from(record: &CheckRecord) -> Self {
        CheckReport {
            check_id: record.check_id.clone(),
            passed: record.result.is_pass(),
        }
    }
}

impl From<&Verdict> for VerdictReport {
    fn from(verdict: &Verdict) -> Self {
        let message = match (&verdict.reason, &verdict.error) {
            (Some(reason), _) => Some(reason.to_string()),
            (None, Some(error)) => Some(error.to_string()),
            (None, None) => None,
        };

        VerdictReport {
            evaluation_id: verdict.evaluation_id.clone(),
            decision: verdict.decision,
            approved: verdict.is_approved(),
            code: verdict.code().to_string(),
            message,
            reason: verdict.reason.clone(),
            error: verdict.error.as_ref().map(ToString::to_string),
            evaluated_on: verdict.evaluated_on,
            checks: verdict.checks.iter().map(CheckReport::from).collect(),
        }
    }
}
