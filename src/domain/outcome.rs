use serde::{Deserialize, Serialize};

use super::reason::RejectReason;

/// Result of running a single stop check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "lowercase")]
pub enum RuleResult {
    /// Check passed
    Pass,
    /// Check rejected the application
    Reject(RejectReason),
}

impl RuleResult {
    /// Create a passing result.
    #[inline]
    pub fn pass() -> Self {
        RuleResult::Pass
    }

    /// Create a rejecting result.
    pub fn reject(reason: RejectReason) -> Self {
        RuleResult::Reject(reason)
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, RuleResult::Pass)
    }

    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            RuleResult::Pass => None,
            RuleResult::Reject(reason) => Some(reason),
        }
    }
}

impl Default for RuleResult {
    fn default() -> Self {
        RuleResult::pass()
    }
}

/// Record of one check having been run during an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// The check that ran
    pub check_id: String,

    pub result: RuleResult,
}
