pub mod applicant;
pub mod credit;
pub mod decision;
pub mod outcome;
pub mod reason;

pub use applicant::{Applicant, Application, Passport};
pub use credit::{CreditRecord, CREDIT_CARD_TYPE};
pub use decision::{Decision, EvaluationId, Verdict};
pub use outcome::{CheckRecord, RuleResult};
pub use reason::RejectReason;
