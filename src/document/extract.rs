use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Document;
use crate::date::resolve_field;
use crate::domain::{Applicant, Application, CreditRecord};
use crate::error::EvaluationError;

pub const BIRTH_DATE: &str = "birthDate";
pub const PASSPORT: &str = "passport";
pub const PASSPORT_ISSUED_AT: &str = "passport.issuedAt";
pub const CREDIT_HISTORY: &str = "creditHistory";

/// Wire shape of one credit history entry.
///
/// Absent or null fields fall back to their defaults; values of the wrong
/// type fail deserialization.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRecordInput {
    #[serde(rename = "type", default)]
    pub loan_type: Option<String>,

    #[serde(default)]
    pub current_overdue_debt: Option<u64>,

    #[serde(default)]
    pub number_of_days_on_overdue: Option<u64>,
}

impl CreditRecordInput {
    /// Decode the entry at `index` of the credit history array.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, EvaluationError> {
        if !value.is_object() {
            return Err(EvaluationError::malformed(format!(
                "{CREDIT_HISTORY}[{index}] must be an object"
            )));
        }

        CreditRecordInput::deserialize(value).map_err(|err| {
            EvaluationError::malformed(format!("{CREDIT_HISTORY}[{index}]: {err}"))
        })
    }

    /// Convert to a CreditRecord for rule evaluation.
    pub fn into_record(self) -> CreditRecord {
        CreditRecord {
            loan_type: self.loan_type.unwrap_or_default(),
            current_overdue_debt: self.current_overdue_debt.unwrap_or(0),
            days_overdue: self.number_of_days_on_overdue.unwrap_or(0),
        }
    }
}

/// Pull the evaluation inputs out of a client record.
///
/// All required fields are located before any date is parsed, so a record
/// missing `creditHistory` reports that even if its dates are malformed.
pub fn extract_application(doc: &Document) -> Result<Application, EvaluationError> {
    let birth_date = doc
        .string(BIRTH_DATE)
        .ok_or_else(|| EvaluationError::missing(BIRTH_DATE))?;
    doc.object(PASSPORT)
        .ok_or_else(|| EvaluationError::missing(PASSPORT))?;
    let issued_at = doc
        .string(PASSPORT_ISSUED_AT)
        .ok_or_else(|| EvaluationError::missing(PASSPORT_ISSUED_AT))?;
    let history = doc
        .records(CREDIT_HISTORY)
        .ok_or_else(|| EvaluationError::missing(CREDIT_HISTORY))?;

    let birth_date = resolve_field(BIRTH_DATE, birth_date)?;
    let issued_at = resolve_field(PASSPORT_ISSUED_AT, issued_at)?;

    let credit_history = history
        .iter()
        .enumerate()
        .map(|(index, value)| {
            CreditRecordInput::from_value(index, value).map(CreditRecordInput::into_record)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Application::new(
        Applicant::new(birth_date, issued_at),
        credit_history,
    ))
}
