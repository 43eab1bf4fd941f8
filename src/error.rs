use thiserror::Error;

use crate::date::DateError;

/// Errors raised while turning a client record into evaluation inputs.
///
/// None of these escape [`RuleEngine::evaluate_document`](crate::engine::RuleEngine::evaluate_document):
/// each one is absorbed into a rejecting [`Verdict`](crate::domain::Verdict).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("required field `{field}` is missing")]
    MissingField { field: String },

    #[error("field `{field}` holds malformed date `{value}`: {source}")]
    MalformedDate {
        field: String,
        value: String,
        #[source]
        source: DateError,
    },

    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl EvaluationError {
    pub fn missing(field: impl Into<String>) -> Self {
        EvaluationError::MissingField {
            field: field.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        EvaluationError::MalformedDocument(message.into())
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            EvaluationError::MissingField { .. } => "MISSING_FIELD",
            EvaluationError::MalformedDate { .. } => "MALFORMED_DATE",
            EvaluationError::MalformedDocument(_) => "MALFORMED_DOCUMENT",
        }
    }
}

impl From<serde_json::Error> for EvaluationError {
    fn from(err: serde_json::Error) -> Self {
        EvaluationError::MalformedDocument(err.to_string())
    }
}
