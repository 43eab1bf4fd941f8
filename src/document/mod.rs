//! Typed access to a client record.
//!
//! The record is parsed once into a JSON tree and fields are then looked up
//! by dotted path (`passport.issuedAt`). A field that is missing or has the
//! wrong JSON type reads as absent.

pub mod extract;
pub mod source;

pub use extract::{extract_application, CreditRecordInput};
pub use source::{read_client_file, ClientFileError};

use serde_json::{Map, Value};

use crate::error::EvaluationError;

/// A parsed client record.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parse raw text. The top-level value must be an object.
    pub fn parse(text: &str) -> Result<Self, EvaluationError> {
        let root: Value = serde_json::from_str(text)?;
        Document::from_value(root)
    }

    pub fn from_value(root: Value) -> Result<Self, EvaluationError> {
        if !root.is_object() {
            return Err(EvaluationError::malformed(
                "client record must be a JSON object",
            ));
        }
        Ok(Document { root })
    }

    /// Look up a node by dotted path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |node, key| node.as_object()?.get(key))
    }

    pub fn string(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    /// Non-negative integer at `path`.
    pub fn integer(&self, path: &str) -> Option<u64> {
        self.get(path)?.as_u64()
    }

    pub fn object(&self, path: &str) -> Option<&Map<String, Value>> {
        self.get(path)?.as_object()
    }

    /// Array elements at `path`.
    pub fn records(&self, path: &str) -> Option<&[Value]> {
        self.get(path)?.as_array().map(Vec::as_slice)
    }
}
