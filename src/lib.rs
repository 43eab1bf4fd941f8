pub mod config;
pub mod date;
pub mod document;
pub mod domain;
pub mod engine;
pub mod error;
pub mod observability;
pub mod report;
pub mod rules;

pub use config::Config;
pub use domain::{Application, CreditRecord, Decision, RejectReason, Verdict};
pub use engine::RuleEngine;
pub use error::EvaluationError;
pub use rules::{RuleSet, StopCheck};
