use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::document::{extract_application, Document};
use crate::domain::{Applicant, Application, CheckRecord, CreditRecord, Verdict};
use crate::error::EvaluationError;
use crate::observability::{MetricsRegistry, TimingGuard};
use crate::rules::{EvaluationContext, RuleSet};

/// Runs the stop checks against applications.
///
/// Evaluation is fail closed: any problem with the input yields a rejecting
/// verdict carrying the [`EvaluationError`], never an approval and never a
/// panic or error past this boundary.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    ruleset: RuleSet,
    metrics: Arc<MetricsRegistry>,
}

impl RuleEngine {
    /// Engine running the standard stop checks.
    pub fn new() -> Self {
        RuleEngine::with_metrics(Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(metrics: Arc<MetricsRegistry>) -> Self {
        RuleEngine {
            ruleset: RuleSet::standard(),
            metrics,
        }
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Run the checks in order, stopping at the first rejection.
    pub fn evaluate(&self, application: &Application, today: NaiveDate) -> Verdict {
        let _timer = TimingGuard::new(&self.metrics);
        let verdict = self.run_checks(application, today);
        self.finish(verdict)
    }

    /// Evaluate a raw client record.
    ///
    /// Parsing and extraction failures are absorbed into a rejecting verdict.
    pub fn evaluate_document(&self, text: &str, today: NaiveDate) -> Verdict {
        let _timer = TimingGuard::new(&self.metrics);

        let application = match Document::parse(text).and_then(|doc| extract_application(&doc)) {
            Ok(application) => application,
            Err(err) => return self.finish(self.reject_input(err, today)),
        };

        let verdict = self.run_checks(&application, today);
        self.finish(verdict)
    }

    fn run_checks(&self, application: &Application, today: NaiveDate) -> Verdict {
        let ctx = EvaluationContext::new(application, today);
        let mut checks = Vec::with_capacity(self.ruleset.len());

        for check in &self.ruleset.checks {
            let result = check.evaluate(&ctx);
            debug!(
                check = check.id(),
                passed = result.is_pass(),
                age = ctx.age,
                "Stop check evaluated"
            );

            let reason = result.reason().cloned();
            checks.push(CheckRecord {
                check_id: check.id().to_string(),
                result,
            });

            if let Some(reason) = reason {
                return Verdict::rejected(today, reason, checks);
            }
        }

        Verdict::approved(today, checks)
    }

    fn reject_input(&self, err: EvaluationError, today: NaiveDate) -> Verdict {
        warn!(code = err.code(), error = %err, "Client record could not be evaluated");
        Verdict::failed(today, err)
    }

    fn finish(&self, verdict: Verdict) -> Verdict {
        self.metrics.record_verdict(&verdict);
        info!(
            evaluation_id = %verdict.evaluation_id,
            decision = %verdict.decision,
            code = verdict.code(),
            evaluated_on = %verdict.evaluated_on,
            "Application evaluated"
        );
        verdict
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        RuleEngine::new()
    }
}

/// Evaluate already-resolved inputs with the standard checks.
pub fn evaluate(
    birth_date: NaiveDate,
    passport_issued_at: NaiveDate,
    credit_records: &[CreditRecord],
    today: NaiveDate,
) -> Verdict {
    let application = Application::new(
        Applicant::new(birth_date, passport_issued_at),
        credit_records.to_vec(),
    );
    RuleEngine::new().evaluate(&application, today)
}
