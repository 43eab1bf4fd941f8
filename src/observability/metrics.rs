use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::domain::Verdict;

/// Metrics registry for the engine.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Total evaluations performed
    pub evaluations_total: AtomicU64,

    /// Evaluations by outcome
    pub evaluations_approved: AtomicU64,
    pub evaluations_rejected_rule: AtomicU64,
    pub evaluations_rejected_input: AtomicU64,

    /// Evaluation latency buckets (microseconds)
    pub latency_under_10us: AtomicU64,
    pub latency_10_100us: AtomicU64,
    pub latency_100us_1ms: AtomicU64,
    pub latency_over_1ms: AtomicU64,

    /// Stop check counts
    pub checks_evaluated_total: AtomicU64,
    pub checks_failed_total: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        MetricsRegistry::default()
    }

    /// Record a verdict and the checks it ran.
    pub fn record_verdict(&self, verdict: &Verdict) {
        self.evaluations_total.fetch_add(1, Ordering::Relaxed);

        if verdict.is_approved() {
            self.evaluations_approved.fetch_add(1, Ordering::Relaxed);
        } else if verdict.error.is_some() {
            self.evaluations_rejected_input.fetch_add(1, Ordering::Relaxed);
        } else {
            self.evaluations_rejected_rule.fetch_add(1, Ordering::Relaxed);
        }

        for check in &verdict.checks {
            self.record_check(check.result.is_pass());
        }
    }

    /// Record a single stop check evaluation.
    pub fn record_check(&self, passed: bool) {
        self.checks_evaluated_total.fetch_add(1, Ordering::Relaxed);
        if !passed {
            self.checks_failed_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record evaluation latency.
    pub fn record_latency(&self, start: Instant) {
        let micros = start.elapsed().as_micros() as u64;

        if micros < 10 {
            self.latency_under_10us.fetch_add(1, Ordering::Relaxed);
        } else if micros < 100 {
            self.latency_10_100us.fetch_add(1, Ordering::Relaxed);
        } else if micros < 1000 {
            self.latency_100us_1ms.fetch_add(1, Ordering::Relaxed);
        } else {
            self.latency_over_1ms.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Export metrics in Prometheus format.
    pub fn to_prometheus(&self) -> String {
        format!(
            r#"# HELP stopcheck_evaluations_total Total number of evaluations
# TYPE stopcheck_evaluations_total counter
stopcheck_evaluations_total {}

# HELP stopcheck_evaluations Evaluations by outcome
# TYPE stopcheck_evaluations counter
stopcheck_evaluations{{outcome="approved"}} {}
stopcheck_evaluations{{outcome="rejected_rule"}} {}
stopcheck_evaluations{{outcome="rejected_input"}} {}

# HELP stopcheck_evaluation_latency_bucket Evaluation latency histogram
# TYPE stopcheck_evaluation_latency_bucket counter
stopcheck_evaluation_latency_bucket{{le="0.00001"}} {}
stopcheck_evaluation_latency_bucket{{le="0.0001"}} {}
stopcheck_evaluation_latency_bucket{{le="0.001"}} {}
stopcheck_evaluation_latency_bucket{{le="+Inf"}} {}

# HELP stopcheck_checks_evaluated_total Total stop check evaluations
# TYPE stopcheck_checks_evaluated_total counter
stopcheck_checks_evaluated_total {}

# HELP stopcheck_checks_failed_total Total stop checks that rejected
# TYPE stopcheck_checks_failed_total counter
stopcheck_checks_failed_total {}
"#,
            self.evaluations_total.load(Ordering::Relaxed),
            self.evaluations_approved.load(Ordering::Relaxed),
            self.evaluations_rejected_rule.load(Ordering::Relaxed),
            self.evaluations_rejected_input.load(Ordering::Relaxed),
            self.latency_under_10us.load(Ordering::Relaxed),
            self.latency_10_100us.load(Ordering::Relaxed),
            self.latency_100us_1ms.load(Ordering::Relaxed),
            self.latency_over_1ms.load(Ordering::Relaxed),
            self.checks_evaluated_total.load(Ordering::Relaxed),
            self.checks_failed_total.load(Ordering::Relaxed),
        )
    }
}

/// Guard for timing operations.
pub struct TimingGuard<'a> {
    registry: &'a MetricsRegistry,
    start: Instant,
}

impl<'a> TimingGuard<'a> {
    pub fn new(registry: &'a MetricsRegistry) -> Self {
        TimingGuard {
            registry,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for TimingGuard<'a> {
    fn drop(&mut self) {
        self.registry.record_latency(self.start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CheckRecord, RejectReason, RuleResult};
    use crate::error::EvaluationError;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_record_verdicts() {
        let metrics = MetricsRegistry::new();

        let pass = CheckRecord {
            check_id: "AGE".to_string(),
            result: RuleResult::pass(),
        };
        let reason = RejectReason::CreditCardOverdueDebt { debt: 1 };
        let fail = CheckRecord {
            check_id: "CREDIT_HISTORY".to_string(),
            result: RuleResult::reject(reason.clone()),
        };

        metrics.record_verdict(&Verdict::approved(today(), vec![pass.clone()]));
        metrics.record_verdict(&Verdict::rejected(today(), reason, vec![pass, fail]));
        metrics.record_verdict(&Verdict::failed(today(), EvaluationError::missing("birthDate")));

        assert_eq!(metrics.evaluations_total.load(Ordering::Relaxed), 3);
        assert_eq!(metrics.evaluations_approved.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.evaluations_rejected_rule.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.evaluations_rejected_input.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.checks_evaluated_total.load(Ordering::Relaxed), 3);
        assert_eq!(metrics.checks_failed_total.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_timing_guard_records_latency() {
        let metrics = MetricsRegistry::new();
        {
            let _timer = TimingGuard::new(&metrics);
        }

        let recorded = metrics.latency_under_10us.load(Ordering::Relaxed)
            + metrics.latency_10_100us.load(Ordering::Relaxed)
            + metrics.latency_100us_1ms.load(Ordering::Relaxed)
            + metrics.latency_over_1ms.load(Ordering::Relaxed);
        assert_eq!(recorded, 1);
    }

    #[test]
    fn test_prometheus_format() {
        let metrics = MetricsRegistry::new();
        metrics.record_verdict(&Verdict::approved(today(), Vec::new()));

        let output = metrics.to_prometheus();

        assert!(output.contains("stopcheck_evaluations_total 1"));
        assert!(output.contains("stopcheck_evaluations{outcome=\"approved\"} 1"));
    }
}
