use crate::result::Rejection;
use tracing::warn;

/// Receives one call per rejected request.
pub trait RejectionSink: Send + Sync {
    fn record(&self, rejection: &Rejection);
}

impl<F> RejectionSink for F
where
    F: Fn(&Rejection) + Send + Sync,
{
    fn record(&self, rejection: &Rejection) {
        self(rejection)
    }
}

/// Emits a `warn` level `tracing` event for every rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RejectionSink for TracingSink {
    fn record(&self, rejection: &Rejection) {
        warn!(
            rule = %rejection.rule,
            reason = %rejection.reason,
            status = rejection.status(),
            evidence = %rejection.evidence_summary(),
            "blocked server action request"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl RejectionSink for NoopSink {
    fn record(&self, _rejection: &Rejection) {}
}

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;
