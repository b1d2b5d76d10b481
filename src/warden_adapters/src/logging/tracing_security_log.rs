use warden_core::{SecurityEvent, SecurityEventOutcome, SecurityLog};

pub const SECURITY_TARGET: &str = "security";

/// Writes security events as `tracing` events under the `security` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSecurityLog;

#[async_trait::async_trait]
impl SecurityLog for TracingSecurityLog {
    async fn record(&self, event: SecurityEvent) {
        match event.outcome {
            SecurityEventOutcome::Success => tracing::info!(
                target: SECURITY_TARGET,
                at = %event.at,
                kind = %event.kind,
                subject = %event.subject,
                reason = %event.reason,
                "{}",
                event
            ),
            SecurityEventOutcome::Failure => tracing::warn!(
                target: SECURITY_TARGET,
                at = %event.at,
                kind = %event.kind,
                subject = %event.subject,
                reason = %event.reason,
                "{}",
                event
            ),
        }
    }
}
