use crate::core::plan::CapturePlan;
use crate::core::{CaptureFlow, CaptureReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CaptureEngine<F: CaptureFlow> {
    flow: F,
    plan: CapturePlan,
    monitor: SystemMonitor,
}

impl<F: CaptureFlow> CaptureEngine<F> {
    pub fn new(flow: F, plan: CapturePlan) -> Self {
        Self {
            flow,
            plan,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(flow: F, plan: CapturePlan, enabled: bool) -> Self {
        Self {
            flow,
            plan,
            monitor: SystemMonitor::new(enabled),
        }
    }

    /// Run login, capture, and finalize in order. The browser session is
    /// released on every exit path, success or failure.
    pub async fn run(&self) -> Result<CaptureReport> {
        let result = self.run_phases().await;

        match self.flow.close().await {
            Ok(()) => tracing::info!("🔒 Browser session closed"),
            Err(e) => tracing::warn!("Failed to close browser session: {}", e),
        }
        self.monitor.log_final_stats();

        result
    }

    async fn run_phases(&self) -> Result<CaptureReport> {
        let login_ok = self.flow.login(&self.plan.login).await?;
        self.monitor.log_stats("Login");

        let mut artifacts = Vec::with_capacity(self.plan.steps.len());
        for step in &self.plan.steps {
            let artifact = self.flow.capture(step).await?;
            artifacts.push(artifact);
            self.monitor.log_stats(&step.label);
        }

        tracing::info!("Captured {} artifacts", artifacts.len());
        self.flow.finalize(artifacts, login_ok).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Artifact, CaptureStep, LoginStep};
    use crate::utils::error::CaptureError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct StubFlow {
        fail_capture: bool,
        closed: Arc<AtomicBool>,
    }

    #[async_trait]
    impl CaptureFlow for StubFlow {
        async fn login(&self, _step: &LoginStep) -> Result<bool> {
            Ok(true)
        }

        async fn capture(&self, step: &CaptureStep) -> Result<Artifact> {
            if self.fail_capture {
                return Err(CaptureError::WebDriverError {
                    error: "unknown error".to_string(),
                    message: "screenshot failed".to_string(),
                });
            }
            Ok(Artifact {
                file_name: step.file_name.clone(),
                bytes: 1,
                kind: step.kind,
            })
        }

        async fn finalize(
            &self,
            artifacts: Vec<Artifact>,
            login_ok: bool,
        ) -> Result<CaptureReport> {
            Ok(CaptureReport {
                artifacts,
                login_ok,
                finished_at: chrono::Utc::now(),
            })
        }

        async fn close(&self) -> Result<()> {
            self.closed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_captures_every_planned_step() {
        let closed = Arc::new(AtomicBool::new(false));
        let flow = StubFlow {
            fail_capture: false,
            closed: closed.clone(),
        };
        let plan = CapturePlan::standard("cicd-demo-pipeline", 5).without_settles();

        let engine = CaptureEngine::new(flow, plan);
        let report = engine.run().await.unwrap();

        assert_eq!(report.artifacts.len(), 5);
        assert!(report.login_ok);
        assert!(closed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_session_closed_even_when_capture_fails() {
        let closed = Arc::new(AtomicBool::new(false));
        let flow = StubFlow {
            fail_capture: true,
            closed: closed.clone(),
        };
        let plan = CapturePlan::standard("cicd-demo-pipeline", 5).without_settles();

        let engine = CaptureEngine::new(flow, plan);
        let result = engine.run().await;

        assert!(result.is_err());
        assert!(closed.load(Ordering::SeqCst));
    }
}
