use crate::core::{ArtifactKind, CaptureStep, LoginStep};
use std::time::Duration;

/// The ordered set of pages captured for one pipeline build.
#[derive(Debug, Clone)]
pub struct CapturePlan {
    pub login: LoginStep,
    pub steps: Vec<CaptureStep>,
}

impl CapturePlan {
    /// The standard evidence set for a build: classic pipeline view, console
    /// output, Blue Ocean visualization, dashboard, and the plain-text
    /// console log.
    pub fn standard(job: &str, build: u32) -> Self {
        let steps = vec![
            CaptureStep {
                label: "Classic pipeline view".to_string(),
                path: format!("/job/{}/{}/", job, build),
                settle: Duration::from_secs(3),
                wait_for: None,
                file_name: format!("1_classic_pipeline_build_{}.png", build),
                kind: ArtifactKind::Screenshot,
            },
            CaptureStep {
                label: "Console output".to_string(),
                path: format!("/job/{}/{}/console", job, build),
                settle: Duration::from_secs(2),
                wait_for: None,
                file_name: format!("2_console_output_build_{}.png", build),
                kind: ArtifactKind::Screenshot,
            },
            CaptureStep {
                label: "Blue Ocean pipeline view".to_string(),
                path: format!(
                    "/blue/organizations/jenkins/{}/detail/{}/{}/pipeline",
                    job, job, build
                ),
                // Blue Ocean needs more time to load
                settle: Duration::from_secs(5),
                wait_for: Some(".PipelineGraph".to_string()),
                file_name: format!("3_blueocean_pipeline_build_{}.png", build),
                kind: ArtifactKind::Screenshot,
            },
            CaptureStep {
                label: "Jenkins dashboard".to_string(),
                path: "/".to_string(),
                settle: Duration::from_secs(2),
                wait_for: None,
                file_name: "4_jenkins_dashboard.png".to_string(),
                kind: ArtifactKind::Screenshot,
            },
            CaptureStep {
                label: "Console text export".to_string(),
                path: format!("/job/{}/{}/consoleText", job, build),
                settle: Duration::from_secs(1),
                wait_for: None,
                file_name: format!("console_output_build_{}.txt", build),
                kind: ArtifactKind::ConsoleText,
            },
        ];

        Self {
            login: LoginStep {
                settle: Duration::from_secs(2),
                submit_settle: Duration::from_secs(3),
            },
            steps,
        }
    }

    /// Zero out all settle times; used by tests to avoid real sleeps.
    pub fn without_settles(mut self) -> Self {
        self.login.settle = Duration::ZERO;
        self.login.submit_settle = Duration::ZERO;
        for step in &mut self.steps {
            step.settle = Duration::ZERO;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_plan_file_names_and_order() {
        let plan = CapturePlan::standard("cicd-demo-pipeline", 5);
        let names: Vec<&str> = plan.steps.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "1_classic_pipeline_build_5.png",
                "2_console_output_build_5.png",
                "3_blueocean_pipeline_build_5.png",
                "4_jenkins_dashboard.png",
                "console_output_build_5.txt",
            ]
        );
    }

    #[test]
    fn test_only_last_step_is_text_export() {
        let plan = CapturePlan::standard("cicd-demo-pipeline", 5);
        assert!(plan.steps[..4]
            .iter()
            .all(|s| s.kind == ArtifactKind::Screenshot));
        assert_eq!(plan.steps[4].kind, ArtifactKind::ConsoleText);
        assert_eq!(plan.steps[4].path, "/job/cicd-demo-pipeline/5/consoleText");
    }

    #[test]
    fn test_blue_ocean_awaits_pipeline_graph() {
        let plan = CapturePlan::standard("nightly", 12);
        let blue_ocean = &plan.steps[2];
        assert_eq!(blue_ocean.wait_for.as_deref(), Some(".PipelineGraph"));
        assert_eq!(
            blue_ocean.path,
            "/blue/organizations/jenkins/nightly/detail/nightly/12/pipeline"
        );
    }

    #[test]
    fn test_without_settles_zeroes_all_waits() {
        let plan = CapturePlan::standard("cicd-demo-pipeline", 5).without_settles();
        assert_eq!(plan.login.settle, Duration::ZERO);
        assert!(plan.steps.iter().all(|s| s.settle == Duration::ZERO));
    }
}
