use crate::core::{
    Artifact, ArtifactKind, CaptureFlow, CaptureReport, CaptureStep, ConfigProvider, LoginStep,
    Storage,
};
use crate::utils::error::{CaptureError, Result};
use crate::webdriver::Session;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Drives a Jenkins UI through a WebDriver session and writes the produced
/// artifacts through the storage port.
pub struct JenkinsCaptureFlow<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    session: Session,
}

impl<S: Storage, C: ConfigProvider> JenkinsCaptureFlow<S, C> {
    pub async fn connect(storage: S, config: C) -> Result<Self> {
        let session = Session::start(config.webdriver_url()).await?;
        Ok(Self {
            storage,
            config,
            session,
        })
    }

    fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), path)
    }

    async fn submit_login_form(&self, step: &LoginStep) -> Result<()> {
        // 找到並填寫登入表單
        let username_field = self.session.find_element("input[name='j_username']").await?;
        let password_field = self.session.find_element("input[name='j_password']").await?;

        self.session
            .send_keys(&username_field, self.config.username())
            .await?;
        self.session
            .send_keys(&password_field, self.config.password())
            .await?;

        let submit_button = self.session.find_element("[name='Submit']").await?;
        self.session.click(&submit_button).await?;
        sleep(step.submit_settle).await;
        Ok(())
    }

    /// Poll for `selector` until it appears or the configured timeout passes.
    /// The capture proceeds either way; a slow page only costs a warning.
    async fn wait_for_element(&self, selector: &str) {
        let deadline = Instant::now() + self.config.element_timeout();
        loop {
            match self.session.find_element(selector).await {
                Ok(_) => return,
                Err(CaptureError::ElementNotFound { .. }) if Instant::now() < deadline => {
                    sleep(Duration::from_millis(500)).await;
                }
                Err(e) => {
                    tracing::warn!("Element '{}' not ready, capturing anyway: {}", selector, e);
                    return;
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> CaptureFlow for JenkinsCaptureFlow<S, C> {
    async fn login(&self, step: &LoginStep) -> Result<bool> {
        tracing::info!("Logging in to Jenkins at {}...", self.config.base_url());
        self.session.navigate(&self.page_url("/login")).await?;
        sleep(step.settle).await;

        match self.submit_login_form(step).await {
            Ok(()) => {
                tracing::info!("✅ Logged in successfully");
                Ok(true)
            }
            Err(CaptureError::ElementNotFound { selector }) => {
                tracing::warn!(
                    "Login form not found or already logged in (missing '{}')",
                    selector
                );
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn capture(&self, step: &CaptureStep) -> Result<Artifact> {
        match step.kind {
            ArtifactKind::Screenshot => tracing::info!("📸 Capturing {}...", step.label),
            ArtifactKind::ConsoleText => tracing::info!("📄 Downloading {}...", step.label),
        }

        self.session.navigate(&self.page_url(&step.path)).await?;
        sleep(step.settle).await;

        if let Some(selector) = &step.wait_for {
            self.wait_for_element(selector).await;
        }

        let data = match step.kind {
            ArtifactKind::Screenshot => self.session.screenshot().await?,
            ArtifactKind::ConsoleText => {
                let pre = self.session.find_element("pre").await?;
                self.session.text(&pre).await?.into_bytes()
            }
        };

        self.storage.write_file(&step.file_name, &data).await?;
        tracing::info!("✅ Saved: {}/{}", self.config.output_dir(), step.file_name);

        Ok(Artifact {
            file_name: step.file_name.clone(),
            bytes: data.len() as u64,
            kind: step.kind,
        })
    }

    async fn finalize(&self, artifacts: Vec<Artifact>, login_ok: bool) -> Result<CaptureReport> {
        let files = self.storage.list_files().await?;
        tracing::info!("📋 Captured files:");
        for (name, size) in &files {
            tracing::info!("  - {} ({:.1} KB)", name, *size as f64 / 1024.0);
        }

        Ok(CaptureReport {
            artifacts,
            login_ok,
            finished_at: chrono::Utc::now(),
        })
    }

    async fn close(&self) -> Result<()> {
        self.session.close().await
    }
}
