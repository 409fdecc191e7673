use crate::domain::model::{Artifact, CaptureReport, CaptureStep, LoginStep};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// File names and sizes currently present, sorted by name.
    fn list_files(&self)
        -> impl std::future::Future<Output = Result<Vec<(String, u64)>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn webdriver_url(&self) -> &str;
    fn username(&self) -> &str;
    fn password(&self) -> &str;
    fn job_name(&self) -> &str;
    fn build_number(&self) -> u32;
    fn output_dir(&self) -> &str;
    fn element_timeout(&self) -> Duration;
}

#[async_trait]
pub trait CaptureFlow: Send + Sync {
    /// Returns whether the login form was found and submitted.
    async fn login(&self, step: &LoginStep) -> Result<bool>;
    async fn capture(&self, step: &CaptureStep) -> Result<Artifact>;
    async fn finalize(&self, artifacts: Vec<Artifact>, login_ok: bool) -> Result<CaptureReport>;
    async fn close(&self) -> Result<()>;
}
