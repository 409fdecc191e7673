pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "capture-screenshots")]
#[command(about = "Capture screenshots of a Jenkins pipeline run over WebDriver")]
pub struct CaptureConfig {
    #[arg(long, env = "JENKINS_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    #[arg(long, env = "JENKINS_USER", default_value = "admin")]
    pub username: String,

    #[arg(long, env = "JENKINS_PASS", default_value = "admin", hide_env_values = true)]
    pub password: String,

    /// Address of the WebDriver remote end (chromedriver).
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    #[arg(long, default_value = "cicd-demo-pipeline")]
    pub job: String,

    /// The successful build to capture.
    #[arg(long, default_value = "5")]
    pub build: u32,

    #[arg(long, default_value = "jenkins-screenshots")]
    pub output_dir: String,

    /// Seconds to wait for awaited page elements before giving up.
    #[arg(long, default_value = "10")]
    pub element_timeout: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU/memory between capture phases")]
    pub monitor: bool,
}

impl ConfigProvider for CaptureConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }

    fn job_name(&self) -> &str {
        &self.job
    }

    fn build_number(&self) -> u32 {
        self.build
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn element_timeout(&self) -> Duration {
        Duration::from_secs(self.element_timeout)
    }
}

impl Validate for CaptureConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_url("webdriver_url", &self.webdriver_url)?;
        validate_non_empty_string("username", &self.username)?;
        validate_non_empty_string("password", &self.password)?;
        validate_non_empty_string("job", &self.job)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_positive_number("element_timeout", self.element_timeout, 1)?;
        Ok(())
    }
}
