pub mod config;
pub mod core;
pub mod domain;
#[cfg(feature = "server")]
pub mod server;
pub mod utils;
pub mod webdriver;

pub use config::{cli::LocalStorage, CaptureConfig};
pub use crate::core::{engine::CaptureEngine, flow::JenkinsCaptureFlow, plan::CapturePlan};
pub use utils::error::{CaptureError, Result};
