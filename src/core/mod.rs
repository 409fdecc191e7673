pub mod engine;
pub mod flow;
pub mod plan;

pub use crate::domain::model::{Artifact, ArtifactKind, CaptureReport, CaptureStep, LoginStep};
pub use crate::domain::ports::{CaptureFlow, ConfigProvider, Storage};
pub use crate::utils::error::Result;
