/// Detection service access
///
/// This module handles:
/// - Uploading a photo to the detection endpoint (client.rs)
/// - The canned demo diagnosis used when no service is available (demo.rs)

pub mod client;
pub mod demo;

pub use client::{DetectError, DetectionClient};

use tracing::info;

use crate::config::ApiSettings;
use crate::state::data::{DiagnosisResult, PickedFile};

/// Where analyses are sent
#[derive(Debug, Clone)]
pub enum DetectionBackend {
    Remote(DetectionClient),
    Demo,
}

impl DetectionBackend {
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, DetectError> {
        if settings.demo {
            info!("Demo mode: analyses return a canned diagnosis");
            return Ok(Self::Demo);
        }
        Ok(Self::Remote(DetectionClient::new(settings)?))
    }

    pub async fn detect(self, file: PickedFile) -> Result<DiagnosisResult, DetectError> {
        match self {
            Self::Remote(client) => client.detect(file).await,
            Self::Demo => Ok(demo::detect().await),
        }
    }

    /// Short description for the status line
    pub fn describe(&self) -> String {
        match self {
            Self::Remote(client) => client.endpoint().to_string(),
            Self::Demo => "mode demo".to_string(),
        }
    }
}
