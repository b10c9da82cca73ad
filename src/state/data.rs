/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the detection service, the workflow and the UI layer.

use iced::widget::image::Handle;
use serde::{Deserialize, Serialize};

/// How serious a diagnosed condition is
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Shown by the result view; the endpoint does not document it
    Healthy,
    Low,
    Medium,
    High,
}

/// Diagnosis returned by a successful detection call
///
/// Immutable once received. Confidence is a percentage (0-100) and is
/// taken as-is from the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiagnosisResult {
    pub disease: String,
    pub confidence: f64,
    pub severity: Severity,
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatment: Vec<String>,
}

/// A renderable preview of the selected file
#[derive(Debug, Clone)]
pub struct Preview {
    pub handle: Handle,
    /// Pixel size of the downscaled preview, None if the bytes did not decode
    pub dimensions: Option<(u32, u32)>,
}

impl Preview {
    /// Whether the bytes decoded as an image
    pub fn is_decoded(&self) -> bool {
        self.dimensions.is_some()
    }
}

/// A file the user picked or dropped, before its preview exists
#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    /// File name only (e.g., "daun_tomat.jpg")
    pub name: String,
    /// Raw file contents, uploaded unchanged
    pub bytes: Vec<u8>,
}

/// The image currently selected for analysis
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub file: PickedFile,
    pub preview: Preview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detection_response() {
        let json = r#"{
            "disease": "Bercak Daun",
            "confidence": 94,
            "severity": "medium",
            "description": "Penyakit jamur pada daun",
            "symptoms": ["Bercak coklat", "Daun menguning"],
            "treatment": ["Pangkas daun", "Fungisida"]
        }"#;

        let result: DiagnosisResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.disease, "Bercak Daun");
        assert_eq!(result.confidence, 94.0);
        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(result.symptoms.len(), 2);
        assert_eq!(result.treatment[1], "Fungisida");
    }

    #[test]
    fn test_healthy_severity_is_accepted() {
        let severity: Severity = serde_json::from_str(r#""healthy""#).unwrap();
        assert_eq!(severity, Severity::Healthy);
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        assert!(serde_json::from_str::<Severity>(r#""critical""#).is_err());
    }
}
