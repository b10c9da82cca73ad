use std::time::Duration;

use crate::state::data::{DiagnosisResult, Severity};

/// Simulated analysis time
const DEMO_DELAY: Duration = Duration::from_secs(2);

/// Answer after a short delay with the sample leaf-spot diagnosis
pub async fn detect() -> DiagnosisResult {
    tokio::time::sleep(DEMO_DELAY).await;
    sample_diagnosis()
}

pub fn sample_diagnosis() -> DiagnosisResult {
    DiagnosisResult {
        disease: "Bercak Daun (Leaf Spot)".to_string(),
        confidence: 94.0,
        severity: Severity::Medium,
        description: "Bercak daun adalah penyakit yang disebabkan oleh jamur atau bakteri yang menyerang jaringan daun. Penyakit ini umum terjadi pada kondisi kelembaban tinggi dan dapat menyebar dengan cepat jika tidak ditangani.".to_string(),
        symptoms: vec![
            "Munculnya bercak coklat atau hitam pada permukaan daun".to_string(),
            "Bercak memiliki tepi yang jelas dan tengah yang lebih terang".to_string(),
            "Daun menguning di sekitar area yang terinfeksi".to_string(),
            "Daun yang parah terinfeksi dapat gugur prematur".to_string(),
        ],
        treatment: vec![
            "Pangkas dan buang daun yang terinfeksi untuk mencegah penyebaran".to_string(),
            "Aplikasikan fungisida berbahan aktif mankozeb atau tembaga".to_string(),
            "Kurangi kelembaban dengan memperbaiki sirkulasi udara".to_string(),
            "Hindari penyiraman dari atas, siram langsung ke tanah".to_string(),
            "Jaga kebersihan area sekitar tanaman dari sisa-sisa tanaman yang terinfeksi".to_string(),
        ],
    }
}
