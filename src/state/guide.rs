/// Onboarding guide for the detection screen
///
/// A strictly linear four-step wizard. It opens by itself the first time the
/// detection screen is visited on a device; completing or skipping it
/// persists a flag so it never opens by itself again.

use tracing::{info, warn};

use super::settings::FlagStore;

/// Key of the persisted "guide already shown" flag
pub const GUIDE_SHOWN_KEY: &str = "plantcare_guide_shown";

/// One page of the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStep {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tip: &'static str,
}

pub static STEPS: [GuideStep; 4] = [
    GuideStep {
        glyph: "📸",
        title: "Ambil Foto Tanaman",
        description: "Foto bagian tanaman yang terlihat sakit atau bergejala. Pastikan gambar jelas dan fokus pada area yang bermasalah.",
        tip: "Tips: Gunakan pencahayaan yang cukup dan hindari bayangan berlebih",
    },
    GuideStep {
        glyph: "📤",
        title: "Upload Gambar",
        description: "Klik area upload atau seret gambar ke jendela. Format yang didukung: JPG, PNG, WEBP.",
        tip: "Tips: Ukuran gambar maksimal 10MB untuk hasil terbaik",
    },
    GuideStep {
        glyph: "🔍",
        title: "Mulai Analisis",
        description: "Klik tombol 'Analisis Sekarang' dan tunggu beberapa detik. AI kami akan mengidentifikasi penyakit dari gambar.",
        tip: "Tips: Proses analisis membutuhkan koneksi internet",
    },
    GuideStep {
        glyph: "✅",
        title: "Lihat Hasil",
        description: "Hasil deteksi akan menampilkan nama penyakit, tingkat keparahan, gejala, dan rekomendasi penanganan.",
        tip: "Tips: Simpan hasil untuk referensi di kemudian hari",
    },
];

/// Position in the wizard and whether it is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Guide {
    step: usize,
    open: bool,
}

impl Guide {
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn step(&self) -> &'static GuideStep {
        &STEPS[self.step]
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step == STEPS.len() - 1
    }

    /// "Langkah 2 dari 4"
    pub fn progress_label(&self) -> String {
        format!("Langkah {} dari {}", self.step + 1, STEPS.len())
    }
}

/// The guide wired to its persisted flag
#[derive(Debug)]
pub struct Onboarding<S> {
    store: S,
    guide: Guide,
}

impl<S: FlagStore> Onboarding<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            guide: Guide::default(),
        }
    }

    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Called every time the detection screen is shown. Opens the guide at
    /// the first step unless it has been completed on this device.
    pub fn on_screen_visit(&mut self) {
        let shown = self.store.flag(GUIDE_SHOWN_KEY).unwrap_or_else(|e| {
            warn!("Could not read {}: {}", GUIDE_SHOWN_KEY, e);
            false
        });

        if !shown {
            info!("First visit on this device, opening guide");
            self.guide = Guide { step: 0, open: true };
        }
    }

    /// Open the guide on demand ("Lihat Panduan")
    pub fn show(&mut self) {
        self.guide.open = true;
    }

    /// Close without marking the guide as seen
    pub fn dismiss(&mut self) {
        self.guide.open = false;
    }

    /// Advance one step; on the last step this completes the guide
    pub fn next(&mut self) {
        if self.guide.is_last() {
            self.complete();
        } else {
            self.guide.step += 1;
        }
    }

    /// Go back one step; no-op on the first step
    pub fn prev(&mut self) {
        if self.guide.step > 0 {
            self.guide.step -= 1;
        }
    }

    pub fn skip(&mut self) {
        self.complete();
    }

    fn complete(&mut self) {
        if let Err(e) = self.store.set_flag(GUIDE_SHOWN_KEY, true) {
            warn!("Could not persist {}: {}", GUIDE_SHOWN_KEY, e);
        }
        self.guide = Guide::default();
    }
}
