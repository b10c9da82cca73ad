/// Educational dashboard: headline statistics, disease catalog, care tips
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::style::{self, Tone};
use crate::state::data::Severity;
use crate::{Message, Screen};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub glyph: &'static str,
    pub symptoms: &'static [&'static str],
    pub plants: &'static [&'static str],
}

pub static CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        name: "Bercak Daun (Leaf Spot)",
        category: "Jamur",
        severity: Severity::Medium,
        glyph: "🍂",
        symptoms: &["Bercak coklat pada daun", "Daun menguning", "Daun rontok prematur"],
        plants: &["Tomat", "Cabai", "Kentang"],
    },
    CatalogEntry {
        name: "Busuk Akar (Root Rot)",
        category: "Jamur",
        severity: Severity::High,
        glyph: "🌱",
        symptoms: &["Tanaman layu", "Akar berwarna hitam", "Pertumbuhan terhambat"],
        plants: &["Padi", "Jagung", "Kedelai"],
    },
    CatalogEntry {
        name: "Embun Tepung (Powdery Mildew)",
        category: "Jamur",
        severity: Severity::Low,
        glyph: "❄",
        symptoms: &["Lapisan putih pada daun", "Daun menggulung", "Fotosintesis terganggu"],
        plants: &["Mentimun", "Labu", "Melon"],
    },
    CatalogEntry {
        name: "Virus Mosaik",
        category: "Virus",
        severity: Severity::High,
        glyph: "🦠",
        symptoms: &["Pola mosaik pada daun", "Daun kerdil", "Buah cacat"],
        plants: &["Tomat", "Cabai", "Tembakau"],
    },
    CatalogEntry {
        name: "Layu Bakteri",
        category: "Bakteri",
        severity: Severity::High,
        glyph: "💧",
        symptoms: &["Layu mendadak", "Pembuluh kecoklatan", "Lendir pada batang"],
        plants: &["Tomat", "Kentang", "Terong"],
    },
    CatalogEntry {
        name: "Karat Daun (Rust)",
        category: "Jamur",
        severity: Severity::Medium,
        glyph: "🟤",
        symptoms: &["Bintik oranye/coklat", "Pustula pada daun", "Daun mengering"],
        plants: &["Jagung", "Gandum", "Kedelai"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareTip {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static CARE_TIPS: [CareTip; 4] = [
    CareTip {
        glyph: "💧",
        title: "Penyiraman Tepat",
        description: "Siram tanaman di pagi hari untuk mencegah jamur. Hindari menyiram daun langsung.",
    },
    CareTip {
        glyph: "☀",
        title: "Pencahayaan Optimal",
        description: "Pastikan tanaman mendapat sinar matahari 6-8 jam per hari sesuai kebutuhan.",
    },
    CareTip {
        glyph: "🌬",
        title: "Sirkulasi Udara",
        description: "Jaga jarak tanam untuk sirkulasi udara yang baik dan mencegah penyebaran penyakit.",
    },
    CareTip {
        glyph: "🍃",
        title: "Pemupukan Seimbang",
        description: "Gunakan pupuk seimbang NPK dan tambahkan kompos untuk nutrisi tanah optimal.",
    },
];

/// (value, label)
pub static STATS: [(&str, &str); 4] = [
    ("50+", "Jenis Penyakit"),
    ("100+", "Tanaman Terdeteksi"),
    ("95%", "Akurasi AI"),
    ("200+", "Panduan Tersedia"),
];

/// Gap between cards in a wrapped grid
const GAP: Pixels = Pixels(16.0);

/// Badge label and tone for catalog entries.
///
/// The catalog calls high severity "Berat" where the diagnosis panel says
/// "Parah", and has no healthy entries.
pub fn catalog_badge(severity: Severity) -> (&'static str, Tone) {
    match severity {
        Severity::Low => ("Ringan", Tone::Success),
        Severity::Medium => ("Sedang", Tone::Warning),
        Severity::High => ("Berat", Tone::Destructive),
        Severity::Healthy => ("Sehat", Tone::Neutral),
    }
}

pub fn view<'a>() -> Element<'a, Message> {
    let hero = row![
        column![
            text("Selamat Datang di PlantCare AI").size(30).color(style::FOREGROUND),
            text("Pelajari berbagai penyakit tanaman dan cara pencegahannya")
                .size(15)
                .color(style::MUTED),
        ]
        .spacing(6),
        horizontal_space(),
        button(text("Mulai Deteksi →"))
            .on_press(Message::Navigate(Screen::Detection))
            .padding([12, 20]),
    ]
    .align_y(Alignment::Center);

    let stats = Wrap::with_elements(STATS.iter().map(|&(value, label)| stat_card(value, label)).collect())
        .spacing(GAP)
        .line_spacing(GAP);

    let catalog = Wrap::with_elements(CATALOG.iter().map(catalog_card).collect())
        .spacing(GAP)
        .line_spacing(GAP);

    let tips = Wrap::with_elements(CARE_TIPS.iter().map(tip_card).collect())
        .spacing(GAP)
        .line_spacing(GAP);

    let content = column![
        hero,
        stats,
        text("⚠ Katalog Penyakit Tanaman").size(20).color(style::FOREGROUND),
        catalog,
        text("💡 Tips Perawatan Tanaman").size(20).color(style::FOREGROUND),
        tips,
    ]
    .spacing(24)
    .padding(32);

    scrollable(content).height(Length::Fill).into()
}

fn stat_card<'a>(value: &'a str, label: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(value).size(26).color(style::FOREGROUND),
            text(label).size(12).color(style::MUTED),
        ]
        .spacing(4),
    )
    .padding(20)
    .width(Length::Fixed(220.0))
    .style(style::card)
    .into()
}

fn catalog_card<'a>(entry: &'a CatalogEntry) -> Element<'a, Message> {
    let (label, tone) = catalog_badge(entry.severity);

    let symptoms = entry
        .symptoms
        .iter()
        .fold(Column::new().spacing(4), |col, &symptom| {
            col.push(
                row![text("•").color(style::PRIMARY), text(symptom).size(13)].spacing(8),
            )
        });

    let plants: Vec<Element<'a, Message>> = entry
        .plants
        .iter()
        .map(|&plant| {
            container(text(plant).size(12))
                .padding([2, 8])
                .style(style::badge(Tone::Neutral))
                .into()
        })
        .collect();
    let plants = Wrap::with_elements(plants)
        .spacing(Pixels(4.0))
        .line_spacing(Pixels(4.0));

    container(
        column![
            row![
                text(entry.glyph).size(30),
                column![
                    text(entry.name).size(15).color(style::FOREGROUND),
                    text(entry.category).size(12).color(style::MUTED),
                ]
                .spacing(2),
                horizontal_space(),
                container(text(label).size(12))
                    .padding([2, 10])
                    .style(style::badge(tone)),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            text("Gejala:").size(12).color(style::MUTED),
            symptoms,
            text("Tanaman rentan:").size(12).color(style::MUTED),
            plants,
        ]
        .spacing(8),
    )
    .padding(20)
    .width(Length::Fixed(320.0))
    .style(style::card)
    .into()
}

fn tip_card<'a>(tip: &'a CareTip) -> Element<'a, Message> {
    container(
        column![
            text(tip.glyph).size(28),
            text(tip.title).size(15).color(style::FOREGROUND),
            text(tip.description).size(13).color(style::MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fixed(240.0))
    .style(style::card)
    .into()
}
