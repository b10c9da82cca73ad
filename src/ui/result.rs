/// Diagnosis result panel
///
/// `project` is a pure function from (result, loading) to a display model;
/// `view` turns that model into widgets. The panel owns no state.

use iced::widget::{column, container, progress_bar, row, text, Column, Space};
use iced::{Alignment, Element, Length};

use super::style::{self, Tone};
use crate::state::data::{DiagnosisResult, Severity};
use crate::Message;

/// Label, glyph and tone for one severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub label: &'static str,
    pub glyph: &'static str,
    pub tone: Tone,
}

/// Closed lookup table for diagnosis severities
pub fn severity_style(severity: Severity) -> SeverityStyle {
    match severity {
        Severity::Healthy => SeverityStyle {
            label: "Sehat",
            glyph: "✔",
            tone: Tone::Success,
        },
        Severity::Low => SeverityStyle {
            label: "Ringan",
            glyph: "🍃",
            tone: Tone::Primary,
        },
        Severity::Medium => SeverityStyle {
            label: "Sedang",
            glyph: "⚠",
            tone: Tone::Warning,
        },
        Severity::High => SeverityStyle {
            label: "Parah",
            glyph: "⚠",
            tone: Tone::Destructive,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView<'a> {
    Skeleton,
    Empty,
    Diagnosis(DiagnosisView<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisView<'a> {
    pub disease: &'a str,
    pub style: SeverityStyle,
    /// Confidence clamped to 0-100 for the gauge
    pub gauge: f32,
    pub confidence_text: String,
    pub description: &'a str,
    pub symptoms: &'a [String],
    /// Treatment steps numbered from 1
    pub treatment: Vec<(usize, &'a str)>,
}

pub fn project(result: Option<&DiagnosisResult>, is_loading: bool) -> ResultView<'_> {
    if is_loading {
        return ResultView::Skeleton;
    }
    let Some(result) = result else {
        return ResultView::Empty;
    };

    ResultView::Diagnosis(DiagnosisView {
        disease: &result.disease,
        style: severity_style(result.severity),
        gauge: result.confidence.clamp(0.0, 100.0) as f32,
        confidence_text: format_confidence(result.confidence),
        description: &result.description,
        symptoms: &result.symptoms,
        treatment: result
            .treatment
            .iter()
            .enumerate()
            .map(|(i, step)| (i + 1, step.as_str()))
            .collect(),
    })
}

/// `94` -> "94%", `87.5` -> "87.5%"
pub fn format_confidence(confidence: f64) -> String {
    if confidence.fract() == 0.0 {
        format!("{:.0}%", confidence)
    } else {
        format!("{}%", confidence)
    }
}

pub fn view<'a>(model: ResultView<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match model {
        ResultView::Skeleton => skeleton(),
        ResultView::Empty => empty(),
        ResultView::Diagnosis(diagnosis) => diagnosis_view(diagnosis),
    };

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(style::card)
        .into()
}

fn bar<'a>(width: Length, height: f32) -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fill))
        .width(width)
        .height(Length::Fixed(height))
        .style(style::skeleton)
        .into()
}

fn skeleton<'a>() -> Element<'a, Message> {
    column![
        row![
            bar(Length::Fixed(56.0), 56.0),
            column![
                bar(Length::FillPortion(3), 24.0),
                row![bar(Length::FillPortion(1), 16.0), Space::with_width(Length::FillPortion(1))],
            ]
            .spacing(8),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
        bar(Length::Fill, 16.0),
        row![bar(Length::FillPortion(5), 16.0), Space::with_width(Length::FillPortion(1))],
        row![bar(Length::FillPortion(4), 16.0), Space::with_width(Length::FillPortion(2))],
    ]
    .spacing(12)
    .into()
}

fn empty<'a>() -> Element<'a, Message> {
    column![
        text("🍃").size(40),
        text("Belum ada hasil deteksi").size(18).color(style::FOREGROUND),
        text("Upload gambar tanaman untuk memulai analisis")
            .size(14)
            .color(style::MUTED),
    ]
    .spacing(8)
    .padding([32, 0])
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

fn diagnosis_view(diagnosis: DiagnosisView<'_>) -> Element<'_, Message> {
    let tone = diagnosis.style.tone;

    let header = row![
        container(text(diagnosis.style.glyph).size(32).color(tone.color()))
            .padding(12)
            .style(style::badge(tone)),
        column![
            row![
                text(diagnosis.disease).size(22).color(style::FOREGROUND),
                container(text(diagnosis.style.label).size(12))
                    .padding([2, 10])
                    .style(style::badge(tone)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
            row![
                text("Tingkat kepercayaan:").size(14).color(style::MUTED),
                text(diagnosis.confidence_text).size(14).color(style::FOREGROUND),
            ]
            .spacing(6),
            progress_bar(0.0..=100.0, diagnosis.gauge).height(Length::Fixed(6.0)),
        ]
        .spacing(6),
    ]
    .spacing(16)
    .align_y(Alignment::Start);

    let symptoms = diagnosis
        .symptoms
        .iter()
        .fold(Column::new().spacing(8), |col, symptom| {
            col.push(
                row![
                    text("•").color(style::PRIMARY),
                    text(symptom.as_str()).size(14).color(style::FOREGROUND),
                ]
                .spacing(10),
            )
        });

    let treatment = diagnosis
        .treatment
        .into_iter()
        .fold(Column::new().spacing(8), |col, (number, step)| {
            col.push(
                row![
                    container(text(number.to_string()).size(12))
                        .padding([2, 7])
                        .style(style::badge(Tone::Neutral)),
                    text(step).size(14).color(style::FOREGROUND),
                ]
                .spacing(10),
            )
        });

    column![
        header,
        text(diagnosis.description).size(15).color(style::FOREGROUND),
        text("🐛 Gejala").size(16).color(style::FOREGROUND),
        symptoms,
        text("💧 Penanganan").size(16).color(style::ACCENT),
        treatment,
    ]
    .spacing(16)
    .into()
}
