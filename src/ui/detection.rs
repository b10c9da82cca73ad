/// Detection screen: upload area, analyze button and result panel
use iced::alignment::Horizontal;
use iced::widget::{
    button, column, container, horizontal_space, image, row, scrollable, stack, text, Column,
};
use iced::{Alignment, ContentFit, Element, Length};

use super::{result, style};
use crate::state::data::SelectedImage;
use crate::state::workflow::DetectionWorkflow;
use crate::Message;

pub fn view<'a>(
    workflow: &'a DetectionWorkflow,
    drop_hover: bool,
    server: String,
) -> Element<'a, Message> {
    let hero = column![
        container(text("✨ Powered by AI").size(13).color(style::PRIMARY))
            .padding([4, 14])
            .style(style::badge(style::Tone::Primary)),
        text("Deteksi Penyakit Tanaman dengan Cepat")
            .size(32)
            .color(style::FOREGROUND),
        text("Upload foto tanaman Anda dan dapatkan diagnosis serta rekomendasi penanganan secara instan")
            .size(15)
            .color(style::MUTED),
        button(text("❓ Lihat Panduan").size(13))
            .on_press(Message::GuideShow)
            .style(button::secondary),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let mut upload = Column::new()
        .spacing(16)
        .push(section_title(
            "Upload Gambar",
            "Ambil foto daun atau bagian tanaman yang ingin dianalisis",
        ))
        .push(upload_area(workflow, drop_hover));

    if workflow.selected().is_some() {
        let label = if workflow.is_analyzing() {
            "🔍 Menganalisis..."
        } else {
            "🔍 Analisis Sekarang"
        };
        upload = upload.push(
            button(
                text(label)
                    .size(16)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .on_press_maybe(workflow.can_analyze().then_some(Message::Analyze))
            .width(Length::Fill)
            .padding(14),
        );
    }

    let results = column![
        section_title("Hasil Deteksi", "Informasi penyakit dan cara penanganannya"),
        result::view(result::project(workflow.result(), workflow.is_analyzing())),
    ]
    .spacing(16);

    let content = column![
        hero,
        row![
            upload.width(Length::FillPortion(1)),
            results.width(Length::FillPortion(1)),
        ]
        .spacing(32),
        text(format!("Server: {}", server)).size(12).color(style::MUTED),
    ]
    .spacing(32)
    .padding(32)
    .max_width(1100);

    scrollable(container(content).center_x(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn section_title<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(18).color(style::FOREGROUND),
        text(subtitle).size(13).color(style::MUTED),
    ]
    .spacing(4)
    .into()
}

fn upload_area(workflow: &DetectionWorkflow, drop_hover: bool) -> Element<'_, Message> {
    if let Some(selected) = workflow.selected() {
        return preview(selected, workflow.pending_name());
    }

    let body: Element<'_, Message> = match workflow.pending_name() {
        Some(name) => column![
            text("⏳").size(36),
            text(format!("Memuat pratinjau {}...", name))
                .size(14)
                .color(style::MUTED),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .into(),
        None => column![
            text("📤").size(40),
            text("Seret gambar tanaman ke jendela")
                .size(17)
                .color(style::FOREGROUND),
            text("atau klik untuk memilih").size(14).color(style::PRIMARY),
            text("🖼 PNG, JPG, WEBP hingga 10MB").size(12).color(style::MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
    };

    button(
        container(body)
            .padding([48, 16])
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(style::drop_zone(drop_hover)),
    )
    .on_press(Message::PickImage)
    .padding(0)
    .style(button::text)
    .width(Length::Fill)
    .into()
}

fn preview<'a>(selected: &'a SelectedImage, pending: Option<&'a str>) -> Element<'a, Message> {
    let caption = match pending {
        Some(name) => format!("Memuat pratinjau {}...", name),
        None if selected.preview.is_decoded() => "Gambar berhasil diunggah".to_string(),
        None => format!("Pratinjau tidak tersedia untuk {}", selected.file.name),
    };

    let picture = image(selected.preview.handle.clone())
        .width(Length::Fill)
        .height(Length::Fixed(320.0))
        .content_fit(ContentFit::Cover);

    let clear = container(
        button(text("✕"))
            .on_press(Message::ClearImage)
            .style(button::secondary),
    )
    .padding(12)
    .width(Length::Fill)
    .align_x(Horizontal::Right);

    column![
        container(stack![picture, clear]).style(style::card),
        row![
            text(caption).size(13).color(style::MUTED),
            horizontal_space(),
            text(selected.file.name.as_str()).size(12).color(style::MUTED),
        ],
    ]
    .spacing(8)
    .into()
}
