/// Onboarding guide dialog
use iced::widget::{button, column, container, horizontal_space, row, text, Row, Space};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::guide::{Guide, STEPS};
use crate::Message;

pub fn view(guide: &Guide) -> Element<'_, Message> {
    let step = guide.step();

    // One segment per step, filled up to the current one
    let progress = (0..STEPS.len()).fold(Row::new().spacing(6), |bar, idx| {
        let tone = if idx <= guide.step_index() {
            style::Tone::Primary
        } else {
            style::Tone::Neutral
        };
        bar.push(
            container(Space::new(Length::Fill, Length::Fixed(6.0)))
                .width(Length::Fill)
                .style(style::badge(tone)),
        )
    });

    let mut nav = row![
        button(text("Lewati")).on_press(Message::GuideSkip).style(button::text),
        horizontal_space(),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    if !guide.is_first() {
        nav = nav.push(
            button(text("← Kembali"))
                .on_press(Message::GuidePrev)
                .style(button::secondary),
        );
    }

    let next_label = if guide.is_last() {
        "Mulai Deteksi ✔"
    } else {
        "Lanjut →"
    };
    nav = nav.push(button(text(next_label)).on_press(Message::GuideNext));

    let content = column![
        row![
            text("Panduan Deteksi").size(20).color(style::FOREGROUND),
            horizontal_space(),
            button(text("✕")).on_press(Message::GuideDismiss).style(button::text),
        ]
        .align_y(Alignment::Center),
        text(guide.progress_label()).size(13).color(style::MUTED),
        progress,
        column![
            text(step.glyph).size(56),
            text(step.title).size(18).color(style::FOREGROUND),
            text(step.description).size(14).color(style::MUTED),
            container(text(format!("💡 {}", step.tip)).size(13))
                .padding(12)
                .width(Length::Fill)
                .style(style::skeleton),
        ]
        .spacing(12)
        .padding([16, 0])
        .align_x(Alignment::Center),
        nav,
    ]
    .spacing(12);

    container(content)
        .padding(24)
        .width(Length::Fixed(440.0))
        .style(style::card)
        .into()
}
