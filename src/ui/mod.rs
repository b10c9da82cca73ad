/// User interface module
///
/// - Dashboard with static educational content (dashboard.rs)
/// - Detection screen (detection.rs) and its result panel (result.rs)
/// - Onboarding dialog (guide.rs)
/// - Shared colors and container styles (style.rs)

pub mod dashboard;
pub mod detection;
pub mod guide;
pub mod result;
pub mod style;

use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text, Column};
use iced::alignment::{Horizontal, Vertical};
use iced::{Color, Element, Length};

use crate::{Message, Screen, Toast};

/// Lay `content` over `base`, dimming it; clicking the backdrop sends `on_blur`
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.6,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

pub fn sidebar<'a>(active: Screen) -> Element<'a, Message> {
    let entry = |label: &'a str, screen: Screen| {
        button(text(label).size(14))
            .on_press(Message::Navigate(screen))
            .width(Length::Fill)
            .padding([10, 14])
            .style(if screen == active {
                button::primary
            } else {
                button::text
            })
    };

    container(
        column![
            text("🌿 PlantCare AI").size(20).color(style::PRIMARY),
            text("Deteksi penyakit tanaman").size(12).color(style::MUTED),
            column![
                entry("🏠 Dashboard", Screen::Dashboard),
                entry("🔍 Deteksi Penyakit", Screen::Detection),
            ]
            .spacing(4),
        ]
        .spacing(24)
        .padding(20),
    )
    .width(Length::Fixed(220.0))
    .height(Length::Fill)
    .style(style::sidebar)
    .into()
}

/// Stack of notification banners in the bottom-right corner
pub fn toasts(toasts: &[Toast]) -> Element<'_, Message> {
    let banners = toasts.iter().fold(Column::new().spacing(8), |col, toast| {
        col.push(
            button(
                container(text(toast.message.as_str()).size(14))
                    .padding([12, 16])
                    .width(Length::Fixed(360.0))
                    .style(style::toast),
            )
            .on_press(Message::DismissToast(toast.id))
            .padding(0)
            .style(button::text),
        )
    });

    container(banners)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}
