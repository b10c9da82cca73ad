/// Colors and container styles shared by the views
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const BACKGROUND: Color = Color::from_rgb(0.97, 0.98, 0.96);
pub const SURFACE: Color = Color::WHITE;
pub const FOREGROUND: Color = Color::from_rgb(0.11, 0.16, 0.12);
pub const MUTED: Color = Color::from_rgb(0.42, 0.47, 0.43);
pub const SKELETON: Color = Color::from_rgb(0.90, 0.92, 0.90);
pub const BORDER: Color = Color::from_rgb(0.86, 0.89, 0.86);

pub const PRIMARY: Color = Color::from_rgb(0.18, 0.55, 0.34);
pub const ACCENT: Color = Color::from_rgb(0.16, 0.50, 0.73);
pub const SUCCESS: Color = Color::from_rgb(0.13, 0.63, 0.35);
pub const WARNING: Color = Color::from_rgb(0.85, 0.58, 0.05);
pub const DESTRUCTIVE: Color = Color::from_rgb(0.84, 0.22, 0.22);

/// Presentation class of a severity badge or diagnosis header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Primary,
    Warning,
    Destructive,
    Neutral,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Success => SUCCESS,
            Tone::Primary => PRIMARY,
            Tone::Warning => WARNING,
            Tone::Destructive => DESTRUCTIVE,
            Tone::Neutral => MUTED,
        }
    }

    /// Same hue at 10% opacity, for badge and icon backgrounds
    pub fn tint(self) -> Color {
        Color {
            a: 0.1,
            ..self.color()
        }
    }
}

/// Application theme: light background, green primary
pub fn theme() -> Theme {
    Theme::custom(
        "PlantCare".to_string(),
        iced::theme::Palette {
            background: BACKGROUND,
            text: FOREGROUND,
            primary: PRIMARY,
            success: SUCCESS,
            danger: DESTRUCTIVE,
        },
    )
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

/// Rounded pill filled with the tone's tint
pub fn badge(tone: Tone) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(tone.color()),
        background: Some(Background::Color(tone.tint())),
        border: Border {
            color: Color { a: 0.3, ..tone.color() },
            width: 1.0,
            radius: 999.0.into(),
        },
        ..container::Style::default()
    }
}

/// Grey block standing in for content that is loading
pub fn skeleton(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SKELETON)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Dashed-looking drop zone for the upload area
pub fn drop_zone(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(if active {
            Tone::Primary.tint()
        } else {
            SURFACE
        })),
        border: Border {
            color: if active { PRIMARY } else { BORDER },
            width: 2.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn toast(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(DESTRUCTIVE)),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..container::Style::default()
    }
}

pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
