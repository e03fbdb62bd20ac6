//! Palette and widget style helpers.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

use showcase_core::carousel::ArrowDim;

pub const BACKGROUND: Color = Color::from_rgb(0.07, 0.07, 0.09);
pub const CARD_BG: Color = Color::from_rgb(0.12, 0.12, 0.15);
pub const EMBED_BG: Color = Color::from_rgb(0.04, 0.04, 0.06);
pub const BORDER: Color = Color::from_rgb(0.22, 0.22, 0.27);

pub const TEXT_PRIMARY: Color = Color::from_rgb(0.95, 0.95, 0.97);
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.70, 0.70, 0.76);
pub const ACCENT: Color = Color::from_rgb(0.55, 0.75, 1.0);

/// Arrow color with the dimming opacity applied.
pub fn arrow_color(dim: ArrowDim) -> Color {
    Color {
        a: dim.opacity(),
        ..TEXT_PRIMARY
    }
}

/// Flat background for the whole page.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Rounded card surface.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Dark well holding an embed stand-in.
pub fn embed_well(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(EMBED_BG)),
        text_color: Some(TEXT_SECONDARY),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}

/// Text-like button used for titles and author links.
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT,
        _ => TEXT_PRIMARY,
    };
    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}

/// Borderless button holding a carousel arrow.
pub fn arrow_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: TEXT_PRIMARY,
        ..button::Style::default()
    }
}

/// The spotlight reload control.
pub fn reload_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.85,
            ..ACCENT
        },
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: BACKGROUND,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}
