//! Theme configuration
//!
//! Dark palette plus the handful of widget styles shared between the search
//! card and the result cards.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);

// Blue pill for similarity scores.
pub const BADGE_BACKGROUND: Color = Color::from_rgb(0.86, 0.92, 1.0);
pub const BADGE_TEXT: Color = Color::from_rgb(0.12, 0.25, 0.69);

/// Rounded bordered panel used for the search card and each result card.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Pill behind the similarity percentage.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BADGE_BACKGROUND)),
        text_color: Some(BADGE_TEXT),
        border: Border::default().rounded(6),
        ..Default::default()
    }
}

/// Primary action button (the search trigger).
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb(0.5, 0.63, 1.0),
        button::Status::Disabled => Color::from_rgb(0.25, 0.3, 0.45),
        button::Status::Active => PRIMARY,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::from_rgb(0.05, 0.05, 0.08),
        border: Border::default().rounded(8),
        shadow: Shadow::default(),
    }
}

/// Quiet icon button for the external profile link.
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => PRIMARY,
        _ => TEXT_MUTED,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default().rounded(16),
        shadow: Shadow::default(),
    }
}
