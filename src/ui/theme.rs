//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    pub const IPB_BLUE: Color = Color::Rgb(0x1f, 0x4e, 0x9c);
    pub const CHERRY_RED: Color = Color::Rgb(0xd7, 0x26, 0x3d);
    pub const VIVID_ORANGE: Color = Color::Rgb(0xf4, 0x8c, 0x06);
    pub const GRAY_GREEN: Color = Color::Rgb(0x5b, 0x8c, 0x5a);
    pub const SKY: Color = Color::Rgb(0xd8, 0xee, 0xfb);

    // ── headline ───────────────────────────────────────────────
    pub fn brand_style() -> Style {
        Style::default()
            .fg(Self::IPB_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn typed_style() -> Style {
        Style::default()
            .fg(Self::CHERRY_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tagline_style() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn description_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    // ── logo strip ─────────────────────────────────────────────
    pub fn logo_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn link_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Hover emphasis when scale-on-hover is enabled.
    pub fn logo_hover_style() -> Style {
        Style::default()
            .fg(Self::IPB_BLUE)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn strip_border_style(hovered: bool) -> Style {
        if hovered {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    // ── buttons ────────────────────────────────────────────────
    pub fn button_style(accent: Color, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::White)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn cloud_style() -> Style {
        Style::default().fg(Self::SKY)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
