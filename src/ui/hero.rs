//! Headline, description, and call-to-action buttons.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::core::typewriter::TypeWriter;

use super::theme::Theme;

pub const BRAND: &str = "Katalo";
pub const TAGLINE: &str = " di kampus dimana?";
pub const DESCRIPTION: &str = "Katalo siap jadi teman eksplorasimu! Lihat rekomendasi UMKM \
sekitar kampus, temukan spot baru, dan dukung usaha lokal bareng teman-temanmu.";

/// The three call-to-action buttons, in display order.
pub const BUTTONS: [(&str, Color); 3] = [
    ("◎ Explore", Theme::CHERRY_RED),
    ("♥ Support", Theme::VIVID_ORANGE),
    ("▽ Filter", Theme::GRAY_GREEN),
];

/// `Katalo, <typed word>| di kampus dimana?`
pub struct Headline<'a> {
    pub typewriter: &'a TypeWriter,
}

impl Widget for Headline<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(BRAND, Theme::brand_style()),
            Span::raw(", "),
            Span::styled(self.typewriter.text().to_string(), Theme::typed_style()),
        ];
        if let Some(cursor) = self.typewriter.cursor() {
            spans.push(Span::styled(cursor.to_string(), Theme::typed_style()));
        }
        spans.push(Span::styled(TAGLINE, Theme::tagline_style()));
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

pub struct Description;

impl Widget for Description {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(DESCRIPTION)
            .style(Theme::description_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Button row; the one matching `highlighted` is drawn filled.
pub struct Buttons {
    pub highlighted: usize,
}

impl Widget for Buttons {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for (i, ((label, accent), col)) in BUTTONS.iter().zip(cols.iter()).enumerate() {
            let style = Theme::button_style(*accent, i == self.highlighted);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style);
            Paragraph::new(*label)
                .style(style)
                .alignment(Alignment::Center)
                .block(block)
                .render(*col, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::typewriter::TypeWriterConfig;
    use std::time::Duration;

    fn text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn headline_shows_typed_prefix_and_cursor() {
        let config = TypeWriterConfig {
            typing_speed: Duration::from_millis(10),
            ..TypeWriterConfig::default()
        };
        let mut tw = TypeWriter::new(vec!["Boba".into()], config);
        tw.advance(Duration::from_millis(20));

        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        Headline { typewriter: &tw }.render(area, &mut buf);
        assert!(text(&buf, 0).contains("Katalo, Bo| di kampus dimana?"));
    }

    #[test]
    fn highlighted_button_is_filled() {
        let area = Rect::new(0, 0, 36, 3);
        let mut buf = Buffer::empty(area);
        Buttons { highlighted: 1 }.render(area, &mut buf);
        assert_eq!(buf[(18, 1)].bg, Theme::VIVID_ORANGE);
        assert_ne!(buf[(6, 1)].bg, Theme::CHERRY_RED);
    }
}
