//! Ratatui widget that draws the logo loop for the current frame.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::core::logo_loop::{LogoLoop, StripSegment};

use super::theme::Theme;

/// The strip widget: created fresh each frame.
pub struct LogoStrip<'a> {
    logo: &'a LogoLoop,
    /// `(copy, item)` under the pointer, for the hover emphasis.
    hovered: Option<(usize, usize)>,
}

impl<'a> LogoStrip<'a> {
    pub fn new(logo: &'a LogoLoop) -> Self {
        Self {
            logo,
            hovered: None,
        }
    }

    pub fn hovered(mut self, hovered: Option<(usize, usize)>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Border chrome, shaped by the caller's style-class hook.
    fn block(&self) -> Block<'a> {
        let rounded = self
            .logo
            .config()
            .class_name
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|t| t.starts_with("rounded")));
        Block::default()
            .borders(Borders::ALL)
            .border_type(if rounded {
                BorderType::Rounded
            } else {
                BorderType::Plain
            })
            .border_style(Theme::strip_border_style(self.logo.is_hovered()))
    }

    fn segment_style(&self, seg: &StripSegment) -> Style {
        let item = &self.logo.items()[seg.item];
        if self.logo.config().scale_on_hover && self.hovered == Some((seg.copy, seg.item)) {
            Theme::logo_hover_style()
        } else if item.href.is_some() {
            Theme::link_style()
        } else {
            Theme::logo_style()
        }
    }
}

impl Widget for LogoStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Centre the single strip row vertically.
        let y = inner.y + inner.height / 2;
        let width = i32::from(inner.width);

        for seg in self.logo.visible_segments(f64::from(inner.width)) {
            let style = self.segment_style(&seg);
            let label = &self.logo.items()[seg.item].label;
            let mut col = seg.column() as i32;
            for ch in label.chars() {
                let w = ch.width().unwrap_or(0) as i32;
                // Glyphs that would be cut by either edge are skipped.
                if col >= 0 && col + w <= width && w > 0 {
                    let x = inner.x + col as u16;
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
                col += w;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::host::{CellMeasure, TerminalHost};
    use crate::core::item::{Item, LoopConfig};
    use ratatui::style::Modifier;
    use std::time::Instant;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn mounted(items: Vec<Item>, config: LoopConfig, inner: u16) -> (LogoLoop, TerminalHost) {
        let mut host = TerminalHost::new(Instant::now());
        let mut logo = LogoLoop::new(items, config);
        logo.mount(&mut host, &CellMeasure { container_width: inner });
        (logo, host)
    }

    #[test]
    fn draws_copies_back_to_back() {
        let config = LoopConfig {
            item_gap: 1.0,
            ..LoopConfig::default()
        };
        let (logo, _host) = mounted(vec![Item::new("ab"), Item::new("c")], config, 10);
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        LogoStrip::new(&logo).render(area, &mut buf);

        // Copy width = "ab " + "c " = 5; offset 0.
        assert_eq!(row(&buf, 1), "│ab c ab c │");
    }

    #[test]
    fn fractional_offset_draws_where_clicks_land() {
        use crate::core::motion::{MotionController, MotionState};

        let config = LoopConfig {
            item_gap: 2.0,
            ..LoopConfig::default()
        };
        let items = vec![Item::new("React"), Item::new("TS")];
        let (mut logo, _host) = mounted(items, config, 20);
        logo.set_motion(MotionController::with_state(MotionState {
            offset: 3.5,
            velocity: 0.0,
        }));
        let area = Rect::new(0, 0, 22, 3);
        let mut buf = Buffer::empty(area);
        LogoStrip::new(&logo).render(area, &mut buf);
        assert_eq!(row(&buf, 1), "│t  TS  React  TS  Re│");

        for (col, ch) in row(&buf, 1).chars().skip(1).take(20).enumerate() {
            let hit = logo.hit_test(col as f64, 20.0);
            assert_eq!(hit.is_some(), ch != ' ', "column {col}");
        }
    }

    #[test]
    fn hovered_item_is_emphasised_when_scaling() {
        let config = LoopConfig {
            item_gap: 1.0,
            scale_on_hover: true,
            ..LoopConfig::default()
        };
        let (logo, _host) = mounted(vec![Item::new("ab"), Item::new("c")], config, 10);
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        LogoStrip::new(&logo).hovered(Some((1, 0))).render(area, &mut buf);

        assert!(buf[(6, 1)].modifier.contains(Modifier::BOLD));
        assert!(!buf[(1, 1)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn links_are_underlined() {
        let config = LoopConfig {
            item_gap: 1.0,
            ..LoopConfig::default()
        };
        let items = vec![Item::new("ab").link("https://example.com"), Item::new("c")];
        let (logo, _host) = mounted(items, config, 10);
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        LogoStrip::new(&logo).render(area, &mut buf);

        assert!(buf[(1, 1)].modifier.contains(Modifier::UNDERLINED));
        assert!(!buf[(4, 1)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn empty_strip_draws_only_the_border() {
        let (logo, _host) = mounted(Vec::new(), LoopConfig::default(), 10);
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        LogoStrip::new(&logo).render(area, &mut buf);
        assert_eq!(row(&buf, 1), "│          │");
    }

    #[test]
    fn rounded_class_hook_rounds_corners() {
        let config = LoopConfig {
            class_name: Some("rounded-2xl w-full".into()),
            ..LoopConfig::default()
        };
        let (logo, _host) = mounted(vec![Item::new("x")], config, 10);
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        LogoStrip::new(&logo).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "╭");
    }
}
