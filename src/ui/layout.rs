//! Layout helpers: split the terminal area into landing-screen regions.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Widest the text column grows before it is centred.
pub const CONTENT_MAX_WIDTH: u16 = 72;

/// Regions of the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LandingLayout {
    /// Full area; clouds drift over the top part of it.
    pub area: Rect,
    pub sky: Rect,
    pub headline: Rect,
    pub description: Rect,
    /// Bordered box around the logo strip (the hover region).
    pub strip: Rect,
    /// Where logos are actually drawn.
    pub strip_inner: Rect,
    pub buttons: Rect,
    pub status: Rect,
}

impl LandingLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),   // sky
                Constraint::Length(1), // headline
                Constraint::Length(1),
                Constraint::Length(3), // description
                Constraint::Length(3), // logo strip
                Constraint::Length(3), // buttons
                Constraint::Fill(1),
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let strip = centered_column(rows[4], CONTENT_MAX_WIDTH);
        Self {
            area,
            sky: rows[0],
            headline: centered_column(rows[1], CONTENT_MAX_WIDTH),
            description: centered_column(rows[3], CONTENT_MAX_WIDTH),
            strip,
            strip_inner: strip.inner(Margin::new(1, 1)),
            buttons: centered_column(rows[5], CONTENT_MAX_WIDTH),
            status: rows[7],
        }
    }
}

/// Horizontally centre a column of at most `max_width` cells inside `area`.
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
