//! Data model for the logo loop: items and the immutable loop configuration.

use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

// ───────────────────────────────────────── item ──────────────

/// One entry in the scrolling strip.
///
/// Identity is positional: an item is addressed by its index in the
/// caller's sequence, never by content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Rendered content (a short label or glyph run).
    pub label: String,
    /// Navigation target; items without one render as plain content.
    #[serde(default)]
    pub href: Option<String>,
    /// Accessible name announced for linked items.
    #[serde(default)]
    pub title: Option<String>,
}

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            title: None,
        }
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Display width of the label in terminal cells.
    pub fn width(&self) -> usize {
        self.label.width()
    }

    /// Name to announce for this item: the title, falling back to the label.
    pub fn accessible_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }
}

// ───────────────────────────────────────── config ────────────

/// Scroll direction.  `Forward` moves content toward the left edge
/// (positive velocity); `Reverse` moves it toward the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// `+1.0` for forward, `-1.0` for reverse.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

pub const DEFAULT_SPEED: f64 = 120.0;
pub const DEFAULT_ITEM_HEIGHT: f64 = 28.0;
pub const DEFAULT_ITEM_GAP: f64 = 32.0;

/// Loop configuration.  Treated as immutable by the component: swapping it
/// goes through [`LogoLoop::reconfigure`](super::logo_loop::LogoLoop::reconfigure),
/// which restarts derived state.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    /// Magnitude of the scroll speed in units per second.
    pub speed: f64,
    pub direction: Direction,
    /// Purely cosmetic; carried for hosts that draw taller items.
    pub item_height: f64,
    /// Space after every item, including the last one of each copy.
    pub item_gap: f64,
    pub pause_on_hover: bool,
    pub scale_on_hover: bool,
    /// Caller-supplied style hook, passed through to the renderer.
    pub class_name: Option<String>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            direction: Direction::Forward,
            item_height: DEFAULT_ITEM_HEIGHT,
            item_gap: DEFAULT_ITEM_GAP,
            pause_on_hover: true,
            scale_on_hover: false,
            class_name: None,
        }
    }
}

impl LoopConfig {
    /// Signed cruising velocity (`+speed` forward, `-speed` reverse).
    pub fn cruise_velocity(&self) -> f64 {
        self.direction.sign() * self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = LoopConfig::default();
        assert_eq!(c.speed, 120.0);
        assert_eq!(c.item_gap, 32.0);
        assert_eq!(c.item_height, 28.0);
        assert_eq!(c.direction, Direction::Forward);
        assert!(c.pause_on_hover);
        assert!(!c.scale_on_hover);
    }

    #[test]
    fn cruise_velocity_follows_direction() {
        let mut c = LoopConfig::default();
        assert_eq!(c.cruise_velocity(), 120.0);
        c.direction = Direction::Reverse;
        assert_eq!(c.cruise_velocity(), -120.0);
    }

    #[test]
    fn accessible_name_prefers_title() {
        let plain = Item::new("Rs");
        assert_eq!(plain.accessible_name(), "Rs");
        let titled = Item::new("Rs").title("Rust");
        assert_eq!(titled.accessible_name(), "Rust");
    }

    #[test]
    fn width_counts_wide_glyphs() {
        assert_eq!(Item::new("abc").width(), 3);
        assert_eq!(Item::new("日本").width(), 4);
    }
}
