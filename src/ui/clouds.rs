//! Decorative cloud layers that drift with the pointer.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::core::parallax::ParallaxLayer;

use super::theme::Theme;

const CLOUD: [&str; 3] = ["   .--.    ", ".-(    ).  ", "(___.__)__)"];

/// Where a cloud sits when the pointer is centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft { x: u16, y: u16 },
    TopRight { x: u16, y: u16 },
}

#[derive(Debug, Clone)]
pub struct Cloud {
    pub anchor: Anchor,
    pub layer: ParallaxLayer,
}

impl Cloud {
    /// Top-left cell of the cloud inside `area`, after parallax shift.
    fn origin(&self, area: Rect) -> (i32, i32) {
        let width = CLOUD[0].chars().count() as i32;
        let (bx, by) = match self.anchor {
            Anchor::TopLeft { x, y } => (i32::from(x), i32::from(y)),
            Anchor::TopRight { x, y } => (i32::from(area.width) - width - i32::from(x), i32::from(y)),
        };
        let (sx, sy) = self.layer.shift();
        (
            i32::from(area.x) + bx + i32::from(sx),
            i32::from(area.y) + by + i32::from(sy),
        )
    }
}

pub struct Clouds<'a> {
    pub clouds: &'a [Cloud],
}

impl Widget for Clouds<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for cloud in self.clouds {
            let (ox, oy) = cloud.origin(area);
            for (dy, row) in CLOUD.iter().enumerate() {
                let y = oy + dy as i32;
                if y < i32::from(area.top()) || y >= i32::from(area.bottom()) {
                    continue;
                }
                for (dx, ch) in row.chars().enumerate() {
                    let x = ox + dx as i32;
                    if ch == ' ' || x < i32::from(area.left()) || x >= i32::from(area.right()) {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                        cell.set_char(ch).set_style(Theme::cloud_style());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parallax::PointerBus;

    #[test]
    fn cloud_drifts_against_pointer() {
        let bus = PointerBus::new();
        let clouds = vec![Cloud {
            anchor: Anchor::TopLeft { x: 10, y: 0 },
            layer: bus.subscribe(0.1, 0.0),
        }];
        let area = Rect::new(0, 0, 40, 4);

        let mut buf = Buffer::empty(area);
        Clouds { clouds: &clouds }.render(area, &mut buf);
        assert_eq!(buf[(13, 0)].symbol(), ".");

        // Pointer at the far right: dx = 20 → shift -2.
        bus.publish(40.0, 2.0, 40.0, 4.0);
        let mut buf = Buffer::empty(area);
        Clouds { clouds: &clouds }.render(area, &mut buf);
        assert_eq!(buf[(11, 0)].symbol(), ".");
    }

    #[test]
    fn clipped_cloud_does_not_panic() {
        let bus = PointerBus::new();
        let clouds = vec![Cloud {
            anchor: Anchor::TopRight { x: 0, y: 0 },
            layer: bus.subscribe(5.0, 5.0),
        }];
        bus.publish(0.0, 100.0, 10.0, 4.0);
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        Clouds { clouds: &clouds }.render(area, &mut buf);
    }
}
