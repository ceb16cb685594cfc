//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::logo_loop::{LogoLoop, MountedLoop};
use crate::core::parallax::PointerBus;
use crate::core::typewriter::TypeWriter;
use crate::ui::clouds::{Anchor, Cloud};
use crate::ui::hero::BUTTONS;
use crate::ui::layout::LandingLayout;

use super::host::{CellMeasure, TerminalHost};

/// Top-level application state.
pub struct AppState {
    pub config: AppConfig,
    /// The logo loop, mounted on the terminal host for the whole session.
    pub logo: MountedLoop<TerminalHost>,
    pub typewriter: TypeWriter,
    /// Button lit up for the sentence being typed next.
    pub highlighted_button: usize,
    /// Pointer publisher the cloud layers subscribe to.
    pub pointer: PointerBus,
    pub clouds: Vec<Cloud>,
    /// Regions computed for the current terminal size.
    pub layout: LandingLayout,
    /// `(copy, item)` of the strip segment under the pointer.
    pub hovered_segment: Option<(usize, usize)>,
    /// Accessible name (and link) of the hovered logo, for the status bar.
    pub hover_announcement: Option<String>,
    /// Link chosen by clicking a logo; printed for the shell on exit.
    pub selected_link: Option<String>,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Previous frame tick, for typewriter elapsed time.
    pub last_tick: Option<Instant>,
}

impl AppState {
    pub fn new(config: AppConfig, area: Rect, epoch: Instant) -> Self {
        let layout = LandingLayout::from_area(area);
        let logo = LogoLoop::new(config.logos.clone(), config.loop_config.clone());
        let logo = MountedLoop::mount(logo, TerminalHost::new(epoch), &strip_measure(&layout));

        let typewriter = TypeWriter::new(config.sentences.clone(), config.typewriter.clone());

        let pointer = PointerBus::new();
        let clouds = vec![
            Cloud {
                anchor: Anchor::TopLeft { x: 3, y: 1 },
                layer: pointer.subscribe(0.06, 0.10),
            },
            Cloud {
                anchor: Anchor::TopRight { x: 2, y: 0 },
                layer: pointer.subscribe(0.10, 0.15),
            },
        ];

        Self {
            config,
            logo,
            typewriter,
            highlighted_button: 0,
            pointer,
            clouds,
            layout,
            hovered_segment: None,
            hover_announcement: None,
            selected_link: None,
            status_message: None,
            should_quit: false,
            last_tick: None,
        }
    }

    /// Measure for the strip box under the current layout.
    pub fn measure(&self) -> CellMeasure {
        strip_measure(&self.layout)
    }

    /// Button to light up after sentence `index` finishes.
    pub fn button_after(index: usize) -> usize {
        (index + 1) % BUTTONS.len()
    }
}

fn strip_measure(layout: &LandingLayout) -> CellMeasure {
    CellMeasure {
        container_width: layout.strip_inner.width,
    }
}
