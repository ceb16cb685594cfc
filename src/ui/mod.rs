//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the *core* animation state and turns it into cells on
//! the terminal.  No state is mutated here.

pub mod clouds;
pub mod hero;
pub mod layout;
pub mod logo_strip;
pub mod theme;

use ratatui::{widgets::Paragraph, Frame};

use crate::app::state::AppState;

use self::clouds::Clouds;
use self::hero::{Buttons, Description, Headline};
use self::logo_strip::LogoStrip;
use self::theme::Theme;

pub const KEY_HINT: &str = "click a logo: open | r: reverse | +/-: speed | p: pause on hover | q: quit";

/// Draw the whole landing screen.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = &state.layout;

    frame.render_widget(
        Clouds {
            clouds: &state.clouds,
        },
        layout.sky,
    );
    frame.render_widget(
        Headline {
            typewriter: &state.typewriter,
        },
        layout.headline,
    );
    frame.render_widget(Description, layout.description);
    frame.render_widget(
        LogoStrip::new(state.logo.logo()).hovered(state.hovered_segment),
        layout.strip,
    );
    frame.render_widget(
        Buttons {
            highlighted: state.highlighted_button,
        },
        layout.buttons,
    );

    let status_text = state
        .hover_announcement
        .as_deref()
        .or(state.status_message.as_deref())
        .unwrap_or(KEY_HINT);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status,
    );
}
