//! Input handling: maps key, mouse, resize, and frame events to state
//! mutations.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::core::item::LoopConfig;
use crate::ui::layout::LandingLayout;

use super::state::AppState;

/// Speed change per `+` / `-` press, in cells per second.
pub const SPEED_STEP: f64 = 2.0;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('r') => {
            let mut next = state.logo.logo().config().clone();
            next.direction = next.direction.flipped();
            state.status_message = Some(format!("Direction: {}", next.direction.label()));
            reconfigure(state, next);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let mut next = state.logo.logo().config().clone();
            next.speed += SPEED_STEP;
            state.status_message = Some(format!("Speed: {}", next.speed));
            reconfigure(state, next);
        }
        KeyCode::Char('-') => {
            let mut next = state.logo.logo().config().clone();
            next.speed = (next.speed - SPEED_STEP).max(0.0);
            state.status_message = Some(format!("Speed: {}", next.speed));
            reconfigure(state, next);
        }
        KeyCode::Char('p') => {
            let mut next = state.logo.logo().config().clone();
            next.pause_on_hover = !next.pause_on_hover;
            state.status_message = Some(format!(
                "Pause on hover: {}",
                if next.pause_on_hover { "on" } else { "off" }
            ));
            reconfigure(state, next);
        }
        _ => {}
    }
}

fn reconfigure(state: &mut AppState, next: LoopConfig) {
    let measure = state.measure();
    state.config.loop_config = next.clone();
    state.logo.logo_mut().reconfigure(next, &measure);
}

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let area = state.layout.area;
            state.pointer.publish(
                f64::from(mouse.column),
                f64::from(mouse.row),
                f64::from(area.width),
                f64::from(area.height),
            );
            update_hover(state, pos);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            update_hover(state, pos);
            click(state, pos);
        }
        _ => {}
    }
}

/// Pointer enter/leave over the strip box, and the segment under it.
fn update_hover(state: &mut AppState, pos: Position) {
    let inside = state.layout.strip.contains(pos);
    let logo = state.logo.logo_mut();
    match (inside, logo.is_hovered()) {
        (true, false) => logo.pointer_enter(),
        (false, true) => logo.pointer_leave(),
        _ => {}
    }

    state.hovered_segment = segment_at(state, pos);
    state.hover_announcement = state.hovered_segment.map(|(_, item)| {
        let entry = &state.logo.logo().items()[item];
        match entry.href.as_deref() {
            Some(href) => format!("{} → {href}", entry.accessible_name()),
            None => entry.accessible_name().to_string(),
        }
    });
}

fn segment_at(state: &AppState, pos: Position) -> Option<(usize, usize)> {
    let inner: Rect = state.layout.strip_inner;
    if !inner.contains(pos) {
        return None;
    }
    let x = f64::from(pos.x - inner.x);
    state
        .logo
        .logo()
        .hit_test(x, f64::from(inner.width))
        .map(|seg| (seg.copy, seg.item))
}

/// Clicking any copy of a linked logo selects its link and ends the session.
fn click(state: &mut AppState, pos: Position) {
    let Some((_, item)) = segment_at(state, pos) else {
        return;
    };
    let entry = &state.logo.logo().items()[item];
    match entry.href.clone() {
        Some(href) => {
            tracing::info!(%href, "logo link selected");
            state.selected_link = Some(href);
            state.should_quit = true;
        }
        None => {
            state.status_message = Some(format!("{} has no link", entry.accessible_name()));
        }
    }
}

/// Terminal resized: recompute regions and notify the loop's listener.
pub fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    state.layout = LandingLayout::from_area(Rect::new(0, 0, width, height));
    if state.logo.host().has_resize_listeners() {
        let measure = state.measure();
        state.logo.logo_mut().on_resize(&measure);
    }
    state.hovered_segment = None;
    state.hover_announcement = None;
}

/// Frame tick: deliver the pending loop frame and advance the typewriter.
pub fn handle_frame(state: &mut AppState, now: Instant) {
    if let Some(token) = state.logo.host_mut().take_due_frame() {
        let timestamp = state.logo.host().timestamp(now);
        state.logo.on_frame(token, timestamp);
    }

    let elapsed = state
        .last_tick
        .map(|t| now.saturating_duration_since(t))
        .unwrap_or_default();
    state.last_tick = Some(now);
    for done in state.typewriter.advance(elapsed) {
        state.highlighted_button = AppState::button_after(done.index);
        tracing::trace!(sentence = %done.sentence, "headline sentence complete");
    }
}
