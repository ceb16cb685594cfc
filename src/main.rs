//! Katalo: a campus landing screen for the terminal.
//!
//! Run the binary to open the landing screen with its scrolling logo strip.
//! Run with `--init-bash` to print the shell function for your `.bashrc`.

mod app;
mod config;
mod core;
mod shell;
mod ui;

use std::io::{self, stderr, Stderr};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::{self, MissedTickBehavior};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::item::Direction;
use crate::core::logo_loop::LogoLoop;
use crate::shell::integration;

type Backend = CrosstermBackend<Stderr>;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Campus landing screen with a scrolling logo strip")]
struct Cli {
    /// Config file (defaults to `<config dir>/katalo/config.toml`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Strip speed in cells per second.
    #[arg(long)]
    speed: Option<f64>,

    /// Scroll the strip right instead of left.
    #[arg(long)]
    reverse: bool,

    /// Keep scrolling while the pointer is over the strip.
    #[arg(long = "no-pause-on-hover")]
    no_pause_on_hover: bool,

    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Print the strip's logos (name and link) and exit.
    #[arg(long = "list-logos")]
    list_logos: bool,

    /// Print the bash shell function and exit.
    #[arg(long = "init-bash")]
    init_bash: bool,

    /// Print the zsh shell function and exit.
    #[arg(long = "init-zsh")]
    init_zsh: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(speed) = self.speed.filter(|v| v.is_finite() && *v >= 0.0) {
            config.loop_config.speed = speed;
        }
        if self.reverse {
            config.loop_config.direction = Direction::Reverse;
        }
        if self.no_pause_on_hover {
            config.loop_config.pause_on_hover = false;
        }
        if let Some(fps) = self.fps {
            config.fps = fps.clamp(1, config::MAX_FPS);
        }
    }
}

// ───────────────────────────────────────── terminal ─────────

fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let entered = (|| -> Result<Terminal<Backend>> {
        let mut stderr_handle = stderr();
        execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Terminal::new(CrosstermBackend::new(stderr()))?)
    })();
    // Half-entered terminal: undo raw mode before bailing out.
    finish(
        entered,
        || {
            disable_raw_mode()?;
            let mut stderr_handle = stderr();
            execute!(stderr_handle, LeaveAlternateScreen, DisableMouseCapture)?;
            Ok(())
        },
        false,
    )
}

fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run `cleanup` when `outcome` failed, or always when `always` is set, and
/// report the outcome's error ahead of any cleanup error.
fn finish<T>(
    outcome: Result<T>,
    cleanup: impl FnOnce() -> Result<()>,
    always: bool,
) -> Result<T> {
    if outcome.is_err() || always {
        let cleaned = cleanup();
        let value = outcome?;
        cleaned?;
        Ok(value)
    } else {
        outcome
    }
}

// ───────────────────────────────────────── event loop ───────

async fn run(terminal: &mut Terminal<Backend>, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(50));
    let mut ticker = time::interval(state.config.frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| ui::draw(frame, state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize(w, h) => handler::handle_resize(state, w, h),
                }
            }

            tick = ticker.tick() => {
                handler::handle_frame(state, tick.into_std());
            }
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

/// One landing-screen session on an already set-up terminal.  The loop is
/// unmounted before this returns; the selected link, if any, is handed back.
async fn session(terminal: &mut Terminal<Backend>, config: AppConfig) -> Result<Option<String>> {
    let area = terminal.size()?;
    let mut state = AppState::new(
        config,
        ratatui::layout::Rect::new(0, 0, area.width, area.height),
        Instant::now(),
    );
    tracing::debug!(
        copies = state.logo.logo().layout().copy_count,
        "landing screen mounted"
    );
    run(terminal, &mut state).await?;
    Ok(state.selected_link.take())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    // ── shell-integration mode ────────────────────────────────
    if cli.init_bash {
        print!("{}", integration::bash_function());
        return Ok(());
    }
    if cli.init_zsh {
        print!("{}", integration::zsh_function());
        return Ok(());
    }

    // ── configuration ─────────────────────────────────────────
    let mut config = AppConfig::load(cli.config.as_deref()).unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default config");
        AppConfig::default()
    });
    cli.apply(&mut config);

    if cli.list_logos {
        let logo = LogoLoop::new(config.logos.clone(), config.loop_config.clone());
        print!("{}", integration::accessible_listing(logo.accessible_items()));
        return Ok(());
    }

    // ── terminal setup ────────────────────────────────────────
    let mut terminal = setup_terminal()?;
    let outcome = session(&mut terminal, config).await;

    // ── teardown ──────────────────────────────────────────────
    let selected = finish(outcome, || restore_terminal(&mut terminal), true)?;

    integration::print_exit_payload(selected.as_deref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from([
            "katalo",
            "--speed",
            "12",
            "--reverse",
            "--no-pause-on-hover",
            "--fps",
            "500",
        ]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.loop_config.speed, 12.0);
        assert_eq!(config.loop_config.direction, Direction::Reverse);
        assert!(!config.loop_config.pause_on_hover);
        assert_eq!(config.fps, config::MAX_FPS);
    }

    #[test]
    fn failure_always_cleans_up() {
        let mut cleaned = false;
        let result: Result<()> = finish(
            Err(anyhow::anyhow!("no tty")),
            || {
                cleaned = true;
                Ok(())
            },
            false,
        );
        assert!(cleaned);
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }

    #[test]
    fn success_skips_cleanup_unless_asked() {
        let mut calls = 0;
        let mut count = || -> Result<()> {
            calls += 1;
            Ok(())
        };
        assert_eq!(finish(Ok(7), &mut count, false).unwrap(), 7);
        assert_eq!(finish(Ok(7), &mut count, true).unwrap(), 7);
        assert_eq!(calls, 1);
    }

    #[test]
    fn cleanup_error_surfaces_after_success() {
        let result = finish(Ok(()), || Err(anyhow::anyhow!("restore failed")), true);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_negative_speed() {
        let cli = Cli::parse_from(["katalo", "--speed=-3"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.loop_config.speed, config::LANDING_SPEED);
    }
}
