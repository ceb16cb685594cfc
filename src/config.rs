//! User configuration: loop settings, logos, typewriter, and display rate.
//!
//! Read from `<config dir>/katalo/config.toml` (e.g. `~/.config/katalo/config.toml`).
//! Every key is optional; anything missing falls back to the landing-screen
//! defaults below.
//!
//! ```toml
//! [loop]
//! speed = 8.0
//! direction = "reverse"
//! gap = 5
//!
//! [[logos]]
//! label = "Rust"
//! href = "https://www.rust-lang.org"
//!
//! [typewriter]
//! sentences = ["Boba", "Dimsum", "Laundry"]
//! typing_ms = 200
//!
//! [display]
//! fps = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::core::item::{Direction, Item, LoopConfig};
use crate::core::typewriter::TypeWriterConfig;

/// Landing-screen loop speed in cells per second.
pub const LANDING_SPEED: f64 = 8.0;
/// Landing-screen gap between logos, in cells.
pub const LANDING_GAP: f64 = 5.0;
pub const DEFAULT_FPS: u32 = 30;
pub const MAX_FPS: u32 = 120;

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ───────────────────────────────────────── file format ───────

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    #[serde(rename = "loop")]
    loop_section: LoopSection,
    logos: Option<Vec<Item>>,
    typewriter: TypeWriterSection,
    display: DisplaySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LoopSection {
    speed: Option<f64>,
    direction: Option<Direction>,
    gap: Option<f64>,
    item_height: Option<f64>,
    pause_on_hover: Option<bool>,
    scale_on_hover: Option<bool>,
    class_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TypeWriterSection {
    sentences: Option<Vec<String>>,
    typing_ms: Option<u64>,
    deleting_ms: Option<u64>,
    pause_ms: Option<u64>,
    show_cursor: Option<bool>,
    cursor: Option<char>,
    cursor_blink_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DisplaySection {
    fps: Option<u32>,
}

// ───────────────────────────────────────── config ────────────

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub loop_config: LoopConfig,
    pub logos: Vec<Item>,
    pub sentences: Vec<String>,
    pub typewriter: TypeWriterConfig,
    pub fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loop_config: LoopConfig {
                speed: LANDING_SPEED,
                item_gap: LANDING_GAP,
                item_height: 1.0,
                pause_on_hover: true,
                scale_on_hover: true,
                ..LoopConfig::default()
            },
            logos: default_logos(),
            sentences: vec!["Boba".into(), "Dimsum".into(), "Laundry".into()],
            typewriter: TypeWriterConfig {
                typing_speed: Duration::from_millis(200),
                pause_duration: Duration::from_millis(3000),
                ..TypeWriterConfig::default()
            },
            fps: DEFAULT_FPS,
        }
    }
}

fn default_logos() -> Vec<Item> {
    vec![
        Item::new("React").link("https://react.dev").title("React"),
        Item::new("Next.js").link("https://nextjs.org").title("Next.js"),
        Item::new("TypeScript")
            .link("https://www.typescriptlang.org")
            .title("TypeScript"),
        Item::new("Tailwind CSS")
            .link("https://tailwindcss.com")
            .title("Tailwind CSS"),
    ]
}

impl AppConfig {
    /// Load from `path` (or the default location).  A missing file is not
    /// an error and yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML text and merge it over the defaults.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Self::default().merged(file))
    }

    fn merged(mut self, file: ConfigFile) -> Self {
        let l = file.loop_section;
        let lc = &mut self.loop_config;
        if let Some(speed) = l.speed.filter(|v| v.is_finite() && *v >= 0.0) {
            lc.speed = speed;
        }
        if let Some(direction) = l.direction {
            lc.direction = direction;
        }
        if let Some(gap) = l.gap.filter(|v| v.is_finite() && *v >= 0.0) {
            lc.item_gap = gap;
        }
        if let Some(h) = l.item_height.filter(|v| v.is_finite() && *v > 0.0) {
            lc.item_height = h;
        }
        if let Some(v) = l.pause_on_hover {
            lc.pause_on_hover = v;
        }
        if let Some(v) = l.scale_on_hover {
            lc.scale_on_hover = v;
        }
        if l.class_name.is_some() {
            lc.class_name = l.class_name;
        }

        if let Some(logos) = file.logos {
            self.logos = logos;
        }

        let t = file.typewriter;
        if let Some(sentences) = t.sentences {
            self.sentences = sentences;
        }
        let tw = &mut self.typewriter;
        if let Some(ms) = t.typing_ms {
            tw.typing_speed = Duration::from_millis(ms);
        }
        if let Some(ms) = t.deleting_ms {
            tw.deleting_speed = Duration::from_millis(ms);
        }
        if let Some(ms) = t.pause_ms {
            tw.pause_duration = Duration::from_millis(ms);
        }
        if let Some(v) = t.show_cursor {
            tw.show_cursor = v;
        }
        if let Some(c) = t.cursor {
            tw.cursor_char = c;
        }
        if let Some(ms) = t.cursor_blink_ms {
            tw.cursor_blink = Duration::from_millis(ms);
        }

        if let Some(fps) = file.display.fps {
            self.fps = fps;
        }
        self.fps = self.fps.clamp(1, MAX_FPS);
        self
    }

    /// Interval between frames at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.clamp(1, MAX_FPS)))
    }
}

/// Return the config file path (`<config dir>/katalo/config.toml`).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(env!("CARGO_PKG_NAME")).join("config.toml"))
}
