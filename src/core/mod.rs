//! Core animation logic – the logo loop, the typewriter, and parallax.
//!
//! Nothing in this module depends on any TUI or rendering crate.  Hosts
//! plug in through the [`geometry::Measure`] and [`logo_loop::FrameHost`]
//! traits.

pub mod geometry;
pub mod hover;
pub mod item;
pub mod logo_loop;
pub mod motion;
pub mod parallax;
pub mod planner;
pub mod typewriter;
