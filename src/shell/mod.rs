//! Shell integration helpers.
//!
//! The binary communicates with the calling shell through **stdout**.
//! All TUI rendering goes to the alternate screen (stderr-backed), so stdout
//! is reserved for the "result": the link picked from the logo strip, which
//! the shell wrapper opens in a fresh browser context.

pub mod integration;
