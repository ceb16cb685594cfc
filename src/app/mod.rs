//! Application orchestration: state, terminal host, event loop inputs, and
//! input handling.

pub mod event;
pub mod handler;
pub mod host;
pub mod state;
