//! maiku: a minimalist terminal haiku viewer
//!
//! Shows a fixed list of haiku in a two-panel layout: titles on the left,
//! the selected poem centered on the right.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use app::{App, LoopState};
pub use config::ViewerConfig;
pub use error::{AppError, Result};
