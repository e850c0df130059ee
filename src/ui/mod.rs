//! UI components for maiku.
//!
//! This module contains:
//! - layout: Panel geometry and top-level rendering
//! - input: Keyboard input handling
//! - widgets: The list and content panels

pub mod input;
pub mod layout;
pub mod widgets;
