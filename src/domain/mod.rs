//! Domain entities for maiku.
//!
//! - Haiku: one compiled-in poem record
//! - HAIKUS: the fixed content table

mod haiku;

pub use haiku::{Haiku, HAIKUS};
