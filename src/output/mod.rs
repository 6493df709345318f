//! Tree rendering
//!
//! - `color` - Entry kind to display color mapping
//! - `config` - Output configuration types
//! - `console` - Streaming console formatter

mod color;
mod config;
mod console;

pub use color::DisplayColor;
pub use config::OutputConfig;
pub use console::ConsoleFormatter;
