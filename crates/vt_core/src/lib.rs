//! A VT500-family terminal emulator engine: an escape-sequence parser
//! decoupled from the screen buffer it drives.
//!
//! The pipeline is `bytes -> Parser -> Command -> Controller -> ScreenBuffer
//! mutation`. Nothing here touches a PTY, a rendering surface, or a system
//! clipboard — `vt_core` only understands the data model and the escape
//! sequence grammar; wiring it to an actual terminal session is left to a
//! host such as the `vt_demo` binary.

mod cell;
mod clipboard;
mod color;
mod config;
mod controller;
mod cursor;
mod error;
mod mode;
mod parser;
mod position;
mod screen_buffer;

pub use cell::{Cell, Rgb};
pub use clipboard::ClipboardRequest;
pub use color::{bg_from_sgr, fg_from_sgr, from_palette_256, from_rgb, parse_color_spec, PALETTE_16, PALETTE_256};
pub use config::EngineConfig;
pub use controller::Controller;
pub use cursor::{Cursor, CursorShape};
pub use error::{EngineError, Result};
pub use mode::Modes;
pub use parser::{Command, Parser, ParserState};
pub use position::Position;
pub use screen_buffer::ScreenBuffer;
