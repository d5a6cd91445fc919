//! Interactive terminal interface

mod app;
mod keymap;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use keymap::key_to_letter;
