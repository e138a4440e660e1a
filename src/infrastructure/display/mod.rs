//! Display implementations

mod console;

pub use console::{render_board, ConsoleDisplay, DisplayField};
