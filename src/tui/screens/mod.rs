//! TUI screen implementations.

pub mod add_car;
pub mod help;

pub use add_car::{AddCarState, draw_add_car};
pub use help::{HelpState, draw_help};
