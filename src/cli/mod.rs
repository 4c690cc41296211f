mod args;
mod command;

pub use self::args::{Args, Command};
pub use self::command::{execute, load_source};
