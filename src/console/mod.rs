mod render;
mod terminal;

pub use render::{FAREWELL, MENU_HEADER, WELCOME, error_message, reply_lines};
pub use terminal::{Console, ConsoleError, Outcome};
