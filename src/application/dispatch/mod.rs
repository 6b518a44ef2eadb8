mod command;
mod dispatcher;

pub use command::{Access, Command, Handler, Reply};
pub use dispatcher::{CommandDispatcher, ParsedLine};
