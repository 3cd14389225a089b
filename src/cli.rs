mod args;
mod console;
mod script;

pub use args::Options;
pub use console::Console;
pub use script::Script;
