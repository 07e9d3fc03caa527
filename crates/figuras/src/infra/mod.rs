mod console;

pub use console::StdioConsole;
