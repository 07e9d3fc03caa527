//! Port interfaces owned by use cases.

pub mod console;
pub mod observer;
#[cfg(test)]
pub mod test_support;

pub use console::Console;
pub use console::ConsoleError;
pub use observer::CalculationObserver;
pub use observer::NoopObserver;
