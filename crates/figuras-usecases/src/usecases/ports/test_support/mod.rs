//! Test-only fakes for use case ports.
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod recording_observer;
mod scripted_console;

pub use recording_observer::ObservedEvent;
pub use recording_observer::RecordingObserver;
pub use scripted_console::ScriptedConsole;
