mod observer;

pub use observer::TracingObserver;
