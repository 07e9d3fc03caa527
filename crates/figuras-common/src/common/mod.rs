mod color;
mod number_format;
pub mod telemetry;

pub use color::Colors;
pub use color::init as color_init;
pub use number_format::format_float;
