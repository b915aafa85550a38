mod debug;
mod log_sink;
mod screendump;

pub use debug::*;
pub use log_sink::*;
pub use screendump::*;
