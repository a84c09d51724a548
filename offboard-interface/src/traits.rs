mod lifecycle;
mod position_source;
mod setpoint_sink;

pub use lifecycle::*;
pub use position_source::*;
pub use setpoint_sink::*;
