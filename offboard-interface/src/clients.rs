mod dummy_lifecycle;
mod dummy_setpoint_sink;
mod loop_rate_lifecycle;
mod shared_position;
mod simulated_vehicle;

pub use dummy_lifecycle::*;
pub use dummy_setpoint_sink::*;
pub use loop_rate_lifecycle::*;
pub use shared_position::*;
pub use simulated_vehicle::*;
