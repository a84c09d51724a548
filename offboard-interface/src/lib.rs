//! Abstract interface between an offboard path test and the vehicle it commands.
//!
//! The test only ever talks to three collaborators: a [`SetpointSink`] that
//! accepts position or velocity commands, a [`PositionSource`] that provides the
//! latest known vehicle position, and a [`Lifecycle`] that paces the control
//! loop and tells it when to stop.

mod clients;
mod conditions;
mod error;
mod setpoint;
mod traits;

pub use clients::*;
pub use conditions::*;
pub use error::*;
pub use setpoint::*;
pub use traits::*;

// re-export
pub use nalgebra::Vector3;
