//! Wrappers that emit a `trace!` event for every call made through an
//! [`offboard_interface`] client.

#![warn(rust_2018_idioms)]

use offboard_interface::{Error, Lifecycle, PositionSource, Setpoint, SetpointSink, Vector3};
use tracing::trace;

#[derive(Debug)]
pub struct Tracing<T>(T);

impl<T> Tracing<T> {
    pub fn new(v: T) -> Self {
        Self(v)
    }

    pub fn get_ref(&self) -> &T {
        &self.0
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Tracing<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: SetpointSink> SetpointSink for Tracing<T> {
    fn send_setpoint(&self, setpoint: &Setpoint) -> Result<(), Error> {
        trace!(
            method = "offboard_interface::SetpointSink::send_setpoint",
            mode = %setpoint.mode(),
            x = setpoint.vector().x,
            y = setpoint.vector().y,
            z = setpoint.vector().z
        );
        self.0.send_setpoint(setpoint)
    }
}

impl<T: PositionSource> PositionSource for Tracing<T> {
    fn current_position(&self) -> Result<Vector3<f64>, Error> {
        let position = self.0.current_position()?;
        trace!(
            method = "offboard_interface::PositionSource::current_position",
            x = position.x,
            y = position.y,
            z = position.z
        );
        Ok(position)
    }
}

impl<T: Lifecycle> Lifecycle for Tracing<T> {
    fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    fn spin_once(&self) {
        self.0.spin_once()
    }

    fn shutdown(&self) {
        trace!(method = "offboard_interface::Lifecycle::shutdown");
        self.0.shutdown()
    }
}
