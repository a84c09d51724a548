use auto_impl::auto_impl;
use nalgebra::Vector3;

use crate::error::Result;

/// Provides the most recently observed vehicle position in the vehicle-local frame.
#[auto_impl(&, Box, Rc, Arc)]
pub trait PositionSource {
    fn current_position(&self) -> Result<Vector3<f64>>;
}
