use auto_impl::auto_impl;

use crate::{error::Result, Setpoint};

/// Accepts position or velocity commands. Publishing is fire-and-forget.
#[auto_impl(&, Box, Rc, Arc)]
pub trait SetpointSink {
    fn send_setpoint(&self, setpoint: &Setpoint) -> Result<()>;
}
