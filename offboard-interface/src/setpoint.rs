use std::{fmt, str::FromStr};

use nalgebra::Vector3;

use crate::error::Error;

/// How the vehicle is commanded.
///
/// `Acceleration` is a recognized mode that nothing implements: selecting it
/// is not a configuration error, but every routine refuses to run with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlMode {
    Position,
    Velocity,
    Acceleration,
}

impl ControlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Position => "position",
            ControlMode::Velocity => "velocity",
            ControlMode::Acceleration => "acceleration",
        }
    }
}

impl Default for ControlMode {
    fn default() -> Self {
        ControlMode::Position
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact lowercase mode name.
///
/// # Example
///
/// ```
/// use offboard_interface::ControlMode;
///
/// assert_eq!("velocity".parse::<ControlMode>().unwrap(), ControlMode::Velocity);
/// assert!("Velocity".parse::<ControlMode>().is_err());
/// ```
impl FromStr for ControlMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" => Ok(ControlMode::Position),
            "velocity" => Ok(ControlMode::Velocity),
            "acceleration" => Ok(ControlMode::Acceleration),
            _ => Err(Error::UnknownControlMode(s.to_owned())),
        }
    }
}

/// A single command for the vehicle, in the vehicle-local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Setpoint {
    /// Absolute position in meters.
    Position(Vector3<f64>),
    /// Linear velocity in meters per second.
    Velocity(Vector3<f64>),
}

impl Setpoint {
    pub fn mode(&self) -> ControlMode {
        match self {
            Setpoint::Position(_) => ControlMode::Position,
            Setpoint::Velocity(_) => ControlMode::Velocity,
        }
    }

    pub fn vector(&self) -> &Vector3<f64> {
        match self {
            Setpoint::Position(v) | Setpoint::Velocity(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_control_mode() {
        assert_eq!(
            "position".parse::<ControlMode>().unwrap(),
            ControlMode::Position
        );
        assert_eq!(
            "velocity".parse::<ControlMode>().unwrap(),
            ControlMode::Velocity
        );
        assert_eq!(
            "acceleration".parse::<ControlMode>().unwrap(),
            ControlMode::Acceleration
        );
        for name in ["hover", "", " position", "POSITION", "pos"] {
            assert!(matches!(
                name.parse::<ControlMode>(),
                Err(Error::UnknownControlMode(ref n)) if n == name
            ));
        }
    }

    #[test]
    fn test_control_mode_display() {
        for mode in [
            ControlMode::Position,
            ControlMode::Velocity,
            ControlMode::Acceleration,
        ] {
            assert_eq!(mode.to_string().parse::<ControlMode>().unwrap(), mode);
        }
        assert_eq!(ControlMode::default(), ControlMode::Position);
    }

    #[test]
    fn test_setpoint_mode() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(Setpoint::Position(v).mode(), ControlMode::Position);
        assert_eq!(Setpoint::Velocity(v).mode(), ControlMode::Velocity);
        assert_eq!(*Setpoint::Velocity(v).vector(), v);
    }
}
