use nalgebra::Vector3;
use thiserror::Error;

use crate::ControlMode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("offboard: Control mode: wrong/unexistant control mode name {:?}", .0)]
    UnknownControlMode(String),
    #[error("offboard: Path shape: wrong/unexistant path shape name {:?}", .0)]
    UnknownPathShape(String),
    #[error("offboard: Control mode: {} control mode is not supported", .0)]
    UnsupportedControlMode(ControlMode),
    #[error("offboard: No position is available : {}", message)]
    NoPosition { message: String },
    #[error(
        "offboard: Arrival timeout {:?}: target={:?}, current={:?}, distance={}",
        timeout,
        target,
        current,
        distance
    )]
    ArrivalTimeout {
        timeout: std::time::Duration,
        target: Vector3<f64>,
        current: Vector3<f64>,
        distance: f64,
    },
    #[error("offboard: Connection error : {}", message)]
    Connection { message: String },
    #[error("offboard: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
