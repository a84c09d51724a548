//! [`offboard_interface`] implementation using ROS1, talking to the autopilot through mavros.

#![warn(rust_2018_idioms)]

mod error;
mod msg;
mod msg_utils;
mod ros_lifecycle;
mod ros_local_position_subscriber;
mod ros_offboard_config;
mod ros_setpoint_publisher;
pub mod rosrust_utils;

// re-export
pub use rosrust::{init, is_ok, rate};

pub use crate::{
    error::Error, ros_lifecycle::*, ros_local_position_subscriber::*, ros_offboard_config::*,
    ros_setpoint_publisher::*, rosrust_utils::*,
};
