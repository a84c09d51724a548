use nalgebra as na;
use crate::msg::{
    geometry_msgs::{Point, PoseStamped, TwistStamped, Vector3},
    std_msgs::Header,
};

impl From<na::Vector3<f64>> for Point {
    fn from(v: na::Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Point> for na::Vector3<f64> {
    fn from(p: Point) -> Self {
        na::Vector3::new(p.x, p.y, p.z)
    }
}

impl From<na::Vector3<f64>> for Vector3 {
    fn from(v: na::Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

fn stamped_header(stamp: rosrust::Time) -> Header {
    Header {
        stamp,
        ..Default::default()
    }
}

/// Position setpoint message. The orientation is left as all zeros, which
/// the autopilot ignores for position-only control.
pub(crate) fn position_setpoint_msg(
    position: na::Vector3<f64>,
    stamp: rosrust::Time,
) -> PoseStamped {
    let mut msg = PoseStamped {
        header: stamped_header(stamp),
        ..Default::default()
    };
    msg.pose.position = position.into();
    msg
}

pub(crate) fn velocity_setpoint_msg(
    velocity: na::Vector3<f64>,
    stamp: rosrust::Time,
) -> TwistStamped {
    let mut msg = TwistStamped {
        header: stamped_header(stamp),
        ..Default::default()
    };
    msg.twist.linear = velocity.into();
    msg
}
