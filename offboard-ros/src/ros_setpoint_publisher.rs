use offboard_interface::{Setpoint, SetpointSink};

use crate::{
    msg::geometry_msgs::{PoseStamped, TwistStamped},
    msg_utils::{position_setpoint_msg, velocity_setpoint_msg},
    Error, RosOffboardConfig,
};

/// Publishes position setpoints as `PoseStamped` and velocity setpoints as
/// `TwistStamped`, stamped with the current ROS time.
pub struct RosSetpointPublisher {
    position_publisher: rosrust::Publisher<PoseStamped>,
    velocity_publisher: rosrust::Publisher<TwistStamped>,
}

impl RosSetpointPublisher {
    pub fn new(config: &RosOffboardConfig) -> Result<Self, Error> {
        Ok(Self {
            position_publisher: advertise(&config.setpoint_position_topic, config.queue_size)?,
            velocity_publisher: advertise(&config.setpoint_velocity_topic, config.queue_size)?,
        })
    }
}

fn advertise<T: rosrust::Message>(
    topic: &str,
    queue_size: usize,
) -> Result<rosrust::Publisher<T>, Error> {
    rosrust::publish(topic, queue_size).map_err(|e| Error::Advertise {
        topic: topic.to_owned(),
        message: format!("{:?}", e),
    })
}

impl SetpointSink for RosSetpointPublisher {
    fn send_setpoint(&self, setpoint: &Setpoint) -> Result<(), offboard_interface::Error> {
        let stamp = rosrust::now();
        let result = match setpoint {
            Setpoint::Position(p) => self
                .position_publisher
                .send(position_setpoint_msg(*p, stamp)),
            Setpoint::Velocity(v) => self
                .velocity_publisher
                .send(velocity_setpoint_msg(*v, stamp)),
        };
        result.map_err(|e| offboard_interface::Error::Connection {
            message: format!("rosrust publish error: {:?}", e),
        })
    }
}
