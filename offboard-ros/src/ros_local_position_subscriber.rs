use nalgebra::Vector3;
use offboard_interface::{PositionSource, SharedPosition};

use crate::{rosrust_utils::*, Error, RosOffboardConfig};

const WAIT_LOOP_MILLIS: u64 = 100;

/// Keeps the latest local position published by mavros.
pub struct RosLocalPositionSubscriber {
    topic: String,
    position: SharedPosition,
    _subscriber: rosrust::Subscriber,
}

impl RosLocalPositionSubscriber {
    pub fn new(config: &RosOffboardConfig) -> Result<Self, Error> {
        let position = SharedPosition::new();
        let _subscriber = subscribe_position(
            &config.local_position_topic,
            config.queue_size,
            &position,
        )?;
        Ok(Self {
            topic: config.local_position_topic.clone(),
            position,
            _subscriber,
        })
    }
}

impl PositionSource for RosLocalPositionSubscriber {
    fn current_position(&self) -> Result<Vector3<f64>, offboard_interface::Error> {
        wait_position(&self.topic, &self.position, WAIT_LOOP_MILLIS);
        self.position.current_position()
    }
}
