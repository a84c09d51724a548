use offboard_interface::Lifecycle;

/// Lifecycle driven by the ROS node: `is_ok` follows `rosrust::is_ok` and
/// `shutdown` shuts the node down. Subscriber callbacks run on their own
/// threads, so a tick only has to sleep.
pub struct RosLifecycle {
    rate: rosrust::api::Rate,
}

impl RosLifecycle {
    pub fn new(rate_hz: f64) -> Self {
        Self {
            rate: rosrust::rate(rate_hz),
        }
    }
}

impl Lifecycle for RosLifecycle {
    fn is_ok(&self) -> bool {
        rosrust::is_ok()
    }

    fn spin_once(&self) {
        self.rate.sleep();
    }

    fn shutdown(&self) {
        rosrust::shutdown();
    }
}
