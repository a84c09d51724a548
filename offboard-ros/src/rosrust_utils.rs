use offboard_interface::SharedPosition;

/// Subscribes to `topic` and writes the position of every received pose into `position`.
pub fn subscribe_position(
    topic: &str,
    queue_size: usize,
    position: &SharedPosition,
) -> Result<rosrust::Subscriber, crate::Error> {
    let writer = position.clone();
    rosrust::subscribe(
        topic,
        queue_size,
        move |message: crate::msg::geometry_msgs::PoseStamped| {
            writer.set(message.pose.position.into());
        },
    )
    .map_err(|e| crate::Error::Subscribe {
        topic: topic.to_owned(),
        message: format!("{:?}", e),
    })
}

/// Blocks until `position` holds a value or ROS is shutting down.
pub fn wait_position(topic: &str, position: &SharedPosition, loop_millis: u64) {
    while rosrust::is_ok() && matches!(position.get(), Ok(None)) {
        rosrust::ros_info!("Waiting {}", topic);
        std::thread::sleep(std::time::Duration::from_millis(loop_millis));
    }
}

/// Reads a string parameter, falling back to `default` when it is unset or not a string.
///
/// Private names (`~mode`) resolve against this node's namespace.
pub fn param_or(name: &str, default: &str) -> String {
    rosrust::param(name)
        .and_then(|param| param.get::<String>().ok())
        .unwrap_or_else(|| default.to_owned())
}
