use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const SETPOINT_POSITION_TOPIC: &str = "/mavros/setpoint_position/local";
const SETPOINT_VELOCITY_TOPIC: &str = "/mavros/setpoint_velocity/cmd_vel";
const LOCAL_POSITION_TOPIC: &str = "/mavros/local_position/local";
const QUEUE_SIZE: usize = 10;

/// Topics used to talk to mavros.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RosOffboardConfig {
    #[serde(default = "default_setpoint_position_topic")]
    pub setpoint_position_topic: String,
    #[serde(default = "default_setpoint_velocity_topic")]
    pub setpoint_velocity_topic: String,
    #[serde(default = "default_local_position_topic")]
    pub local_position_topic: String,
    #[serde(default = "default_queue_size")]
    pub queue_size: usize,
}

fn default_setpoint_position_topic() -> String {
    SETPOINT_POSITION_TOPIC.to_owned()
}

fn default_setpoint_velocity_topic() -> String {
    SETPOINT_VELOCITY_TOPIC.to_owned()
}

fn default_local_position_topic() -> String {
    LOCAL_POSITION_TOPIC.to_owned()
}

fn default_queue_size() -> usize {
    QUEUE_SIZE
}

impl Default for RosOffboardConfig {
    fn default() -> Self {
        Self {
            setpoint_position_topic: default_setpoint_position_topic(),
            setpoint_velocity_topic: default_setpoint_velocity_topic(),
            local_position_topic: default_local_position_topic(),
            queue_size: default_queue_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_topics() {
        let config: RosOffboardConfig = toml::from_str("").unwrap();
        assert_eq!(config, RosOffboardConfig::default());
        assert_eq!(config.setpoint_position_topic, "/mavros/setpoint_position/local");
        assert_eq!(config.setpoint_velocity_topic, "/mavros/setpoint_velocity/cmd_vel");
        assert_eq!(config.local_position_topic, "/mavros/local_position/local");
        assert_eq!(config.queue_size, 10);
    }

    #[test]
    fn test_partial_override() {
        let config: RosOffboardConfig =
            toml::from_str(r#"local_position_topic = "/uav1/mavros/local_position/pose""#)
                .unwrap();
        assert_eq!(config.local_position_topic, "/uav1/mavros/local_position/pose");
        assert_eq!(config.queue_size, 10);
        assert!(toml::from_str::<RosOffboardConfig>("unknown = 1").is_err());
    }
}
