use std::path::Path;

use offboard_interface::{
    ArrivalCondition, BoundedDistanceThreshold, DistanceThreshold, SimulatedVehicle, Vector3,
    DEFAULT_ARRIVAL_THRESHOLD,
};
#[cfg(feature = "ros")]
use offboard_ros::RosOffboardConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, TestSelection};

/// Where setpoints go and positions come from.
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-process kinematic vehicle, paced by the wall clock.
    #[default]
    Sim,
    /// mavros topics on a running ROS master.
    Ros,
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Fastest the simulated vehicle moves toward a position setpoint, in m/s.
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
    #[serde(default)]
    pub initial_position: [f64; 3],
}

impl SimConfig {
    pub fn initial_position(&self) -> Vector3<f64> {
        let [x, y, z] = self.initial_position;
        Vector3::new(x, y, z)
    }

    pub fn create_vehicle(&self) -> SimulatedVehicle {
        SimulatedVehicle::new(self.initial_position(), self.max_speed)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_speed: default_max_speed(),
            initial_position: Default::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
#[non_exhaustive] // The fields will increase depending on the feature flag.
pub struct OffboardTestConfig {
    // TOML format has a restriction that if a table itself contains tables,
    // all keys with non-table values must be emitted first.
    // Therefore, these fields must be located at the start of the struct.
    /// One of "position", "velocity", "acceleration".
    #[serde(default = "default_mode")]
    pub mode: String,
    /// One of "square", "circle", "eight", "ellipse".
    #[serde(default = "default_shape")]
    pub shape: String,
    #[serde(default)]
    pub backend: Backend,
    /// Give up waiting on a target after this many seconds. Waits forever if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_timeout_sec: Option<f64>,

    #[serde(default)]
    pub sim: SimConfig,

    #[cfg(feature = "ros")]
    #[serde(default)]
    pub ros: RosOffboardConfig,
    // A dummy field to catch that there is a config that requires the ros feature.
    #[cfg(not(feature = "ros"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "unimplemented_schema")]
    ros: Option<toml::Value>,
}

fn default_mode() -> String {
    "position".to_owned()
}

fn default_shape() -> String {
    "square".to_owned()
}

fn default_max_speed() -> f64 {
    2.0
}

// Creates dummy schema for dummy fields.
#[cfg(not(feature = "ros"))]
fn unimplemented_schema(_gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
    schemars::schema::Schema::Bool(false)
}

impl Default for OffboardTestConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            shape: default_shape(),
            backend: Backend::default(),
            arrival_timeout_sec: None,
            sim: SimConfig::default(),
            ros: Default::default(),
        }
    }
}

impl OffboardTestConfig {
    pub fn try_new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_str(
            &std::fs::read_to_string(&path)
                .map_err(|e| Error::NoFile(path.as_ref().to_owned(), e))?,
            &path,
        )
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        let config: OffboardTestConfig =
            toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))?;
        config.validate()?;
        debug!("{:?}", config);
        Ok(config)
    }

    /// Checks what serde cannot: value ranges and fields that need the ros feature.
    ///
    /// Mode and shape names are not checked here; see [`Self::selection`].
    pub fn validate(&self) -> Result<(), Error> {
        // Returns an error if a config requires ros feature but ros feature is disabled.
        #[cfg(not(feature = "ros"))]
        {
            if self.backend == Backend::Ros {
                return Err(Error::ConfigRequireRos("backend".into()));
            }
            if self.ros.is_some() {
                return Err(Error::ConfigRequireRos("ros".into()));
            }
        }
        if let Some(timeout_sec) = self.arrival_timeout_sec {
            if !(timeout_sec.is_finite() && timeout_sec > 0.0) {
                return Err(Error::InvalidConfig {
                    field: "arrival_timeout_sec".into(),
                    message: format!("must be a positive number of seconds, got {timeout_sec}"),
                });
            }
        }
        if !(self.sim.max_speed.is_finite() && self.sim.max_speed > 0.0) {
            return Err(Error::InvalidConfig {
                field: "sim.max_speed".into(),
                message: format!("must be a positive speed, got {}", self.sim.max_speed),
            });
        }
        Ok(())
    }

    pub fn selection(&self) -> Result<TestSelection, Error> {
        Ok(TestSelection::from_names(&self.mode, &self.shape)?)
    }

    pub fn arrival_condition(&self) -> Box<dyn ArrivalCondition> {
        match self.arrival_timeout_sec {
            Some(timeout_sec) => Box::new(BoundedDistanceThreshold::new(
                DEFAULT_ARRIVAL_THRESHOLD,
                timeout_sec,
            )),
            None => Box::new(DistanceThreshold::default()),
        }
    }
}
