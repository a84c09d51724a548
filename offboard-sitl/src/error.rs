use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("offboard-sitl: No File {:?} is found ({}).", .0, .1)]
    NoFile(PathBuf, #[source] std::io::Error),
    #[error("offboard-sitl: Failed to parse {:?} as toml ({}).", .0, .1)]
    TomlParseFailure(PathBuf, #[source] toml::de::Error),
    #[error("offboard-sitl: Config {} requires the \"ros\" feature.", .0)]
    ConfigRequireRos(String),
    #[error("offboard-sitl: Invalid config {}: {}", field, message)]
    InvalidConfig { field: String, message: String },
    #[error("offboard-sitl: offboard: {}", .0)]
    Offboard(#[from] offboard_interface::Error),
    #[cfg(feature = "ros")]
    #[error("offboard-sitl: offboard-ros: {}", .0)]
    OffboardRos(#[from] offboard_ros::Error),
}
