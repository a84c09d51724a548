use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("offboard_ros: Failed to advertise {}: {}", topic, message)]
    Advertise { topic: String, message: String },
    #[error("offboard_ros: Failed to subscribe {}: {}", topic, message)]
    Subscribe { topic: String, message: String },
    #[error("offboard_ros: offboard: {:?}", .0)]
    Offboard(#[from] offboard_interface::Error),
    #[error("offboard_ros: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
