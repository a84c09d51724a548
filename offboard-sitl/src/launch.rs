use offboard_interface::{Lifecycle, LoopRateLifecycle, PositionSource, SimulatedVehicle};
use offboard_tracing::Tracing;
use tracing::info;

use crate::{Backend, Error, OffboardControl, OffboardTestConfig, RunOutcome};

/// Runs the configured test on the configured backend.
///
/// `node_name` names the ROS node when the ROS backend is used.
pub fn run(config: &OffboardTestConfig, node_name: &str) -> Result<RunOutcome, Error> {
    match config.backend {
        Backend::Sim => {
            let vehicle = config.sim.create_vehicle();
            run_simulation(config, &vehicle, &LoopRateLifecycle::default())
        }
        #[cfg(feature = "ros")]
        Backend::Ros => run_ros(config, node_name),
        #[cfg(not(feature = "ros"))]
        Backend::Ros => {
            let _ = node_name;
            Err(Error::ConfigRequireRos("backend".into()))
        }
    }
}

/// Flies the configured path with `vehicle` standing in for the autopilot.
pub fn run_simulation(
    config: &OffboardTestConfig,
    vehicle: &SimulatedVehicle,
    lifecycle: &dyn Lifecycle,
) -> Result<RunOutcome, Error> {
    let selection = config.selection()?;
    let condition = config.arrival_condition();
    let sink = Tracing::new(vehicle);
    let source = Tracing::new(vehicle);
    let outcome =
        OffboardControl::new(selection, &sink, &source, lifecycle, condition.as_ref()).spin()?;
    info!(
        "simulated vehicle stopped at {:?} ({outcome:?})",
        vehicle.current_position()?
    );
    Ok(outcome)
}

/// Flies the configured path through mavros.
///
/// The `~mode` and `~shape` private parameters of the node take precedence
/// over the values in `config`.
#[cfg(feature = "ros")]
pub fn run_ros(config: &OffboardTestConfig, node_name: &str) -> Result<RunOutcome, Error> {
    use offboard_interface::CONTROL_RATE_HZ;
    use offboard_ros::{RosLifecycle, RosLocalPositionSubscriber, RosSetpointPublisher};

    offboard_ros::init(node_name);
    let mode = offboard_ros::param_or("~mode", &config.mode);
    let shape = offboard_ros::param_or("~shape", &config.shape);
    let selection = crate::TestSelection::from_names(&mode, &shape)?;
    let condition = config.arrival_condition();
    let sink = Tracing::new(RosSetpointPublisher::new(&config.ros)?);
    let source = Tracing::new(RosLocalPositionSubscriber::new(&config.ros)?);
    let lifecycle = RosLifecycle::new(CONTROL_RATE_HZ);
    Ok(
        OffboardControl::new(selection, &sink, &source, &lifecycle, condition.as_ref())
            .spin()?,
    )
}
