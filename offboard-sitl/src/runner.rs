use std::fmt;

use offboard_interface::{
    control_period, ArrivalCondition, ControlMode, Error, Lifecycle, PositionSource, Setpoint,
    SetpointSink, Vector3,
};
use tracing::{debug, error, info};

use crate::{
    path::{AngleSweep, PathPlan, SQUARE_STEPS},
    TestSelection,
};

/// How a path routine ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The whole path was flown and shutdown was requested.
    Completed,
    /// The lifecycle stopped before the path was finished.
    Interrupted,
}

/// How waiting on a target ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Arrived,
    Interrupted,
}

/// Flies the selected path through the given collaborators.
pub struct OffboardControl<'a> {
    selection: TestSelection,
    sink: &'a dyn SetpointSink,
    source: &'a dyn PositionSource,
    lifecycle: &'a dyn Lifecycle,
    condition: &'a dyn ArrivalCondition,
}

impl fmt::Debug for OffboardControl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffboardControl")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl<'a> OffboardControl<'a> {
    pub fn new(
        selection: TestSelection,
        sink: &'a dyn SetpointSink,
        source: &'a dyn PositionSource,
        lifecycle: &'a dyn Lifecycle,
        condition: &'a dyn ArrivalCondition,
    ) -> Self {
        Self {
            selection,
            sink,
            source,
            lifecycle,
            condition,
        }
    }

    pub fn selection(&self) -> TestSelection {
        self.selection
    }

    /// Main routine: reports the selection and flies the selected path.
    pub fn spin(&self) -> Result<RunOutcome, Error> {
        info!("SITL Test: Offboard control test running!");

        match self.selection.mode() {
            ControlMode::Position => info!("Position control mode selected."),
            ControlMode::Velocity => info!("Velocity control mode selected."),
            ControlMode::Acceleration => {
                info!("Acceleration control mode selected.");
                return Err(self.unsupported());
            }
        }

        info!("Test option: {}-shaped path...", self.selection.shape());
        match self.selection.shape().plan() {
            PathPlan::Waypoints(waypoint) => self.waypoint_path_motion(waypoint),
            PathPlan::Sweep(sweep) => self.sweep_path_motion(&sweep),
        }
    }

    /// Visits each waypoint in step order, confirming arrival at every one.
    pub fn waypoint_path_motion(
        &self,
        waypoint: fn(u8) -> Option<Vector3<f64>>,
    ) -> Result<RunOutcome, Error> {
        self.ensure_supported()?;
        info!("Testing...");

        for step in SQUARE_STEPS {
            let Some(target) = waypoint(step) else {
                return Ok(self.complete());
            };
            debug!("step {step}: target {target:?}");
            if self.wait_and_move(&target)? == Progress::Interrupted {
                return Ok(RunOutcome::Interrupted);
            }
        }
        Ok(self.complete())
    }

    /// Moves to the start of the sweep, waits for arrival there, then sends
    /// one point per tick without waiting on the points in between.
    pub fn sweep_path_motion(&self, sweep: &AngleSweep) -> Result<RunOutcome, Error> {
        self.ensure_supported()?;
        info!("Testing...");

        // starting point
        let current = self.source.current_position()?;
        self.send_toward(&sweep.start, &current)?;
        if self.wait_and_move(&sweep.start)? == Progress::Interrupted {
            return Ok(RunOutcome::Interrupted);
        }

        for (angle, point) in sweep.samples() {
            if !self.lifecycle.is_ok() {
                return Ok(RunOutcome::Interrupted);
            }
            let current = self.source.current_position()?;
            self.send_toward(&point, &current)?;
            if angle == sweep.terminal_angle() {
                return Ok(self.complete());
            }
            self.lifecycle.spin_once();
        }
        Ok(self.complete())
    }

    /// Polls once per tick until the condition accepts the current position,
    /// commanding the vehicle toward `target` on every poll.
    ///
    /// With a condition that never gives up, this blocks until the vehicle
    /// arrives or the lifecycle stops.
    pub fn wait_and_move(&self, target: &Vector3<f64>) -> Result<Progress, Error> {
        self.ensure_supported()?;
        let period = control_period();
        let mut polls = 0;
        while self.lifecycle.is_ok() {
            let current = self.source.current_position()?;
            let arrived = self
                .condition
                .is_arrived(target, &current, period * polls)?;
            self.send_toward(target, &current)?;
            self.lifecycle.spin_once();
            if arrived {
                debug!("arrived at {target:?} after {} polls", polls + 1);
                return Ok(Progress::Arrived);
            }
            polls += 1;
        }
        Ok(Progress::Interrupted)
    }

    fn send_toward(&self, target: &Vector3<f64>, current: &Vector3<f64>) -> Result<(), Error> {
        let setpoint = match self.selection.mode() {
            ControlMode::Position => Setpoint::Position(*target),
            ControlMode::Velocity => Setpoint::Velocity(target - current),
            ControlMode::Acceleration => return Err(self.unsupported()),
        };
        self.sink.send_setpoint(&setpoint)
    }

    fn ensure_supported(&self) -> Result<(), Error> {
        match self.selection.mode() {
            ControlMode::Position | ControlMode::Velocity => Ok(()),
            ControlMode::Acceleration => Err(self.unsupported()),
        }
    }

    fn unsupported(&self) -> Error {
        error!(
            "Control mode: {} control mode not supported by the autopilot.",
            self.selection.mode()
        );
        Error::UnsupportedControlMode(self.selection.mode())
    }

    fn complete(&self) -> RunOutcome {
        info!("Test complete!");
        self.lifecycle.shutdown();
        RunOutcome::Completed
    }
}
