use offboard_interface::{ControlMode, Error};
use tracing::error;

use crate::PathShape;

/// Control mode and path shape of one run. Fixed once selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestSelection {
    mode: ControlMode,
    shape: PathShape,
}

impl TestSelection {
    pub fn new(mode: ControlMode, shape: PathShape) -> Self {
        Self { mode, shape }
    }

    /// Selects by exact name, e.g. `("velocity", "circle")`.
    ///
    /// An unknown name is a configuration error and is logged here.
    /// `"acceleration"` is accepted: it is known, just not supported.
    pub fn from_names(mode: &str, shape: &str) -> Result<Self, Error> {
        let mode = mode.parse::<ControlMode>().map_err(|e| {
            error!("Control mode: wrong/unexistant control mode name {mode}");
            e
        })?;
        let shape = shape.parse::<PathShape>().map_err(|e| {
            error!("Path shape: wrong/unexistant path shape name {shape}");
            e
        })?;
        Ok(Self::new(mode, shape))
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn shape(&self) -> PathShape {
        self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names() {
        let selection = TestSelection::from_names("velocity", "eight").unwrap();
        assert_eq!(selection.mode(), ControlMode::Velocity);
        assert_eq!(selection.shape(), PathShape::Eight);

        let selection = TestSelection::from_names("acceleration", "square").unwrap();
        assert_eq!(selection.mode(), ControlMode::Acceleration);

        assert!(matches!(
            TestSelection::from_names("hover", "square"),
            Err(Error::UnknownControlMode(ref name)) if name == "hover"
        ));
        assert!(matches!(
            TestSelection::from_names("position", "star"),
            Err(Error::UnknownPathShape(ref name)) if name == "star"
        ));
        // the mode is checked first
        assert!(matches!(
            TestSelection::from_names("hover", "star"),
            Err(Error::UnknownControlMode(_))
        ));
    }

    #[test]
    fn test_default() {
        assert_eq!(
            TestSelection::default(),
            TestSelection::new(ControlMode::Position, PathShape::Square)
        );
    }
}
