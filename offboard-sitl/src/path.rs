//! Closed-form paths flown by the test.
//!
//! Amplitudes are fixed: the square is 4 m wide, the circle and the
//! lemniscate span 10 m, the ellipse is 10 m by 4 m in the vertical plane.

use std::{f64::consts::PI, fmt, ops::RangeInclusive, str::FromStr};

use offboard_interface::{Error, Vector3};

/// Half-width of the square and its corner in the first quadrant.
const SQUARE_CORNER: [f64; 3] = [2.0, 2.0, 1.0];
const CIRCLE_RADIUS: f64 = 5.0;
const EIGHT_AMPLITUDE: f64 = 5.0;
const ELLIPSE_MAJOR_AXIS: f64 = 5.0;
const ELLIPSE_MINOR_AXIS: f64 = 2.0;
const ELLIPSE_ALTITUDE: f64 = 2.5;
const PATH_ALTITUDE: f64 = 1.0;

/// Step indices of the square. The last one has no corner and ends the test.
pub const SQUARE_STEPS: RangeInclusive<u8> = 1..=6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathShape {
    Square,
    Circle,
    Eight,
    Ellipse,
}

impl PathShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathShape::Square => "square",
            PathShape::Circle => "circle",
            PathShape::Eight => "eight",
            PathShape::Ellipse => "ellipse",
        }
    }

    /// How this shape is flown.
    pub fn plan(&self) -> PathPlan {
        match self {
            PathShape::Square => PathPlan::Waypoints(square_corner),
            PathShape::Circle => PathPlan::Sweep(AngleSweep {
                start: Vector3::new(CIRCLE_RADIUS, 0.0, PATH_ALTITUDE),
                angles: 0..=360,
                point: circle_shape,
            }),
            PathShape::Eight => PathPlan::Sweep(AngleSweep {
                start: Vector3::new(0.0, 0.0, PATH_ALTITUDE),
                angles: -180..=180,
                point: eight_shape,
            }),
            PathShape::Ellipse => PathPlan::Sweep(AngleSweep {
                start: Vector3::new(0.0, 0.0, ELLIPSE_ALTITUDE),
                angles: 0..=360,
                point: ellipse_shape,
            }),
        }
    }
}

impl Default for PathShape {
    fn default() -> Self {
        PathShape::Square
    }
}

impl fmt::Display for PathShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(PathShape::Square),
            "circle" => Ok(PathShape::Circle),
            "eight" => Ok(PathShape::Eight),
            "ellipse" => Ok(PathShape::Ellipse),
            _ => Err(Error::UnknownPathShape(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug)]
pub enum PathPlan {
    /// Targets looked up by step index, each confirmed by the arrival gate.
    /// The first step without a target completes the path.
    Waypoints(fn(u8) -> Option<Vector3<f64>>),
    /// Points swept over integer degrees after reaching `start`.
    Sweep(AngleSweep),
}

#[derive(Clone, Debug)]
pub struct AngleSweep {
    pub start: Vector3<f64>,
    pub angles: RangeInclusive<i32>,
    point: fn(i32) -> Vector3<f64>,
}

impl AngleSweep {
    pub fn point(&self, angle: i32) -> Vector3<f64> {
        (self.point)(angle)
    }

    /// Reaching this angle completes the path.
    pub fn terminal_angle(&self) -> i32 {
        *self.angles.end()
    }

    /// The sweep from its first angle, as `(angle, point)` pairs.
    ///
    /// Each call starts over; nothing is cached between calls.
    pub fn samples(&self) -> impl Iterator<Item = (i32, Vector3<f64>)> + '_ {
        self.angles.clone().map(move |angle| (angle, self.point(angle)))
    }
}

fn radians(angle: i32) -> f64 {
    f64::from(angle) * PI / 180.0
}

/// Corner visited at `step` of the square, `None` once the loop is closed.
pub fn square_corner(step: u8) -> Option<Vector3<f64>> {
    let [x, y, z] = SQUARE_CORNER;
    match step {
        1 | 5 => Some(Vector3::new(x, y, z)),
        2 => Some(Vector3::new(-x, y, z)),
        3 => Some(Vector3::new(-x, -y, z)),
        4 => Some(Vector3::new(x, -y, z)),
        _ => None,
    }
}

pub fn circle_shape(angle: i32) -> Vector3<f64> {
    let theta = radians(angle);
    Vector3::new(
        CIRCLE_RADIUS * theta.cos(),
        CIRCLE_RADIUS * theta.sin(),
        PATH_ALTITUDE,
    )
}

/// Lemniscate of Gerono.
pub fn eight_shape(angle: i32) -> Vector3<f64> {
    let theta = radians(angle);
    Vector3::new(
        EIGHT_AMPLITUDE * theta.cos(),
        EIGHT_AMPLITUDE * theta.sin() * theta.cos(),
        PATH_ALTITUDE,
    )
}

/// Ellipse in the vertical x-z plane, centered above the origin.
pub fn ellipse_shape(angle: i32) -> Vector3<f64> {
    let theta = radians(angle);
    Vector3::new(
        ELLIPSE_MAJOR_AXIS * theta.cos(),
        0.0,
        ELLIPSE_ALTITUDE + ELLIPSE_MINOR_AXIS * theta.sin(),
    )
}
