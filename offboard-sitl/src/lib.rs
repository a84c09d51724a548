//! Simulation-in-the-loop path test for autopilot offboard control.
//!
//! The vehicle is flown along a square, a circle, a lemniscate or a vertical
//! ellipse with position or velocity setpoints. See [`OffboardControl`] for
//! the control loop and [`path`] for the shapes.

#![warn(rust_2018_idioms)]

mod config;
mod error;
mod launch;
pub mod path;
mod runner;
mod selection;
pub mod utils;

pub use crate::{
    config::*,
    error::Error,
    launch::*,
    path::{PathPlan, PathShape},
    runner::*,
    selection::*,
};
