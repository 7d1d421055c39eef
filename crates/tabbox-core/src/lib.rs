//! # Tabbox Core
//!
//! Core types shared by the tabbox workspace.
//! Provides the immutable run configuration, the 2-D point type used by the
//! geometry engine, and the error types every layer reports through.

pub mod config;
pub mod error;
pub mod geometry;

pub use config::{
    BearingPattern, BoxConfig, BoxDimensions, CutoutSpec, LayoutOptions, MechanicalParams,
    MotorMountPattern, PanelCutouts, PanelId, TabSizing,
};

pub use error::{BoxError, BoxResult, ParameterError, ParameterResult};

pub use geometry::{push_unique_point, Point, Polyline};
