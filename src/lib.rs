//! Library exports for the sketchpad drawing engine.
//!
//! Exposes the stroke engine (tool state, kinematics, live preview, session
//! dispatch) alongside rendering, configuration, export and the headless
//! replay host so that other front ends can drive the same sessions.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod replay;
pub mod ui;

pub use config::Config;
pub use input::SketchSession;
