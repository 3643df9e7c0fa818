//! Animated liquid-wave level indicator for egui.
//!
//! [`wave`] holds the geometry and per-tick update, [`animation`] the tick
//! scheduler, and [`ui`] the egui widget plus a small demo screen.

pub mod animation;
pub mod cli;
pub mod config;
pub mod ui;
pub mod wave;
