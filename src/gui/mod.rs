//! GUI module for the frames panel
//!
//! A native egui window hosting the panel. The window title plays the role
//! of the document title.

pub mod app;
mod frames;
pub mod runner;
pub mod theme;

pub use app::{PlayroomApp, ViewportTitle};
pub use frames::render_frames_panel;
pub use runner::run_gui;
