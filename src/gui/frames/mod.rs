//! Frames panel rendering for the GUI
//!
//! Draws a [`PanelView`](crate::panel::PanelView) where users can:
//! - Edit the session title
//! - Narrow the preview frames to selected widths
//! - Narrow the preview frames to selected themes (when any are configured)
//!
//! Rendering never touches the store directly; interactions come back as
//! [`PanelEvent`](crate::panel::PanelEvent)s.

mod helpers;
mod panel;
mod sections;

pub use panel::render_frames_panel;
