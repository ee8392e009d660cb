//! Roundel Application
//!
//! Window shell for the Roundel canvas editor: winit event loop, input
//! conversion into `roundel-core` entry points, and vello rendering.

mod app;
mod render;

pub use app::App;
pub use render::{RendererError, build_scene};
