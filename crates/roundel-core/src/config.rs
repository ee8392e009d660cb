//! Editor configuration.
//!
//! Every window and layout metric lives here instead of in module-level
//! constants, so embedders can construct an editor for any surface size.

use crate::shapes::Rgba;
use serde::{Deserialize, Serialize};

/// Construction-time configuration for an [`Editor`](crate::Editor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Height of the toolbar strip at the top of the window.
    pub toolbar_height: f64,
    /// Side length of each square toolbar button.
    pub button_size: f64,
    /// Gap between adjacent toolbar buttons.
    pub button_margin: f64,
    /// Radius for discs created by the secondary-button gesture.
    pub disc_radius: f64,
    /// Fill color for newly created discs.
    pub disc_color: Rgba,
    /// Base fill color for toolbar buttons.
    pub button_color: Rgba,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            toolbar_height: 32.0,
            button_size: 20.0,
            button_margin: 6.0,
            disc_radius: 40.0,
            disc_color: Rgba::new(0, 255, 0, 255),
            button_color: Rgba::new(200, 200, 200, 255),
        }
    }
}
