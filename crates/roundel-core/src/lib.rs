//! Roundel Core Library
//!
//! Platform-agnostic scene, input, and interaction logic for the
//! Roundel canvas editor. The window shell and renderer live in
//! `roundel-app`.

pub mod config;
pub mod drag;
pub mod editor;
pub mod hit;
pub mod input;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod toolbar;

pub use config::EditorConfig;
pub use drag::DragSession;
pub use editor::{Dispatch, Editor};
pub use input::{PointerButton, PointerEvent};
pub use scene::Scene;
pub use session::{Interaction, Phase};
pub use shapes::{Disc, Rgba, ShapeId};
pub use toolbar::{Button, Toolbar};
