//! Pointer gesture types.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// The closed set of recognized pointer gestures.
///
/// `Drag` carries no button tag: it is only ever synthesized while the
/// primary button is held, and the editor owns that held state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// A button went down at a position.
    Press {
        position: Point,
        button: PointerButton,
    },
    /// The pointer moved while the primary button was held.
    Drag { position: Point },
    /// A button came back up at a position.
    Release {
        position: Point,
        button: PointerButton,
    },
}
