//! In-progress drag tracking.

use crate::scene::Scene;
use crate::shapes::ShapeId;
use kurbo::Point;

/// A drag in progress: the disc being dragged and the pointer position
/// the session was last advanced to.
///
/// Translation is always relative to the previous position, so the grab
/// offset within the disc is preserved no matter where the user picked
/// it up. Every advance is a committed mutation; there is no rollback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    shape: ShapeId,
    last_pos: Point,
}

impl DragSession {
    /// Anchor a new session at the current pointer position. No
    /// translation happens until the next [`advance`](Self::advance).
    pub fn new(shape: ShapeId, anchor: Point) -> Self {
        Self {
            shape,
            last_pos: anchor,
        }
    }

    /// The disc this session drags.
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Translate the dragged disc by the movement since the last call
    /// and remember the new position. Returns `false` when the disc no
    /// longer resolves in the scene (removed out from under the drag).
    pub fn advance(&mut self, position: Point, scene: &mut Scene) -> bool {
        let Some(disc) = scene.get_mut(self.shape) else {
            return false;
        };
        let delta = position - self.last_pos;
        disc.translate(delta);
        self.last_pos = position;
        true
    }
}
