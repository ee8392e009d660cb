//! Selection and drag lifecycle.

use crate::drag::DragSession;
use crate::scene::Scene;
use crate::shapes::ShapeId;
use kurbo::Point;

/// Observable phase of the interaction session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No selection.
    Idle,
    /// A disc is selected but not yet moving.
    Selected,
    /// The selected disc is being dragged.
    Dragging,
}

/// The interaction state machine.
///
/// Holds at most one selected disc id and at most one drag session and
/// keeps them mutually consistent: a drag exists only while a selection
/// does. Discs are referenced by id only and resolved against the scene
/// on every use; an id that fails to resolve deselects implicitly, so
/// external removal can never leave a dangling reference.
///
/// Shape geometry is only ever mutated through the drag session, and
/// the selection only changes on press and release.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    selected: Option<ShapeId>,
    drag: Option<DragSession>,
}

impl Interaction {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match (self.selected, &self.drag) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::Selected,
            (Some(_), Some(_)) => Phase::Dragging,
        }
    }

    /// The selected disc, reconciled against `scene`.
    pub fn selected(&mut self, scene: &Scene) -> Option<ShapeId> {
        self.reconcile(scene);
        self.selected
    }

    /// Drop the selection (and any drag) if the selected disc no longer
    /// exists in the scene.
    pub fn reconcile(&mut self, scene: &Scene) {
        if let Some(id) = self.selected {
            if !scene.contains(id) {
                log::debug!("selected disc {id} removed externally, deselecting");
                self.clear();
            }
        }
    }

    /// Primary-button press at `position`.
    ///
    /// From idle, hit-tests the scene topmost-first and selects the hit
    /// disc. Returns whether the press was handled; a miss leaves the
    /// machine idle so the caller may run its own creation policy. A
    /// press while already selected or dragging is a defensive no-op
    /// (single-button input cannot produce one).
    pub fn on_press(&mut self, position: Point, scene: &Scene) -> bool {
        self.reconcile(scene);
        if self.selected.is_some() {
            return false;
        }
        match scene.topmost_at(position) {
            Some(id) => {
                log::debug!("selected disc {id}");
                self.selected = Some(id);
                true
            }
            None => false,
        }
    }

    /// Pointer moved while the primary button is held.
    ///
    /// The first drag frame after a selection only anchors the session;
    /// later frames translate the disc by the delta since the previous
    /// frame. Without a selection this is a no-op.
    pub fn on_drag(&mut self, position: Point, scene: &mut Scene) {
        self.reconcile(scene);
        let Some(id) = self.selected else {
            return;
        };
        match &mut self.drag {
            None => self.drag = Some(DragSession::new(id, position)),
            Some(drag) => {
                if !drag.advance(position, scene) {
                    self.clear();
                }
            }
        }
    }

    /// Primary-button release: discard drag and selection. Idempotent.
    pub fn on_release(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.drag = None;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Disc, Rgba};

    fn scene_with_disc() -> (Scene, ShapeId) {
        let mut scene = Scene::new();
        let id = scene.add(Disc::new(
            Point::new(55.0, 55.0),
            40.0,
            Rgba::new(0, 255, 0, 255),
        ));
        (scene, id)
    }

    #[test]
    fn test_press_drag_release_scenario() {
        let (mut scene, id) = scene_with_disc();
        let mut session = Interaction::new();

        assert!(session.on_press(Point::new(60.0, 60.0), &scene));
        assert_eq!(session.phase(), Phase::Selected);
        assert_eq!(session.selected(&scene), Some(id));

        // Anchor frame: no translation yet.
        session.on_drag(Point::new(70.0, 70.0), &mut scene);
        assert_eq!(session.phase(), Phase::Dragging);
        assert!((scene.get(id).unwrap().center.x - 55.0).abs() < f64::EPSILON);
        assert!((scene.get(id).unwrap().center.y - 55.0).abs() < f64::EPSILON);

        // Delta (10, 15) from the anchor.
        session.on_drag(Point::new(80.0, 85.0), &mut scene);
        assert!((scene.get(id).unwrap().center.x - 65.0).abs() < f64::EPSILON);
        assert!((scene.get(id).unwrap().center.y - 70.0).abs() < f64::EPSILON);

        session.on_release();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.selected(&scene), None);
    }

    #[test]
    fn test_press_miss_stays_idle() {
        let (scene, _) = scene_with_disc();
        let mut session = Interaction::new();
        assert!(!session.on_press(Point::new(200.0, 200.0), &scene));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_release_is_idempotent() {
        let (mut scene, _) = scene_with_disc();
        let mut session = Interaction::new();
        session.on_press(Point::new(55.0, 55.0), &scene);
        session.on_drag(Point::new(60.0, 60.0), &mut scene);
        session.on_release();
        session.on_release();
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_drag_without_selection_is_noop() {
        let (mut scene, id) = scene_with_disc();
        let mut session = Interaction::new();
        session.on_drag(Point::new(60.0, 60.0), &mut scene);
        session.on_drag(Point::new(80.0, 80.0), &mut scene);
        assert_eq!(session.phase(), Phase::Idle);
        assert!((scene.get(id).unwrap().center.x - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_external_removal_deselects() {
        let (mut scene, id) = scene_with_disc();
        let mut session = Interaction::new();
        session.on_press(Point::new(55.0, 55.0), &scene);
        scene.remove(id);
        assert_eq!(session.selected(&scene), None);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_removal_mid_drag_ends_session() {
        let (mut scene, id) = scene_with_disc();
        let mut session = Interaction::new();
        session.on_press(Point::new(55.0, 55.0), &scene);
        session.on_drag(Point::new(60.0, 60.0), &mut scene);
        scene.remove(id);
        session.on_drag(Point::new(70.0, 70.0), &mut scene);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_press_while_selected_is_noop() {
        let (scene, id) = scene_with_disc();
        let mut session = Interaction::new();
        assert!(session.on_press(Point::new(55.0, 55.0), &scene));
        assert!(!session.on_press(Point::new(55.0, 55.0), &scene));
        assert_eq!(session.selected(&scene), Some(id));
    }
}
