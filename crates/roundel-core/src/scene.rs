//! The shape registry: an ordered scene of discs.

use crate::shapes::{Disc, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An ordered collection of discs.
///
/// Insertion order is the z-order contract: [`iter`](Scene::iter)
/// yields back to front so later additions paint on top, and
/// [`topmost_at`](Scene::topmost_at) walks the same sequence in reverse
/// so hit-testing agrees with what the user sees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    discs: Vec<Disc>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a disc at the top of the z-order and return its id.
    ///
    /// Ids are unique by construction (uuid v4); the assertion guards
    /// against a caller re-adding a removed disc's clone.
    pub fn add(&mut self, disc: Disc) -> ShapeId {
        debug_assert!(self.get(disc.id()).is_none(), "duplicate disc id");
        let id = disc.id();
        self.discs.push(disc);
        id
    }

    /// Remove a disc by id. Absent ids are a no-op returning `None`;
    /// callers may race with session cleanup.
    pub fn remove(&mut self, id: ShapeId) -> Option<Disc> {
        let index = self.discs.iter().position(|d| d.id() == id)?;
        Some(self.discs.remove(index))
    }

    /// Resolve a disc by id.
    pub fn get(&self, id: ShapeId) -> Option<&Disc> {
        self.discs.iter().find(|d| d.id() == id)
    }

    /// Resolve a disc by id, mutably.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Disc> {
        self.discs.iter_mut().find(|d| d.id() == id)
    }

    /// Whether a disc with `id` exists in the scene.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Discs in draw order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Disc> {
        self.discs.iter()
    }

    /// Number of discs in the scene.
    pub fn len(&self) -> usize {
        self.discs.len()
    }

    /// Whether the scene holds no discs.
    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// The topmost disc containing `point`, if any.
    ///
    /// Walks front to back so that among overlapping discs the most
    /// recently added one wins.
    pub fn topmost_at(&self, point: Point) -> Option<ShapeId> {
        self.discs
            .iter()
            .rev()
            .find(|d| d.contains(point))
            .map(|d| d.id())
    }
}
