//! Disc shape and color types.

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a disc within a scene.
pub type ShapeId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// A filled circle on the canvas.
///
/// Identity is assigned at creation and never changes. The center moves
/// through [`translate`](Disc::translate); radius and color are fixed
/// for the disc's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disc {
    pub(crate) id: ShapeId,
    /// Center point; the only mutable geometry.
    pub center: Point,
    radius: f64,
    color: Rgba,
}

impl Disc {
    /// Create a new disc. `radius` must be positive.
    pub fn new(center: Point, radius: f64, color: Rgba) -> Self {
        debug_assert!(radius > 0.0, "disc radius must be positive");
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            color,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Whether `point` lies within the disc (boundary inclusive).
    pub fn contains(&self, point: Point) -> bool {
        crate::hit::disc_contains(self.center, self.radius, point)
    }

    /// Move the center by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}
