//! Toolbar buttons and press dispatch.

use crate::hit;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A square toggle button in the toolbar.
///
/// `toggled` is the persistent on/off flag, flipped on every press; it
/// drives no scene behavior (tool modes are deliberately unwired).
/// `pressed` is transient and held only while the pointer button is
/// down over the toolbar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    label: String,
    /// Assigned once by the toolbar layout.
    origin: Point,
    size: f64,
    pub toggled: bool,
    pub pressed: bool,
}

impl Button {
    fn new(label: impl Into<String>, size: f64) -> Self {
        Self {
            label: label.into(),
            origin: Point::ZERO,
            size,
            toggled: false,
            pressed: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Square containment test, inclusive on all edges.
    pub fn hit_test(&self, position: Point) -> bool {
        hit::square_contains(self.origin, self.size, position)
    }
}

/// A fixed strip of buttons across the top of the window.
///
/// Layout runs once at construction: the button group is centered
/// horizontally in the strip and each button vertically, with a fixed
/// margin between buttons. The button set never changes for the life
/// of the editor, so the layout is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toolbar {
    origin: Point,
    width: f64,
    height: f64,
    buttons: Vec<Button>,
}

impl Toolbar {
    /// Build a toolbar with one button per label.
    pub fn new(
        origin: Point,
        width: f64,
        height: f64,
        button_size: f64,
        button_margin: f64,
        labels: &[&str],
    ) -> Self {
        let mut toolbar = Self {
            origin,
            width,
            height,
            buttons: labels
                .iter()
                .map(|label| Button::new(*label, button_size))
                .collect(),
        };
        toolbar.layout(button_size, button_margin);
        toolbar
    }

    fn layout(&mut self, size: f64, margin: f64) {
        let count = self.buttons.len() as f64;
        let group_width = size * count + margin * (count + 1.0);
        let start_x = self.origin.x + (self.width - group_width) / 2.0 + margin;
        let y = self.origin.y + (self.height - size) / 2.0;
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.origin = Point::new(start_x + i as f64 * (size + margin), y);
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Buttons in toolbar (left-to-right) order.
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Look up a button by label.
    pub fn button(&self, label: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Dispatch a primary press. The first button containing `position`
    /// (in toolbar order) flips its toggle and is marked pressed;
    /// returns its label, or `None` when the press missed every button.
    pub fn press(&mut self, position: Point) -> Option<&str> {
        let button = self.buttons.iter_mut().find(|b| b.hit_test(position))?;
        button.toggled = !button.toggled;
        button.pressed = true;
        log::debug!("button '{}' toggled {}", button.label, button.toggled);
        Some(&button.label)
    }

    /// Clear transient pressed flags (the pointer button came back up).
    pub fn release(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toolbar() -> Toolbar {
        // Default metrics: 640-wide strip, 32 tall, 20px buttons, 6px margin.
        Toolbar::new(Point::ZERO, 640.0, 32.0, 20.0, 6.0, &["select", "delete"])
    }

    #[test]
    fn test_layout_is_centered() {
        let tb = toolbar();
        let buttons = tb.buttons();
        let left = buttons[0].origin().x;
        let right = buttons[1].origin().x + buttons[1].size();
        // The button row is symmetric around the strip's center line.
        assert!(((left + right) / 2.0 - 320.0).abs() < f64::EPSILON);
        // Vertically centered in the strip.
        assert!((buttons[0].origin().y - 6.0).abs() < f64::EPSILON);
        // Fixed margin between buttons.
        assert!((buttons[1].origin().x - (buttons[0].origin().x + 26.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_toggle_flip() {
        let mut tb = toolbar();
        let select_center = {
            let b = tb.button("select").unwrap();
            Point::new(b.origin().x + b.size() / 2.0, b.origin().y + b.size() / 2.0)
        };

        assert_eq!(tb.press(select_center), Some("select"));
        assert!(tb.button("select").unwrap().toggled);
        assert!(!tb.button("delete").unwrap().toggled);

        tb.release();
        assert_eq!(tb.press(select_center), Some("select"));
        assert!(!tb.button("select").unwrap().toggled);
        assert!(!tb.button("delete").unwrap().toggled);
    }

    #[test]
    fn test_press_miss() {
        let mut tb = toolbar();
        assert_eq!(tb.press(Point::new(0.0, 0.0)), None);
        assert!(!tb.button("select").unwrap().toggled);
    }

    #[test]
    fn test_release_clears_pressed() {
        let mut tb = toolbar();
        let b = tb.buttons()[0].origin();
        tb.press(Point::new(b.x + 1.0, b.y + 1.0));
        assert!(tb.buttons()[0].pressed);
        tb.release();
        assert!(!tb.buttons()[0].pressed);
        // Toggle state survives the release.
        assert!(tb.buttons()[0].toggled);
    }
}
