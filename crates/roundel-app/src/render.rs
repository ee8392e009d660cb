//! Vello scene construction for the editor.

use kurbo::{Affine, Circle, Rect};
use peniko::{Color, Fill};
use roundel_core::{Button, Editor, Rgba, ShapeId};
use thiserror::Error;
use vello::Scene;

/// Renderer errors surfaced by the frame loop.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("initialization failed: {0}")]
    InitFailed(String),
    #[error("surface error: {0}")]
    Surface(String),
    #[error("render failed: {0}")]
    RenderFailed(String),
}

/// Highlight color for the selected disc and toggled buttons.
fn highlight() -> Color {
    Color::from_rgba8(59, 130, 246, 255)
}

/// Shade for a button while the pointer is down on it.
fn pressed_shade() -> Color {
    Color::from_rgba8(128, 128, 128, 255)
}

/// Fill color of the toolbar strip.
fn strip_shade() -> Color {
    Color::from_rgba8(160, 160, 160, 255)
}

/// Build the frame: background, discs in z-order (the selected disc in
/// the highlight color), then the toolbar strip and its buttons.
///
/// `selected` is passed in rather than queried here so the editor stays
/// immutably borrowed for the whole draw pass.
pub fn build_scene(scene: &mut Scene, editor: &Editor, selected: Option<ShapeId>) {
    scene.reset();
    let config = editor.config();

    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        Color::WHITE,
        None,
        &Rect::new(0.0, 0.0, config.width, config.height),
    );

    for disc in editor.scene().iter() {
        let color = if selected == Some(disc.id()) {
            highlight()
        } else {
            disc.color().into()
        };
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            color,
            None,
            &Circle::new(disc.center, disc.radius()),
        );
    }

    let toolbar = editor.toolbar();
    let origin = toolbar.origin();
    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        strip_shade(),
        None,
        &Rect::new(
            origin.x,
            origin.y,
            origin.x + toolbar.width(),
            origin.y + toolbar.height(),
        ),
    );

    for button in toolbar.buttons() {
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            button_color(button, config.button_color),
            None,
            &button_rect(button),
        );
    }
}

fn button_rect(button: &Button) -> Rect {
    let origin = button.origin();
    Rect::new(
        origin.x,
        origin.y,
        origin.x + button.size(),
        origin.y + button.size(),
    )
}

/// State-to-color mapping: toggled wins over pressed, base otherwise.
fn button_color(button: &Button, base: Rgba) -> Color {
    if button.toggled {
        highlight()
    } else if button.pressed {
        pressed_shade()
    } else {
        base.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use roundel_core::EditorConfig;

    #[test]
    fn test_build_scene_is_a_pure_read() {
        let mut editor = Editor::new(EditorConfig::default());
        editor.add_disc(roundel_core::Disc::new(
            Point::new(55.0, 55.0),
            40.0,
            Rgba::new(0, 255, 0, 255),
        ));
        let selected = editor.selection();

        let mut scene = Scene::new();
        build_scene(&mut scene, &editor, selected);
        // Rebuilding must not depend on leftover encoding.
        build_scene(&mut scene, &editor, selected);
        assert_eq!(editor.scene().len(), 1);
    }
}
