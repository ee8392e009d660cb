//! The editor: gesture routing between toolbar and scene, plus the
//! entry points the window shell calls into.

use crate::config::EditorConfig;
use crate::input::{PointerButton, PointerEvent};
use crate::scene::Scene;
use crate::session::{Interaction, Phase};
use crate::shapes::{Disc, ShapeId};
use crate::toolbar::Toolbar;
use kurbo::Point;

/// What a dispatched pointer event resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A toolbar button consumed the press and toggled.
    Button(String),
    /// The scene selected a disc.
    Selected(ShapeId),
    /// A disc was created at the pointer (secondary button).
    Created(ShapeId),
    /// The press hit neither a button nor a disc; the embedding layer
    /// may run its own creation policy.
    Miss,
    /// The event needed no routing decision.
    Pass,
}

/// The whole editable surface: scene, toolbar, and interaction state.
///
/// Everything runs synchronously on the caller's thread; each entry
/// point completes before the next event arrives, and the scene is only
/// read (never mutated) while the shell borrows it for a draw pass.
pub struct Editor {
    config: EditorConfig,
    scene: Scene,
    toolbar: Toolbar,
    interaction: Interaction,
    primary_down: bool,
}

impl Editor {
    /// The fixed button set. Toggles are observable state only; no
    /// mode system is wired to them.
    const BUTTON_LABELS: [&'static str; 2] = ["select", "delete"];

    /// Create an editor for a surface described by `config`.
    pub fn new(config: EditorConfig) -> Self {
        let toolbar = Toolbar::new(
            Point::ZERO,
            config.width,
            config.toolbar_height,
            config.button_size,
            config.button_margin,
            &Self::BUTTON_LABELS,
        );
        Self {
            config,
            scene: Scene::new(),
            toolbar,
            interaction: Interaction::new(),
            primary_down: false,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// Current interaction phase.
    pub fn phase(&self) -> Phase {
        self.interaction.phase()
    }

    /// The selected disc (reconciled), for highlight rendering.
    pub fn selection(&mut self) -> Option<ShapeId> {
        self.interaction.selected(&self.scene)
    }

    /// Add a disc to the scene (external creation command).
    pub fn add_disc(&mut self, disc: Disc) -> ShapeId {
        self.scene.add(disc)
    }

    /// Remove a disc from the scene. Session state referencing it is
    /// cleared immediately so no dangling id survives into the next
    /// draw or hit-test.
    pub fn remove_disc(&mut self, id: ShapeId) -> Option<Disc> {
        let removed = self.scene.remove(id);
        self.interaction.reconcile(&self.scene);
        removed
    }

    /// Mouse-button entry point for the window shell.
    pub fn on_mouse_button(
        &mut self,
        button: PointerButton,
        pressed: bool,
        position: Point,
    ) -> Dispatch {
        let event = if pressed {
            PointerEvent::Press { position, button }
        } else {
            PointerEvent::Release { position, button }
        };
        self.dispatch(event)
    }

    /// Pointer-move entry point. Synthesizes a drag gesture while the
    /// primary button is held; a plain hover is a no-op.
    pub fn on_cursor_moved(&mut self, position: Point) -> Dispatch {
        if self.primary_down {
            self.dispatch(PointerEvent::Drag { position })
        } else {
            Dispatch::Pass
        }
    }

    /// Route a gesture.
    ///
    /// Primary presses go to the toolbar first and fall through to the
    /// interaction state machine only when no button is hit. Secondary
    /// releases create a disc at the pointer, bypassing both (fire and
    /// forget, no selection or drag change).
    pub fn dispatch(&mut self, event: PointerEvent) -> Dispatch {
        match event {
            PointerEvent::Press {
                position,
                button: PointerButton::Primary,
            } => {
                self.primary_down = true;
                if let Some(label) = self.toolbar.press(position) {
                    return Dispatch::Button(label.to_owned());
                }
                if self.interaction.on_press(position, &self.scene) {
                    self.interaction
                        .selected(&self.scene)
                        .map_or(Dispatch::Miss, Dispatch::Selected)
                } else {
                    Dispatch::Miss
                }
            }
            PointerEvent::Press {
                button: PointerButton::Secondary,
                ..
            } => Dispatch::Pass,
            PointerEvent::Drag { position } => {
                self.interaction.on_drag(position, &mut self.scene);
                Dispatch::Pass
            }
            PointerEvent::Release {
                button: PointerButton::Primary,
                ..
            } => {
                self.primary_down = false;
                self.toolbar.release();
                self.interaction.on_release();
                Dispatch::Pass
            }
            PointerEvent::Release {
                position,
                button: PointerButton::Secondary,
            } => {
                // Creation fires on release, matching a click.
                let disc = Disc::new(position, self.config.disc_radius, self.config.disc_color);
                let id = self.scene.add(disc);
                log::debug!("created disc {id} at ({:.1}, {:.1})", position.x, position.y);
                Dispatch::Created(id)
            }
        }
    }
}
