//! Gizmo interaction state
//!
//! Glue between the drawers and the transform actions for one manipulated
//! object: draws the gizmo for the current mode, starts an action when a
//! hovered part is pressed, and feeds the action until it is applied or
//! cancelled.

use etk_core::{DrawList, GizmoConfig, HoveredAxis, InputSnapshot, SceneViewState};
use glam::Mat4;
use tracing::{debug, warn};

use crate::action::{ActionUpdateResult, TransformAction};
use crate::drawer::GizmoDrawer;
use crate::hover::{GizmoId, HoverResolver};
use crate::mode::{GizmoMode, GizmoSpace, Pivot};

/// Gizmo interaction state
#[derive(Debug, Clone)]
pub struct GizmoInteraction {
    id: GizmoId,
    /// Which gizmo is shown
    pub mode: GizmoMode,
    /// Axes the gizmo is aligned to
    pub space: GizmoSpace,
    hovered: HoveredAxis,
    resolver: HoverResolver,
    action: Option<TransformAction>,
}

impl Default for GizmoInteraction {
    fn default() -> Self {
        Self::new(GizmoId::from_name("transform"))
    }
}

impl GizmoInteraction {
    /// Creates the interaction for the gizmo `id`.
    pub fn new(id: GizmoId) -> Self {
        Self {
            id,
            mode: GizmoMode::default(),
            space: GizmoSpace::default(),
            hovered: HoveredAxis::NONE,
            resolver: HoverResolver::new(),
            action: None,
        }
    }

    /// Part hovered in the last drawn frame
    pub fn hovered(&self) -> HoveredAxis {
        self.hovered
    }

    /// The running drag, if any
    pub fn action(&self) -> Option<&TransformAction> {
        self.action.as_ref()
    }

    /// Whether a drag is running
    pub fn is_dragging(&self) -> bool {
        self.action.is_some()
    }

    /// Runs one frame for the object at `transform`.
    ///
    /// While a drag is running `transform` is overwritten with the live result
    /// every frame and restored to its start value on cancel. Otherwise the
    /// gizmo is drawn and a drag starts when a hovered part is pressed.
    pub fn update<D: DrawList + ?Sized>(
        &mut self,
        view: &SceneViewState,
        draw: &mut D,
        input: &InputSnapshot,
        config: &GizmoConfig,
        pointer_in_region: bool,
        transform: &mut Mat4,
    ) -> ActionUpdateResult {
        if let Some(action) = self.action.as_mut() {
            let result = action.update(view, input, config).unwrap_or_else(|err| {
                warn!(%err, "dropping transform action");
                ActionUpdateResult::Cancel
            });

            match result {
                ActionUpdateResult::None => {
                    *transform = action.final_matrix();
                    action.draw_overlay(view, draw, config);
                }
                ActionUpdateResult::Apply => *transform = action.final_matrix(),
                ActionUpdateResult::Cancel => *transform = action.base_matrix(),
            }

            if result != ActionUpdateResult::None {
                self.action = None;
            }
            return result;
        }

        let gizmo_transform = self.space.gizmo_transform(transform);
        let sizes = &config.sizes;

        let mut drawer = GizmoDrawer::begin(self.id, &mut self.resolver, view, draw, config);
        self.hovered = match self.mode {
            GizmoMode::Translate => {
                drawer.translation_gizmo(&gizmo_transform, sizes.translate_length)
            }
            GizmoMode::Rotate => drawer.rotation_gizmo(&gizmo_transform, sizes.rotate_radius),
            GizmoMode::Scale => drawer.scale_gizmo(&gizmo_transform, sizes.scale_length),
        };
        drawer.end(pointer_in_region);

        if pointer_in_region && input.primary.pressed && !self.hovered.is_none() {
            let pivot = Pivot::from_transform(&gizmo_transform);
            match TransformAction::begin(self.mode, self.hovered, *transform, pivot, view) {
                Ok(action) => {
                    debug!(mode = ?self.mode, hovered = ?self.hovered, "gizmo drag started");
                    self.action = Some(action);
                }
                Err(err) => warn!(%err, "gizmo drag not started"),
            }
        }

        ActionUpdateResult::None
    }

    /// Aborts a running drag, restoring the transform it started from.
    pub fn cancel(&mut self, transform: &mut Mat4) {
        if let Some(action) = self.action.take() {
            debug!("gizmo drag aborted");
            *transform = action.base_matrix();
        }
    }
}
