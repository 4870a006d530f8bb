//! Circle tool: press at the centre, drag out the radius, release to commit.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::state::{complete_shape, ActiveCapture, CaptureTool, CircleDrawState};
use crate::canvas::{is_cursor_over_ui, CameraParams};
use crate::document::ShapeCompleted;
use crate::region::Geometry;

pub fn handle_circle(
    mouse_button: Res<ButtonInput<MouseButton>>,
    active: Res<ActiveCapture>,
    mut state: ResMut<CircleDrawState>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut completed: MessageWriter<ShapeCompleted>,
) {
    let Some(info) = active.using(CaptureTool::Circle) else {
        return;
    };

    // Only block starting a circle over the UI; a drag may pass over panels
    if state.center.is_none() && is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        state.center = Some(world_pos);
        state.radius = 0.0;
    } else if mouse_button.pressed(MouseButton::Left) {
        if let Some(center) = state.center {
            state.radius = center.distance(world_pos);
        }
    } else if mouse_button.just_released(MouseButton::Left)
        && let Some(center) = state.center.take()
    {
        let radius = center.distance(world_pos);
        state.radius = 0.0;
        if radius > 0.0 {
            complete_shape(&mut completed, info, Geometry::circle(center, radius));
        }
    }

    // Right click cancels
    if mouse_button.just_pressed(MouseButton::Right) {
        state.center = None;
        state.radius = 0.0;
    }
}
