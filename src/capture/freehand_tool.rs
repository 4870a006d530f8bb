//! Freehand tool for tracing feature outlines.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::state::{complete_shape, ActiveCapture, CaptureTool, FreehandDrawState};
use crate::canvas::{is_cursor_over_ui, CameraParams};
use crate::constants::FREEHAND_MIN_POINT_DISTANCE;
use crate::document::ShapeCompleted;
use crate::region::Geometry;

/// Append `point` unless it is too close to the previous one.
/// Returns whether the point was kept.
pub fn push_traced_point(points: &mut Vec<Vec2>, point: Vec2, min_distance: f32) -> bool {
    if let Some(last) = points.last()
        && point.distance(*last) <= min_distance
    {
        return false;
    }
    points.push(point);
    true
}

pub fn handle_freehand(
    mouse_button: Res<ButtonInput<MouseButton>>,
    active: Res<ActiveCapture>,
    mut state: ResMut<FreehandDrawState>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut completed: MessageWriter<ShapeCompleted>,
) {
    let Some(info) = active.using(CaptureTool::Freehand) else {
        return;
    };

    if !state.is_drawing && is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        state.is_drawing = true;
        state.current_points.clear();
        state.current_points.push(world_pos);
    } else if mouse_button.pressed(MouseButton::Left) && state.is_drawing {
        // Skipping near-duplicate points keeps the vertex count down
        push_traced_point(&mut state.current_points, world_pos, FREEHAND_MIN_POINT_DISTANCE);
    } else if mouse_button.just_released(MouseButton::Left) && state.is_drawing {
        state.is_drawing = false;
        push_traced_point(&mut state.current_points, world_pos, FREEHAND_MIN_POINT_DISTANCE);
        let points = std::mem::take(&mut state.current_points);
        if points.len() >= 3 {
            complete_shape(&mut completed, info, Geometry::polygon(points));
        }
    }
}
