//! Polygon tool: click vertices, close on the first vertex or with Enter.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::state::{complete_shape, ActiveCapture, CaptureTool, PolygonDrawState};
use crate::canvas::{is_cursor_over_ui, CameraParams};
use crate::constants::POLYGON_CLOSE_DISTANCE;
use crate::document::ShapeCompleted;
use crate::region::Geometry;

/// Whether a click at `point` closes the ring started at `vertices[0]`
pub fn closes_ring(vertices: &[Vec2], point: Vec2, threshold: f32) -> bool {
    vertices.len() >= 3 && vertices[0].distance(point) <= threshold
}

pub fn handle_polygon(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    active: Res<ActiveCapture>,
    mut state: ResMut<PolygonDrawState>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut completed: MessageWriter<ShapeCompleted>,
) {
    let Some(info) = active.using(CaptureTool::Polygon) else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Escape) || mouse_button.just_pressed(MouseButton::Right) {
        state.vertices.clear();
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) {
        if state.vertices.len() >= 3 {
            let vertices = std::mem::take(&mut state.vertices);
            complete_shape(&mut completed, info, Geometry::polygon(vertices));
        }
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        let threshold = POLYGON_CLOSE_DISTANCE * camera.zoom_scale();
        if closes_ring(&state.vertices, world_pos, threshold) {
            let vertices = std::mem::take(&mut state.vertices);
            complete_shape(&mut completed, info, Geometry::polygon(vertices));
        } else {
            state.vertices.push(world_pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec2> {
        vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(5.0, 8.0)]
    }

    #[test]
    fn test_click_near_first_vertex_closes() {
        assert!(closes_ring(&triangle(), Vec2::new(1.0, 1.0), 2.0));
    }

    #[test]
    fn test_click_far_from_first_vertex_adds() {
        assert!(!closes_ring(&triangle(), Vec2::new(4.0, 4.0), 2.0));
    }

    #[test]
    fn test_two_vertices_never_close() {
        let open = [Vec2::ZERO, Vec2::new(10.0, 0.0)];
        assert!(!closes_ring(&open, Vec2::ZERO, 2.0));
    }
}
