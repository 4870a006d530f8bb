//! Rendering systems for committed regions and in-progress shapes.

use bevy::prelude::*;

use super::gizmo::RegionGizmoGroup;
use super::state::{ActiveCapture, CaptureTool, CircleDrawState, FreehandDrawState, PolygonDrawState};
use crate::canvas::CameraParams;
use crate::document::{DocumentState, RegionTarget};
use crate::region::Geometry;

/// #319FD3
const AOI_STROKE_COLOR: Color = Color::srgb(0.192, 0.624, 0.827);
const FEATURE_STROKE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const PREVIEW_ALPHA: f32 = 0.5;

pub fn stroke_color(target: RegionTarget) -> Color {
    match target {
        RegionTarget::Aoi => AOI_STROKE_COLOR,
        RegionTarget::Feature => FEATURE_STROKE_COLOR,
    }
}

fn draw_geometry(gizmos: &mut Gizmos<RegionGizmoGroup>, geometry: &Geometry, color: Color) {
    match geometry {
        Geometry::Circle { center, radius } => {
            gizmos.circle_2d(Isometry2d::from_translation(*center), *radius, color);
        }
        Geometry::Polygon { vertices } => {
            if vertices.len() < 2 {
                return;
            }
            gizmos.linestrip_2d(closed_ring(vertices), color);
        }
    }
}

/// Vertices with the first repeated at the end
fn closed_ring(vertices: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    vertices.iter().copied().chain(vertices.first().copied())
}

pub fn render_regions(mut gizmos: Gizmos<RegionGizmoGroup>, document: Res<DocumentState>) {
    for geometry in document.aoi_regions().items() {
        draw_geometry(&mut gizmos, geometry, AOI_STROKE_COLOR);
    }
    for geometry in document.feature_regions().items() {
        draw_geometry(&mut gizmos, geometry, FEATURE_STROKE_COLOR);
    }
}

pub fn render_capture_preview(
    mut gizmos: Gizmos<RegionGizmoGroup>,
    active: Res<ActiveCapture>,
    circle: Res<CircleDrawState>,
    polygon: Res<PolygonDrawState>,
    freehand: Res<FreehandDrawState>,
    camera: CameraParams,
) {
    let Some(info) = active.current else {
        return;
    };
    let color = stroke_color(info.target).with_alpha(PREVIEW_ALPHA);

    match CaptureTool::for_constraint(info.constraint) {
        CaptureTool::Circle => {
            if let Some(center) = circle.center
                && circle.radius > 0.0
            {
                gizmos.circle_2d(Isometry2d::from_translation(center), circle.radius, color);
            }
        }
        CaptureTool::Polygon => {
            if polygon.vertices.is_empty() {
                return;
            }
            gizmos.linestrip_2d(polygon.vertices.iter().copied(), color);
            // Rubber band from the last vertex to the cursor
            if let Some(last) = polygon.vertices.last()
                && let Some(cursor) = camera.cursor_world_pos()
            {
                gizmos.line_2d(*last, cursor, color);
            }
        }
        CaptureTool::Freehand => {
            if !freehand.is_drawing || freehand.current_points.len() < 2 {
                return;
            }
            for window in freehand.current_points.windows(2) {
                gizmos.line_2d(window[0], window[1], color);
            }
        }
    }
}
