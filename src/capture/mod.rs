//! Shape capture on the canvas.
//!
//! The document decides when a capture runs and with which constraint. This
//! module follows [`SurfaceRequest::BeginCapture`] and
//! [`SurfaceRequest::EndCapture`], turns pointer input into a [`Geometry`]
//! with the matching tool, and reports it back as a [`ShapeCompleted`].
//!
//! ## Module Structure
//!
//! - [`state`] - Running capture and in-progress shape resources
//! - [`circle_tool`] - Press, drag and release circles
//! - [`polygon_tool`] - Click-to-add polygons
//! - [`freehand_tool`] - Traced outlines
//! - [`rendering`] - Gizmo outlines for regions and previews
//!
//! [`SurfaceRequest::BeginCapture`]: crate::document::SurfaceRequest::BeginCapture
//! [`SurfaceRequest::EndCapture`]: crate::document::SurfaceRequest::EndCapture
//! [`Geometry`]: crate::region::Geometry
//! [`ShapeCompleted`]: crate::document::ShapeCompleted

mod circle_tool;
mod freehand_tool;
mod gizmo;
mod polygon_tool;
mod rendering;
mod state;

pub use state::{ActiveCapture, CaptureTool};

use bevy::prelude::*;

use crate::document::{apply_completed_shapes, forward_surface_requests};

pub struct CapturePlugin;

impl Plugin for CapturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<state::ActiveCapture>()
            .init_resource::<state::CircleDrawState>()
            .init_resource::<state::PolygonDrawState>()
            .init_resource::<state::FreehandDrawState>()
            .init_gizmo_group::<gizmo::RegionGizmoGroup>()
            .add_systems(Startup, gizmo::configure_region_gizmos)
            .add_systems(
                Update,
                (
                    circle_tool::handle_circle,
                    polygon_tool::handle_polygon,
                    freehand_tool::handle_freehand,
                )
                    .before(apply_completed_shapes),
            )
            .add_systems(
                Update,
                state::apply_capture_requests.after(forward_surface_requests),
            )
            .add_systems(
                Update,
                (rendering::render_regions, rendering::render_capture_preview)
                    .after(state::apply_capture_requests),
            );
    }
}
