//! Document state and drawing-mode orchestration.
//!
//! ## Module Structure
//!
//! - [`image`] - Loaded image metadata and pixel extent
//! - [`surface`] - Requests to, and completions from, the drawing surface
//! - [`session`] - Capture session state machine for one region collection
//! - [`state`] - The [`DocumentState`] resource that owns everything above
//!
//! ## Message Flow
//!
//! Controls call methods on [`DocumentState`]. Each frame
//! [`forward_surface_requests`] drains its outbox into [`SurfaceRequest`]
//! messages for the canvas and capture plugins, and
//! [`apply_completed_shapes`] feeds [`ShapeCompleted`] messages back in.

mod image;
mod session;
mod state;
mod surface;


pub use image::Extent;
pub use state::DocumentState;
pub use surface::{
    CaptureId, RegionTarget, ShapeCompleted, ShapeConstraint, SurfaceRequest,
};

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};

/// Startup system applying persisted drawing defaults to the fresh document
fn apply_config_defaults(config: Res<AppConfig>, mut document: ResMut<DocumentState>) {
    document.set_aoi_shape_type(config.data.default_aoi_shape);
}

/// Forward queued document requests to the surface as messages
pub fn forward_surface_requests(
    mut document: ResMut<DocumentState>,
    mut requests: MessageWriter<SurfaceRequest>,
) {
    if !document.has_pending_requests() {
        return;
    }
    for request in document.take_requests() {
        requests.write(request);
    }
}

/// Commit shapes reported by the surface into the owning collection
pub fn apply_completed_shapes(
    mut events: MessageReader<ShapeCompleted>,
    mut document: ResMut<DocumentState>,
) {
    for event in events.read() {
        let kind = event.geometry.kind();
        if document.on_shape_completed(event.capture, event.geometry.clone()) {
            debug!(
                "Committed {:?} ({:.1} px²) from capture {:?}",
                kind,
                event.geometry.area(),
                event.capture
            );
        }
    }
}

pub struct DocumentPlugin;

impl Plugin for DocumentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DocumentState>()
            .add_message::<SurfaceRequest>()
            .add_message::<ShapeCompleted>()
            .add_systems(Startup, apply_config_defaults.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    apply_completed_shapes.run_if(on_message::<ShapeCompleted>),
                    forward_surface_requests,
                )
                    .chain(),
            );
    }
}
