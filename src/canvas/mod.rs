//! The drawing surface: camera, background image and image loading.
//!
//! ## Module Structure
//!
//! - [`camera`] - Canvas camera with pan, zoom levels and view reset
//! - [`background`] - Background sprite bound to the loaded image
//! - [`image_source`] - File picker and async dimension probing
//! - [`params`] - SystemParam bundles for cursor-to-world conversion

mod background;
mod camera;
pub mod image_source;
mod params;

pub use image_source::{
    ImageLoadError, ImagePickerState, InitialImage, LoadImageRequest, OpenImageRequest,
};
pub use params::{is_cursor_over_ui, CameraParams};

use bevy::prelude::*;

use crate::config::ConfigLoaded;
use crate::document::forward_surface_requests;

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImagePickerState>()
            .init_resource::<ImageLoadError>()
            .init_resource::<InitialImage>()
            .add_message::<OpenImageRequest>()
            .add_message::<LoadImageRequest>()
            .add_systems(
                Startup,
                (camera::spawn_camera, image_source::queue_initial_image).after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    image_source::open_image_dialog.run_if(on_message::<OpenImageRequest>),
                    image_source::poll_image_dialog,
                    image_source::start_image_probes.run_if(on_message::<LoadImageRequest>),
                    image_source::poll_image_probes,
                )
                    .chain()
                    .before(forward_surface_requests),
            )
            .add_systems(
                Update,
                (background::rebind_background, camera::reset_view)
                    .after(forward_surface_requests)
                    .before(camera::apply_camera_zoom),
            );
    }
}
