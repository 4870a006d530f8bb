use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::VIEW_TILE_SIZE;
use crate::document::{DocumentState, Extent, SurfaceRequest};

#[derive(Component)]
pub struct CanvasCamera;

/// Zoom state of the canvas camera, expressed as a zoom level where each
/// step doubles the magnification.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraZoom {
    pub level: f32,
    pub max_level: f32,
    /// World units per screen pixel at level 0
    pub base_scale: f32,
}

impl CameraZoom {
    pub fn for_extent(extent: &Extent, level: f32, max_level: f32) -> Self {
        Self {
            level: level.clamp(0.0, max_level),
            max_level,
            base_scale: base_scale(extent),
        }
    }

    /// Orthographic projection scale for the current level
    pub fn scale(&self) -> f32 {
        self.base_scale / 2f32.powf(self.level)
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.level = (self.level + delta).clamp(0.0, self.max_level);
    }
}

/// World units per screen pixel at zoom level 0: the whole extent fits in
/// one view tile.
pub fn base_scale(extent: &Extent) -> f32 {
    let span = extent.width().max(extent.height()).max(1.0);
    span / VIEW_TILE_SIZE
}

pub fn spawn_camera(mut commands: Commands, config: Res<AppConfig>, document: Res<DocumentState>) {
    let extent = document.extent();
    let view = config.data.view;
    commands.spawn((
        Camera2d,
        CanvasCamera,
        CameraZoom::for_extent(&extent, view.initial_zoom, view.max_zoom),
        Transform::from_translation(extent.center().extend(1000.0)),
    ));
}

pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<bevy::input::mouse::MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<CanvasCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale();
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<CanvasCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let levels = match event.unit {
            MouseScrollUnit::Line => event.y * 0.25,
            MouseScrollUnit::Pixel => event.y * 0.0025,
        };
        zoom.zoom_by(levels);
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<CanvasCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale();
        }
    }
}

/// Re-centre the view on a new extent at the configured initial zoom
pub fn reset_view(
    mut requests: MessageReader<SurfaceRequest>,
    config: Res<AppConfig>,
    mut camera_query: Query<(&mut Transform, &mut CameraZoom), With<CanvasCamera>>,
) {
    let Some(extent) = requests
        .read()
        .filter_map(|request| match request {
            SurfaceRequest::ResetView { extent } => Some(*extent),
            _ => None,
        })
        .last()
    else {
        return;
    };

    let Ok((mut transform, mut zoom)) = camera_query.single_mut() else {
        return;
    };

    let view = config.data.view;
    let center = extent.center();
    transform.translation.x = center.x;
    transform.translation.y = center.y;
    *zoom = CameraZoom::for_extent(&extent, view.initial_zoom, view.max_zoom);
    debug!("View reset to {:?} at zoom {}", extent.to_array(), zoom.level);
}
