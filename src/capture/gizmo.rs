//! Custom gizmo group for region outlines.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

/// Stroke width for region outlines, in pixels
const REGION_STROKE_WIDTH: f32 = 2.0;

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct RegionGizmoGroup;

pub fn configure_region_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<RegionGizmoGroup>();
    config.line.width = REGION_STROKE_WIDTH;
}
