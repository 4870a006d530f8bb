//! Background sprite showing the reference image.

use bevy::prelude::*;

use crate::document::SurfaceRequest;

/// Z position of the background (regions are drawn as gizmos on top)
const BACKGROUND_Z: f32 = 0.0;

#[derive(Component)]
pub struct BackgroundImage;

/// Swap the background sprite for the newly loaded image.
///
/// The sprite is sized to the image extent and placed so that world
/// coordinates equal image pixel coordinates with the origin bottom-left.
pub fn rebind_background(
    mut commands: Commands,
    mut requests: MessageReader<SurfaceRequest>,
    asset_server: Res<AssetServer>,
    existing: Query<Entity, With<BackgroundImage>>,
) {
    let Some((extent, source)) = requests
        .read()
        .filter_map(|request| match request {
            SurfaceRequest::RebindBackground { extent, source } => Some((*extent, source.clone())),
            _ => None,
        })
        .last()
    else {
        return;
    };

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let texture: Handle<Image> = asset_server.load(source);
    commands.spawn((
        Sprite {
            image: texture,
            custom_size: Some(extent.size()),
            ..default()
        },
        Transform::from_translation(extent.center().extend(BACKGROUND_Z)),
        BackgroundImage,
    ));
}
