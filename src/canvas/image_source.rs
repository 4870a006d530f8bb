//! Picking reference images and probing their pixel size.
//!
//! The file dialog and the dimension probe both run off the main thread.
//! Probes finish in any order and each completed one is applied as a fresh
//! image load, so the last probe to finish decides what is shown.

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, IoTaskPool, Task};
use futures_lite::future;
use std::path::{Path, PathBuf};

use crate::config::{AppConfig, UpdateLastImageDirRequest};
use crate::document::DocumentState;

/// File extensions offered by the image picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"];

/// Message asking for the image picker to be shown
#[derive(Message)]
pub struct OpenImageRequest;

/// Message asking for an image file to be loaded
#[derive(Message)]
pub struct LoadImageRequest {
    pub path: PathBuf,
}

/// Image passed on the command line, loaded once at startup
#[derive(Resource, Default)]
pub struct InitialImage(pub Option<PathBuf>);

/// State of the async image picker
#[derive(Resource, Default)]
pub struct ImagePickerState {
    pub pending_pick: Option<Task<Option<PathBuf>>>,
}

impl ImagePickerState {
    pub fn is_open(&self) -> bool {
        self.pending_pick.is_some()
    }
}

/// Resource tracking image load errors for display to user
#[derive(Resource, Default)]
pub struct ImageLoadError {
    pub message: Option<String>,
}

/// Result of an async dimension probe
pub struct ProbeResult {
    pub path: PathBuf,
    pub dimensions: Result<(u32, u32), String>,
}

/// Component for a running dimension probe
#[derive(Component)]
pub struct ImageProbeTask(pub Task<ProbeResult>);

/// Read the pixel size of an image file without decoding the pixels
pub fn probe_image(path: &Path) -> Result<(u32, u32), String> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| format!("Failed to read image {}: {}", path.display(), e))?;
    if width == 0 || height == 0 {
        return Err(format!("Image {} has no pixels", path.display()));
    }
    Ok((width, height))
}

/// Startup system queueing the image given on the command line
pub fn queue_initial_image(
    initial: Res<InitialImage>,
    mut load_events: MessageWriter<LoadImageRequest>,
) {
    if let Some(path) = &initial.0 {
        load_events.write(LoadImageRequest { path: path.clone() });
    }
}

/// Spawn the native file picker
pub fn open_image_dialog(
    mut events: MessageReader<OpenImageRequest>,
    mut picker: ResMut<ImagePickerState>,
    config: Res<AppConfig>,
) {
    // Several clicks in one frame still open one dialog
    if events.read().count() == 0 || picker.is_open() {
        return;
    }

    let start_dir = crate::paths::image_dialog_dir(config.data.last_image_dir.as_deref());
    let task_pool = AsyncComputeTaskPool::get();
    picker.pending_pick = Some(task_pool.spawn(async move {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title("Open Reference Image")
            .add_filter("Images", IMAGE_EXTENSIONS);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file().await.map(|h| h.path().to_path_buf())
    }));
}

/// Poll the file picker and request a load for the chosen file
pub fn poll_image_dialog(
    mut picker: ResMut<ImagePickerState>,
    mut load_events: MessageWriter<LoadImageRequest>,
) {
    if let Some(ref mut task) = picker.pending_pick
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        picker.pending_pick = None;
        if let Some(path) = result {
            load_events.write(LoadImageRequest { path });
        }
    }
}

/// Start probing each requested image on the IO pool
pub fn start_image_probes(mut commands: Commands, mut events: MessageReader<LoadImageRequest>) {
    for event in events.read() {
        let path = event.path.clone();
        info!("Opening image {:?}", path);

        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            let dimensions = probe_image(&path);
            ProbeResult { path, dimensions }
        });

        commands.spawn(ImageProbeTask(task));
    }
}

/// Apply finished probes to the document
pub fn poll_image_probes(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ImageProbeTask)>,
    mut document: ResMut<DocumentState>,
    mut load_error: ResMut<ImageLoadError>,
    mut config_events: MessageWriter<UpdateLastImageDirRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };
        commands.entity(entity).despawn();

        match result.dimensions {
            Ok((width, height)) => {
                load_error.message = None;
                if let Some(parent) = result.path.parent() {
                    config_events.write(UpdateLastImageDirRequest {
                        path: parent.to_path_buf(),
                    });
                }
                document.load_image(width, height, result.path);
            }
            Err(error) => {
                error!("{}", error);
                load_error.message = Some(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_missing_file_fails() {
        let result = probe_image(Path::new("/no/such/quadrat/image.png"));
        let error = result.unwrap_err();
        assert!(error.starts_with("Failed to read image"));
    }

    #[test]
    fn test_probe_reads_dimensions() {
        let path = std::env::temp_dir().join("quadrat_probe_test_7x3.png");
        image::RgbImage::new(7, 3).save(&path).unwrap();

        assert_eq!(probe_image(&path), Ok((7, 3)));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_probe_rejects_non_image() {
        let path = std::env::temp_dir().join("quadrat_probe_test_not_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(probe_image(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_picker_state_default_closed() {
        assert!(!ImagePickerState::default().is_open());
    }

    #[test]
    fn test_extensions_include_common_photo_formats() {
        assert!(IMAGE_EXTENSIONS.contains(&"jpg"));
        assert!(IMAGE_EXTENSIONS.contains(&"png"));
    }
}
