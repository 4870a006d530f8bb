//! Loaded image metadata and its pixel extent.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::constants::{PLACEHOLDER_EXTENT_HEIGHT, PLACEHOLDER_EXTENT_WIDTH};

/// The reference image currently shown under the regions.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub source: PathBuf,
}

impl ImageInfo {
    pub fn display_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.to_string_lossy().to_string())
    }
}

/// Axis-aligned pixel bounding box `[min_x, min_y, max_x, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: Vec2,
    pub max: Vec2,
}

impl Extent {
    /// Extent of an image with the given pixel size, anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width as f32, height as f32),
        }
    }

    /// Extent framed before any image has been loaded.
    pub fn placeholder() -> Self {
        Self::from_size(PLACEHOLDER_EXTENT_WIDTH, PLACEHOLDER_EXTENT_HEIGHT)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }
}
