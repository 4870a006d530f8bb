//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Width of the extent framed before any image has been loaded
pub const PLACEHOLDER_EXTENT_WIDTH: u32 = 3200;

/// Height of the extent framed before any image has been loaded
pub const PLACEHOLDER_EXTENT_HEIGHT: u32 = 2400;

/// Zoom level a freshly loaded image is shown at
pub const DEFAULT_INITIAL_ZOOM: f32 = 1.5;

/// Deepest zoom level the view allows
pub const DEFAULT_MAX_ZOOM: f32 = 8.0;

/// Screen pixels covered by the whole extent at zoom level 0.
/// Each zoom level doubles the magnification.
pub const VIEW_TILE_SIZE: f32 = 256.0;

/// Minimum world distance between consecutive freehand points.
/// Higher values give coarser outlines with fewer vertices.
pub const FREEHAND_MIN_POINT_DISTANCE: f32 = 2.0;

/// Screen distance within which a click on the first vertex closes a polygon
pub const POLYGON_CLOSE_DISTANCE: f32 = 10.0;
