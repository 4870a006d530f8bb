//! Requests exchanged with the drawing surface.
//!
//! The document never touches the canvas directly. It queues
//! [`SurfaceRequest`]s which the canvas and capture plugins act on, and it
//! receives [`ShapeCompleted`] messages back while a capture is running.

use std::path::PathBuf;

use bevy::prelude::*;

use super::image::Extent;
use crate::region::{Geometry, ShapeKind};

/// Which region collection a capture feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionTarget {
    Aoi,
    Feature,
}

impl RegionTarget {
    pub fn display_name(&self) -> &'static str {
        match self {
            RegionTarget::Aoi => "AOI",
            RegionTarget::Feature => "Feature",
        }
    }
}

/// Shape the surface should capture while a session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeConstraint {
    pub kind: ShapeKind,
    pub freehand: bool,
}

impl ShapeConstraint {
    /// Feature regions are always traced freehand as polygons.
    pub const FEATURE: ShapeConstraint = ShapeConstraint {
        kind: ShapeKind::Polygon,
        freehand: true,
    };

    pub fn aoi(kind: ShapeKind) -> Self {
        Self {
            kind,
            freehand: false,
        }
    }
}

/// Identifies one capture started by the document.
///
/// Ids are never reused, so a completion tagged with an ended capture can be
/// told apart from one belonging to the current capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaptureId(pub u64);

/// Outbound request from the document to the drawing surface.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum SurfaceRequest {
    BeginCapture {
        capture: CaptureId,
        target: RegionTarget,
        constraint: ShapeConstraint,
    },
    /// Stop capturing. Any shape still being drawn is dropped.
    EndCapture { capture: CaptureId },
    RebindBackground { extent: Extent, source: PathBuf },
    ResetView { extent: Extent },
}

/// Inbound notification that the surface finished drawing a shape.
#[derive(Message, Debug, Clone)]
pub struct ShapeCompleted {
    pub capture: CaptureId,
    pub geometry: Geometry,
}

/// Ordered queue of requests waiting to be forwarded to the surface.
#[derive(Debug, Default)]
pub struct SurfaceOutbox {
    pending: Vec<SurfaceRequest>,
}

impl SurfaceOutbox {
    pub fn push(&mut self, request: SurfaceRequest) {
        self.pending.push(request);
    }

    pub fn drain(&mut self) -> Vec<SurfaceRequest> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_constraint_is_freehand_polygon() {
        assert_eq!(ShapeConstraint::FEATURE.kind, ShapeKind::Polygon);
        assert!(ShapeConstraint::FEATURE.freehand);
    }

    #[test]
    fn test_aoi_constraint_is_not_freehand() {
        let constraint = ShapeConstraint::aoi(ShapeKind::Circle);
        assert_eq!(constraint.kind, ShapeKind::Circle);
        assert!(!constraint.freehand);
    }

    #[test]
    fn test_outbox_drains_in_order() {
        let mut outbox = SurfaceOutbox::default();
        outbox.push(SurfaceRequest::EndCapture {
            capture: CaptureId(1),
        });
        outbox.push(SurfaceRequest::EndCapture {
            capture: CaptureId(2),
        });

        let drained = outbox.drain();
        assert_eq!(
            drained,
            vec![
                SurfaceRequest::EndCapture {
                    capture: CaptureId(1)
                },
                SurfaceRequest::EndCapture {
                    capture: CaptureId(2)
                },
            ]
        );
        assert!(outbox.is_empty());
    }
}
