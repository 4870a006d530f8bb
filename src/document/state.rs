//! The open document: image, drawing modes and both region collections.

use std::path::PathBuf;

use bevy::prelude::*;

use super::image::{Extent, ImageInfo};
use super::session::DrawSession;
use super::surface::{
    CaptureId, RegionTarget, ShapeConstraint, SurfaceOutbox, SurfaceRequest,
};
use crate::region::{
    compute_coverage, CoverageError, CoverageReport, Geometry, RegionCollection, ShapeKind,
};

/// Single owner of everything drawn over the current image.
///
/// Controls mutate it through the `set_*`/`clear_*` methods; every change
/// that concerns the drawing surface is queued as a [`SurfaceRequest`] and
/// collected with [`DocumentState::take_requests`].
#[derive(Resource, Debug)]
pub struct DocumentState {
    image: Option<ImageInfo>,
    extent: Extent,
    aoi_shape: ShapeKind,
    aoi_drawing_enabled: bool,
    feature_drawing_enabled: bool,
    aoi_regions: RegionCollection,
    feature_regions: RegionCollection,
    aoi_session: DrawSession,
    feature_session: DrawSession,
    next_capture: u64,
    outbox: SurfaceOutbox,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            image: None,
            extent: Extent::placeholder(),
            aoi_shape: ShapeKind::default(),
            aoi_drawing_enabled: false,
            feature_drawing_enabled: false,
            aoi_regions: RegionCollection::default(),
            feature_regions: RegionCollection::default(),
            aoi_session: DrawSession::new(RegionTarget::Aoi),
            feature_session: DrawSession::new(RegionTarget::Feature),
            next_capture: 1,
            outbox: SurfaceOutbox::default(),
        }
    }
}

impl DocumentState {
    pub fn image(&self) -> Option<&ImageInfo> {
        self.image.as_ref()
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn aoi_shape(&self) -> ShapeKind {
        self.aoi_shape
    }

    pub fn aoi_drawing_enabled(&self) -> bool {
        self.aoi_drawing_enabled
    }

    pub fn feature_drawing_enabled(&self) -> bool {
        self.feature_drawing_enabled
    }

    pub fn aoi_regions(&self) -> &RegionCollection {
        &self.aoi_regions
    }

    pub fn feature_regions(&self) -> &RegionCollection {
        &self.feature_regions
    }

    pub fn session(&self, target: RegionTarget) -> &DrawSession {
        match target {
            RegionTarget::Aoi => &self.aoi_session,
            RegionTarget::Feature => &self.feature_session,
        }
    }

    /// Show a new reference image. Drawn regions are kept.
    pub fn load_image(&mut self, width: u32, height: u32, source: impl Into<PathBuf>) {
        let source = source.into();
        self.extent = Extent::from_size(width, height);
        info!("Loaded image {:?} ({}x{})", source, width, height);

        self.outbox.push(SurfaceRequest::RebindBackground {
            extent: self.extent,
            source: source.clone(),
        });
        self.outbox.push(SurfaceRequest::ResetView {
            extent: self.extent,
        });
        self.image = Some(ImageInfo {
            width,
            height,
            source,
        });
    }

    pub fn set_aoi_drawing_enabled(&mut self, enabled: bool) {
        if self.aoi_drawing_enabled == enabled {
            return;
        }
        self.aoi_drawing_enabled = enabled;

        if enabled {
            self.stop_feature_drawing();
            let capture = self.next_capture_id();
            self.aoi_session.activate(
                capture,
                ShapeConstraint::aoi(self.aoi_shape),
                &mut self.outbox,
            );
        } else {
            self.aoi_session.deactivate(&mut self.outbox);
        }
    }

    pub fn set_feature_drawing_enabled(&mut self, enabled: bool) {
        if self.feature_drawing_enabled == enabled {
            return;
        }
        self.feature_drawing_enabled = enabled;

        if enabled {
            self.stop_aoi_drawing();
            let capture = self.next_capture_id();
            self.feature_session
                .activate(capture, ShapeConstraint::FEATURE, &mut self.outbox);
        } else {
            self.feature_session.deactivate(&mut self.outbox);
        }
    }

    /// Change the AOI shape. A running AOI capture restarts with the new shape.
    pub fn set_aoi_shape_type(&mut self, kind: ShapeKind) {
        if self.aoi_shape == kind {
            return;
        }
        self.aoi_shape = kind;

        if self.aoi_drawing_enabled {
            let capture = self.next_capture_id();
            self.aoi_session
                .activate(capture, ShapeConstraint::aoi(kind), &mut self.outbox);
        }
    }

    pub fn toggle_aoi_drawing(&mut self) -> bool {
        self.set_aoi_drawing_enabled(!self.aoi_drawing_enabled);
        self.aoi_drawing_enabled
    }

    pub fn toggle_feature_drawing(&mut self) -> bool {
        self.set_feature_drawing_enabled(!self.feature_drawing_enabled);
        self.feature_drawing_enabled
    }

    pub fn clear_aoi(&mut self) {
        self.aoi_regions.clear();
    }

    pub fn clear_features(&mut self) {
        self.feature_regions.clear();
    }

    pub fn calculate_coverage(&self) -> Result<CoverageReport, CoverageError> {
        compute_coverage(&self.aoi_regions, &self.feature_regions)
    }

    /// Route a shape finished by the surface to the session that owns its
    /// capture. Returns whether the shape was committed.
    pub fn on_shape_completed(&mut self, capture: CaptureId, geometry: Geometry) -> bool {
        if self.aoi_session.capture() == Some(capture) {
            self.aoi_session
                .accept(capture, geometry, &mut self.aoi_regions)
        } else if self.feature_session.capture() == Some(capture) {
            self.feature_session
                .accept(capture, geometry, &mut self.feature_regions)
        } else {
            debug!("Ignoring shape from inactive capture {:?}", capture);
            false
        }
    }

    /// Drain queued surface requests in the order they were issued.
    pub fn take_requests(&mut self) -> Vec<SurfaceRequest> {
        self.outbox.drain()
    }

    pub fn has_pending_requests(&self) -> bool {
        !self.outbox.is_empty()
    }

    fn stop_aoi_drawing(&mut self) {
        self.aoi_drawing_enabled = false;
        self.aoi_session.deactivate(&mut self.outbox);
    }

    fn stop_feature_drawing(&mut self) {
        self.feature_drawing_enabled = false;
        self.feature_session.deactivate(&mut self.outbox);
    }

    fn next_capture_id(&mut self) -> CaptureId {
        let id = CaptureId(self.next_capture);
        self.next_capture += 1;
        id
    }
}
