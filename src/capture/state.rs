//! State resources for tracking the running capture and in-progress shapes.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::document::{CaptureId, RegionTarget, ShapeCompleted, ShapeConstraint, SurfaceRequest};
use crate::region::{Geometry, ShapeKind};

/// Input tool used to trace a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTool {
    Circle,
    Polygon,
    Freehand,
}

impl CaptureTool {
    pub fn for_constraint(constraint: ShapeConstraint) -> Self {
        match (constraint.kind, constraint.freehand) {
            (ShapeKind::Polygon, true) => CaptureTool::Freehand,
            (ShapeKind::Polygon, false) => CaptureTool::Polygon,
            // Circles are always dragged out from the centre
            (ShapeKind::Circle, _) => CaptureTool::Circle,
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            CaptureTool::Circle => "Drag from the centre to set the radius",
            CaptureTool::Polygon => {
                "Click to add vertices, click the first vertex or press Enter to close, Esc cancels"
            }
            CaptureTool::Freehand => "Hold the left button and trace the outline",
        }
    }
}

/// The capture the surface is currently attached to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureInfo {
    pub capture: CaptureId,
    pub target: RegionTarget,
    pub constraint: ShapeConstraint,
}

#[derive(Resource, Default, Debug)]
pub struct ActiveCapture {
    pub current: Option<CaptureInfo>,
}

impl ActiveCapture {
    /// Apply a surface request. Returns true when any in-progress shape must
    /// be thrown away.
    pub fn apply(&mut self, request: &SurfaceRequest) -> bool {
        match request {
            SurfaceRequest::BeginCapture {
                capture,
                target,
                constraint,
            } => {
                self.current = Some(CaptureInfo {
                    capture: *capture,
                    target: *target,
                    constraint: *constraint,
                });
                true
            }
            SurfaceRequest::EndCapture { capture } => {
                if self.current.map(|c| c.capture) == Some(*capture) {
                    self.current = None;
                    true
                } else {
                    false
                }
            }
            SurfaceRequest::RebindBackground { .. } | SurfaceRequest::ResetView { .. } => false,
        }
    }

    pub fn tool(&self) -> Option<CaptureTool> {
        self.current
            .map(|info| CaptureTool::for_constraint(info.constraint))
    }

    /// The running capture if it uses `tool`
    pub fn using(&self, tool: CaptureTool) -> Option<CaptureInfo> {
        self.current
            .filter(|info| CaptureTool::for_constraint(info.constraint) == tool)
    }
}

#[derive(Resource, Default)]
pub struct CircleDrawState {
    pub center: Option<Vec2>,
    pub radius: f32,
}

#[derive(Resource, Default)]
pub struct PolygonDrawState {
    pub vertices: Vec<Vec2>,
}

#[derive(Resource, Default)]
pub struct FreehandDrawState {
    pub is_drawing: bool,
    pub current_points: Vec<Vec2>,
}

/// Every in-progress shape, for systems that reset or preview them together
#[derive(SystemParam)]
pub(crate) struct InProgressShapes<'w> {
    pub circle: ResMut<'w, CircleDrawState>,
    pub polygon: ResMut<'w, PolygonDrawState>,
    pub freehand: ResMut<'w, FreehandDrawState>,
}

impl InProgressShapes<'_> {
    pub fn discard(&mut self) {
        self.circle.center = None;
        self.circle.radius = 0.0;
        self.polygon.vertices.clear();
        self.freehand.is_drawing = false;
        self.freehand.current_points.clear();
    }
}

/// Track capture begin/end requests from the document
pub(crate) fn apply_capture_requests(
    mut requests: MessageReader<SurfaceRequest>,
    mut active: ResMut<ActiveCapture>,
    mut shapes: InProgressShapes,
) {
    let mut discard = false;
    for request in requests.read() {
        discard |= active.apply(request);
    }
    if discard {
        shapes.discard();
    }
}

/// Report a finished shape for the running capture
pub(crate) fn complete_shape(
    completed: &mut MessageWriter<ShapeCompleted>,
    info: CaptureInfo,
    geometry: Geometry,
) {
    debug!(
        "{} {:?} completed for capture {:?}",
        info.target.display_name(),
        geometry.kind(),
        info.capture
    );
    completed.write(ShapeCompleted {
        capture: info.capture,
        geometry,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn begin(id: u64, constraint: ShapeConstraint) -> SurfaceRequest {
        SurfaceRequest::BeginCapture {
            capture: CaptureId(id),
            target: RegionTarget::Aoi,
            constraint,
        }
    }

    #[test]
    fn test_tool_for_constraint() {
        assert_eq!(
            CaptureTool::for_constraint(ShapeConstraint::aoi(ShapeKind::Circle)),
            CaptureTool::Circle
        );
        assert_eq!(
            CaptureTool::for_constraint(ShapeConstraint::aoi(ShapeKind::Polygon)),
            CaptureTool::Polygon
        );
        assert_eq!(
            CaptureTool::for_constraint(ShapeConstraint::FEATURE),
            CaptureTool::Freehand
        );
    }

    #[test]
    fn test_begin_sets_current_and_discards() {
        let mut active = ActiveCapture::default();
        assert!(active.apply(&begin(1, ShapeConstraint::aoi(ShapeKind::Circle))));
        assert_eq!(active.tool(), Some(CaptureTool::Circle));
        assert!(active.using(CaptureTool::Circle).is_some());
        assert!(active.using(CaptureTool::Polygon).is_none());
    }

    #[test]
    fn test_end_of_current_capture_clears() {
        let mut active = ActiveCapture::default();
        active.apply(&begin(1, ShapeConstraint::aoi(ShapeKind::Circle)));

        assert!(active.apply(&SurfaceRequest::EndCapture {
            capture: CaptureId(1)
        }));
        assert!(active.current.is_none());
        assert!(active.tool().is_none());
    }

    #[test]
    fn test_end_of_old_capture_is_ignored() {
        let mut active = ActiveCapture::default();
        active.apply(&begin(1, ShapeConstraint::aoi(ShapeKind::Circle)));
        active.apply(&begin(2, ShapeConstraint::aoi(ShapeKind::Polygon)));

        assert!(!active.apply(&SurfaceRequest::EndCapture {
            capture: CaptureId(1)
        }));
        assert_eq!(active.current.map(|c| c.capture), Some(CaptureId(2)));
    }

    #[test]
    fn test_view_requests_do_not_touch_capture() {
        let mut active = ActiveCapture::default();
        active.apply(&begin(1, ShapeConstraint::FEATURE));

        let extent = crate::document::Extent::from_size(10, 10);
        assert!(!active.apply(&SurfaceRequest::ResetView { extent }));
        assert_eq!(active.tool(), Some(CaptureTool::Freehand));
    }
}
