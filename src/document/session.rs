//! Capture sessions feeding a single region collection.

use bevy::prelude::*;

use super::surface::{CaptureId, RegionTarget, ShapeConstraint, SurfaceOutbox, SurfaceRequest};
use crate::region::{Geometry, RegionCollection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Inactive,
    Active {
        capture: CaptureId,
        constraint: ShapeConstraint,
    },
}

/// Attaches the drawing surface to one region collection.
#[derive(Debug)]
pub struct DrawSession {
    target: RegionTarget,
    state: SessionState,
}

impl DrawSession {
    pub fn new(target: RegionTarget) -> Self {
        Self {
            target,
            state: SessionState::Inactive,
        }
    }

    pub fn target(&self) -> RegionTarget {
        self.target
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    pub fn capture(&self) -> Option<CaptureId> {
        match self.state {
            SessionState::Active { capture, .. } => Some(capture),
            SessionState::Inactive => None,
        }
    }

    pub fn constraint(&self) -> Option<ShapeConstraint> {
        match self.state {
            SessionState::Active { constraint, .. } => Some(constraint),
            SessionState::Inactive => None,
        }
    }

    /// Start capturing under `capture`, replacing any running capture.
    pub fn activate(
        &mut self,
        capture: CaptureId,
        constraint: ShapeConstraint,
        outbox: &mut SurfaceOutbox,
    ) {
        self.deactivate(outbox);
        debug!(
            "{} capture {:?} started ({:?})",
            self.target.display_name(),
            capture,
            constraint
        );
        self.state = SessionState::Active {
            capture,
            constraint,
        };
        outbox.push(SurfaceRequest::BeginCapture {
            capture,
            target: self.target,
            constraint,
        });
    }

    /// Stop capturing. Returns false if the session was already inactive.
    pub fn deactivate(&mut self, outbox: &mut SurfaceOutbox) -> bool {
        let SessionState::Active { capture, .. } = self.state else {
            return false;
        };
        debug!("{} capture {:?} ended", self.target.display_name(), capture);
        self.state = SessionState::Inactive;
        outbox.push(SurfaceRequest::EndCapture { capture });
        true
    }

    /// Commit a completed shape into `collection` if it belongs to the
    /// running capture. Stale or mismatched shapes are dropped.
    pub fn accept(
        &self,
        capture: CaptureId,
        geometry: Geometry,
        collection: &mut RegionCollection,
    ) -> bool {
        match self.state {
            SessionState::Active {
                capture: current,
                constraint,
            } if current == capture && constraint.kind == geometry.kind() => {
                collection.add(geometry);
                true
            }
            _ => {
                debug!(
                    "Discarding {:?} from capture {:?} ({} session is {:?})",
                    geometry.kind(),
                    capture,
                    self.target.display_name(),
                    self.state
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::ShapeKind;

    fn circle() -> Geometry {
        Geometry::circle(Vec2::new(10.0, 10.0), 4.0)
    }

    #[test]
    fn test_new_session_is_inactive() {
        let session = DrawSession::new(RegionTarget::Aoi);
        assert!(!session.is_active());
        assert_eq!(session.capture(), None);
        assert_eq!(session.state(), SessionState::Inactive);
    }

    #[test]
    fn test_activate_requests_capture() {
        let mut outbox = SurfaceOutbox::default();
        let mut session = DrawSession::new(RegionTarget::Aoi);
        let constraint = ShapeConstraint::aoi(ShapeKind::Circle);

        session.activate(CaptureId(1), constraint, &mut outbox);

        assert!(session.is_active());
        assert_eq!(session.constraint(), Some(constraint));
        assert_eq!(
            outbox.drain(),
            vec![SurfaceRequest::BeginCapture {
                capture: CaptureId(1),
                target: RegionTarget::Aoi,
                constraint,
            }]
        );
    }

    #[test]
    fn test_reactivate_replaces_capture() {
        let mut outbox = SurfaceOutbox::default();
        let mut session = DrawSession::new(RegionTarget::Aoi);
        session.activate(CaptureId(1), ShapeConstraint::aoi(ShapeKind::Circle), &mut outbox);
        outbox.drain();

        let polygon = ShapeConstraint::aoi(ShapeKind::Polygon);
        session.activate(CaptureId(2), polygon, &mut outbox);

        assert_eq!(session.capture(), Some(CaptureId(2)));
        assert_eq!(
            outbox.drain(),
            vec![
                SurfaceRequest::EndCapture {
                    capture: CaptureId(1)
                },
                SurfaceRequest::BeginCapture {
                    capture: CaptureId(2),
                    target: RegionTarget::Aoi,
                    constraint: polygon,
                },
            ]
        );
    }

    #[test]
    fn test_deactivate_inactive_is_noop() {
        let mut outbox = SurfaceOutbox::default();
        let mut session = DrawSession::new(RegionTarget::Feature);
        assert!(!session.deactivate(&mut outbox));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_accept_commits_matching_shape() {
        let mut outbox = SurfaceOutbox::default();
        let mut collection = RegionCollection::default();
        let mut session = DrawSession::new(RegionTarget::Aoi);
        session.activate(CaptureId(3), ShapeConstraint::aoi(ShapeKind::Circle), &mut outbox);

        assert!(session.accept(CaptureId(3), circle(), &mut collection));
        assert!(session.accept(CaptureId(3), circle(), &mut collection));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_accept_drops_stale_capture() {
        let mut outbox = SurfaceOutbox::default();
        let mut collection = RegionCollection::default();
        let mut session = DrawSession::new(RegionTarget::Aoi);
        session.activate(CaptureId(1), ShapeConstraint::aoi(ShapeKind::Circle), &mut outbox);
        session.activate(CaptureId(2), ShapeConstraint::aoi(ShapeKind::Circle), &mut outbox);

        assert!(!session.accept(CaptureId(1), circle(), &mut collection));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_accept_drops_after_deactivate() {
        let mut outbox = SurfaceOutbox::default();
        let mut collection = RegionCollection::default();
        let mut session = DrawSession::new(RegionTarget::Aoi);
        session.activate(CaptureId(1), ShapeConstraint::aoi(ShapeKind::Circle), &mut outbox);
        session.deactivate(&mut outbox);

        assert!(!session.accept(CaptureId(1), circle(), &mut collection));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_accept_drops_wrong_kind() {
        let mut outbox = SurfaceOutbox::default();
        let mut collection = RegionCollection::default();
        let mut session = DrawSession::new(RegionTarget::Feature);
        session.activate(CaptureId(1), ShapeConstraint::FEATURE, &mut outbox);

        assert!(!session.accept(CaptureId(1), circle(), &mut collection));
        assert!(collection.is_empty());
    }
}
