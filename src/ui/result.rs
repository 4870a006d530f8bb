//! The coverage result shown next to the Calculate button.

use bevy::prelude::*;

use crate::document::DocumentState;
use crate::region::{CoverageError, CoverageReport};

/// Last calculation outcome, cleared whenever a region collection is cleared
#[derive(Resource, Default, Debug)]
pub struct CoverageDisplay {
    result: Option<Result<CoverageReport, CoverageError>>,
}

impl CoverageDisplay {
    pub fn set_result(&mut self, result: Result<CoverageReport, CoverageError>) {
        self.result = Some(result);
    }

    pub fn reset(&mut self) {
        self.result = None;
    }

    pub fn is_error(&self) -> bool {
        matches!(self.result, Some(Err(_)))
    }

    /// Text for the result label, if anything has been calculated
    pub fn label(&self) -> Option<String> {
        match &self.result {
            Some(Ok(report)) => Some(format!("Coverage: {}", report.formatted_ratio())),
            Some(Err(e)) => Some(e.to_string()),
            None => None,
        }
    }
}

/// Calculate coverage for the current document and publish the outcome
pub fn run_calculation(document: &DocumentState, display: &mut CoverageDisplay) {
    let result = document.calculate_coverage();
    match &result {
        Ok(report) => info!(
            "Coverage {} (features {:.1} px² / AOI {:.1} px²)",
            report.formatted_ratio(),
            report.feature_area,
            report.aoi_area
        ),
        Err(e) => warn!("Coverage calculation failed: {}", e),
    }
    display.set_result(result);
}

/// Clear the AOI collection along with the stale result
pub fn clear_aoi(document: &mut DocumentState, display: &mut CoverageDisplay) {
    document.clear_aoi();
    display.reset();
    info!("Cleared area of interest");
}

/// Clear the feature collection along with the stale result
pub fn clear_features(document: &mut DocumentState, display: &mut CoverageDisplay) {
    document.clear_features();
    display.reset();
    info!("Cleared features");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SurfaceRequest;
    use crate::region::Geometry;

    fn square(side: f32) -> Geometry {
        Geometry::polygon(vec![
            Vec2::ZERO,
            Vec2::new(side, 0.0),
            Vec2::new(side, side),
            Vec2::new(0.0, side),
        ])
    }

    /// Commit a shape through whichever capture the document last started
    fn draw(document: &mut DocumentState, geometry: Geometry) {
        let capture = document
            .take_requests()
            .into_iter()
            .rev()
            .find_map(|r| match r {
                SurfaceRequest::BeginCapture { capture, .. } => Some(capture),
                _ => None,
            })
            .expect("a capture was started");
        assert!(document.on_shape_completed(capture, geometry));
    }

    #[test]
    fn test_empty_display_has_no_label() {
        let display = CoverageDisplay::default();
        assert!(display.label().is_none());
        assert!(!display.is_error());
    }

    #[test]
    fn test_no_aoi_shows_error_text() {
        let document = DocumentState::default();
        let mut display = CoverageDisplay::default();
        run_calculation(&document, &mut display);
        assert!(display.is_error());
        assert_eq!(
            display.label().as_deref(),
            Some("no area of interest drawn yet")
        );
    }

    #[test]
    fn test_quarter_coverage_label() {
        let mut document = DocumentState::default();
        document.set_aoi_shape_type(crate::region::ShapeKind::Polygon);
        document.set_aoi_drawing_enabled(true);
        draw(&mut document, square(10.0));
        document.set_feature_drawing_enabled(true);
        draw(&mut document, square(5.0));

        let mut display = CoverageDisplay::default();
        run_calculation(&document, &mut display);
        assert_eq!(display.label().as_deref(), Some("Coverage: 0.25000"));
    }

    #[test]
    fn test_clearing_resets_the_result() {
        let mut document = DocumentState::default();
        let mut display = CoverageDisplay::default();
        run_calculation(&document, &mut display);
        assert!(display.label().is_some());

        clear_features(&mut document, &mut display);
        assert!(display.label().is_none());

        run_calculation(&document, &mut display);
        clear_aoi(&mut document, &mut display);
        assert!(display.label().is_none());
    }
}
