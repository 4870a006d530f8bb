//! Coverage ratio of feature regions over the area of interest.

use super::collection::RegionCollection;

/// Number of decimals shown for a coverage ratio.
pub const COVERAGE_DECIMALS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoverageError {
    #[error("no area of interest drawn yet")]
    NoAoiDefined,
    #[error("area of interest has zero area")]
    DegenerateAoi,
}

/// Areas and ratio produced by a coverage calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageReport {
    pub aoi_area: f64,
    pub feature_area: f64,
    /// `feature_area / aoi_area`. Not clamped: overlapping features can push
    /// it above 1.
    pub ratio: f64,
}

impl CoverageReport {
    pub fn formatted_ratio(&self) -> String {
        format!("{:.*}", COVERAGE_DECIMALS, self.ratio)
    }
}

/// Compute the coverage of `features` over `aoi`.
pub fn compute(
    aoi: &RegionCollection,
    features: &RegionCollection,
) -> Result<CoverageReport, CoverageError> {
    if aoi.is_empty() {
        return Err(CoverageError::NoAoiDefined);
    }

    let aoi_area = aoi.total_area();
    if aoi_area == 0.0 {
        return Err(CoverageError::DegenerateAoi);
    }

    let feature_area = features.total_area();
    Ok(CoverageReport {
        aoi_area,
        feature_area,
        ratio: feature_area / aoi_area,
    })
}
