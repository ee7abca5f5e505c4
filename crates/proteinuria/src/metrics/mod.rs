//! Derived urine protein ratios.
//!
//! Inputs are in mg/L; ratios are reported in mg per g creatinine.

use serde::{Deserialize, Serialize};

use crate::input::LabInput;

/// Display text for APR when there is no protein to divide by.
pub const APR_NOT_APPLICABLE: &str = "N/A (no proteinuria)";

/// mg/L ÷ mg/L → mg/g.
const MG_PER_G: f64 = 1000.0;

/// Albumin-to-protein ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Apr {
    /// Albumin / protein (equal to ACR / PCR), unrounded.
    Ratio(f64),
    /// PCR is zero, so the ratio is undefined.
    NotApplicable,
}

impl Apr {
    /// The unrounded ratio, if defined.
    pub fn raw(&self) -> Option<f64> {
        match self {
            Apr::Ratio(r) => Some(*r),
            Apr::NotApplicable => None,
        }
    }

    /// The ratio rounded to two decimals, if defined.
    pub fn rounded(&self) -> Option<f64> {
        self.raw().map(round2)
    }

    /// Display text: two decimals, or the not-applicable marker.
    pub fn display(&self) -> String {
        match self {
            Apr::Ratio(r) => format!("{:.2}", round2(*r)),
            Apr::NotApplicable => APR_NOT_APPLICABLE.to_string(),
        }
    }
}

/// Which APR value the category thresholds compare against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AprPrecision {
    /// The two-decimal display value. Thresholds 0.4 and 0.5 are set
    /// against this figure.
    #[default]
    Rounded,
    /// The full-precision ratio.
    Raw,
}

impl AprPrecision {
    /// Select the APR value to classify.
    pub fn select(&self, apr: &Apr) -> Option<f64> {
        match self {
            AprPrecision::Rounded => apr.rounded(),
            AprPrecision::Raw => apr.raw(),
        }
    }
}

/// The four derived biomarkers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Albumin-creatinine ratio (mg/g).
    pub acr: f64,
    /// Protein-creatinine ratio (mg/g).
    pub pcr: f64,
    /// Albumin-to-protein ratio.
    pub apr: Apr,
    /// Non-albumin proteinuria, PCR − ACR (mg/g).
    pub nap: f64,
}

impl Metrics {
    /// Compute all ratios from a validated input.
    ///
    /// Callers must validate first: creatinine must be positive and finite.
    /// APR is taken from the raw concentrations so that it stays defined when
    /// a tiny protein value underflows PCR to zero.
    pub fn compute(input: &LabInput) -> Self {
        let acr = input.albumin / input.creatinine * MG_PER_G;
        let pcr = input.protein / input.creatinine * MG_PER_G;
        let apr = if input.protein > 0.0 {
            Apr::Ratio(input.albumin / input.protein)
        } else {
            Apr::NotApplicable
        };
        let nap = pcr - acr;

        Self { acr, pcr, apr, nap }
    }

    /// ACR with two decimals and units.
    pub fn acr_display(&self) -> String {
        format_mg_per_g(self.acr)
    }

    /// PCR with two decimals and units.
    pub fn pcr_display(&self) -> String {
        format_mg_per_g(self.pcr)
    }

    /// NAP with two decimals and units.
    pub fn nap_display(&self) -> String {
        format_mg_per_g(self.nap)
    }
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_mg_per_g(value: f64) -> String {
    format!("{:.2} mg/g", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_ratios() {
        let metrics = Metrics::compute(&LabInput::new(30.0, 4000.0, 1000.0));
        assert!((metrics.acr - 30.0).abs() < 1e-9);
        assert!((metrics.pcr - 4000.0).abs() < 1e-9);
        assert!((metrics.nap - 3970.0).abs() < 1e-9);
        assert_eq!(metrics.apr.rounded(), Some(0.01));
    }

    #[test]
    fn test_unit_scaling() {
        let metrics = Metrics::compute(&LabInput::new(3.0, 15.0, 100.0));
        assert!((metrics.acr - 30.0).abs() < 1e-9);
        assert!((metrics.pcr - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_protein_apr_not_applicable() {
        let metrics = Metrics::compute(&LabInput::new(0.0, 0.0, 1000.0));
        assert_eq!(metrics.apr, Apr::NotApplicable);
        assert_eq!(metrics.apr.display(), APR_NOT_APPLICABLE);
        assert_eq!(metrics.nap, 0.0);
    }

    #[test]
    fn test_apr_defined_when_pcr_underflows() {
        let metrics = Metrics::compute(&LabInput::new(0.0, 1e-320, 1e10));
        assert_eq!(metrics.pcr, 0.0);
        assert_eq!(metrics.apr, Apr::Ratio(0.0));
    }

    #[test]
    fn test_apr_display_two_decimals() {
        let metrics = Metrics::compute(&LabInput::new(300.0, 300.0, 1000.0));
        assert_eq!(metrics.apr.display(), "1.00");
        assert_eq!(metrics.acr_display(), "300.00 mg/g");
    }

    #[test]
    fn test_precision_selection() {
        let apr = Apr::Ratio(0.396);
        assert_eq!(AprPrecision::Rounded.select(&apr), Some(0.4));
        assert_eq!(AprPrecision::Raw.select(&apr), Some(0.396));
        assert_eq!(AprPrecision::Rounded.select(&Apr::NotApplicable), None);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.504), 0.5);
        assert_eq!(round2(0.506), 0.51);
        assert_eq!(round2(1.0), 1.0);
    }
}
