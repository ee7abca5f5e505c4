//! Threshold classification of each biomarker.
//!
//! Every metric is classified independently. Bucket boundaries follow the
//! KDIGO albuminuria and proteinuria stages; a value equal to an upper
//! bound belongs to the lower bucket (ACR 300 is moderately increased).

use serde::{Deserialize, Serialize};

use crate::metrics::{AprPrecision, Metrics};

/// Albuminuria stage from ACR (mg/g).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcrCategory {
    /// ACR < 30.
    Normal,
    /// 30 ≤ ACR ≤ 300.
    ModeratelyIncreased,
    /// ACR > 300.
    SeverelyIncreased,
}

impl AcrCategory {
    /// Classify an ACR value (mg/g).
    pub fn from_acr(acr: f64) -> Self {
        if acr < 30.0 {
            AcrCategory::Normal
        } else if acr <= 300.0 {
            AcrCategory::ModeratelyIncreased
        } else {
            AcrCategory::SeverelyIncreased
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AcrCategory::Normal => "Normal albuminuria",
            AcrCategory::ModeratelyIncreased => {
                "Moderately increased albuminuria (microalbuminuria)"
            }
            AcrCategory::SeverelyIncreased => "Severely increased albuminuria (macroalbuminuria)",
        }
    }
}

/// Proteinuria stage from PCR (mg/g).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PcrCategory {
    /// PCR < 150.
    Normal,
    /// 150 ≤ PCR ≤ 500.
    Mild,
    /// 500 < PCR ≤ 3500.
    Moderate,
    /// PCR > 3500.
    Nephrotic,
}

impl PcrCategory {
    /// Classify a PCR value (mg/g).
    pub fn from_pcr(pcr: f64) -> Self {
        if pcr < 150.0 {
            PcrCategory::Normal
        } else if pcr <= 500.0 {
            PcrCategory::Mild
        } else if pcr <= 3500.0 {
            PcrCategory::Moderate
        } else {
            PcrCategory::Nephrotic
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PcrCategory::Normal => "Normal proteinuria",
            PcrCategory::Mild => "Mild proteinuria",
            PcrCategory::Moderate => "Moderate proteinuria",
            PcrCategory::Nephrotic => "Nephrotic range proteinuria",
        }
    }
}

/// Selectivity of proteinuria from APR.
///
/// Declared low to high so the derived ordering follows the ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AprCategory {
    /// APR < 0.4: non-glomerular (tubular or overflow).
    Low,
    /// 0.4 ≤ APR ≤ 0.5: mixed or early glomerular.
    Borderline,
    /// APR > 0.5: glomerular, selective albumin loss.
    High,
}

impl AprCategory {
    /// Classify an APR value.
    pub fn from_apr(apr: f64) -> Self {
        if apr > 0.5 {
            AprCategory::High
        } else if apr >= 0.4 {
            AprCategory::Borderline
        } else {
            AprCategory::Low
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AprCategory::High => "High (suggests predominantly glomerular, selective albumin loss)",
            AprCategory::Borderline => "Borderline (possible mixed or early glomerular)",
            AprCategory::Low => "Low (suggests non-glomerular, e.g., tubular/overflow)",
        }
    }
}

/// Non-albumin proteinuria level from NAP (mg/g).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NapCategory {
    /// NAP < 150.
    Low,
    /// 150 ≤ NAP ≤ 300.
    MildlyElevated,
    /// NAP > 300.
    SignificantlyElevated,
}

impl NapCategory {
    /// Classify a NAP value (mg/g).
    pub fn from_nap(nap: f64) -> Self {
        if nap < 150.0 {
            NapCategory::Low
        } else if nap <= 300.0 {
            NapCategory::MildlyElevated
        } else {
            NapCategory::SignificantlyElevated
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            NapCategory::Low => "Low (minimal non-albumin component)",
            NapCategory::MildlyElevated => "Mildly elevated",
            NapCategory::SignificantlyElevated => {
                "Significantly elevated (high risk for tubular damage and mortality)"
            }
        }
    }
}

/// Categories for all four metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    pub acr: AcrCategory,
    pub pcr: PcrCategory,
    /// Absent when APR is not applicable (no proteinuria).
    pub apr: Option<AprCategory>,
    pub nap: NapCategory,
}

impl Categories {
    /// Classify every metric.
    pub fn classify(metrics: &Metrics, precision: AprPrecision) -> Self {
        Self {
            acr: AcrCategory::from_acr(metrics.acr),
            pcr: PcrCategory::from_pcr(metrics.pcr),
            apr: precision.select(&metrics.apr).map(AprCategory::from_apr),
            nap: NapCategory::from_nap(metrics.nap),
        }
    }

    /// APR label, empty when not applicable.
    pub fn apr_label(&self) -> &'static str {
        self.apr.map(|c| c.label()).unwrap_or("")
    }
}

/// One row of the threshold reference table.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdRow {
    /// Metric abbreviation.
    pub metric: &'static str,
    /// Range in the metric's units.
    pub range: &'static str,
    /// Category label.
    pub category: &'static str,
}

/// Reference table of every category bucket, low to high per metric.
pub fn thresholds() -> Vec<ThresholdRow> {
    let row = |metric: &'static str, range: &'static str, category: &'static str| ThresholdRow {
        metric,
        range,
        category,
    };

    vec![
        row("ACR", "< 30 mg/g", AcrCategory::Normal.label()),
        row("ACR", "30-300 mg/g", AcrCategory::ModeratelyIncreased.label()),
        row("ACR", "> 300 mg/g", AcrCategory::SeverelyIncreased.label()),
        row("PCR", "< 150 mg/g", PcrCategory::Normal.label()),
        row("PCR", "150-500 mg/g", PcrCategory::Mild.label()),
        row("PCR", "500-3500 mg/g", PcrCategory::Moderate.label()),
        row("PCR", "> 3500 mg/g", PcrCategory::Nephrotic.label()),
        row("APR", "< 0.4", AprCategory::Low.label()),
        row("APR", "0.4-0.5", AprCategory::Borderline.label()),
        row("APR", "> 0.5", AprCategory::High.label()),
        row("NAP", "< 150 mg/g", NapCategory::Low.label()),
        row("NAP", "150-300 mg/g", NapCategory::MildlyElevated.label()),
        row("NAP", "> 300 mg/g", NapCategory::SignificantlyElevated.label()),
    ]
}
