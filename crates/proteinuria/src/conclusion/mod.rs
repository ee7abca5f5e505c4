//! Clinical conclusion text.
//!
//! Each metric contributes a fixed clause chosen by its category. Clauses are
//! joined in the order ACR, PCR, APR, NAP, followed by the recommendations.
//! When both ACR and PCR are normal the whole list collapses to a single
//! routine-screening message.

use crate::classify::{AcrCategory, AprCategory, Categories, NapCategory, PcrCategory};
use crate::metrics::Metrics;

/// Replaces all other conclusions when ACR and PCR are both normal.
pub const ROUTINE_SCREENING_MESSAGE: &str = "No increased risk for CKD progression or CV events from proteinuria. Recommendations: No immediate action; routine screening as per guidelines (e.g., annual in high-risk patients like diabetics).";

const BASE_RECOMMENDATION: &str = "Recommendations: Confirm with repeat testing (e.g., early morning spot urine) to rule out transients like exercise or infection. If ACR >300 mg/g on repeat, consider referral to nephrology for potential biopsy or further evaluation (e.g., serum creatinine, eGFR, urine microscopy). Rule out overflow proteinuria (e.g., via urine protein electrophoresis) if APR <0.4 in future tests. Monitor for systemic risks and adjust based on KDIGO guidelines.";

const ALBUMINURIA_THERAPY: &str =
    " Initiate therapies per KDIGO (e.g., RAS inhibitors, SGLT2i for ACR >=30).";

const PERSISTENT_PROTEINURIA: &str = " If confirmed non-glomerular, focus on reversible causes (e.g., drugs, infection). PCR may be better for monitoring here than ACR. Refer to nephrology if PCR >500 mg/g persists.";

const OVERFLOW_WORKUP: &str = " Immediate urine immunofixation/electrophoresis to confirm overflow.";

const OVERFLOW_CLAUSE: &str = "The very low APR (<0.4) strongly suggests overflow proteinuria (e.g., paraproteins in multiple myeloma) or severe tubular damage, pushing far from glomerular etiology.";

/// PCR above which proteinuria is nephrotic range (mg/g).
const NEPHROTIC_PCR: f64 = 3500.0;

/// Clause for the albuminuria stage.
pub fn acr_clause(category: AcrCategory) -> &'static str {
    match category {
        AcrCategory::Normal => "The ACR is normal, indicating no significant albuminuria.",
        AcrCategory::ModeratelyIncreased => {
            "The ACR indicates moderately increased albuminuria (microalbuminuria), an early marker of kidney damage associated with increased risk of CKD progression and cardiovascular events; consider screening for underlying causes and initiating renoprotective therapies (e.g., ACE inhibitors/ARBs or SGLT2 inhibitors if applicable)."
        }
        AcrCategory::SeverelyIncreased => {
            "The ACR indicates severely increased albuminuria (macroalbuminuria), associated with rapid CKD progression, higher all-cause mortality, and warrants urgent evaluation."
        }
    }
}

/// Clause for the proteinuria stage.
pub fn pcr_clause(category: PcrCategory) -> &'static str {
    match category {
        PcrCategory::Normal => "The PCR is normal, indicating no significant overall proteinuria.",
        PcrCategory::Mild => {
            "The PCR indicates mild proteinuria, which may warrant monitoring for progression to nephrotic range (>3500 mg/g)."
        }
        PcrCategory::Moderate => {
            "The PCR indicates moderate proteinuria, correlating well with 24-hour excretion (~0.5-3.5 g/day); monitor for symptoms like edema if progressing."
        }
        PcrCategory::Nephrotic => {
            "The PCR indicates nephrotic-range proteinuria (>3500 mg/g), associated with hypoalbuminemia, edema, and thrombosis risk; urgent assessment needed."
        }
    }
}

/// Clauses for proteinuria selectivity.
///
/// A low APR with nephrotic-range PCR adds a second clause pointing to
/// overflow proteinuria.
pub fn apr_clauses(category: AprCategory, pcr: f64) -> Vec<&'static str> {
    match category {
        AprCategory::High => vec![
            "The high APR (>0.5) points toward selective glomerular proteinuria, making glomerular diseases (e.g., glomerulonephritis, diabetic nephropathy) more likely than tubular or overflow causes. This accentuates the ACR relative to PCR, supporting a glomerular etiology.",
        ],
        AprCategory::Borderline => vec![
            "The borderline APR (0.4-0.5) suggests possible mixed etiology, with glomerular dominance but some non-selective loss—less accentuated ACR relative to PCR, pushing slightly away from pure glomerular toward mixed glomerular-tubular (e.g., diabetic kidney disease with interstitial components).",
        ],
        AprCategory::Low => {
            let mut clauses = vec![
                "The low APR (<0.4) points away from glomerular diseases toward non-glomerular causes like tubular dysfunction, acute interstitial nephritis, or overflow (e.g., light chains in myeloma). ACR is proportional to expected albumin, not exaggerated.",
            ];
            if pcr > NEPHROTIC_PCR {
                clauses.push(OVERFLOW_CLAUSE);
            }
            clauses
        }
    }
}

/// Clause for the non-albumin protein level.
pub fn nap_clause(category: NapCategory) -> &'static str {
    match category {
        NapCategory::Low => "The NAP is low, with no evidence of tubulointerstitial injury.",
        NapCategory::MildlyElevated => {
            "The NAP is mildly elevated but below high-risk thresholds (>250-300 mg/g), suggesting limited tubulointerstitial involvement; however, if persistent, it may indicate additional tubular damage and higher mortality risk."
        }
        NapCategory::SignificantlyElevated => {
            "The significantly elevated NAP (>300 mg/g) is a key marker of tubulointerstitial injury, predicting higher mortality (e.g., adjusted HR ~1.4 per doubling) and CKD progression independent of ACR; this may reflect acute interstitial nephritis or chronic damage."
        }
    }
}

/// Recommendation text: the base advice plus one sentence per triggered rule.
pub fn recommendations(metrics: &Metrics) -> String {
    let mut text = String::from(BASE_RECOMMENDATION);
    if metrics.acr >= 30.0 {
        text.push_str(ALBUMINURIA_THERAPY);
    }
    if metrics.pcr > 500.0 {
        text.push_str(PERSISTENT_PROTEINURIA);
    }
    if metrics.pcr > NEPHROTIC_PCR {
        text.push_str(OVERFLOW_WORKUP);
    }
    text
}

/// Both ACR and PCR are in their normal ranges.
pub fn is_routine_screening(categories: &Categories) -> bool {
    categories.acr == AcrCategory::Normal && categories.pcr == PcrCategory::Normal
}

/// Assemble the ordered conclusion list, recommendations last.
pub fn build_conclusions(metrics: &Metrics, categories: &Categories) -> Vec<String> {
    if is_routine_screening(categories) {
        return vec![ROUTINE_SCREENING_MESSAGE.to_string()];
    }

    let mut conclusions: Vec<String> = Vec::with_capacity(6);
    conclusions.push(acr_clause(categories.acr).to_string());
    conclusions.push(pcr_clause(categories.pcr).to_string());
    if let Some(apr) = categories.apr {
        conclusions.extend(apr_clauses(apr, metrics.pcr).into_iter().map(String::from));
    }
    conclusions.push(nap_clause(categories.nap).to_string());
    conclusions.push(recommendations(metrics));
    conclusions
}
