//! Compound risk aggregation over the selected symptom set.
//!
//! Turns the current selection into a bounded 0-99 score, a qualitative
//! tier with its advisory message, and the top contributing symptoms.
//! Pure and deterministic; every input including the empty set is valid,
//! so there is no error path.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::SelectedSymptom;

// ═══════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════

/// Cap on a single symptom's contribution probability, applied both before
/// and after severity weighting. One symptom alone never reads as certainty.
const MAX_SYMPTOM_PROBABILITY: f64 = 0.95;

/// Ceiling on the reported score; the result never reads as 100%.
const MAX_REPORTED_PERCENTAGE: f64 = 99.0;

/// Raw association values above this are absolute statistics (annual death
/// counts), not percentages, and take the logarithmic path.
const ABSOLUTE_STATISTIC_THRESHOLD: f64 = 1000.0;

/// Reported when the selection is empty.
const NO_SYMPTOMS_MESSAGE: &str = "No symptoms selected";

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Qualitative label for the overall score, thresholded highest-first
/// with inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    /// Classify a rounded overall percentage.
    pub fn for_percentage(percentage: u8) -> Self {
        if percentage >= 80 {
            Self::Critical
        } else if percentage >= 60 {
            Self::High
        } else if percentage >= 30 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Fixed advisory shown with the tier on the results screen.
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Critical => {
                "Critical risk: this combination of symptoms indicates a very high likelihood of serious complications. Seek immediate medical attention."
            }
            Self::High => {
                "High risk: multiple high-risk symptoms detected. Urgent medical evaluation is recommended within 1-2 weeks."
            }
            Self::Moderate => {
                "Moderate risk: several concerning symptoms present. A medical consultation is advised within 2-4 weeks."
            }
            Self::Low => {
                "Low risk: current symptoms show a lower risk profile. Continue monitoring and maintain healthy habits."
            }
        }
    }
}

/// One of the highest-contributing symptoms, carrying its raw percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopSymptom {
    pub name: String,
    pub percentage: f64,
}

/// Engine output, recomputed on every selection change and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Rounded compound score, 0-99.
    pub overall_risk_percentage: u8,
    pub tier: RiskTier,
    pub message: String,
    /// At most three, descending by raw percentage, ties in selection order.
    pub top_symptoms: Vec<TopSymptom>,
    pub total_symptoms: usize,
    /// Rounded mean of raw (not adjusted) percentages.
    pub average_risk: u32,
}

// ═══════════════════════════════════════════════════════════
// Numeric policy
// ═══════════════════════════════════════════════════════════

/// Map a raw association figure onto the common 0-100 adjusted scale.
///
/// Above 1000: absolute statistic, compressed via `min(100, log10(raw) * 20)`.
/// In (100, 1000]: relative-risk percentage, clamped to 100.
/// Otherwise: already a proper percentage, passed through.
pub fn adjusted_percentage(raw: f64) -> f64 {
    if raw > ABSOLUTE_STATISTIC_THRESHOLD {
        (raw.log10() * 20.0).min(100.0)
    } else if raw > 100.0 {
        raw.min(100.0)
    } else {
        raw
    }
}

/// Severity-amplified contribution probability for one symptom:
/// `min(0.95, min(0.95, adjusted / 100) * sqrt(weight))`.
///
/// The square root lets severe symptoms contribute meaningfully more than
/// mild ones without saturating the compound when several are selected.
pub fn weighted_probability(adjusted: f64, weight: u32) -> f64 {
    let probability = (adjusted / 100.0).min(MAX_SYMPTOM_PROBABILITY);
    (probability * f64::from(weight).sqrt()).min(MAX_SYMPTOM_PROBABILITY)
}

// ═══════════════════════════════════════════════════════════
// Engine
// ═══════════════════════════════════════════════════════════

/// Aggregate the current selection into a risk assessment.
///
/// Each symptom's adjusted percentage is treated as an independent
/// probability of contributing to risk; the compound score is
/// `1 - Π(1 - weighted_probability)`, so adding a symptom never decreases
/// the score and marginal contributions shrink as the score saturates.
pub fn compute_overall_risk(selected: &[SelectedSymptom]) -> RiskAssessment {
    if selected.is_empty() {
        // Explicit branch: same numbers the formula would give, but a
        // dedicated message.
        return RiskAssessment {
            overall_risk_percentage: 0,
            tier: RiskTier::Low,
            message: NO_SYMPTOMS_MESSAGE.to_string(),
            top_symptoms: Vec::new(),
            total_symptoms: 0,
            average_risk: 0,
        };
    }

    let mut no_risk_probability = 1.0_f64;
    for selection in selected {
        let symptom = &selection.symptom;
        let adjusted = adjusted_percentage(symptom.percentage);
        let weighted = weighted_probability(adjusted, symptom.severity.weight());
        no_risk_probability *= 1.0 - weighted;
    }
    let compound = 1.0 - no_risk_probability;

    let overall = (compound * 100.0).min(MAX_REPORTED_PERCENTAGE);
    let overall_risk_percentage = overall.round() as u8;
    let tier = RiskTier::for_percentage(overall_risk_percentage);

    let raw_sum: f64 = selected.iter().map(|s| s.symptom.percentage).sum();
    let average_risk = (raw_sum / selected.len() as f64).round() as u32;

    // Stable sort keeps selection order for equal raw percentages.
    let mut top_symptoms: Vec<TopSymptom> = selected
        .iter()
        .map(|s| TopSymptom {
            name: s.symptom.name.clone(),
            percentage: s.symptom.percentage,
        })
        .collect();
    top_symptoms.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
    });
    top_symptoms.truncate(3);

    RiskAssessment {
        overall_risk_percentage,
        tier,
        message: tier.advisory().to_string(),
        top_symptoms,
        total_symptoms: selected.len(),
        average_risk,
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
