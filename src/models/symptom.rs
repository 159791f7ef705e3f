use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// A cataloged symptom under a body region.
///
/// `percentage` is the raw association figure from the reference data and is
/// deliberately heterogeneous: most entries are plain 0-100 percentages, some
/// are relative-risk increases above 100, and one is an absolute annual death
/// count. The risk engine normalizes before treating it as a probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub description: String,
    pub percentage: f64,
}

/// A symptom the user has toggled on, snapshotted at selection time.
///
/// Uniqueness is keyed by `(region_id, symptom_id)`: the same symptom id
/// under two different regions is two distinct selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedSymptom {
    pub region_id: String,
    pub symptom_id: String,
    pub symptom: Symptom,
}
