use serde::{Deserialize, Serialize};

use super::enums::{Severity, TreatmentType};

/// A treatment suggestion statically associated with one or more symptoms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TreatmentType,
    pub description: String,
    pub severity: Severity,
    pub instructions: String,
    pub precautions: Option<String>,
}
