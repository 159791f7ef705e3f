use serde::{Deserialize, Serialize};

use super::symptom::Symptom;

/// A clickable body region and the symptoms cataloged under it.
/// Region ids are globally unique; the catalog enforces this at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyRegion {
    pub id: String,
    pub name: String,
    pub symptoms: Vec<Symptom>,
}
