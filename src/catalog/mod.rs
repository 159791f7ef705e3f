//! Static symptom/treatment reference data, validated once at startup.
//!
//! The catalog is loaded configuration: body regions with their symptoms,
//! plus a fixed symptom-id → treatments mapping. All data-integrity checks
//! happen here at load time; lookups during a screening session are
//! infallible by construction.

mod data;

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{BodyRegion, Symptom, Treatment};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate region id: {0}")]
    DuplicateRegionId(String),

    #[error("Duplicate symptom id: {0}")]
    DuplicateSymptomId(String),

    #[error("Invalid percentage for symptom {symptom_id}: {value}")]
    InvalidPercentage { symptom_id: String, value: f64 },

    #[error("Treatment map references unknown symptom id: {0}")]
    UnknownSymptomId(String),

    #[error("Region {0} has no symptoms")]
    EmptyRegion(String),

    #[error("Catalog has no regions")]
    EmptyCatalog,

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Policy for treatments aggregated across several selected symptoms.
///
/// `KeepAll` is the shipped product behavior: a treatment mapped to two
/// selected symptoms appears twice in the result. `FirstOnly` collapses
/// repeats by treatment id, keeping the first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    #[default]
    KeepAll,
    FirstOnly,
}

/// Validated reference data. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: Vec<BodyRegion>,
    treatments: HashMap<String, Vec<Treatment>>,
}

impl Catalog {
    /// Build and validate the bundled reference catalog.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_parts(data::bundled_regions(), data::bundled_treatments())
    }

    /// Build a catalog from caller-supplied data, enforcing the load-time
    /// invariants: at least one region, no empty regions, globally unique
    /// region and symptom ids, finite non-negative percentages, and every
    /// treatment-map key resolving to a cataloged symptom.
    pub fn from_parts(
        regions: Vec<BodyRegion>,
        treatments: Vec<(String, Vec<Treatment>)>,
    ) -> Result<Self, CatalogError> {
        if regions.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut region_ids = HashSet::new();
        let mut symptom_ids = HashSet::new();

        for region in &regions {
            if !region_ids.insert(region.id.clone()) {
                return Err(CatalogError::DuplicateRegionId(region.id.clone()));
            }
            if region.symptoms.is_empty() {
                return Err(CatalogError::EmptyRegion(region.id.clone()));
            }
            for symptom in &region.symptoms {
                if !symptom_ids.insert(symptom.id.clone()) {
                    return Err(CatalogError::DuplicateSymptomId(symptom.id.clone()));
                }
                if !symptom.percentage.is_finite() || symptom.percentage < 0.0 {
                    return Err(CatalogError::InvalidPercentage {
                        symptom_id: symptom.id.clone(),
                        value: symptom.percentage,
                    });
                }
            }
        }

        let mut map: HashMap<String, Vec<Treatment>> = HashMap::new();
        for (symptom_id, entries) in treatments {
            if !symptom_ids.contains(&symptom_id) {
                return Err(CatalogError::UnknownSymptomId(symptom_id));
            }
            map.entry(symptom_id).or_default().extend(entries);
        }

        tracing::debug!(
            regions = regions.len(),
            symptoms = symptom_ids.len(),
            mapped_symptoms = map.len(),
            "catalog validated"
        );

        Ok(Self {
            regions,
            treatments: map,
        })
    }

    /// All body regions, in display order.
    pub fn regions(&self) -> &[BodyRegion] {
        &self.regions
    }

    pub fn region(&self, id: &str) -> Option<&BodyRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Look up a symptom anywhere in the catalog. Ids are globally unique,
    /// so the first match is the only match.
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.regions
            .iter()
            .flat_map(|r| r.symptoms.iter())
            .find(|s| s.id == id)
    }

    /// Treatments mapped to a single symptom. Unmapped symptoms yield an
    /// empty slice, which downstream renders as "no suggestions" rather
    /// than an error.
    pub fn treatments_for(&self, symptom_id: &str) -> &[Treatment] {
        self.treatments
            .get(symptom_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Treatments for a set of symptoms, concatenated in input order.
    pub fn treatments_for_all(
        &self,
        symptom_ids: &[String],
        policy: DuplicatePolicy,
    ) -> Vec<Treatment> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for id in symptom_ids {
            for treatment in self.treatments_for(id) {
                if policy == DuplicatePolicy::FirstOnly && !seen.insert(treatment.id.clone()) {
                    continue;
                }
                out.push(treatment.clone());
            }
        }
        out
    }
}
