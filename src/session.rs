//! Wizard session state for the screening flow.
//!
//! Three screens: demographics → symptoms checklist → results, plus a full
//! reset back to the start. The body-diagram side panel and the flat
//! checklist are two front-ends over this one selection state; risk and
//! treatment results are recomputed on demand, never cached.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{Catalog, DuplicatePolicy};
use crate::models::{SelectedSymptom, Symptom, Treatment, UserDemographics};
use crate::risk::{self, RiskAssessment};

/// Ages accepted by the demographics screen (exclusive 0 and 120).
const MIN_AGE: u8 = 1;
const MAX_AGE: u8 = 119;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Age out of range: {0} (expected 1-119)")]
    InvalidAge(u8),
}

/// Current wizard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Demographics,
    SymptomsChecklist,
    Results,
}

/// One user's in-progress screening. Ephemeral by contract: owned by the
/// front-end for the duration of the wizard, dropped on completion.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningSession {
    id: Uuid,
    step: WizardStep,
    demographics: Option<UserDemographics>,
    selected_region: Option<String>,
    panel_open: bool,
    selections: Vec<SelectedSymptom>,
}

impl ScreeningSession {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            step: WizardStep::Demographics,
            demographics: None,
            selected_region: None,
            panel_open: false,
            selections: Vec::new(),
        };
        tracing::debug!(session = %session.id, "screening session started");
        session
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn demographics(&self) -> Option<&UserDemographics> {
        self.demographics.as_ref()
    }

    /// Region whose side panel is open, if any.
    pub fn selected_region(&self) -> Option<&str> {
        self.selected_region.as_deref()
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Selections in toggle-on order.
    pub fn selections(&self) -> &[SelectedSymptom] {
        &self.selections
    }

    pub fn is_selected(&self, region_id: &str, symptom_id: &str) -> bool {
        self.selections
            .iter()
            .any(|s| s.region_id == region_id && s.symptom_id == symptom_id)
    }

    // ── Transitions ─────────────────────────────────────────

    /// Store demographics and advance to the symptoms checklist.
    pub fn set_demographics(&mut self, demographics: UserDemographics) -> Result<(), SessionError> {
        if demographics.age < MIN_AGE || demographics.age > MAX_AGE {
            return Err(SessionError::InvalidAge(demographics.age));
        }
        self.demographics = Some(demographics);
        self.step = WizardStep::SymptomsChecklist;
        tracing::debug!(session = %self.id, "demographics captured, advancing to checklist");
        Ok(())
    }

    /// Open the side panel for a clicked body region.
    pub fn select_region(&mut self, region_id: &str) {
        self.selected_region = Some(region_id.to_string());
        self.panel_open = true;
    }

    /// Close the side panel and clear the active region.
    pub fn close_panel(&mut self) {
        self.panel_open = false;
        self.selected_region = None;
    }

    /// Toggle a symptom selection, keyed by `(region_id, symptom_id)`.
    ///
    /// Toggling an existing key removes it; the same symptom id under a
    /// different region is an independent selection. The symptom is
    /// snapshotted so later catalog changes cannot alter a live session.
    pub fn toggle_symptom(&mut self, region_id: &str, symptom: &Symptom) {
        let existing = self
            .selections
            .iter()
            .position(|s| s.region_id == region_id && s.symptom_id == symptom.id);

        match existing {
            Some(index) => {
                self.selections.remove(index);
            }
            None => self.selections.push(SelectedSymptom {
                region_id: region_id.to_string(),
                symptom_id: symptom.id.clone(),
                symptom: symptom.clone(),
            }),
        }
        tracing::debug!(
            session = %self.id,
            symptom = %symptom.id,
            selected = self.selections.len(),
            "symptom toggled"
        );
    }

    /// Advance to the results screen.
    pub fn go_to_results(&mut self) {
        self.step = WizardStep::Results;
        self.panel_open = false;
        tracing::debug!(session = %self.id, "advancing to results");
    }

    /// Full reset back to the demographics screen, under a fresh id.
    pub fn start_over(&mut self) {
        tracing::debug!(session = %self.id, "session reset");
        *self = Self::new();
    }

    // ── Derived views ───────────────────────────────────────

    /// Risk assessment for the current selection, recomputed per call.
    pub fn assessment(&self) -> RiskAssessment {
        risk::compute_overall_risk(&self.selections)
    }

    /// Symptom ids in selection order, for the treatment lookup.
    pub fn selected_symptom_ids(&self) -> Vec<String> {
        self.selections
            .iter()
            .map(|s| s.symptom_id.clone())
            .collect()
    }

    /// Treatment suggestions for the current selection.
    pub fn treatments(&self, catalog: &Catalog, policy: DuplicatePolicy) -> Vec<Treatment> {
        catalog.treatments_for_all(&self.selected_symptom_ids(), policy)
    }
}

impl Default for ScreeningSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;
    use crate::risk::RiskTier;

    fn demographics(age: u8) -> UserDemographics {
        UserDemographics {
            age,
            sex: Sex::Other,
            name: None,
            email: None,
            phone: None,
        }
    }

    fn catalog_symptom(catalog: &Catalog, id: &str) -> Symptom {
        catalog.symptom(id).unwrap().clone()
    }

    #[test]
    fn new_session_starts_at_demographics() {
        let session = ScreeningSession::new();
        assert_eq!(session.step(), WizardStep::Demographics);
        assert!(session.demographics().is_none());
        assert!(session.selections().is_empty());
        assert!(!session.panel_open());
    }

    #[test]
    fn demographics_gate_validates_age() {
        let mut session = ScreeningSession::new();
        assert!(matches!(
            session.set_demographics(demographics(0)),
            Err(SessionError::InvalidAge(0))
        ));
        assert!(matches!(
            session.set_demographics(demographics(120)),
            Err(SessionError::InvalidAge(120))
        ));
        // A rejected submission does not advance the wizard
        assert_eq!(session.step(), WizardStep::Demographics);

        session.set_demographics(demographics(119)).unwrap();
        assert_eq!(session.step(), WizardStep::SymptomsChecklist);
    }

    #[test]
    fn toggle_is_an_idempotent_pair() {
        let catalog = Catalog::bundled().unwrap();
        let gerd = catalog_symptom(&catalog, "gerd");
        let mut session = ScreeningSession::new();

        session.toggle_symptom("body-model-upper_abdomen", &gerd);
        assert!(session.is_selected("body-model-upper_abdomen", "gerd"));
        assert_eq!(session.selections().len(), 1);

        session.toggle_symptom("body-model-upper_abdomen", &gerd);
        assert!(!session.is_selected("body-model-upper_abdomen", "gerd"));
        assert!(session.selections().is_empty());
    }

    #[test]
    fn same_symptom_under_two_regions_is_two_selections() {
        let catalog = Catalog::bundled().unwrap();
        let gerd = catalog_symptom(&catalog, "gerd");
        let mut session = ScreeningSession::new();

        session.toggle_symptom("region-a", &gerd);
        session.toggle_symptom("region-b", &gerd);
        assert_eq!(session.selections().len(), 2);

        // Toggling one key off leaves the other selection intact
        session.toggle_symptom("region-a", &gerd);
        assert_eq!(session.selections().len(), 1);
        assert!(session.is_selected("region-b", "gerd"));
    }

    #[test]
    fn toggle_off_preserves_selection_order() {
        let catalog = Catalog::bundled().unwrap();
        let mut session = ScreeningSession::new();
        let first = catalog_symptom(&catalog, "loud-snoring");
        let second = catalog_symptom(&catalog, "sleep-apnea");
        let third = catalog_symptom(&catalog, "gasping-choking");

        session.toggle_symptom("body-model-neck_or_throat", &first);
        session.toggle_symptom("body-model-neck_or_throat", &second);
        session.toggle_symptom("body-model-neck_or_throat", &third);
        session.toggle_symptom("body-model-neck_or_throat", &second);

        let ids = session.selected_symptom_ids();
        assert_eq!(ids, vec!["loud-snoring", "gasping-choking"]);
    }

    #[test]
    fn region_panel_flow() {
        let mut session = ScreeningSession::new();
        session.select_region("body-model-head");
        assert!(session.panel_open());
        assert_eq!(session.selected_region(), Some("body-model-head"));

        session.close_panel();
        assert!(!session.panel_open());
        assert!(session.selected_region().is_none());
    }

    #[test]
    fn go_to_results_closes_panel() {
        let mut session = ScreeningSession::new();
        session.select_region("body-model-head");
        session.go_to_results();
        assert_eq!(session.step(), WizardStep::Results);
        assert!(!session.panel_open());
    }

    #[test]
    fn start_over_clears_everything_under_a_fresh_id() {
        let catalog = Catalog::bundled().unwrap();
        let mut session = ScreeningSession::new();
        let original_id = session.id();

        session.set_demographics(demographics(45)).unwrap();
        session.toggle_symptom(
            "body-model-neck_or_throat",
            &catalog_symptom(&catalog, "sleep-apnea"),
        );
        session.go_to_results();

        session.start_over();
        assert_ne!(session.id(), original_id);
        assert_eq!(session.step(), WizardStep::Demographics);
        assert!(session.demographics().is_none());
        assert!(session.selections().is_empty());
    }

    #[test]
    fn assessment_tracks_the_live_selection() {
        let catalog = Catalog::bundled().unwrap();
        let gerd = catalog_symptom(&catalog, "gerd");
        let mut session = ScreeningSession::new();

        session.toggle_symptom("body-model-upper_abdomen", &gerd);
        let assessment = session.assessment();
        assert_eq!(assessment.overall_risk_percentage, 25);
        assert_eq!(assessment.tier, RiskTier::Low);

        session.toggle_symptom("body-model-upper_abdomen", &gerd);
        let cleared = session.assessment();
        assert_eq!(cleared.overall_risk_percentage, 0);
        assert_eq!(cleared.message, "No symptoms selected");
    }

    #[test]
    fn treatments_follow_selection_order() {
        let catalog = Catalog::bundled().unwrap();
        let mut session = ScreeningSession::new();
        session.toggle_symptom(
            "body-model-upper_abdomen",
            &catalog_symptom(&catalog, "gerd"),
        );
        session.toggle_symptom(
            "body-model-neck_or_throat",
            &catalog_symptom(&catalog, "sleep-apnea"),
        );

        let treatments = session.treatments(&catalog, DuplicatePolicy::KeepAll);
        let ids: Vec<&str> = treatments.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "elevate-head",
                "avoid-late-meals",
                "cpap-therapy",
                "weight-loss",
                "sleep-position"
            ]
        );
    }

    #[test]
    fn full_wizard_flow() {
        let catalog = Catalog::bundled().unwrap();
        let mut session = ScreeningSession::new();

        session.set_demographics(demographics(52)).unwrap();

        session.select_region("body-model-neck_or_throat");
        session.toggle_symptom(
            "body-model-neck_or_throat",
            &catalog_symptom(&catalog, "sleep-apnea"),
        );
        session.select_region("body-model-heart");
        session.toggle_symptom(
            "body-model-heart",
            &catalog_symptom(&catalog, "hypertension"),
        );
        session.select_region("body-model-mid_abdomen");
        session.toggle_symptom(
            "body-model-mid_abdomen",
            &catalog_symptom(&catalog, "obesity"),
        );
        session.go_to_results();

        let assessment = session.assessment();
        assert_eq!(assessment.overall_risk_percentage, 99);
        assert_eq!(assessment.tier, RiskTier::Critical);
        assert_eq!(assessment.total_symptoms, 3);

        let treatments = session.treatments(&catalog, DuplicatePolicy::KeepAll);
        assert!(treatments.iter().any(|t| t.id == "cpap-therapy"));
        assert!(treatments.iter().any(|t| t.id == "dash-diet"));
        assert!(treatments.iter().any(|t| t.id == "bariatric-surgery"));
    }
}
