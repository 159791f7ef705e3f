pub mod demographics;
pub mod enums;
pub mod region;
pub mod symptom;
pub mod treatment;

pub use demographics::UserDemographics;
pub use enums::{Severity, Sex, TreatmentType};
pub use region::BodyRegion;
pub use symptom::{SelectedSymptom, Symptom};
pub use treatment::Treatment;
