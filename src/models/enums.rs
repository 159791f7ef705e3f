use crate::catalog::CatalogError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(CatalogError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

impl Severity {
    /// Integer amplification factor applied to a symptom's risk
    /// contribution: mild 1, moderate 2, severe 3.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }
}

str_enum!(TreatmentType {
    Medication => "medication",
    Lifestyle => "lifestyle",
    Therapy => "therapy",
    HomeRemedy => "home_remedy",
    MedicalProcedure => "medical_procedure",
});

str_enum!(Sex {
    Male => "male",
    Female => "female",
    Other => "other",
});
