use serde::{Deserialize, Serialize};

use super::enums::Sex;

/// Basic demographics captured on the wizard's first screen.
/// Contact fields are optional and carried through to the report untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDemographics {
    pub age: u8,
    pub sex: Sex,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
