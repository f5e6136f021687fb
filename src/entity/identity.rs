//! Generated backstory and the gender inferred from it

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RogueError};
use crate::core::types::EntityKind;

const MALE_TAG: &str = "[male]";
const FEMALE_TAG: &str = "[female]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub text: String,
    pub gender: Gender,
}

impl Identity {
    /// Build from generated text. `[male]` / `[female]` placeholders set the
    /// gender and are replaced by `name`.
    ///
    /// Text claiming both genders is rejected.
    pub fn from_text(name: &str, raw: &str) -> Result<Self> {
        let is_male = raw.contains(MALE_TAG);
        let is_female = raw.contains(FEMALE_TAG);

        let gender = match (is_male, is_female) {
            (true, true) => return Err(RogueError::IdentityConflict(name.to_string())),
            (true, false) => Gender::Male,
            (false, true) => Gender::Female,
            (false, false) => Gender::Unknown,
        };

        Ok(Self {
            text: raw.replace(MALE_TAG, name).replace(FEMALE_TAG, name),
            gender,
        })
    }

    /// Plain self-description for creatures that don't get a backstory
    pub fn for_creature(kind: EntityKind) -> Self {
        let kind = kind.label().to_lowercase();
        let article = if kind.starts_with(['a', 'e', 'i', 'o', 'u']) {
            "an"
        } else {
            "a"
        };
        Self {
            text: format!("I am {article} {kind}."),
            gender: Gender::Unknown,
        }
    }

    pub fn report(&self) -> &str {
        &self.text
    }
}
