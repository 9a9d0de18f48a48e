//! Course Context - Value Objects

use serde::{Deserialize, Serialize};

/// 入学最低技能要求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinimumSkill {
    Beginner,
    Intermediate,
    Advanced,
}

impl MinimumSkill {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinimumSkill::Beginner => "beginner",
            MinimumSkill::Intermediate => "intermediate",
            MinimumSkill::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(MinimumSkill::Beginner),
            "intermediate" => Some(MinimumSkill::Intermediate),
            "advanced" => Some(MinimumSkill::Advanced),
            _ => None,
        }
    }
}
