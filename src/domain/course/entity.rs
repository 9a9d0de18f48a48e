//! Course Context - Entity

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MinimumSkill;
use crate::domain::validation::ValidationErrors;

/// Course 实体
///
/// 不变量:
/// - 必须属于且只属于一个 Bootcamp
/// - title / description / weeks / tuition / minimumSkill 必填
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: f64,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    #[serde(rename = "bootcamp")]
    pub bootcamp_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// 创建或更新时提交的字段
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<String>,
    pub tuition: Option<f64>,
    pub minimum_skill: Option<String>,
    pub scholarship_available: Option<bool>,
}

impl Course {
    /// 校验并创建新 Course（bootcamp 是否存在由调用方保证）
    pub fn create(bootcamp_id: Uuid, changes: CourseChanges) -> Result<Self, ValidationErrors> {
        let mut course = Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            weeks: String::new(),
            tuition: 0.0,
            minimum_skill: MinimumSkill::Beginner,
            scholarship_available: false,
            bootcamp_id,
            created_at: Utc::now().trunc_subsecs(6),
        };
        course.apply_inner(changes, true)?;
        Ok(course)
    }

    /// 合并字段并重新校验，失败时自身保持不变
    pub fn apply(&mut self, changes: CourseChanges) -> Result<(), ValidationErrors> {
        self.apply_inner(changes, false)
    }

    fn apply_inner(&mut self, changes: CourseChanges, creating: bool) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = errors
            .require(
                changes.title.as_deref().or(Some(self.title.as_str())),
                "Please add a course title",
            )
            .map(str::to_string);

        let description = errors
            .require(
                changes
                    .description
                    .as_deref()
                    .or(Some(self.description.as_str())),
                "Please add a description",
            )
            .map(str::to_string);

        let weeks = errors
            .require(
                changes.weeks.as_deref().or(Some(self.weeks.as_str())),
                "Please add number of weeks",
            )
            .map(str::to_string);

        let tuition = match changes.tuition {
            Some(t) if t.is_finite() && t >= 0.0 => Some(t),
            Some(_) => {
                errors.push("Tuition cost can not be negative");
                None
            }
            None if creating => {
                errors.push("Please add a tuition cost");
                None
            }
            None => Some(self.tuition),
        };

        let minimum_skill = match changes.minimum_skill.as_deref() {
            Some(raw) => match MinimumSkill::from_str(raw) {
                Some(skill) => Some(skill),
                None => {
                    errors.push(format!("`{}` is not a valid minimum skill", raw));
                    None
                }
            },
            None if creating => {
                errors.push("Please add a minimum skill");
                None
            }
            None => Some(self.minimum_skill),
        };

        errors.into_result()?;

        self.title = title.unwrap_or_default();
        self.description = description.unwrap_or_default();
        self.weeks = weeks.unwrap_or_default();
        self.tuition = tuition.unwrap_or(self.tuition);
        self.minimum_skill = minimum_skill.unwrap_or(self.minimum_skill);
        self.scholarship_available = changes
            .scholarship_available
            .unwrap_or(self.scholarship_available);

        Ok(())
    }
}
