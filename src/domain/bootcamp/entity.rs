//! Bootcamp Context - Entity

use chrono::{DateTime, SubsecRound, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

use super::{Career, Location};
use crate::domain::validation::ValidationErrors;

/// 未上传照片时的默认文件名
pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

const NAME_MAX_CHARS: usize = 50;
const DESCRIPTION_MAX_CHARS: usize = 500;
const PHONE_MAX_CHARS: usize = 20;

fn website_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
        )
        .expect("website regex is valid")
    })
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

/// Bootcamp 实体
///
/// 不变量:
/// - name 必填，且不超过 50 字符
/// - description 必填，且不超过 500 字符
/// - careers 只包含合法枚举值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bootcamp {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub careers: Vec<Career>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub created_at: DateTime<Utc>,
}

/// 创建或更新时提交的字段，None 表示未提供
#[derive(Debug, Clone, Default)]
pub struct BootcampChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub location: Option<Location>,
    pub careers: Option<Vec<String>>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

impl Bootcamp {
    /// 校验并创建新 Bootcamp
    pub fn create(changes: BootcampChanges) -> Result<Self, ValidationErrors> {
        let mut bootcamp = Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            website: None,
            phone: None,
            email: None,
            address: None,
            location: None,
            careers: Vec::new(),
            average_rating: None,
            average_cost: None,
            photo: DEFAULT_PHOTO.to_string(),
            housing: false,
            job_assistance: false,
            job_guarantee: false,
            accept_gi: false,
            created_at: Utc::now().trunc_subsecs(6),
        };
        bootcamp.apply(changes)?;
        Ok(bootcamp)
    }

    /// 合并字段并重新校验，失败时自身保持不变
    pub fn apply(&mut self, changes: BootcampChanges) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors
            .require(
                changes.name.as_deref().or(Some(self.name.as_str())),
                "Please add a name",
            )
            .map(str::to_string);
        errors.max_chars(
            name.as_deref(),
            NAME_MAX_CHARS,
            "Name can not be more than 50 characters",
        );

        let description = errors
            .require(
                changes
                    .description
                    .as_deref()
                    .or(Some(self.description.as_str())),
                "Please add a description",
            )
            .map(str::to_string);
        errors.max_chars(
            description.as_deref(),
            DESCRIPTION_MAX_CHARS,
            "Description can not be more than 500 characters",
        );

        let website = changes.website.or_else(|| self.website.clone());
        if website.as_deref().map_or(false, |w| !website_regex().is_match(w)) {
            errors.push("Please use a valid URL with HTTP or HTTPS");
        }

        let phone = changes.phone.or_else(|| self.phone.clone());
        errors.max_chars(
            phone.as_deref(),
            PHONE_MAX_CHARS,
            "Phone number can not be longer than 20 characters",
        );

        let email = changes.email.or_else(|| self.email.clone());
        if email.as_deref().map_or(false, |e| !email_regex().is_match(e)) {
            errors.push("Please add a valid email");
        }

        let location = changes.location.or_else(|| self.location.clone());
        if location.as_ref().map_or(false, |l| !l.coordinates.is_valid()) {
            errors.push("Please add valid coordinates");
        }

        let careers = match changes.careers {
            Some(raw) => {
                let mut careers = Vec::with_capacity(raw.len());
                for value in raw {
                    match Career::from_str(&value) {
                        Some(career) if !careers.contains(&career) => careers.push(career),
                        Some(_) => {}
                        None => errors.push(format!("`{}` is not a valid career", value)),
                    }
                }
                careers
            }
            None => self.careers.clone(),
        };

        let average_rating = changes.average_rating.or(self.average_rating);
        if let Some(rating) = average_rating {
            if rating < 1.0 {
                errors.push("Rating must be at least 1");
            } else if rating > 10.0 {
                errors.push("Rating can not be more than 10");
            }
        }

        let average_cost = changes.average_cost.or(self.average_cost);
        if average_cost.map_or(false, |c| c < 0.0) {
            errors.push("Average cost can not be negative");
        }

        errors.into_result()?;

        self.name = name.unwrap_or_default();
        self.description = description.unwrap_or_default();
        self.website = website;
        self.phone = phone;
        self.email = email;
        if let Some(address) = changes.address {
            self.address = Some(address);
        }
        self.location = location;
        self.careers = careers;
        self.average_rating = average_rating;
        self.average_cost = average_cost;
        self.housing = changes.housing.unwrap_or(self.housing);
        self.job_assistance = changes.job_assistance.unwrap_or(self.job_assistance);
        self.job_guarantee = changes.job_guarantee.unwrap_or(self.job_guarantee);
        self.accept_gi = changes.accept_gi.unwrap_or(self.accept_gi);

        Ok(())
    }
}
