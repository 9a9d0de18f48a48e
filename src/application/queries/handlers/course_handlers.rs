//! Course Query Handlers

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{BootcampRepositoryPort, CourseRepositoryPort};
use crate::application::queries::{GetCourse, ListCourses};
use crate::domain::bootcamp::Bootcamp;
use crate::domain::course::{Course, MinimumSkill};

// ============================================================================
// Response DTOs
// ============================================================================

/// 课程中嵌入的 Bootcamp 摘要
#[derive(Debug, Clone, Serialize)]
pub struct BootcampSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<&Bootcamp> for BootcampSummary {
    fn from(bootcamp: &Bootcamp) -> Self {
        Self {
            id: bootcamp.id,
            name: bootcamp.name.clone(),
            description: bootcamp.description.clone(),
        }
    }
}

/// 课程详情（bootcamp 字段展开为摘要）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: f64,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    pub bootcamp: Option<BootcampSummary>,
    pub created_at: DateTime<Utc>,
}

impl CourseView {
    fn new(course: Course, bootcamp: Option<BootcampSummary>) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            weeks: course.weeks,
            tuition: course.tuition,
            minimum_skill: course.minimum_skill,
            scholarship_available: course.scholarship_available,
            bootcamp,
            created_at: course.created_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListCourses Handler
pub struct ListCoursesHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl ListCoursesHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        course_repo: Arc<dyn CourseRepositoryPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            course_repo,
        }
    }

    pub async fn handle(&self, query: ListCourses) -> Result<Vec<CourseView>, ApplicationError> {
        let courses = match query.bootcamp_id {
            Some(bootcamp_id) => self.course_repo.find_by_bootcamp(bootcamp_id).await?,
            None => self.course_repo.find_all().await?,
        };

        // 每个 Bootcamp 只查询一次
        let mut summaries: HashMap<Uuid, Option<BootcampSummary>> = HashMap::new();
        let mut views = Vec::with_capacity(courses.len());
        for course in courses {
            let summary = match summaries.get(&course.bootcamp_id) {
                Some(summary) => summary.clone(),
                None => {
                    let summary = self
                        .bootcamp_repo
                        .find_by_id(course.bootcamp_id)
                        .await?
                        .as_ref()
                        .map(BootcampSummary::from);
                    summaries.insert(course.bootcamp_id, summary.clone());
                    summary
                }
            };
            views.push(CourseView::new(course, summary));
        }

        Ok(views)
    }
}

/// GetCourse Handler
pub struct GetCourseHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl GetCourseHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        course_repo: Arc<dyn CourseRepositoryPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            course_repo,
        }
    }

    pub async fn handle(&self, query: GetCourse) -> Result<CourseView, ApplicationError> {
        let course = self
            .course_repo
            .find_by_id(query.course_id)
            .await?
            .ok_or_else(|| ApplicationError::course_not_found(query.course_id))?;

        let bootcamp = self
            .bootcamp_repo
            .find_by_id(course.bootcamp_id)
            .await?
            .as_ref()
            .map(BootcampSummary::from);

        Ok(CourseView::new(course, bootcamp))
    }
}
