//! Course Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCourse, DeleteCourse, UpdateCourse};
use crate::application::error::ApplicationError;
use crate::application::ports::{BootcampRepositoryPort, CourseRepositoryPort};
use crate::domain::course::Course;

// ============================================================================
// CreateCourse
// ============================================================================

/// CreateCourse Handler
pub struct CreateCourseHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl CreateCourseHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        course_repo: Arc<dyn CourseRepositoryPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            course_repo,
        }
    }

    pub async fn handle(&self, command: CreateCourse) -> Result<Course, ApplicationError> {
        // 所属 Bootcamp 必须存在
        let bootcamp = self
            .bootcamp_repo
            .find_by_id(command.bootcamp_id)
            .await?
            .ok_or_else(|| ApplicationError::owning_bootcamp_not_found(command.bootcamp_id))?;

        let course = Course::create(bootcamp.id, command.changes)?;
        self.course_repo.insert(&course).await?;

        tracing::info!(
            course_id = %course.id,
            bootcamp_id = %bootcamp.id,
            title = %course.title,
            "Course created"
        );

        Ok(course)
    }
}

// ============================================================================
// UpdateCourse
// ============================================================================

/// UpdateCourse Handler
pub struct UpdateCourseHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl UpdateCourseHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, command: UpdateCourse) -> Result<Course, ApplicationError> {
        let mut course = self
            .course_repo
            .find_by_id(command.course_id)
            .await?
            .ok_or_else(|| ApplicationError::course_not_found(command.course_id))?;

        course.apply(command.changes)?;
        self.course_repo.update(&course).await?;

        tracing::info!(course_id = %course.id, "Course updated");

        Ok(course)
    }
}

// ============================================================================
// DeleteCourse
// ============================================================================

/// DeleteCourse Handler
pub struct DeleteCourseHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl DeleteCourseHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    /// 返回被删除的课程
    pub async fn handle(&self, command: DeleteCourse) -> Result<Course, ApplicationError> {
        let course = self
            .course_repo
            .find_by_id(command.course_id)
            .await?
            .ok_or_else(|| ApplicationError::course_not_found(command.course_id))?;

        self.course_repo.delete(course.id).await?;

        tracing::info!(
            course_id = %course.id,
            title = %course.title,
            "Course deleted"
        );

        Ok(course)
    }
}
