//! Bootcamp Query Handlers

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{BootcampRepositoryPort, CourseRepositoryPort, GeocoderPort};
use crate::application::queries::{
    FindBootcampsInRadius, GetBootcamp, ListBootcamps, ListBootcampsByCondition,
};
use crate::domain::bootcamp::{Bootcamp, SphericalCap};
use crate::domain::course::Course;
use crate::domain::query::{Pagination, QueryDescriptor};

// ============================================================================
// Response DTOs
// ============================================================================

/// Bootcamp + 其课程
#[derive(Debug, Clone, Serialize)]
pub struct BootcampView {
    #[serde(flatten)]
    pub bootcamp: Bootcamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Course>>,
}

/// 条件查询的一页结果
#[derive(Debug, Clone)]
pub struct BootcampPage {
    pub records: Vec<Value>,
    pub pagination: Pagination,
}

/// 为一批 Bootcamp 附加课程（一次批量查询）
async fn populate_courses(
    course_repo: &dyn CourseRepositoryPort,
    bootcamps: Vec<Bootcamp>,
) -> Result<Vec<BootcampView>, ApplicationError> {
    if bootcamps.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = bootcamps.iter().map(|b| b.id).collect();
    let mut by_bootcamp: HashMap<Uuid, Vec<Course>> = HashMap::new();
    for course in course_repo.find_by_bootcamps(&ids).await? {
        by_bootcamp.entry(course.bootcamp_id).or_default().push(course);
    }

    Ok(bootcamps
        .into_iter()
        .map(|bootcamp| {
            let courses = by_bootcamp.remove(&bootcamp.id).unwrap_or_default();
            BootcampView {
                bootcamp,
                courses: Some(courses),
            }
        })
        .collect())
}

// ============================================================================
// Handlers
// ============================================================================

/// ListBootcamps Handler
pub struct ListBootcampsHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl ListBootcampsHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        course_repo: Arc<dyn CourseRepositoryPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            course_repo,
        }
    }

    pub async fn handle(&self, _query: ListBootcamps) -> Result<Vec<BootcampView>, ApplicationError> {
        let bootcamps = self.bootcamp_repo.find_all().await?;
        populate_courses(self.course_repo.as_ref(), bootcamps).await
    }
}

/// ListBootcampsByCondition Handler
///
/// 总数取整个集合的数量（不受过滤影响），与分页查询分两次执行
pub struct ListBootcampsByConditionHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl ListBootcampsByConditionHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        course_repo: Arc<dyn CourseRepositoryPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            course_repo,
        }
    }

    pub async fn handle(
        &self,
        query: ListBootcampsByCondition,
    ) -> Result<BootcampPage, ApplicationError> {
        let descriptor = QueryDescriptor::from_params(&query.params);

        tracing::debug!(
            predicates = descriptor.filter.predicates.len(),
            page = descriptor.window.page(),
            limit = descriptor.window.limit(),
            "Executing bootcamp query"
        );

        let total = self.bootcamp_repo.count().await?;
        let bootcamps = self.bootcamp_repo.find_by_query(&descriptor).await?;

        let with_courses = descriptor
            .projection
            .as_ref()
            .map_or(true, |p| p.includes("courses"));
        let views = if with_courses {
            populate_courses(self.course_repo.as_ref(), bootcamps).await?
        } else {
            bootcamps
                .into_iter()
                .map(|bootcamp| BootcampView {
                    bootcamp,
                    courses: None,
                })
                .collect()
        };

        let mut records = Vec::with_capacity(views.len());
        for view in views {
            let value = serde_json::to_value(&view)
                .map_err(|e| ApplicationError::internal(format!("Failed to serialize bootcamp: {}", e)))?;
            records.push(match &descriptor.projection {
                Some(projection) => projection.apply(value),
                None => value,
            });
        }

        Ok(BootcampPage {
            records,
            pagination: Pagination::compute(&descriptor.window, total),
        })
    }
}

/// GetBootcamp Handler
pub struct GetBootcampHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl GetBootcampHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        course_repo: Arc<dyn CourseRepositoryPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            course_repo,
        }
    }

    pub async fn handle(&self, query: GetBootcamp) -> Result<BootcampView, ApplicationError> {
        let bootcamp = self
            .bootcamp_repo
            .find_by_id(query.bootcamp_id)
            .await?
            .ok_or_else(|| ApplicationError::bootcamp_not_found(query.bootcamp_id))?;

        let courses = self.course_repo.find_by_bootcamp(bootcamp.id).await?;

        Ok(BootcampView {
            bootcamp,
            courses: Some(courses),
        })
    }
}

/// FindBootcampsInRadius Handler
pub struct FindBootcampsInRadiusHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    geocoder: Arc<dyn GeocoderPort>,
}

impl FindBootcampsInRadiusHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        geocoder: Arc<dyn GeocoderPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            geocoder,
        }
    }

    pub async fn handle(&self, query: FindBootcampsInRadius) -> Result<Vec<Bootcamp>, ApplicationError> {
        if !query.distance_miles.is_finite() || query.distance_miles < 0.0 {
            return Err(ApplicationError::bad_request(
                "Please provide a valid distance",
            ));
        }

        let center = self
            .geocoder
            .geocode(&query.zipcode)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ApplicationError::not_found(format!(
                    "No location found for zipcode {}",
                    query.zipcode
                ))
            })?
            .point();

        let cap = SphericalCap::from_miles(center, query.distance_miles);
        let bootcamps = self.bootcamp_repo.find_within(&cap).await?;

        tracing::debug!(
            zipcode = %query.zipcode,
            distance = query.distance_miles,
            radius = cap.radius,
            found = bootcamps.len(),
            "Radius query completed"
        );

        Ok(bootcamps)
    }
}
