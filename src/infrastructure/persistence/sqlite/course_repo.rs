//! SQLite Course Repository

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};
use uuid::Uuid;

use super::bootcamp_repo::map_write_error;
use super::query_compiler::{format_timestamp, parse_timestamp};
use super::DbPool;
use crate::application::ports::{CourseRepositoryPort, RepositoryError};
use crate::domain::course::{Course, MinimumSkill};

const COURSE_COLUMNS: &str = "id, bootcamp_id, title, description, weeks, tuition, \
    minimum_skill, scholarship_available, created_at";

/// SQLite Course Repository
pub struct SqliteCourseRepository {
    pool: DbPool,
}

impl SqliteCourseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CourseRow {
    id: String,
    bootcamp_id: String,
    title: String,
    description: String,
    weeks: String,
    tuition: f64,
    minimum_skill: String,
    scholarship_available: bool,
    created_at: String,
}

impl TryFrom<CourseRow> for Course {
    type Error = RepositoryError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let parse_id = |raw: &str| {
            Uuid::parse_str(raw).map_err(|e| RepositoryError::SerializationError(e.to_string()))
        };

        Ok(Course {
            id: parse_id(&row.id)?,
            title: row.title,
            description: row.description,
            weeks: row.weeks,
            tuition: row.tuition,
            minimum_skill: MinimumSkill::from_str(&row.minimum_skill).ok_or_else(|| {
                RepositoryError::SerializationError(format!(
                    "Unknown minimum skill: {}",
                    row.minimum_skill
                ))
            })?,
            scholarship_available: row.scholarship_available,
            bootcamp_id: parse_id(&row.bootcamp_id)?,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

#[async_trait]
impl CourseRepositoryPort for SqliteCourseRepository {
    async fn insert(&self, course: &Course) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "INSERT INTO courses ({COURSE_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"
        ))
        .bind(course.id.to_string())
        .bind(course.bootcamp_id.to_string())
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.weeks)
        .bind(course.tuition)
        .bind(course.minimum_skill.as_str())
        .bind(course.scholarship_available)
        .bind(format_timestamp(&course.created_at))
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn update(&self, course: &Course) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE courses SET
                title = ?, description = ?, weeks = ?, tuition = ?,
                minimum_skill = ?, scholarship_available = ?
            WHERE id = ?
            "#,
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.weeks)
        .bind(course.tuition)
        .bind(course.minimum_skill.as_str())
        .bind(course.scholarship_available)
        .bind(course.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(course.id.to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError> {
        let row: Option<CourseRow> =
            sqlx::query_as(&format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?"))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Course::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Course>, RepositoryError> {
        let rows: Vec<CourseRow> = sqlx::query_as(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn find_by_bootcamp(&self, bootcamp_id: Uuid) -> Result<Vec<Course>, RepositoryError> {
        let rows: Vec<CourseRow> = sqlx::query_as(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE bootcamp_id = ? ORDER BY rowid ASC"
        ))
        .bind(bootcamp_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn find_by_bootcamps(
        &self,
        bootcamp_ids: &[Uuid],
    ) -> Result<Vec<Course>, RepositoryError> {
        if bootcamp_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE bootcamp_id IN ("
        ));
        let mut separated = builder.separated(", ");
        for id in bootcamp_ids {
            separated.push_bind(id.to_string());
        }
        separated.push_unseparated(") ORDER BY rowid ASC");

        let rows: Vec<CourseRow> = builder
            .build_query_as::<CourseRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
