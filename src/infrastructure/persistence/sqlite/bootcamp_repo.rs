//! SQLite Bootcamp Repository

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};
use uuid::Uuid;

use super::query_compiler::{
    format_timestamp, parse_timestamp, push_filter, push_order_by, push_window, BOOTCAMP_FIELDS,
};
use super::DbPool;
use crate::application::ports::{BootcampRepositoryPort, RepositoryError};
use crate::domain::bootcamp::{Bootcamp, Career, GeoJsonType, GeoPoint, Location, SphericalCap};
use crate::domain::query::QueryDescriptor;

const BOOTCAMP_COLUMNS: &str = "id, name, description, website, phone, email, address, \
    location_longitude, location_latitude, location_formatted_address, location_street, \
    location_city, location_state, location_zipcode, location_country, careers, \
    average_rating, average_cost, photo, housing, job_assistance, job_guarantee, accept_gi, \
    created_at";

/// SQLite Bootcamp Repository
pub struct SqliteBootcampRepository {
    pool: DbPool,
}

impl SqliteBootcampRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// 唯一约束冲突映射为 Duplicate，其余为 DatabaseError
pub(crate) fn map_write_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Duplicate(db.message().to_string())
        }
        _ => RepositoryError::DatabaseError(e.to_string()),
    }
}

#[derive(FromRow)]
struct BootcampRow {
    id: String,
    name: String,
    description: String,
    website: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    location_longitude: Option<f64>,
    location_latitude: Option<f64>,
    location_formatted_address: Option<String>,
    location_street: Option<String>,
    location_city: Option<String>,
    location_state: Option<String>,
    location_zipcode: Option<String>,
    location_country: Option<String>,
    careers: String,
    average_rating: Option<f64>,
    average_cost: Option<f64>,
    photo: String,
    housing: bool,
    job_assistance: bool,
    job_guarantee: bool,
    accept_gi: bool,
    created_at: String,
}

impl TryFrom<BootcampRow> for Bootcamp {
    type Error = RepositoryError;

    fn try_from(row: BootcampRow) -> Result<Self, Self::Error> {
        let location = match (row.location_longitude, row.location_latitude) {
            (Some(longitude), Some(latitude)) => Some(Location {
                kind: GeoJsonType::Point,
                coordinates: GeoPoint::new(longitude, latitude),
                formatted_address: row.location_formatted_address,
                street: row.location_street,
                city: row.location_city,
                state: row.location_state,
                zipcode: row.location_zipcode,
                country: row.location_country,
            }),
            _ => None,
        };

        let careers: Vec<Career> = serde_json::from_str(&row.careers)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Bootcamp {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            name: row.name,
            description: row.description,
            website: row.website,
            phone: row.phone,
            email: row.email,
            address: row.address,
            location,
            careers,
            average_rating: row.average_rating,
            average_cost: row.average_cost,
            photo: row.photo,
            housing: row.housing,
            job_assistance: row.job_assistance,
            job_guarantee: row.job_guarantee,
            accept_gi: row.accept_gi,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

fn careers_json(bootcamp: &Bootcamp) -> Result<String, RepositoryError> {
    serde_json::to_string(&bootcamp.careers)
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl BootcampRepositoryPort for SqliteBootcampRepository {
    async fn insert(&self, bootcamp: &Bootcamp) -> Result<(), RepositoryError> {
        let location = bootcamp.location.as_ref();
        sqlx::query(&format!(
            "INSERT INTO bootcamps ({BOOTCAMP_COLUMNS}) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        ))
        .bind(bootcamp.id.to_string())
        .bind(&bootcamp.name)
        .bind(&bootcamp.description)
        .bind(&bootcamp.website)
        .bind(&bootcamp.phone)
        .bind(&bootcamp.email)
        .bind(&bootcamp.address)
        .bind(location.map(|l| l.coordinates.longitude))
        .bind(location.map(|l| l.coordinates.latitude))
        .bind(location.and_then(|l| l.formatted_address.clone()))
        .bind(location.and_then(|l| l.street.clone()))
        .bind(location.and_then(|l| l.city.clone()))
        .bind(location.and_then(|l| l.state.clone()))
        .bind(location.and_then(|l| l.zipcode.clone()))
        .bind(location.and_then(|l| l.country.clone()))
        .bind(careers_json(bootcamp)?)
        .bind(bootcamp.average_rating)
        .bind(bootcamp.average_cost)
        .bind(&bootcamp.photo)
        .bind(bootcamp.housing)
        .bind(bootcamp.job_assistance)
        .bind(bootcamp.job_guarantee)
        .bind(bootcamp.accept_gi)
        .bind(format_timestamp(&bootcamp.created_at))
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn update(&self, bootcamp: &Bootcamp) -> Result<(), RepositoryError> {
        let location = bootcamp.location.as_ref();
        let result = sqlx::query(
            r#"
            UPDATE bootcamps SET
                name = ?, description = ?, website = ?, phone = ?, email = ?, address = ?,
                location_longitude = ?, location_latitude = ?, location_formatted_address = ?,
                location_street = ?, location_city = ?, location_state = ?,
                location_zipcode = ?, location_country = ?, careers = ?,
                average_rating = ?, average_cost = ?, photo = ?, housing = ?,
                job_assistance = ?, job_guarantee = ?, accept_gi = ?
            WHERE id = ?
            "#,
        )
        .bind(&bootcamp.name)
        .bind(&bootcamp.description)
        .bind(&bootcamp.website)
        .bind(&bootcamp.phone)
        .bind(&bootcamp.email)
        .bind(&bootcamp.address)
        .bind(location.map(|l| l.coordinates.longitude))
        .bind(location.map(|l| l.coordinates.latitude))
        .bind(location.and_then(|l| l.formatted_address.clone()))
        .bind(location.and_then(|l| l.street.clone()))
        .bind(location.and_then(|l| l.city.clone()))
        .bind(location.and_then(|l| l.state.clone()))
        .bind(location.and_then(|l| l.zipcode.clone()))
        .bind(location.and_then(|l| l.country.clone()))
        .bind(careers_json(bootcamp)?)
        .bind(bootcamp.average_rating)
        .bind(bootcamp.average_cost)
        .bind(&bootcamp.photo)
        .bind(bootcamp.housing)
        .bind(bootcamp.job_assistance)
        .bind(bootcamp.job_guarantee)
        .bind(bootcamp.accept_gi)
        .bind(bootcamp.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(bootcamp.id.to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bootcamp>, RepositoryError> {
        let row: Option<BootcampRow> = sqlx::query_as(&format!(
            "SELECT {BOOTCAMP_COLUMNS} FROM bootcamps WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Bootcamp::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Bootcamp>, RepositoryError> {
        let rows: Vec<BootcampRow> = sqlx::query_as(&format!(
            "SELECT {BOOTCAMP_COLUMNS} FROM bootcamps ORDER BY rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Bootcamp::try_from).collect()
    }

    async fn find_by_query(
        &self,
        query: &QueryDescriptor,
    ) -> Result<Vec<Bootcamp>, RepositoryError> {
        let mut builder =
            QueryBuilder::<Sqlite>::new(format!("SELECT {BOOTCAMP_COLUMNS} FROM bootcamps"));
        push_filter(&mut builder, BOOTCAMP_FIELDS, &query.filter)?;
        push_order_by(&mut builder, BOOTCAMP_FIELDS, &query.sort);
        push_window(&mut builder, &query.window)?;

        tracing::debug!(sql = builder.sql(), "Executing bootcamp query");

        let rows: Vec<BootcampRow> = builder
            .build_query_as::<BootcampRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Bootcamp::try_from).collect()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bootcamps")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn find_within(&self, cap: &SphericalCap) -> Result<Vec<Bootcamp>, RepositoryError> {
        let rows: Vec<BootcampRow> = sqlx::query_as(&format!(
            "SELECT {BOOTCAMP_COLUMNS} FROM bootcamps \
             WHERE location_longitude IS NOT NULL AND location_latitude IS NOT NULL \
             ORDER BY rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let mut bootcamps = Vec::new();
        for row in rows {
            let bootcamp = Bootcamp::try_from(row)?;
            let inside = bootcamp
                .location
                .as_ref()
                .map_or(false, |l| cap.contains(&l.coordinates));
            if inside {
                bootcamps.push(bootcamp);
            }
        }
        Ok(bootcamps)
    }

    async fn update_photo(&self, id: Uuid, photo: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE bootcamps SET photo = ? WHERE id = ?")
            .bind(photo)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM bootcamps WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
