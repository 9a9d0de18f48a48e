//! Bootcamp Command Handlers

use std::path::Path;
use std::sync::Arc;

use crate::application::commands::{
    CreateBootcamp, DeleteBootcamp, PhotoPayload, UpdateBootcamp, UploadBootcampPhoto,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{BootcampRepositoryPort, GeocoderPort, PhotoStoragePort};
use crate::domain::bootcamp::{Bootcamp, BootcampChanges};
use crate::domain::ValidationErrors;

/// 提供了地址但没有坐标时，通过地理编码补全 location
async fn resolve_location(
    geocoder: &dyn GeocoderPort,
    changes: &mut BootcampChanges,
) -> Result<(), ApplicationError> {
    if changes.location.is_some() {
        return Ok(());
    }
    let address = match changes.address.as_deref().map(str::trim) {
        Some(address) if !address.is_empty() => address.to_string(),
        _ => return Ok(()),
    };

    let found = geocoder.geocode(&address).await?.into_iter().next();
    match found {
        Some(location) => {
            tracing::debug!(address = %address, "Address geocoded");
            changes.location = Some(location.into_location());
            Ok(())
        }
        None => {
            let mut errors = ValidationErrors::new();
            errors.push("Please add a valid address");
            Err(errors.into())
        }
    }
}

// ============================================================================
// CreateBootcamp
// ============================================================================

/// CreateBootcamp Handler
pub struct CreateBootcampHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    geocoder: Arc<dyn GeocoderPort>,
}

impl CreateBootcampHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        geocoder: Arc<dyn GeocoderPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            geocoder,
        }
    }

    pub async fn handle(&self, command: CreateBootcamp) -> Result<Bootcamp, ApplicationError> {
        let mut changes = command.changes;
        resolve_location(self.geocoder.as_ref(), &mut changes).await?;

        let bootcamp = Bootcamp::create(changes)?;
        self.bootcamp_repo.insert(&bootcamp).await?;

        tracing::info!(
            bootcamp_id = %bootcamp.id,
            name = %bootcamp.name,
            "Bootcamp created"
        );

        Ok(bootcamp)
    }
}

// ============================================================================
// UpdateBootcamp
// ============================================================================

/// UpdateBootcamp Handler
pub struct UpdateBootcampHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    geocoder: Arc<dyn GeocoderPort>,
}

impl UpdateBootcampHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        geocoder: Arc<dyn GeocoderPort>,
    ) -> Self {
        Self {
            bootcamp_repo,
            geocoder,
        }
    }

    pub async fn handle(&self, command: UpdateBootcamp) -> Result<Bootcamp, ApplicationError> {
        let mut bootcamp = self
            .bootcamp_repo
            .find_by_id(command.bootcamp_id)
            .await?
            .ok_or_else(|| ApplicationError::bootcamp_not_found(command.bootcamp_id))?;

        let mut changes = command.changes;
        resolve_location(self.geocoder.as_ref(), &mut changes).await?;

        bootcamp.apply(changes)?;
        self.bootcamp_repo.update(&bootcamp).await?;

        tracing::info!(bootcamp_id = %bootcamp.id, "Bootcamp updated");

        Ok(bootcamp)
    }
}

// ============================================================================
// DeleteBootcamp
// ============================================================================

/// DeleteBootcamp Handler
pub struct DeleteBootcampHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
}

impl DeleteBootcampHandler {
    pub fn new(bootcamp_repo: Arc<dyn BootcampRepositoryPort>) -> Self {
        Self { bootcamp_repo }
    }

    /// 返回被删除的 Bootcamp
    pub async fn handle(&self, command: DeleteBootcamp) -> Result<Bootcamp, ApplicationError> {
        let bootcamp = self
            .bootcamp_repo
            .find_by_id(command.bootcamp_id)
            .await?
            .ok_or_else(|| ApplicationError::bootcamp_not_found(command.bootcamp_id))?;

        self.bootcamp_repo.delete(bootcamp.id).await?;

        tracing::info!(
            bootcamp_id = %bootcamp.id,
            name = %bootcamp.name,
            "Bootcamp deleted"
        );

        Ok(bootcamp)
    }
}

// ============================================================================
// UploadBootcampPhoto
// ============================================================================

/// UploadBootcampPhoto Handler
pub struct UploadBootcampPhotoHandler {
    bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    photo_storage: Arc<dyn PhotoStoragePort>,
    max_upload_size: u64,
}

impl UploadBootcampPhotoHandler {
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        photo_storage: Arc<dyn PhotoStoragePort>,
        max_upload_size: u64,
    ) -> Self {
        Self {
            bootcamp_repo,
            photo_storage,
            max_upload_size,
        }
    }

    fn too_large(&self) -> ApplicationError {
        ApplicationError::bad_request(format!(
            "Please upload an image less than {}",
            self.max_upload_size
        ))
    }

    /// 校验顺序: 记录存在 -> 有文件 -> 是图片 -> 大小
    ///
    /// 返回新的照片文件名 `photo_<id><ext>`
    pub async fn handle(&self, command: UploadBootcampPhoto) -> Result<String, ApplicationError> {
        let bootcamp = self
            .bootcamp_repo
            .find_by_id(command.bootcamp_id)
            .await?
            .ok_or_else(|| ApplicationError::bootcamp_not_found(command.bootcamp_id))?;

        let upload = match command.payload {
            PhotoPayload::Missing => {
                return Err(ApplicationError::bad_request("Please upload a file"))
            }
            PhotoPayload::Oversized => return Err(self.too_large()),
            PhotoPayload::File(upload) => upload,
        };

        let is_image = upload
            .content_type
            .as_deref()
            .map_or(false, |mime| mime.starts_with("image"));
        if !is_image {
            return Err(ApplicationError::bad_request("Please upload an image"));
        }

        if upload.data.len() as u64 > self.max_upload_size {
            return Err(self.too_large());
        }

        let extension = Path::new(&upload.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();
        let file_name = format!("photo_{}{}", bootcamp.id, extension);

        let path = self
            .photo_storage
            .save(&file_name, &upload.data)
            .await
            .map_err(|e| {
                tracing::error!(bootcamp_id = %bootcamp.id, error = %e, "Photo upload failed");
                ApplicationError::from(e)
            })?;

        if !self.bootcamp_repo.update_photo(bootcamp.id, &file_name).await? {
            return Err(ApplicationError::bootcamp_not_found(bootcamp.id));
        }

        tracing::info!(
            bootcamp_id = %bootcamp.id,
            path = %path.display(),
            size = upload.data.len(),
            "Bootcamp photo uploaded"
        );

        Ok(file_name)
    }
}
