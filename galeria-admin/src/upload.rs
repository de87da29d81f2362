//! Image staging
//!
//! Uploads a selected image ahead of the record write so a persisted
//! locator always points at an object that exists in storage.

use galeria_client::{ClientResult, ObjectStore};

/// Maximum upload size (16 MiB)
pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;

/// A user-selected image file
#[derive(Debug, Clone)]
pub struct ImageFile {
    /// Original filename; keys the object's logical path
    pub name: String,
    /// Content type sent as upload metadata
    pub content_type: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Create an image file with an explicit content type
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Create an image file, guessing the content type from the filename
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            name,
            content_type,
            bytes,
        }
    }

    /// File size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is over the upload limit
    pub fn exceeds_limit(&self) -> bool {
        self.bytes.len() > MAX_IMAGE_BYTES
    }
}

/// Upload the image and return its download locator
///
/// Files over [`MAX_IMAGE_BYTES`] are skipped, not rejected: the result is
/// `Ok(None)` and no upload call is made. The composed record then goes out
/// without a locator of its own.
pub async fn stage_image<S: ObjectStore + ?Sized>(
    store: &S,
    file: &ImageFile,
) -> ClientResult<Option<String>> {
    if file.exceeds_limit() {
        tracing::warn!(
            name = %file.name,
            size = file.size(),
            limit = MAX_IMAGE_BYTES,
            "image exceeds upload limit; skipping upload"
        );
        return Ok(None);
    }

    let url = store
        .upload(&file.name, &file.content_type, file.bytes.clone())
        .await?;
    Ok(Some(url))
}
