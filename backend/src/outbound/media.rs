//! Filesystem object store adapter.
//!
//! Blobs land under a capability-scoped media directory; the returned URL is
//! the configured public base joined with the object key, so whatever serves
//! the directory (reverse proxy, CDN) makes the URL retrievable.

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use uuid::Uuid;

use crate::domain::ports::{ObjectStore, ObjectStoreError};

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

/// [`ObjectStore`] writing blobs below a sandboxed directory.
pub struct FsObjectStore {
    root: Dir,
    public_base_url: String,
}

impl FsObjectStore {
    /// Open the media directory (creating it first if needed) and scope all
    /// later writes to it.
    pub fn open(path: &std::path::Path, public_base_url: &str) -> std::io::Result<Self> {
        std::fs::create_dir_all(path)?;
        let root = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn write_error(error: impl std::fmt::Display) -> ObjectStoreError {
        ObjectStoreError::Write {
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn store(
        &self,
        bytes: &[u8],
        content_type: &str,
        key_prefix: &str,
    ) -> Result<String, ObjectStoreError> {
        let prefix = key_prefix.trim_matches('/');
        let key = format!(
            "{prefix}/{}.{}",
            Uuid::new_v4(),
            extension_for(content_type)
        );

        self.root
            .create_dir_all(prefix)
            .map_err(Self::write_error)?;
        self.root.write(&key, bytes).map_err(Self::write_error)?;

        Ok(format!("{}/{key}", self.public_base_url))
    }
}
