//! # voxdesk-store
//!
//! Local object URLs for synthesized audio.
//!
//! Each stored clip becomes a file in the store directory, addressed by a
//! `file://` URL that players and browsers can open directly. URLs stay
//! valid until [`ObjectStore::revoke`] removes the file.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;
use voxdesk_core::{AudioClip, Error, Result, CLIP_EXTENSIONS};

/// File name stem used when exporting into a directory.
pub const DOWNLOAD_STEM: &str = "tts";

/// A locally addressable reference to a stored clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUrl {
    /// `file://` URL of the clip.
    pub url: Url,
    /// Path behind the URL.
    pub path: PathBuf,
    /// MIME type of the clip.
    pub content_type: String,
    /// Hex SHA-256 of the clip bytes.
    pub digest: String,
    /// Size in bytes.
    pub size: u64,
}

impl ObjectUrl {
    /// Extension of the stored file, if any.
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Directory-backed store of audio clips.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    dir: PathBuf,
}

impl ObjectStore {
    /// Create a store in the platform cache directory.
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "voxdesk", "voxdesk")
            .ok_or_else(|| Error::Store("Failed to determine cache directory".to_string()))?;

        Self::with_path(project_dirs.cache_dir().join("audio"))
    }

    /// Create a store in a custom directory.
    pub fn with_path(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::Store(format!("Failed to create store directory: {e}")))?;

        // File URLs need an absolute path.
        let dir = dir
            .canonicalize()
            .map_err(|e| Error::Store(format!("Failed to resolve store directory: {e}")))?;

        debug!("Object store at {}", dir.display());
        Ok(Self { dir })
    }

    /// Get the store directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `clip` to the store and return its URL.
    pub fn put(&self, clip: &AudioClip) -> Result<ObjectUrl> {
        let name = format!("{}.{}", Uuid::new_v4().simple(), clip.extension());
        let path = self.dir.join(name);

        std::fs::write(&path, &clip.data)
            .map_err(|e| Error::Store(format!("Failed to write {}: {e}", path.display())))?;

        let url = Url::from_file_path(&path)
            .map_err(|()| Error::Store(format!("Not an absolute path: {}", path.display())))?;

        let object = ObjectUrl {
            url,
            path,
            content_type: clip.content_type.clone(),
            digest: digest(&clip.data),
            size: clip.data.len() as u64,
        };

        info!("Stored {} bytes at {object}", object.size);
        Ok(object)
    }

    /// Read a stored clip back.
    pub fn read(&self, object: &ObjectUrl) -> Result<AudioClip> {
        let path = self.owned_path(object)?;
        let data = std::fs::read(path)
            .map_err(|e| Error::Store(format!("Failed to read {object}: {e}")))?;
        Ok(AudioClip::new(Bytes::from(data), Some(object.content_type.as_str())))
    }

    /// Release a URL and delete its file. Revoking twice is not an error.
    pub fn revoke(&self, object: &ObjectUrl) -> Result<()> {
        let path = self.owned_path(object)?;
        match std::fs::remove_file(path) {
            Ok(()) => {
                debug!("Revoked {object}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Store(format!("Failed to revoke {object}: {e}"))),
        }
    }

    /// Copy a stored clip to `dest` for download.
    ///
    /// If `dest` is an existing directory the clip is saved there as
    /// `tts.<ext>`. Returns the path written.
    pub fn export(&self, object: &ObjectUrl, dest: &Path) -> Result<PathBuf> {
        let src = self.owned_path(object)?;
        let target = if dest.is_dir() {
            dest.join(format!(
                "{DOWNLOAD_STEM}.{}",
                object.extension().unwrap_or("bin")
            ))
        } else {
            dest.to_path_buf()
        };

        std::fs::copy(src, &target)?;
        info!("Saved {object} to {}", target.display());
        Ok(target)
    }

    /// Remove every clip in the store.
    ///
    /// Only files named the way [`ObjectStore::put`] names them are touched;
    /// anything else sharing the directory is left alone.
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() && is_clip_name(&entry.file_name().to_string_lossy()) {
                std::fs::remove_file(entry.path())?;
                removed += 1;
            }
        }
        info!("Cleared {removed} clips from object store");
        Ok(removed)
    }

    /// Reject URLs that point outside this store or at files it did not create.
    fn owned_path<'a>(&self, object: &'a ObjectUrl) -> Result<&'a Path> {
        let is_clip = object
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_clip_name);

        if is_clip && object.path.parent() == Some(self.dir.as_path()) {
            Ok(&object.path)
        } else {
            Err(Error::InvalidArgument(format!(
                "{object} does not belong to this store"
            )))
        }
    }
}

/// Whether `name` has the `<32 hex>.<clip extension>` shape `put` writes.
fn is_clip_name(name: &str) -> bool {
    let Some((stem, ext)) = name.split_once('.') else {
        return false;
    };
    stem.len() == 32
        && stem.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        && CLIP_EXTENSIONS.contains(&ext)
}

fn digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
