use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// The fixed upload folders, each also served read-only under its own mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDir {
    LostItems,
    StudentPhotos,
    StaffPhotos,
    IdCards,
    QrCodes,
}

impl UploadDir {
    pub const ALL: [UploadDir; 5] = [
        UploadDir::LostItems,
        UploadDir::StudentPhotos,
        UploadDir::StaffPhotos,
        UploadDir::IdCards,
        UploadDir::QrCodes,
    ];

    /// Directory name under the upload root; also the URL mount segment.
    pub fn name(self) -> &'static str {
        match self {
            UploadDir::LostItems => "uploads",
            UploadDir::StudentPhotos => "student_photos",
            UploadDir::StaffPhotos => "staff_photos",
            UploadDir::IdCards => "idcards",
            UploadDir::QrCodes => "qrcodes",
        }
    }
}

/// Manages on-disk upload storage.
///
/// Files are written in place with no temp-file rename, so two writers of the
/// same name race and the last one wins.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Create the root and every upload folder.
    pub async fn new(root: PathBuf) -> Result<Self> {
        for dir in UploadDir::ALL {
            let path = root.join(dir.name());
            fs::create_dir_all(&path)
                .await
                .with_context(|| format!("Failed to create {}", path.display()))?;
        }
        info!("Upload storage root: {}", root.display());
        Ok(Self { root })
    }

    pub fn dir_path(&self, dir: UploadDir) -> PathBuf {
        self.root.join(dir.name())
    }

    /// Write `bytes` as `file_name` inside `dir` and return the stored path.
    pub async fn save(&self, dir: UploadDir, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let file_name = safe_file_name(file_name)?;
        let path = self.dir_path(dir).join(&file_name);
        fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Stored {} bytes in {}", bytes.len(), dir.name());
        Ok(path)
    }
}

/// Names are built from client input (emails, roll numbers, file names), so
/// separators are flattened to keep every write inside its folder.
fn safe_file_name(name: &str) -> Result<String> {
    let flat: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    if flat.is_empty() || flat == "." || flat == ".." {
        bail!("Refusing to store file named {:?}", name);
    }
    Ok(flat)
}

/// Final component of a stored path, as used in public links.
pub fn file_name_of(path: &str) -> Option<&str> {
    Path::new(path).file_name().and_then(|n| n.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_creates_every_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::new(tmp.path().join("data")).await.unwrap();
        for dir in UploadDir::ALL {
            assert!(storage.dir_path(dir).is_dir(), "{} missing", dir.name());
        }
    }

    #[tokio::test]
    async fn save_writes_inside_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::new(tmp.path().to_path_buf()).await.unwrap();

        let path = storage
            .save(UploadDir::StudentPhotos, "student_a/b@x.com_me.png", b"img")
            .await
            .unwrap();

        assert_eq!(path.parent().unwrap(), storage.dir_path(UploadDir::StudentPhotos));
        assert_eq!(file_name_of(path.to_str().unwrap()), Some("student_a_b@x.com_me.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"img");
    }

    #[tokio::test]
    async fn save_overwrites_same_name() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::new(tmp.path().to_path_buf()).await.unwrap();

        storage.save(UploadDir::LostItems, "bag.jpg", b"first").await.unwrap();
        let path = storage.save(UploadDir::LostItems, "bag.jpg", b"second").await.unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn dot_names_are_refused() {
        assert!(safe_file_name("..").is_err());
        assert!(safe_file_name("").is_err());
        assert_eq!(safe_file_name("../x").unwrap(), ".._x");
    }
}
