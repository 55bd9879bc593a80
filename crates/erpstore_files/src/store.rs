use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use erpstore_contract::FileRecord;
use thiserror::Error;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_MAX_FILE_BYTES: u64 = 2 * 1024 * 1024;

/// First path segments the storage router claims for itself. Files under a
/// category with one of these names could never be served back.
pub const RESERVED_CATEGORIES: &[&str] = &["upload", "health"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid path segment: {0:?}")]
    InvalidSegment(String),
    #[error("category {0:?} is reserved")]
    ReservedCategory(String),
    #[error("file exceeds the {limit} byte limit")]
    TooLarge { limit: u64 },
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Files on local disk, one directory level per category under `root`.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
    max_file_bytes: u64,
}

impl DiskStore {
    /// Creates the storage root if needed.
    pub async fn open(root: impl Into<PathBuf>, max_file_bytes: u64) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self {
            root,
            max_file_bytes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    /// Whether files can be stored and served under `category`. Touches
    /// nothing on disk.
    pub fn check_category(&self, category: &str) -> Result<(), StoreError> {
        validate_category(category).map(|_| ())
    }

    /// Creates `<root>/<category>` (one level only). An existing directory,
    /// including one created concurrently, is fine.
    pub async fn ensure_category(&self, category: &str) -> Result<PathBuf, StoreError> {
        let dir = self.root.join(validate_category(category)?);
        match fs::create_dir(&dir).await {
            Ok(()) => {
                debug!(category, "created category directory");
                Ok(dir)
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(dir),
            Err(err) => Err(err.into()),
        }
    }

    /// Opens a fresh file in `category` named after a new UUIDv7 plus the
    /// extension of `original_filename`.
    pub async fn begin(
        &self,
        category: &str,
        original_filename: &str,
    ) -> Result<PendingFile, StoreError> {
        let dir = self.ensure_category(category).await?;
        let name = generated_name(original_filename);
        let path = dir.join(&name);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        Ok(PendingFile {
            file,
            path,
            written: 0,
            limit: self.max_file_bytes,
            record: FileRecord::new(original_filename, FileRecord::public_path(category, &name)),
        })
    }

    /// Removes a stored file. `Ok(false)` when it does not exist.
    pub async fn remove(&self, category: &str, name: &str) -> Result<bool, StoreError> {
        let path = self
            .root
            .join(validate_category(category)?)
            .join(validate_segment(name)?);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Removes the file a record points at, ignoring records that do not
    /// describe a stored file.
    pub async fn remove_record(&self, record: &FileRecord) -> Result<bool, StoreError> {
        match record.segments() {
            Some((category, name)) => self.remove(category, name).await,
            None => Err(StoreError::InvalidSegment(record.path.clone())),
        }
    }
}

/// A file being written. Dropping it without `commit` or `discard` leaves
/// the partial bytes on disk.
#[derive(Debug)]
pub struct PendingFile {
    file: File,
    path: PathBuf,
    written: u64,
    limit: u64,
    record: FileRecord,
}

impl PendingFile {
    pub fn record(&self) -> &FileRecord {
        &self.record
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), StoreError> {
        let next = self.written + chunk.len() as u64;
        if next > self.limit {
            return Err(StoreError::TooLarge { limit: self.limit });
        }
        self.file.write_all(chunk).await?;
        self.written = next;
        Ok(())
    }

    /// Flushes the file to disk. On failure the file is removed.
    pub async fn commit(mut self) -> Result<FileRecord, StoreError> {
        if let Err(err) = self.persist().await {
            warn!(path = %self.path.display(), error = %err, "failed to persist upload");
            self.discard().await;
            return Err(err.into());
        }
        Ok(self.record)
    }

    async fn persist(&mut self) -> std::io::Result<()> {
        self.file.flush().await?;
        self.file.sync_all().await
    }

    pub async fn discard(self) {
        let PendingFile { file, path, .. } = self;
        drop(file);
        if let Err(err) = fs::remove_file(&path).await {
            if err.kind() != ErrorKind::NotFound {
                warn!(path = %path.display(), error = %err, "failed to remove partial upload");
            }
        }
    }
}

fn validate_segment(segment: &str) -> Result<&str, StoreError> {
    let usable = !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '\0']);
    if usable {
        Ok(segment)
    } else {
        Err(StoreError::InvalidSegment(segment.to_string()))
    }
}

fn validate_category(category: &str) -> Result<&str, StoreError> {
    let category = validate_segment(category)?;
    if RESERVED_CATEGORIES.contains(&category) {
        return Err(StoreError::ReservedCategory(category.to_string()));
    }
    Ok(category)
}

fn generated_name(original_filename: &str) -> String {
    let stem = Uuid::now_v7().simple().to_string();
    let extension = Path::new(original_filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));
    match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store(limit: u64) -> (tempfile::TempDir, DiskStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = DiskStore::open(dir.path().join("storage"), limit)
            .await
            .expect("open store");
        (dir, store)
    }

    #[tokio::test]
    async fn committed_file_lands_under_its_category() {
        let (_dir, store) = temp_store(DEFAULT_MAX_FILE_BYTES).await;

        let mut pending = store.begin("phones", "photo.png").await.expect("begin");
        pending.write_chunk(b"hello ").await.expect("write");
        pending.write_chunk(b"world").await.expect("write");
        let record = pending.commit().await.expect("commit");

        assert_eq!(record.original_filename, "photo.png");
        assert!(record.path.starts_with("/phones/"));
        assert!(record.path.ends_with(".png"));

        let (category, name) = record.segments().expect("segments");
        let bytes = std::fs::read(store.root().join(category).join(name)).expect("read");
        assert_eq!(bytes, b"hello world");
    }

    #[tokio::test]
    async fn oversized_write_is_refused_and_discard_cleans_up() {
        let (_dir, store) = temp_store(4).await;

        let mut pending = store.begin("phones", "big.bin").await.expect("begin");
        pending.write_chunk(b"1234").await.expect("at limit");
        let err = pending.write_chunk(b"5").await.expect_err("over limit");
        assert!(matches!(err, StoreError::TooLarge { limit: 4 }));

        pending.discard().await;
        let leftovers = std::fs::read_dir(store.root().join("phones")).expect("read dir").count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn ensure_category_is_idempotent_and_single_level() {
        let (_dir, store) = temp_store(DEFAULT_MAX_FILE_BYTES).await;

        store.ensure_category("phones").await.expect("first");
        store.ensure_category("phones").await.expect("second");
        assert!(store.root().join("phones").is_dir());

        for bad in ["", ".", "..", "a/b", "a\\b"] {
            assert!(
                matches!(store.ensure_category(bad).await, Err(StoreError::InvalidSegment(_))),
                "{bad:?}"
            );
        }
    }

    #[tokio::test]
    async fn reserved_categories_are_refused() {
        let (_dir, store) = temp_store(DEFAULT_MAX_FILE_BYTES).await;

        for reserved in RESERVED_CATEGORIES {
            assert!(matches!(
                store.check_category(reserved),
                Err(StoreError::ReservedCategory(_))
            ));
            assert!(matches!(
                store.begin(reserved, "a.txt").await,
                Err(StoreError::ReservedCategory(_))
            ));
            assert!(!store.root().join(reserved).exists());
        }
        store.check_category("uploads").expect("not reserved");
    }

    #[tokio::test]
    async fn concurrent_writers_share_a_new_category() {
        let (_dir, store) = temp_store(DEFAULT_MAX_FILE_BYTES).await;

        let write = |body: &'static [u8]| {
            let store = store.clone();
            async move {
                let mut pending = store.begin("phones", "a.txt").await?;
                pending.write_chunk(body).await?;
                pending.commit().await
            }
        };
        let (first, second, dir_a, dir_b) = tokio::join!(
            write(b"first"),
            write(b"second"),
            store.ensure_category("phones"),
            store.ensure_category("phones"),
        );

        dir_a.expect("ensure a");
        dir_b.expect("ensure b");
        let first = first.expect("first upload");
        let second = second.expect("second upload");
        assert_ne!(first.path, second.path);
        let count = std::fs::read_dir(store.root().join("phones")).expect("read dir").count();
        assert_eq!(count, 2);
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn failed_commit_removes_the_file() {
        let (_dir, store) = temp_store(DEFAULT_MAX_FILE_BYTES).await;
        let dir = store.ensure_category("phones").await.expect("category");
        let path = dir.join("unsynced.bin");
        std::fs::write(&path, b"").expect("create");

        // writes to /dev/full fail with ENOSPC once flushed
        let file = OpenOptions::new()
            .write(true)
            .open("/dev/full")
            .await
            .expect("open /dev/full");
        let mut pending = PendingFile {
            file,
            path: path.clone(),
            written: 0,
            limit: DEFAULT_MAX_FILE_BYTES,
            record: FileRecord::new("unsynced.bin", "/phones/unsynced.bin"),
        };
        let _ = pending.write_chunk(b"bytes").await;

        assert!(pending.commit().await.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn remove_reports_whether_a_file_existed() {
        let (_dir, store) = temp_store(DEFAULT_MAX_FILE_BYTES).await;
        let pending = store.begin("phones", "a.txt").await.expect("begin");
        let record = pending.commit().await.expect("commit");

        assert!(store.remove_record(&record).await.expect("remove"));
        assert!(!store.remove_record(&record).await.expect("remove again"));
    }

    #[test]
    fn generated_names_keep_only_safe_extensions() {
        assert!(generated_name("photo.PNG").ends_with(".PNG"));
        assert!(!generated_name("archive").contains('.'));
        assert!(!generated_name("weird.p n g").contains('.'));
        assert_ne!(generated_name("a.png"), generated_name("a.png"));
    }
}
