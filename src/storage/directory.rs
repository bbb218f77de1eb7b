use crate::storage::traits::{ImageStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Writes images as plain files into a single directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Opens `root` as an image store, creating it (and parents) if absent
    ///
    /// # Arguments
    ///
    /// * `root` - Directory that will receive every image
    ///
    /// # Returns
    ///
    /// * `Ok(DirectoryStore)` - Directory exists and is ready
    /// * `Err(StorageError)` - Directory could not be created
    pub async fn create(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        tracing::debug!("Output directory ready: {}", root.display());
        Ok(Self { root })
    }

    /// Directory this store writes into
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, file_name: &str) -> StorageResult<PathBuf> {
        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains('/')
            || file_name.contains('\\')
        {
            return Err(StorageError::InvalidName(file_name.to_string()));
        }
        Ok(self.root.join(file_name))
    }
}

#[async_trait]
impl ImageStore for DirectoryStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> StorageResult<PathBuf> {
        let path = self.path_for(file_name)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_makes_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("a").join("b");

        let store = DirectoryStore::create(&root).await.unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[tokio::test]
    async fn test_create_existing_directory_is_ok() {
        let tmp = TempDir::new().unwrap();
        assert!(DirectoryStore::create(tmp.path()).await.is_ok());
        assert!(DirectoryStore::create(tmp.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_store_writes_file() {
        let tmp = TempDir::new().unwrap();
        let store = DirectoryStore::create(tmp.path()).await.unwrap();

        let path = store.store("a.png", b"png-bytes").await.unwrap();
        assert_eq!(path, tmp.path().join("a.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn test_store_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let store = DirectoryStore::create(tmp.path()).await.unwrap();

        store.store("logo.png", b"first").await.unwrap();
        store.store("logo.png", b"second").await.unwrap();

        assert_eq!(
            std::fs::read(tmp.path().join("logo.png")).unwrap(),
            b"second"
        );
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_store_rejects_path_like_names() {
        let tmp = TempDir::new().unwrap();
        let store = DirectoryStore::create(tmp.path()).await.unwrap();

        for name in ["", ".", "..", "a/b.png", "..\\x.png"] {
            assert!(matches!(
                store.store(name, b"x").await,
                Err(StorageError::InvalidName(_))
            ));
        }
    }
}
