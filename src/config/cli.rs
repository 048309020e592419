use crate::domain::ports::Storage;
use crate::utils::error::{LicenseError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// 新建檔案的權限
pub const FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path)
            .await
            .map_err(|e| LicenseError::file(path, e))
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let mut file = options
            .open(path)
            .await
            .map_err(|e| LicenseError::file(path, e))?;
        file.write_all(data)
            .await
            .map_err(|e| LicenseError::file(path, e))?;
        file.flush().await.map_err(|e| LicenseError::file(path, e))?;
        Ok(())
    }

    /// 只有明確的 NotFound 才視為不存在
    async fn exists(&self, path: &Path) -> bool {
        match fs::metadata(path).await {
            Ok(_) => true,
            Err(e) => e.kind() != ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.go");
        let storage = LocalStorage::new();

        assert!(!storage.exists(&path).await);
        storage.write_file(&path, b"package main\n").await.unwrap();
        assert!(storage.exists(&path).await);
        assert_eq!(storage.read_file(&path).await.unwrap(), b"package main\n");

        storage.write_file(&path, b"x").await.unwrap();
        assert_eq!(storage.read_file(&path).await.unwrap(), b"x");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_created_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new.sql");
        LocalStorage::new().write_file(&path, b"select 1;\n").await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        // umask 只會移除權限位元
        assert_eq!(mode & 0o777 & !FILE_MODE, 0);
    }

    #[tokio::test]
    async fn test_read_missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.go");
        let err = LocalStorage::new().read_file(&path).await.unwrap_err();
        assert!(err.to_string().contains("missing.go"));
    }
}
