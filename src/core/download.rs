use crate::config::cli::FILE_MODE;
use crate::domain::ports::Storage;
use crate::utils::error::{LicenseError, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// 下載後寫入目標目錄的檔名
pub const LICENSE_FILE: &str = "LICENSE";

/// 目錄中存在任一檔案即視為已有授權檔
pub const LICENSE_FILE_NAMES: [&str; 2] = ["LICENSE", "LICENSE.md"];

pub struct LicenseDownloader {
    client: Client,
}

impl LicenseDownloader {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn has_license_file<S: Storage>(storage: &S, root: &Path) -> bool {
        for name in LICENSE_FILE_NAMES {
            if storage.exists(&root.join(name)).await {
                return true;
            }
        }
        false
    }

    /// 目錄沒有授權檔時，將 `url` 下載為 `root/LICENSE`，回傳寫入的路徑
    pub async fn ensure_license_file<S: Storage>(
        &self,
        storage: &S,
        root: &Path,
        url: &str,
    ) -> Result<Option<PathBuf>> {
        if Self::has_license_file(storage, root).await {
            tracing::debug!("License file already present in {}", root.display());
            return Ok(None);
        }

        let out_file = root.join(LICENSE_FILE);
        let bytes = self.download(url, &out_file).await?;
        tracing::info!("Saved {} bytes to {}", bytes, out_file.display());
        Ok(Some(out_file))
    }

    /// 將 `url` 的回應內容串流寫入 `out_file`。
    /// 收到成功狀態碼後才建立檔案，失敗時不留下殘檔。
    pub async fn download(&self, url: &str, out_file: &Path) -> Result<u64> {
        println!("Downloading from {}", url);

        let mut response = self.client.get(url).send().await?;
        tracing::debug!("License response status: {}", response.status());

        if !response.status().is_success() {
            return Err(LicenseError::DownloadError {
                message: format!("{} returned {}", url, response.status()),
            });
        }

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let mut file = options
            .open(out_file)
            .await
            .map_err(|e| LicenseError::file(out_file, e))?;

        let copied = Self::copy_body(&mut response, &mut file, out_file).await;
        drop(file);

        // 串流中斷時刪除殘檔，否則下次執行會誤判已有授權檔
        if copied.is_err() {
            if let Err(e) = tokio::fs::remove_file(out_file).await {
                tracing::warn!("Could not remove partial {}: {}", out_file.display(), e);
            }
        }
        copied
    }

    async fn copy_body(
        response: &mut reqwest::Response,
        file: &mut tokio::fs::File,
        out_file: &Path,
    ) -> Result<u64> {
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk)
                .await
                .map_err(|e| LicenseError::file(out_file, e))?;
            written += chunk.len() as u64;
        }
        file.flush()
            .await
            .map_err(|e| LicenseError::file(out_file, e))?;

        Ok(written)
    }
}

impl Default for LicenseDownloader {
    fn default() -> Self {
        Self::new()
    }
}
