use crate::config::LICENSE_URL_VAR;
use crate::core::download::LicenseDownloader;
use crate::core::inserter::LicenseInserter;
use crate::core::walker::walk;
use crate::domain::model::{CommentTable, Report};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{LicenseError, Result};
use crate::utils::validation::validate_url;

pub struct InserterEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    table: CommentTable,
    downloader: LicenseDownloader,
}

impl<S: Storage, C: ConfigProvider> InserterEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_table(storage, config, CommentTable::default())
    }

    pub fn with_table(storage: S, config: C, table: CommentTable) -> Self {
        Self {
            storage,
            config,
            table,
            downloader: LicenseDownloader::new(),
        }
    }

    /// 處理設定的目標：整個目錄樹或單一檔案
    pub async fn run(&self) -> Result<Report> {
        let target = self.config.target();
        let metadata = tokio::fs::metadata(target)
            .await
            .map_err(|e| LicenseError::file(target, e))?;

        let inserter = LicenseInserter::new(&self.storage, &self.table, self.config.snippet());
        let policy = self.config.error_policy();
        let mut report = Report::new();

        if metadata.is_dir() {
            tracing::info!("Processing directory {}", target.display());
            if let Some(url) = self.config.license_url() {
                validate_url(LICENSE_URL_VAR, url)?;
                self.downloader
                    .ensure_license_file(&self.storage, target, url)
                    .await?;
            }
            walk(&inserter, target, policy, &mut report).await?;
        } else if metadata.is_file() {
            tracing::info!("Processing file {}", target.display());
            let result = inserter.process_file(target, &mut report).await;
            policy.resolve(target, result, &mut report)?;
        } else {
            tracing::warn!(
                "{} is neither a regular file nor a directory, nothing to do",
                target.display()
            );
        }

        tracing::info!("Done: {}", report);
        Ok(report)
    }
}
