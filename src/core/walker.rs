use crate::core::inserter::LicenseInserter;
use crate::domain::model::{ErrorPolicy, Report};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// 依目錄列舉順序處理 `root` 底下每個一般檔案，走訪錯誤一律中止
pub async fn walk<S: Storage>(
    inserter: &LicenseInserter<'_, S>,
    root: &Path,
    policy: ErrorPolicy,
    report: &mut Report,
) -> Result<()> {
    tracing::debug!("Walking {}", root.display());

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let result = inserter.process_file(entry.path(), report).await;
        policy.resolve(entry.path(), result, report)?;
    }

    Ok(())
}
