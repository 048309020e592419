use crate::core::classify::classify;
use crate::domain::model::{CommentTable, Outcome, Report, Snippet};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// 檢查既有標記時只看檔案開頭的行數
pub const HEADER_WINDOW: usize = 5;

pub const COPYRIGHT_MARKER: &str = "Copyright";
pub const DO_NOT_EDIT_MARKER: &str = "DO NOT EDIT";

/// 取 `content` 前 `HEADER_WINDOW` 行，仍以 `\n` 連接
pub fn header_window(content: &str) -> String {
    content
        .split('\n')
        .take(HEADER_WINDOW)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 不需修改的檔案回傳對應結果，需要插入標頭時回傳 `None`
pub fn existing_marker(content: &str) -> Option<Outcome> {
    let window = header_window(content);
    if window.contains(COPYRIGHT_MARKER) {
        Some(Outcome::AlreadyLicensed)
    } else if window.contains(DO_NOT_EDIT_MARKER) {
        Some(Outcome::DoNotEdit)
    } else {
        None
    }
}

pub struct LicenseInserter<'a, S: Storage> {
    storage: S,
    table: &'a CommentTable,
    snippet: &'a Snippet,
}

impl<'a, S: Storage> LicenseInserter<'a, S> {
    pub fn new(storage: S, table: &'a CommentTable, snippet: &'a Snippet) -> Self {
        Self {
            storage,
            table,
            snippet,
        }
    }

    /// 檔案尚未標記時，在開頭插入授權標頭
    pub async fn insert(&self, path: &Path, prefix: &str) -> Result<Outcome> {
        let original = self.storage.read_file(path).await?;

        // 非 UTF-8 內容只影響標記搜尋，寫回時保留原始位元組
        if let Some(outcome) = existing_marker(&String::from_utf8_lossy(&original)) {
            return Ok(outcome);
        }

        let header = self.snippet.render(prefix);
        let mut content = Vec::with_capacity(header.len() + original.len());
        content.extend_from_slice(header.as_bytes());
        content.extend_from_slice(&original);

        self.storage.write_file(path, &content).await?;
        Ok(Outcome::Inserted)
    }

    /// 分類後插入標頭，每個適用檔案輸出一行狀態
    pub async fn process_file(&self, path: &Path, report: &mut Report) -> Result<Option<Outcome>> {
        let Some(prefix) = classify(self.table, path) else {
            tracing::debug!("Not applicable: {}", path.display());
            return Ok(None);
        };

        let outcome = self.insert(path, prefix).await?;
        println!("{} {}", outcome.label(), path.display());
        report.record(outcome);
        Ok(Some(outcome))
    }
}
