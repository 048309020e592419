use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// `LICENSE_SNIPPET` 中代表換行的兩字元字面值
pub const SNIPPET_LINE_SEPARATOR: &str = "\\n";

/// 副檔名 (`.go`) 或完整檔名 (`Dockerfile`) 對應的註解前綴
#[derive(Debug, Clone)]
pub struct CommentTable {
    entries: HashMap<&'static str, &'static str>,
}

impl CommentTable {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn prefix_for(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }
}

impl Default for CommentTable {
    fn default() -> Self {
        Self::new(&[
            (".go", "//"),
            (".js", "//"),
            (".ts", "//"),
            (".proto", "//"),
            (".sql", "--"),
            (".gitignore", "#"),
            (".dockerignore", "#"),
            (".helmignore", "#"),
            (".tf", "#"),
            (".tfvars", "#"),
            (".bashrc", "#"),
            (".sh", "#"),
            (".yaml", "#"),
            (".yml", "#"),
            ("Dockerfile", "#"),
            ("Makefile", "#"),
        ])
    }
}

/// 授權標頭文字，每個元素一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    lines: Vec<String>,
}

impl Snippet {
    pub fn parse(raw: &str) -> Self {
        Self {
            lines: raw
                .split(SNIPPET_LINE_SEPARATOR)
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 每行加上 `prefix` 註解，最後補一個空行
    pub fn render(&self, prefix: &str) -> String {
        let mut header = String::new();
        for line in &self.lines {
            header.push_str(prefix);
            header.push(' ');
            header.push_str(line);
            header.push('\n');
        }
        header.push('\n');
        header
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Inserted,
    AlreadyLicensed,
    DoNotEdit,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Inserted => "[INSERTED]   ",
            Outcome::AlreadyLicensed => "[ALREADY]    ",
            Outcome::DoNotEdit => "[DO NOT EDIT]",
        }
    }
}

/// 走訪目錄時，單一檔案讀寫失敗的處理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// 第一個錯誤就中止整個執行
    #[default]
    FailFast,
    /// 記錄錯誤、計入報告後繼續
    Continue,
}

impl ErrorPolicy {
    pub fn resolve(
        self,
        path: &Path,
        result: Result<Option<Outcome>>,
        report: &mut Report,
    ) -> Result<()> {
        match result {
            Ok(_) => Ok(()),
            Err(e) if self == ErrorPolicy::Continue => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                report.record_failure();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub added: usize,
    pub skipped: usize,
    pub do_not_modify: usize,
    pub failed: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Inserted => self.added += 1,
            Outcome::AlreadyLicensed => self.skipped += 1,
            Outcome::DoNotEdit => self.do_not_modify += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn total(&self) -> usize {
        self.added + self.skipped + self.do_not_modify + self.failed
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "added: {}, already licensed: {}, do not edit: {}",
            self.added, self.skipped, self.do_not_modify
        )?;
        if self.failed > 0 {
            write!(f, ", failed: {}", self.failed)?;
        }
        Ok(())
    }
}
