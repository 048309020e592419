use crate::domain::model::CommentTable;
use std::path::{Component, Path};

/// 第三方套件目錄
pub const DEPENDENCY_DIR: &str = "node_modules";

/// 壓縮檔的檔名標記，例如 `app.min.js`
pub const MINIFIED_MARKER: &str = ".min.";

/// 檔名最後一個 `.` 起的字尾，所以 `.gitignore` 的副檔名就是自己
pub fn extension(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// 回傳 `path` 的註解前綴，不適用的檔案回傳 `None`
pub fn classify(table: &CommentTable, path: &Path) -> Option<&'static str> {
    let file_name = path.file_name()?.to_str()?;

    let prefix = extension(file_name)
        .and_then(|ext| table.prefix_for(ext))
        .or_else(|| table.prefix_for(file_name))?;

    if is_excluded(path, file_name) {
        return None;
    }

    Some(prefix)
}

fn is_excluded(path: &Path, file_name: &str) -> bool {
    let in_dependency_dir = path
        .parent()
        .map(|parent| {
            parent
                .components()
                .any(|c| matches!(c, Component::Normal(name) if name == DEPENDENCY_DIR))
        })
        .unwrap_or(false);

    in_dependency_dir || file_name.contains(MINIFIED_MARKER)
}
