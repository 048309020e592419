pub mod classify;
pub mod download;
pub mod engine;
pub mod inserter;
pub mod walker;

pub use crate::domain::model::{CommentTable, ErrorPolicy, Outcome, Report, Snippet};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
