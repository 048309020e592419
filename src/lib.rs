pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, EnvConfig, RunConfig};
pub use core::{engine::InserterEngine, inserter::LicenseInserter};
pub use domain::model::{CommentTable, ErrorPolicy, Outcome, Report, Snippet};
pub use utils::error::{LicenseError, Result};
