pub mod cli;

use crate::domain::model::{ErrorPolicy, Snippet};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

pub const LICENSE_SNIPPET_VAR: &str = "LICENSE_SNIPPET";
pub const LICENSE_URL_VAR: &str = "LICENSE_URL";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "license-inserter")]
#[command(about = "Insert a license header into every source file of a directory tree")]
#[command(
    after_help = "Environment:\n  LICENSE_SNIPPET  header text (required), use \\n between lines\n  LICENSE_URL      license file to download when the directory has none"
)]
pub struct CliConfig {
    /// File or directory to process
    pub path: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Keep processing other files when one cannot be read or written")]
    pub keep_going: bool,

    #[arg(long, help = "Print the final summary as JSON")]
    pub json: bool,
}

/// 從環境變數讀取的設定，空字串視為未設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvConfig {
    pub license_snippet: Option<String>,
    pub license_url: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            license_snippet: non_empty_var(LICENSE_SNIPPET_VAR),
            license_url: non_empty_var(LICENSE_URL_VAR),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// 單次執行所需的完整設定 (命令列參數 + 環境變數)
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: PathBuf,
    pub snippet: Snippet,
    pub license_url: Option<String>,
    pub error_policy: ErrorPolicy,
}

impl RunConfig {
    pub fn new(target: impl Into<PathBuf>, env: EnvConfig) -> Result<Self> {
        let raw = validate_required_field(LICENSE_SNIPPET_VAR, &env.license_snippet)?;
        validate_non_empty_string(LICENSE_SNIPPET_VAR, raw)?;

        Ok(Self {
            target: target.into(),
            snippet: Snippet::parse(raw),
            license_url: env.license_url,
            error_policy: ErrorPolicy::default(),
        })
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let config = Self::new(&cli.path, EnvConfig::from_env())?;
        Ok(config.with_error_policy(if cli.keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::FailFast
        }))
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

impl ConfigProvider for RunConfig {
    fn target(&self) -> &Path {
        &self.target
    }

    fn snippet(&self) -> &Snippet {
        &self.snippet
    }

    fn license_url(&self) -> Option<&str> {
        self.license_url.as_deref()
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("path", &self.target)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
