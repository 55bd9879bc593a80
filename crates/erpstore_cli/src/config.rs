use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use erpstore_metadata::MetadataConfig;
use serde::Deserialize;

/// Every section is optional; each subcommand only requires its own.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    pub files: Option<FilesSection>,
    pub metadata: Option<MetadataSection>,
    pub gateway: Option<GatewaySection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilesSection {
    pub bind: String,
    pub storage_root: PathBuf,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataSection {
    pub bind: String,
    pub sqlite_path: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_reconnect_interval_secs")]
    pub reconnect_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySection {
    pub bind: String,
    pub file_server_url: String,
    pub metadata_url: String,
}

fn default_max_file_bytes() -> u64 {
    erpstore_files::DEFAULT_MAX_FILE_BYTES
}

fn default_max_request_bytes() -> usize {
    32 * 1024 * 1024
}

fn default_max_connections() -> u32 {
    5
}

fn default_reconnect_interval_secs() -> u64 {
    5
}

impl RuntimeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("invalid config TOML at {}", path.display()))
    }

    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn files(&self) -> Result<&FilesSection> {
        self.files.as_ref().context("missing [files] section")
    }

    pub fn metadata(&self) -> Result<&MetadataSection> {
        self.metadata.as_ref().context("missing [metadata] section")
    }

    pub fn gateway(&self) -> Result<&GatewaySection> {
        self.gateway.as_ref().context("missing [gateway] section")
    }
}

impl MetadataSection {
    pub fn to_metadata_config(&self) -> MetadataConfig {
        MetadataConfig {
            sqlite_path: self.sqlite_path.clone(),
            max_connections: self.max_connections,
            reconnect_interval: Duration::from_secs(self.reconnect_interval_secs),
        }
    }

    /// Directory that has to exist before SQLite can create the database
    /// file. `None` for `sqlite:` URIs and bare file names.
    pub fn database_dir(&self) -> Option<&Path> {
        if self.sqlite_path.starts_with("sqlite:") {
            return None;
        }
        Path::new(&self.sqlite_path)
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }
}
