//! Configuration file loading and structures

use crate::cli::{GlobalOptions, OutputFormat};
use anyhow::Result;
use camino::Utf8PathBuf;
use catalog_core::{CatalogConfig, CatalogStore, config::CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;

/// One parse of .catalog.toml: the CLI's own keys plus the core settings.
#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    #[serde(flatten)]
    pub catalog: CatalogConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            format: Some(OutputFormat::Human),
            catalog: CatalogConfig::default(),
        }
    }
}

pub fn load_config(path: Option<&Utf8PathBuf>) -> Result<ConfigFile> {
    let config_path = path
        .cloned()
        .unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE));

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        let cfg: ConfigFile = toml::from_str(&content)?;
        cfg.catalog.check()?;
        Ok(cfg)
    } else {
        Ok(ConfigFile::default())
    }
}

/// Everything a command needs: where the catalog lives and how to print.
#[derive(Debug)]
pub struct Session {
    pub store_path: Utf8PathBuf,
    pub format: OutputFormat,
}

impl Session {
    /// Resolve the backing file (`--file`, then `store.path`, then the
    /// default) and the output format (`--json`, then `format`).
    pub fn resolve(opts: &GlobalOptions) -> Result<Self> {
        let cfg = load_config(opts.config.as_ref())?;
        let format = if opts.json {
            OutputFormat::Json
        } else {
            cfg.format.unwrap_or(OutputFormat::Human)
        };

        let store_path = opts
            .file
            .clone()
            .unwrap_or_else(|| cfg.catalog.store.path_or_default());

        tracing::debug!("Using catalog {store_path} ({format:?} output)");
        Ok(Self { store_path, format })
    }

    /// Lenient open for read-only commands.
    pub fn open_store(&self) -> CatalogStore {
        CatalogStore::open(self.store_path.clone())
    }

    /// Strict open for commands that rewrite the file, so an unreadable
    /// catalog is never replaced by a fresh one.
    pub fn open_store_for_write(&self) -> Result<CatalogStore> {
        Ok(CatalogStore::open_strict(self.store_path.clone())?)
    }
}
