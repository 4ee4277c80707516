//! CLI argument parsing and command definitions

use camino::Utf8PathBuf;
use catalog_core::ProductDraft;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "File-backed product catalog")]
pub struct Args {
    /// Optional config file (TOML only). Default: .catalog.toml if present.
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Backing file. Overrides `store.path` from the config.
    #[arg(long, global = true)]
    pub file: Option<Utf8PathBuf>,

    /// Output JSON instead of human format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// List every product in insertion order
    #[command(visible_alias = "ls")]
    List,
    /// Show one product
    Show(ShowArgs),
    /// Add a product; the id is assigned by the store
    Add(AddArgs),
    /// Replace every field of a product, keeping its id
    Update(UpdateArgs),
    /// Delete a product
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
    /// Write a default .catalog.toml and an empty backing file
    Init(InitArgs),
}

#[derive(Debug, Parser)]
pub struct ShowArgs {
    pub id: u64,
}

/// Product fields shared by add and update. Omitted flags stay blank so the
/// store reports them.
#[derive(Debug, Clone, Default, Parser)]
pub struct ProductFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,
    #[arg(long)]
    pub thumbnail: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<f64>,
}

impl ProductFields {
    #[must_use]
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            thumbnail: self.thumbnail.unwrap_or_default(),
            code: self.code.unwrap_or_default(),
            stock: self.stock.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Parser)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: ProductFields,
}

#[derive(Debug, Parser)]
pub struct UpdateArgs {
    pub id: u64,

    #[command(flatten)]
    pub fields: ProductFields,
}

#[derive(Debug, Parser)]
pub struct DeleteArgs {
    pub id: u64,
}

#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub path: Utf8PathBuf,

    /// Overwrite an existing .catalog.toml
    #[arg(long)]
    pub force: bool,
}

/// Options every command shares.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<Utf8PathBuf>,
    pub file: Option<Utf8PathBuf>,
    pub json: bool,
}

impl Args {
    #[must_use]
    pub fn split(self) -> (GlobalOptions, Command) {
        (
            GlobalOptions {
                config: self.config,
                file: self.file,
                json: self.json,
            },
            self.command,
        )
    }
}
