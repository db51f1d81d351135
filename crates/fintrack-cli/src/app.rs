//! Application context for the fintrack CLI.
//!
//! Bundles the resolved data directory, currency symbol, and UI flags so
//! handlers do not re-derive them from the environment.

use std::path::PathBuf;

use fintrack_core::{JsonFileStore, LedgerStore, LoadOutcome};

use crate::cli::Cli;
use crate::config::{default_data_dir, load_config};
use crate::ui::UiContext;

pub struct AppContext {
    pub data_dir: PathBuf,
    pub currency: String,
    pub quiet: bool,
    no_color: bool,
    ascii: bool,
}

impl AppContext {
    /// Resolve context from CLI flags, the optional config file, and
    /// environment defaults. Flag beats config beats XDG default.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let config = load_config()?;

        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => match config.ledger.data_dir {
                Some(dir) => PathBuf::from(dir),
                None => default_data_dir()?,
            },
        };
        let currency = config.ui.currency.unwrap_or_else(|| "$".to_string());

        Ok(Self {
            data_dir,
            currency,
            quiet: cli.quiet,
            no_color: cli.no_color,
            ascii: cli.ascii,
        })
    }

    /// Build a UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.no_color, self.ascii)
    }

    /// Open the ledger from the data directory.
    ///
    /// A recovered (malformed-blob) load prints a warning to stderr; it is
    /// never fatal. First-run seeding is mentioned unless quiet.
    pub fn open_ledger(&self) -> anyhow::Result<LedgerStore<JsonFileStore>> {
        let blobs = JsonFileStore::open(&self.data_dir)?;
        let ledger = LedgerStore::open(blobs)?;
        match ledger.load_outcome() {
            LoadOutcome::Recovered => {
                eprintln!(
                    "warning: stored ledger in {} was unreadable; starting with an empty ledger",
                    self.data_dir.display()
                );
            }
            LoadOutcome::Seeded if !self.quiet => {
                eprintln!("note: no ledger found; seeded example transactions");
            }
            _ => {}
        }
        Ok(ledger)
    }
}
