//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use fintrack_core::{TransactionKind, VERSION};

/// fintrack - a personal finance tracker for the terminal
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding the ledger file
    #[arg(short = 'd', long, global = true, env = "FINTRACK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII-only output (no unicode tables or symbols)
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new transaction
    Add(AddArgs),

    /// Edit an existing transaction
    Edit(EditArgs),

    /// Delete a transaction
    Delete(DeleteArgs),

    /// List transactions, most recent first
    List(ListArgs),

    /// Show the summary cards: balance, totals, this month's expenses
    Summary(SummaryArgs),

    /// Break down this month's expenses by category
    Categories(CategoriesArgs),

    /// Show the income/expense series for recent months
    Monthly(MonthlyArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Income/expense tag as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

#[derive(Args)]
pub struct AddArgs {
    /// income or expense
    #[arg(value_enum, value_name = "KIND")]
    pub kind: KindArg,

    /// Amount in currency units (positive magnitude)
    #[arg(value_name = "AMOUNT")]
    pub amount: f64,

    /// What the transaction was for
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Grouping category (any string)
    #[arg(short, long, default_value = "General")]
    pub category: String,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Transaction ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New amount
    #[arg(long)]
    pub amount: Option<f64>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New kind (income or expense)
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Transaction ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Reference date for the monthly card (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CategoriesArgs {
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct MonthlyArgs {
    /// Number of months in the window, ending at the reference month
    #[arg(long, default_value_t = 6)]
    pub months: u32,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
