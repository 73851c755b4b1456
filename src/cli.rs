use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the autosave client
#[derive(Parser, Debug)]
#[clap(name = "ledgernote")]
#[clap(about = "Periodic auto-save of a local note draft to a LedgerNote server", long_about = None)]
pub struct Args {
    /// Server base URL
    #[clap(long, default_value = "http://localhost:3000")]
    pub server: String,

    /// Reporting entity the note belongs to
    #[clap(long, value_name = "ID")]
    pub entity: String,

    /// Reporting period being prepared
    #[clap(long, value_name = "ID")]
    pub period: String,

    /// Note identifier within the statement
    #[clap(long, value_name = "ID")]
    pub note: String,

    /// Local JSON draft file holding the form fields
    #[clap(long, value_name = "FILE")]
    pub draft: PathBuf,

    /// Seconds between auto-saves
    #[clap(long, default_value = "30")]
    pub interval_secs: u64,

    /// Author recorded with each save (defaults to a generated id)
    #[clap(long)]
    pub author: Option<String>,
}
