use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sq")]
#[command(about = "SciQuest Heroes account CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config directory (defaults to $SQ_CONFIG_DIR, else ./.sq)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Account type the user arrived with (student, parent, teacher)
    #[arg(long = "type", global = true)]
    pub(crate) r#type: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
