use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Root of the VM source tree
    pub root: PathBuf,
    /// JSON file overriding the directory layout
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Fail if any embedded source is out of date instead of writing
    #[arg(long)]
    pub check: bool,
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
