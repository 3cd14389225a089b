use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Command line options for the calculator
pub struct Options {
    /// Read commands from a file, one per line, instead of the console
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Prompt shown before each interactive command
    #[arg(long, default_value = "calc> ")]
    pub prompt: String,

    /// Diagnostic log level, overridden by RUST_LOG when set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
