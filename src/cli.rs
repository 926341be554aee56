use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Printed before clap's diagnostic when the arguments are wrong
pub const USAGE: &str = "Syntax: get-mozilla-ciphers <firefox-source-dir> <openssl-source-dir>";

#[derive(Parser, Debug)]
#[command(name = "get-mozilla-ciphers")]
#[command(
    about = "Generate the client cipher list include file from Firefox and OpenSSL sources",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Firefox source tree
    pub firefox_source_dir: PathBuf,

    /// OpenSSL source tree
    pub openssl_source_dir: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file overriding source file locations and markers
    #[arg(short, long, env = "MOZILLA_CIPHERS_LAYOUT")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Log level for a `-v` count; `RUST_LOG` still takes precedence
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Route `log` output to stderr so stdout carries only generated text
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}
