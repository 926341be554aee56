use anyhow::{Context, Result};
use clap::Parser;
use maint_scripts::cli::{init_logging, Cli, USAGE};
use maint_scripts::{generate, load_layout, CipherSourceLayout};
use std::fs;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| exit_with_usage(err));
    init_logging(cli.verbosity);

    let layout = match &cli.config {
        Some(path) => load_layout(path)?,
        None => CipherSourceLayout::default(),
    };

    match &cli.output {
        // Render fully before touching the file so a failed run leaves it intact
        Some(path) => {
            let mut rendered = Vec::new();
            generate(
                layout,
                &cli.firefox_source_dir,
                &cli.openssl_source_dir,
                &mut rendered,
            )
            .context("Cipher list generation failed")?;
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => generate(
            layout,
            &cli.firefox_source_dir,
            &cli.openssl_source_dir,
            io::stdout().lock(),
        )
        .context("Cipher list generation failed")?,
    }

    Ok(())
}

// Help and version go to stdout with status 0; every other parse error is a
// usage error.
fn exit_with_usage(err: clap::Error) -> ! {
    if !err.use_stderr() {
        err.exit();
    }
    eprintln!("{}", USAGE);
    eprint!("{}", err);
    std::process::exit(1);
}
