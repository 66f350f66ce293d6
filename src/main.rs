use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod browser;
mod cli;
mod console;
mod credential;
mod defaults;
mod flow;
mod report;
mod types;

use crate::browser::{CertificateAssets, PrintUri, SystemBrowser};
use crate::cli::Cli;
use crate::console::Terminal;
use crate::credential::FixedPins;
use crate::flow::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let settings = Settings {
        assets: CertificateAssets {
            dir: cli.cert_dir,
            director: cli.director_cert,
            member: cli.member_cert,
        },
        cohort: cli.cohort,
    };

    let mut console = Terminal::new();
    let pins = FixedPins::default();

    let done = if cli.no_launch {
        flow::run(&mut console, &pins, &mut PrintUri, &settings)?
    } else {
        flow::run(&mut console, &pins, &mut SystemBrowser, &settings)?
    };

    if let Some(out) = cli.report {
        report::emit(&done, &out)?;
    }
    Ok(())
}

/// Logs go to stderr; stdout belongs to the prompts.
fn init_logging(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
