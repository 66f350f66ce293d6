use clap::Parser;
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Cohort welcome: greet, verify the reserved identity, offer a certificate
#[derive(Parser, Debug)]
#[command(name = "cohort-welcome", version, about = "Cohort welcome and certificate viewer")]
pub struct Cli {
    /// Directory holding both certificate files
    #[arg(long, env = "COHORT_WELCOME_CERT_DIR", default_value = Defaults::CERT_DIR)]
    pub cert_dir: PathBuf,

    /// Director certificate file name (inside --cert-dir)
    #[arg(long, default_value = Defaults::DIRECTOR_CERT)]
    pub director_cert: PathBuf,

    /// Member certificate file name (inside --cert-dir)
    #[arg(long, default_value = Defaults::MEMBER_CERT)]
    pub member_cert: PathBuf,

    /// Cohort name used in greetings
    #[arg(long, env = "COHORT_WELCOME_COHORT", default_value = Defaults::COHORT)]
    pub cohort: String,

    /// Print the certificate URI instead of opening a browser
    #[arg(long)]
    pub no_launch: bool,

    /// Optional path to write a JSON session report (pretty-printed)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}
