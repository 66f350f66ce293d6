//! The interactive session:
//!
//! `start -> name_captured -> role_resolved -> { [denied] | greeted -> certificate_offered -> [done] }`
//!
//! Every step runs once. Nothing loops back.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::browser::{CertificateAssets, Launcher};
use crate::console::Console;
use crate::credential::CredentialCheck;
use crate::defaults::Defaults;
use crate::types::{Certificate, Outcome, Role};

pub struct Settings {
    pub assets: CertificateAssets,
    pub cohort: String,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct Finished {
    pub name: String,
    pub role: Role,
    pub outcome: Outcome,
}

pub fn capture_name(console: &mut impl Console) -> Result<String> {
    let line = console.prompt_line(Defaults::NAME_PROMPT)?;
    Ok(line.trim().to_string())
}

pub fn is_reserved_identity(name: &str) -> bool {
    name.to_lowercase() == Defaults::RESERVED_IDENTITY.to_lowercase()
}

/// Only the reserved identity is asked for a PIN.
pub fn resolve_role(
    name: &str,
    console: &mut impl Console,
    check: &impl CredentialCheck,
) -> Result<Role> {
    if !is_reserved_identity(name) {
        return Ok(Role::Regular);
    }
    let pin = console.prompt_secret(Defaults::PIN_PROMPT)?;
    Ok(check.verify(&pin))
}

/// Prints the greeting. Returns `false` when the run must stop here.
pub fn dispatch_greeting(
    role: Role,
    name: &str,
    console: &mut impl Console,
    cohort: &str,
) -> Result<bool> {
    let title = match role {
        Role::Denied => {
            console.say("Access denied. Incorrect PIN.")?;
            return Ok(false);
        }
        Role::Admin => "Director",
        Role::Regular => "Member",
    };
    console.say(&format!("\nAyo! {name} Congrats on starting your AI Native Journey!"))?;
    console.say(&format!("Welcome {name}, Pursuit AI-Native {cohort} cohort {title}."))?;
    Ok(true)
}

pub fn offer_certificate(
    role: Role,
    name: &str,
    console: &mut impl Console,
    assets: &CertificateAssets,
    launcher: &mut impl Launcher,
) -> Result<Outcome> {
    if role == Role::Denied {
        return Ok(Outcome::Denied);
    }

    let answer = console.prompt_line(Defaults::CERT_PROMPT)?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        console.say(&format!("No problem, {name}. You can view your certificate any time."))?;
        return Ok(Outcome::Declined);
    }

    let Some(cert) = Certificate::for_role(role) else {
        return Ok(Outcome::Denied);
    };
    let uri = assets.uri(cert)?;
    info!(certificate = ?cert, %uri, "opening certificate");
    if let Err(e) = launcher.open(&uri) {
        // Best-effort: a missing browser is the host's problem.
        warn!(error = %e, %uri, "could not open certificate");
    }
    Ok(Outcome::Opened { certificate: cert, uri })
}

pub fn run(
    console: &mut impl Console,
    check: &impl CredentialCheck,
    launcher: &mut impl Launcher,
    settings: &Settings,
) -> Result<Finished> {
    let name = capture_name(console)?;
    debug!(name_len = name.len(), "name captured");

    let role = resolve_role(&name, console, check)?;
    info!(?role, "role resolved");

    let outcome = if dispatch_greeting(role, &name, console, &settings.cohort)? {
        offer_certificate(role, &name, console, &settings.assets, launcher)?
    } else {
        Outcome::Denied
    };

    Ok(Finished { name, role, outcome })
}
