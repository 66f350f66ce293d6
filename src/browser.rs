use anyhow::{anyhow, Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use url::Url;

use crate::types::Certificate;

/// Where the two static certificate files live.
#[derive(Debug, Clone)]
pub struct CertificateAssets {
    pub dir: PathBuf,
    pub director: PathBuf,
    pub member: PathBuf,
}

impl CertificateAssets {
    pub fn path(&self, cert: Certificate) -> PathBuf {
        match cert {
            Certificate::Director => self.dir.join(&self.director),
            Certificate::Member => self.dir.join(&self.member),
        }
    }

    /// `file://` URI for the certificate. The file does not have to exist.
    pub fn uri(&self, cert: Certificate) -> Result<String> {
        let path = self.path(cert);
        // `absolute` never produces the `\\?\` verbatim form on Windows.
        let abs = std::path::absolute(&path)
            .with_context(|| format!("resolving {}", path.display()))?;
        file_uri(&abs)
    }
}

/// Build a `file://` URI from an absolute path.
pub fn file_uri(abs: &Path) -> Result<String> {
    let url = Url::from_file_path(abs)
        .map_err(|()| anyhow!("not an absolute path: {}", abs.display()))?;
    Ok(url.into())
}

/// Hands a URI to something that can show it.
pub trait Launcher {
    fn open(&mut self, uri: &str) -> Result<()>;
}

/// Default browser of the host OS. Spawns the platform opener and does not wait for it.
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(uri: &str) -> Command {
        if cfg!(target_os = "windows") {
            // Straight to the shell handler; cmd.exe would re-parse `&` in the path.
            let mut c = Command::new("rundll32");
            c.args(["url.dll,FileProtocolHandler", uri]);
            c
        } else if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.arg(uri);
            c
        } else {
            let mut c = Command::new("xdg-open");
            c.arg(uri);
            c
        }
    }
}

impl Launcher for SystemBrowser {
    fn open(&mut self, uri: &str) -> Result<()> {
        let mut cmd = Self::command(uri);
        cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
        cmd.spawn()
            .with_context(|| format!("spawning {:?}", cmd.get_program()))?;
        Ok(())
    }
}

/// `--no-launch`: print the URI instead of opening it.
pub struct PrintUri;

impl Launcher for PrintUri {
    fn open(&mut self, uri: &str) -> Result<()> {
        writeln!(io::stdout().lock(), "Certificate: {uri}").context("writing stdout")?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records every URI instead of opening it. Optionally fails each call.
    #[derive(Default)]
    pub struct RecordingLauncher {
        pub opened: Vec<String>,
        pub fail: bool,
    }

    impl Launcher for RecordingLauncher {
        fn open(&mut self, uri: &str) -> Result<()> {
            self.opened.push(uri.to_string());
            if self.fail {
                anyhow::bail!("no browser available");
            }
            Ok(())
        }
    }
}
