//! Shared E2E test helpers for the `cohort-welcome` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use std::time::Duration;

pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Command with a fresh certificate directory and the browser disabled.
/// Returns (command, _guard): keep the guard alive for the test's duration.
pub fn welcome_cmd() -> (assert_cmd::Command, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("create temp cert dir");
    std::fs::write(tmp.path().join("director_certificate.html"), "<html>director</html>")
        .expect("write director cert");
    std::fs::write(tmp.path().join("member_certificate.html"), "<html>member</html>")
        .expect("write member cert");

    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("cohort-welcome");
    cmd.timeout(TIMEOUT);
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("COHORT_WELCOME_CERT_DIR");
    cmd.env_remove("COHORT_WELCOME_COHORT");
    cmd.args(["--no-launch", "--cert-dir", tmp.path().to_str().expect("valid utf8")]);
    (cmd, tmp)
}
