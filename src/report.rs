use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::flow::Finished;
use crate::types::SessionReport;

pub fn emit(done: &Finished, out: &Path) -> Result<()> {
    let report = SessionReport { name: &done.name, role: done.role, outcome: &done.outcome };
    let json = serde_json::to_string_pretty(&report)?;
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).ok();
    }
    fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
