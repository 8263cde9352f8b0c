use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a result file: the subcommand and its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

/// Write `<result>.provenance.json` next to `result` with the git revision,
/// solver version, callsite, and the parameters that produced it.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(result: P, payload: Payload) -> Result<PathBuf> {
    let result = result.as_ref();
    let path = sidecar_path(result);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "solver_version": rodmaze::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "command": payload.command,
        "params": payload.params,
        "result": result.to_string_lossy(),
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(result: &Path) -> PathBuf {
    let mut name = result
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("result"));
    name.push(".provenance.json");
    result.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
