use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// `git clone --depth 1 <repo> <dest>` with captured output; the
/// template history is never wanted. Fails up front with a useful
/// message when git itself is missing.
pub fn clone_template(repo: &str, dest: &Path) -> Result<()> {
    ensure_tool("git")?;
    let output = Command::new("git")
        .args(["clone", "--depth", "1", repo])
        .arg(dest)
        .output()
        .context("failed to launch git")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "failed to clone {}: {}. Make sure git is installed and you have internet access.",
            repo,
            stderr.trim()
        );
    }
    Ok(())
}

/// Strips the template's version-control metadata and starts a fresh
/// repository, so the new project's first commit is its own.
pub fn reinit_repo(dest: &Path) -> Result<()> {
    let git_dir = dest.join(".git");
    if git_dir.exists() {
        fs::remove_dir_all(&git_dir)
            .with_context(|| format!("failed to remove {}", git_dir.display()))?;
    }
    let output = Command::new("git")
        .arg("init")
        .current_dir(dest)
        .output()
        .context("failed to launch git")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git init failed: {}", stderr.trim());
    }
    Ok(())
}

/// Runs the template's setup script with inherited stdio; the user sees
/// its output directly and it takes as long as it takes.
pub fn run_setup(dest: &Path) -> Result<()> {
    ensure_tool("pnpm")?;
    let status = Command::new("pnpm")
        .arg("setup")
        .current_dir(dest)
        .status()
        .context("failed to launch pnpm")?;
    if !status.success() {
        bail!("pnpm setup exited with {}", status);
    }
    Ok(())
}

fn ensure_tool(name: &str) -> Result<()> {
    which::which(name)
        .map(|_| ())
        .with_context(|| format!("`{}` was not found on PATH", name))
}
