use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Removed after rewriting so the first `pnpm install` resolves fresh
/// against the renamed packages.
pub const LOCKFILE_NAME: &str = "pnpm-lock.yaml";

/// Entry names that are never rewritten: dependency caches and version
/// control metadata are pruned wherever they appear in the tree, and the
/// lockfile is skipped because it is deleted outright afterwards.
const PRUNED_NAMES: &[&str] = &["node_modules", ".git", LOCKFILE_NAME];

fn is_pruned(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map_or(false, |name| PRUNED_NAMES.contains(&name))
}

/// Every regular file under `root` in traversal order, with the pruned
/// names above excluded at any depth. Pruned directories are not
/// descended into. An unreadable root (or any unreadable directory on
/// the way down) fails the whole enumeration.
pub fn project_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry))
    {
        let entry =
            entry.with_context(|| format!("failed to walk project tree at {}", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_excludes_node_modules_at_any_depth() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("package.json"));
        touch(&root.join("node_modules/react/index.js"));
        touch(&root.join("packages/core/node_modules/lodash/index.js"));
        touch(&root.join("packages/core/src/index.ts"));

        let files = project_files(root).unwrap();
        assert!(files.iter().all(|p| !p.to_string_lossy().contains("node_modules")));
        assert!(files.contains(&root.join("package.json")));
        assert!(files.contains(&root.join("packages/core/src/index.ts")));
    }

    #[test]
    fn test_excludes_git_metadata() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join(".git/config"));
        touch(&root.join(".gitignore"));

        let files = project_files(root).unwrap();
        assert_eq!(files, vec![root.join(".gitignore")]);
    }

    #[test]
    fn test_excludes_exactly_the_lockfile() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join(LOCKFILE_NAME));
        touch(&root.join("pnpm-workspace.yaml"));
        touch(&root.join("apps/web/pnpm-lock.yaml"));

        let files = project_files(root).unwrap();
        assert_eq!(files, vec![root.join("pnpm-workspace.yaml")]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(project_files(&temp.path().join("nope")).is_err());
    }
}
