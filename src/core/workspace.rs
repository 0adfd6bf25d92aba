use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Request-scoped repository checkout. The backing temp directory is removed
/// when the workspace is dropped, on success and failure paths alike; `close`
/// surfaces deletion errors on the success path.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    root: PathBuf,
}

impl Workspace {
    /// Clone `url` into a fresh temp directory and return its checkout root.
    pub fn clone_repo(url: &str) -> Result<Self> {
        let dir = TempDir::new().context("creating checkout directory")?;
        let root = dir.path().join("repo");

        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(&root)
            .output()
            .context("running git clone")?;
        if !output.status.success() {
            bail!(
                "git clone of {} failed: {}",
                url,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(Self { dir, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Explicitly release the checkout, reporting deletion failures.
    pub fn close(self) -> Result<()> {
        self.dir.close().context("removing checkout directory")
    }
}
