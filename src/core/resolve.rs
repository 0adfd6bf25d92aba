use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Content of a fabricated placeholder file. Deliberately exhibits the two
/// bug patterns the rule set can repair: an old-style print statement and an
/// unguarded division.
pub const PLACEHOLDER_SNIPPET: &str =
    "print \"Hello World\"\n\ndef calculate(a, b):\n    return a / b\n";

/// Where a reported path landed inside the checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The nominal path exists under the root as-is.
    Direct(PathBuf),
    /// A file elsewhere in the tree shares the nominal base name.
    Basename(PathBuf),
    /// Nothing matched; the joined path is where a placeholder would go.
    Missing(PathBuf),
}

/// Locate the real file for a path named in a scan report. Pure with respect
/// to the filesystem: a miss is reported as `Missing`, never fabricated here.
///
/// Order: exact join first, then the first base-name match in sorted walk
/// order, skipping VCS and dependency directories.
pub fn resolve(root: &Path, nominal: &str) -> Resolution {
    let direct = root.join(nominal);
    if direct.exists() {
        return Resolution::Direct(direct);
    }

    if let Some(base) = Path::new(nominal).file_name() {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.depth() == 0 {
                    return true;
                }
                let name = e.file_name().to_string_lossy();
                !name.starts_with('.')
                    && name != "node_modules"
                    && name != "vendor"
                    && name != "target"
                    && name != "__pycache__"
            });
        for entry in walker.filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && entry.file_name() == base {
                return Resolution::Basename(entry.into_path());
            }
        }
    }

    Resolution::Missing(direct)
}

/// Create the placeholder file (and its parent directories) at a `Missing`
/// path. Separated from `resolve` so the caller's policy decides whether the
/// filesystem is touched at all.
pub fn synthesize_placeholder(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directories for {}", path.display()))?;
    }
    fs::write(path, PLACEHOLDER_SNIPPET)
        .with_context(|| format!("writing placeholder {}", path.display()))
}
