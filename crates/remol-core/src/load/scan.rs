use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use super::format::suffix_chain;

/// Extensions accepted by default when scanning a directory.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".pdb", ".cif", ".pdb.gz", ".cif.gz"];

/// Whether the file's joined suffix chain ends with one of the allowed
/// extensions (all comparisons lowercase).
fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    let chain: String = suffix_chain(path)
        .iter()
        .map(|s| format!(".{s}"))
        .collect();
    extensions.iter().any(|ext| chain.ends_with(ext.as_str()))
}

/// Collects the files under `root` whose suffix chain matches one of
/// `extensions`, sorted by path for reproducible ordering.
///
/// Non-recursive mode only looks at immediate children. Entries that cannot
/// be walked (permission errors, dangling symlinks) are logged and skipped.
pub(crate) fn collect_matching_files(
    root: &Path,
    recursive: bool,
    extensions: &[String],
) -> Vec<PathBuf> {
    let allowed: Vec<String> = extensions.iter().map(|e| e.to_ascii_lowercase()).collect();
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(root).max_depth(max_depth).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if matches_extension(entry.path(), &allowed) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files
}
