//! Provides the structure loading pipeline.
//!
//! Given a file or directory, this module discovers candidate structure
//! files, infers each one's format from its filename, reads the text
//! (decompressing gzip transparently), derives a collision-free object name,
//! and hands the buffer to the session.

pub mod format;
pub mod naming;
mod reader;
mod scan;

pub use format::StructureFormat;
pub use naming::{NameRegistry, sanitize_name};
pub use scan::DEFAULT_EXTENSIONS;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::session::PymolSession;
use reader::{has_gz_suffix, read_structure_text};
use scan::collect_matching_files;

/// Per-invocation knobs for [`load_structures`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Descend into subdirectories when the input is a directory.
    pub recursive: bool,
    /// Suffix-chain endings accepted during a directory scan
    /// (case-insensitive).
    pub extensions: Vec<String>,
    /// Explicit format, bypassing inference. Single-file mode only.
    pub format: Option<StructureFormat>,
    /// Explicit object name. Single-file mode only; still sanitized and
    /// made unique.
    pub object_name: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            recursive: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            format: None,
            object_name: None,
        }
    }
}

/// One successfully loaded structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedStructure {
    /// Source file on disk.
    pub path: PathBuf,
    /// Object name assigned in the session.
    pub object: String,
    /// Format the buffer was loaded as.
    pub format: StructureFormat,
}

/// Base object name for a file: the stem, with a trailing compression
/// suffix stripped first, sanitized.
fn object_base(path: &Path) -> String {
    let mut stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if has_gz_suffix(path) {
        stem = Path::new(&stem)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(stem);
    }
    sanitize_name(&stem)
}

/// Loads one file: resolve format, claim a name, read, transmit.
fn load_one(
    session: &impl PymolSession,
    path: &Path,
    registry: &mut NameRegistry,
    format_override: Option<StructureFormat>,
    name_override: Option<&str>,
) -> Result<LoadedStructure, LoadError> {
    let format = match format_override {
        Some(format) => format,
        None => format::infer_format(path)?,
    };
    let base = match name_override {
        Some(name) => sanitize_name(name),
        None => object_base(path),
    };
    let object = registry.claim(&base);

    let contents = read_structure_text(path)?;
    debug!(
        "Loading {} as '{}' ({}, {} bytes)",
        path.display(),
        object,
        format,
        contents.len()
    );
    session.load_buffer(&contents, format, &object)?;

    Ok(LoadedStructure {
        path: path.to_path_buf(),
        object,
        format,
    })
}

/// Loads a file or a directory of files into the session.
///
/// Single-file mode loads exactly that file and honors the format and
/// object-name overrides in `options`. Directory mode scans for files
/// matching `options.extensions` (recursively if requested), loads each in
/// path-sorted order with no overrides, and skips files that fail rather
/// than aborting the scan.
///
/// If the session's existing object names cannot be queried, loading
/// proceeds with an empty registry; uniqueness is then only guaranteed
/// among names assigned within this call.
pub fn load_structures(
    session: &impl PymolSession,
    path: &Path,
    options: &LoadOptions,
) -> Result<Vec<LoadedStructure>, LoadError> {
    let mut registry = match session.object_names() {
        Ok(names) => NameRegistry::new(names),
        Err(e) => {
            warn!("Could not query existing object names, starting empty: {e}");
            NameRegistry::default()
        }
    };

    if path.is_file() {
        let loaded = load_one(
            session,
            path,
            &mut registry,
            options.format,
            options.object_name.as_deref(),
        )?;
        return Ok(vec![loaded]);
    }

    if !path.is_dir() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let files = collect_matching_files(path, options.recursive, &options.extensions);
    let mut loaded = Vec::with_capacity(files.len());
    for file in &files {
        match load_one(session, file, &mut registry, None, None) {
            Ok(item) => loaded.push(item),
            Err(e) => warn!("Skipped {}: {}", file.display(), e),
        }
    }
    Ok(loaded)
}
