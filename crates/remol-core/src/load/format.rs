use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::LoadError;

/// The two structure file formats PyMOL's buffer loader accepts here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureFormat {
    /// Protein Data Bank format (`.pdb`, legacy `.ent`).
    Pdb,
    /// Macromolecular CIF format (`.cif`, `.mmcif`).
    Cif,
}

impl StructureFormat {
    /// The format token as the remote session expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureFormat::Pdb => "pdb",
            StructureFormat::Cif => "cif",
        }
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdb" => Ok(StructureFormat::Pdb),
            "cif" => Ok(StructureFormat::Cif),
            _ => Err(LoadError::InvalidFormat(s.to_string())),
        }
    }
}

/// Returns the lowercased dot-suffix chain of a filename.
///
/// `model.pdb.gz` yields `["pdb", "gz"]`. Leading dots do not start a
/// suffix, so `.hidden.cif` yields `["cif"]`.
pub(crate) fn suffix_chain(path: &Path) -> Vec<String> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    name.trim_start_matches('.')
        .split('.')
        .skip(1)
        .map(|s| s.to_ascii_lowercase())
        .collect()
}

/// Infers the structure format from a filename's suffix chain.
///
/// A trailing compression suffix is ignored, and the remaining suffixes are
/// scanned from the end so that `model.cif.pdb` resolves to PDB.
pub fn infer_format(path: &Path) -> Result<StructureFormat, LoadError> {
    let mut suffixes = suffix_chain(path);
    if suffixes.last().map(String::as_str) == Some("gz") {
        suffixes.pop();
    }
    for suffix in suffixes.iter().rev() {
        match suffix.as_str() {
            "pdb" | "ent" => return Ok(StructureFormat::Pdb),
            "cif" | "mmcif" => return Ok(StructureFormat::Cif),
            _ => continue,
        }
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Err(LoadError::UnknownFormat(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_pdb_from_primary_and_legacy_suffixes() {
        assert_eq!(
            infer_format(Path::new("model.pdb")).unwrap(),
            StructureFormat::Pdb
        );
        assert_eq!(
            infer_format(Path::new("pdb1abc.ent")).unwrap(),
            StructureFormat::Pdb
        );
    }

    #[test]
    fn infers_cif_from_primary_and_long_suffixes() {
        assert_eq!(
            infer_format(Path::new("model.cif")).unwrap(),
            StructureFormat::Cif
        );
        assert_eq!(
            infer_format(Path::new("model.mmcif")).unwrap(),
            StructureFormat::Cif
        );
    }

    #[test]
    fn ignores_trailing_compression_suffix() {
        assert_eq!(
            infer_format(Path::new("model.pdb.gz")).unwrap(),
            StructureFormat::Pdb
        );
        assert_eq!(
            infer_format(Path::new("model.cif.gz")).unwrap(),
            StructureFormat::Cif
        );
    }

    #[test]
    fn suffix_matching_is_case_insensitive() {
        assert_eq!(
            infer_format(Path::new("MODEL.PDB")).unwrap(),
            StructureFormat::Pdb
        );
        assert_eq!(
            infer_format(Path::new("A.PDB.GZ")).unwrap(),
            StructureFormat::Pdb
        );
    }

    #[test]
    fn scans_suffix_chain_from_the_end() {
        assert_eq!(
            infer_format(Path::new("model.cif.pdb")).unwrap(),
            StructureFormat::Pdb
        );
    }

    #[test]
    fn unrecognized_suffix_is_an_error() {
        assert!(matches!(
            infer_format(Path::new("notes.txt")),
            Err(LoadError::UnknownFormat(name)) if name == "notes.txt"
        ));
        assert!(matches!(
            infer_format(Path::new("archive.gz")),
            Err(LoadError::UnknownFormat(_))
        ));
        assert!(matches!(
            infer_format(Path::new("bare")),
            Err(LoadError::UnknownFormat(_))
        ));
    }

    #[test]
    fn override_parsing_accepts_only_the_two_formats() {
        assert_eq!("pdb".parse::<StructureFormat>().unwrap(), StructureFormat::Pdb);
        assert_eq!("CIF".parse::<StructureFormat>().unwrap(), StructureFormat::Cif);
        assert!(matches!(
            "sdf".parse::<StructureFormat>(),
            Err(LoadError::InvalidFormat(s)) if s == "sdf"
        ));
    }

    #[test]
    fn leading_dot_does_not_count_as_a_suffix() {
        assert_eq!(suffix_chain(Path::new(".hidden.cif")), vec!["cif"]);
        assert!(suffix_chain(Path::new(".bashrc")).is_empty());
    }
}
