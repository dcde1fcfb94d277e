use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

/// Whether the final extension marks the file as gzip-compressed.
pub(crate) fn has_gz_suffix(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Reads the file's full contents as text, decompressing transparently.
///
/// Decoding is permissive: bytes that are not valid UTF-8 are replaced
/// rather than failing the read, since structure files in the wild carry
/// the occasional stray byte in header records.
pub(crate) fn read_structure_text(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut bytes = Vec::new();
    if has_gz_suffix(path) {
        GzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        BufReader::new(file).read_to_end(&mut bytes)?;
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn gz_suffix_detection_is_case_insensitive() {
        assert!(has_gz_suffix(Path::new("model.pdb.gz")));
        assert!(has_gz_suffix(Path::new("model.PDB.GZ")));
        assert!(!has_gz_suffix(Path::new("model.pdb")));
        assert!(!has_gz_suffix(Path::new("model")));
    }

    #[test]
    fn reads_plain_files_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pdb");
        std::fs::write(&path, "ATOM      1  N   ALA A   1\nEND\n").unwrap();

        let text = read_structure_text(&path).unwrap();
        assert_eq!(text, "ATOM      1  N   ALA A   1\nEND\n");
    }

    #[test]
    fn decompresses_gzip_files_transparently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pdb.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"HEADER    TEST\nEND\n").unwrap();
        encoder.finish().unwrap();

        let text = read_structure_text(&path).unwrap();
        assert_eq!(text, "HEADER    TEST\nEND\n");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pdb");
        std::fs::write(&path, b"HEADER \xff\xfe TEST\n").unwrap();

        let text = read_structure_text(&path).unwrap();
        assert!(text.starts_with("HEADER "));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn corrupt_gzip_content_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pdb.gz");
        std::fs::write(&path, b"this is not gzip data").unwrap();

        assert!(read_structure_text(&path).is_err());
    }
}
