//! Transparent gzip handling

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{IoError, IoResult};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Check if a byte buffer starts with the gzip magic number
pub fn has_gzip_magic(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[..2] == GZIP_MAGIC
}

/// Check if a path indicates a gzip file (by extension)
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Open a file for reading, decompressing `.gz` files on the fly
pub fn open_file(path: &Path) -> IoResult<Box<dyn Read>> {
    let file = File::open(path)?;

    if is_gzip_path(path) {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read an entire source into a string, inflating it first when the content
/// carries the gzip magic number (regardless of file name)
pub fn read_to_string_maybe_gz<R: Read>(mut reader: R) -> IoResult<String> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    let bytes = if has_gzip_magic(&raw) {
        let mut inflated = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut inflated)
            .map_err(|e| IoError::Decompression(e.to_string()))?;
        inflated
    } else {
        raw
    };

    String::from_utf8(bytes).map_err(|e| IoError::parse(0, format!("invalid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_is_gzip_path() {
        assert!(is_gzip_path(Path::new("file.pdb.gz")));
        assert!(is_gzip_path(Path::new("file.GZ")));
        assert!(!is_gzip_path(Path::new("file.pdb")));
    }

    #[test]
    fn test_sniffed_gzip() {
        let original = "ATOM      1  CA  GLY A   1\n";

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(original.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();
        assert!(has_gzip_magic(&compressed));

        let text = read_to_string_maybe_gz(compressed.as_slice()).unwrap();
        assert_eq!(text, original);

        let plain = read_to_string_maybe_gz(original.as_bytes()).unwrap();
        assert_eq!(plain, original);
    }

    #[test]
    fn test_corrupt_gzip() {
        let bogus = [0x1f, 0x8b, 0x00, 0x01, 0x02];
        assert!(matches!(
            read_to_string_maybe_gz(&bogus[..]),
            Err(IoError::Decompression(_))
        ));
    }
}
