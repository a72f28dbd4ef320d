//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxihuff::{CodeTableFile, EncodedPayload, HuffError};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to compressed payloads.
pub const PAYLOAD_EXTENSION: &str = "huff";

/// Suffix appended to a payload path to name its code-table sidecar.
pub const SIDECAR_SUFFIX: &str = ".codes.json";

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

/// Read a whole file.
pub fn read_file(path: &Path) -> oxihuff::Result<Vec<u8>> {
    fs::read(path).map_err(HuffError::from)
}

/// Write a whole file, replacing any existing one.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> oxihuff::Result<()> {
    fs::write(path, contents).map_err(HuffError::from)
}

/// Append `suffix` to the full file name of `path`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Default payload path: `<input>.huff`.
pub fn default_payload_path(input: &Path) -> PathBuf {
    with_suffix(input, &format!(".{PAYLOAD_EXTENSION}"))
}

/// Default restored path: strip `.huff`, else append `.out`.
pub fn default_restored_path(payload: &Path) -> PathBuf {
    if payload.extension().is_some_and(|ext| ext == PAYLOAD_EXTENSION) {
        payload.with_extension("")
    } else {
        with_suffix(payload, ".out")
    }
}

/// Sidecar path for `payload`, unless one was given explicitly.
pub fn sidecar_path(payload: &Path, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| with_suffix(payload, SIDECAR_SUFFIX))
}

/// Read a payload and its sidecar, checking that they agree on size.
pub fn load_payload(
    payload_path: &Path,
    sidecar: &Path,
) -> Result<(EncodedPayload, CodeTableFile), Box<dyn std::error::Error>> {
    let text = read_file(sidecar)
        .map_err(|e| format!("cannot read code table {}: {}", sidecar.display(), e))?;
    let file: CodeTableFile = serde_json::from_slice(&text)?;
    let bytes = read_file(payload_path)?;
    let payload = EncodedPayload::new(bytes, file.bit_len)?;
    Ok((payload, file))
}

/// Render a symbol for display: printable ASCII as-is, others in hex.
pub fn display_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        format!("'{}'", symbol as char)
    } else if symbol == b' ' {
        "' '".to_string()
    } else {
        format!("{:#04x}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        assert_eq!(
            default_payload_path(Path::new("dir/book.txt")),
            PathBuf::from("dir/book.txt.huff")
        );
        assert_eq!(
            default_restored_path(Path::new("dir/book.txt.huff")),
            PathBuf::from("dir/book.txt")
        );
        assert_eq!(
            default_restored_path(Path::new("book.bin")),
            PathBuf::from("book.bin.out")
        );
    }

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            sidecar_path(Path::new("book.txt.huff"), None),
            PathBuf::from("book.txt.huff.codes.json")
        );
        assert_eq!(
            sidecar_path(Path::new("book.txt.huff"), Some(PathBuf::from("t.json"))),
            PathBuf::from("t.json")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_file(Path::new("does/not/exist.huff")).unwrap_err();
        assert!(matches!(err, HuffError::Io(_)));
    }

    #[test]
    fn test_write_then_read() {
        let path =
            std::env::temp_dir().join(format!("oxihuff-utils-{}.bin", std::process::id()));
        write_file(&path, [0b1011_0000u8]).unwrap();
        assert_eq!(read_file(&path).unwrap(), vec![0b1011_0000]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(display_symbol(b'a'), "'a'");
        assert_eq!(display_symbol(b' '), "' '");
        assert_eq!(display_symbol(b'\n'), "0x0a");
    }
}
