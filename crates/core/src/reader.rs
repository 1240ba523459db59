// crates/core/src/reader.rs
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, TallyError};

/// Text encodings accepted for reading source files.
///
/// `Utf8` is strict: invalid bytes fail that file's read. `Utf16` sniffs
/// the BOM and falls back to big-endian, matching the JDK charset of the
/// same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf8Lossy,
    Latin1,
    Utf16Le,
    Utf16Be,
    Utf16,
}

impl Encoding {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Lossy => "utf-8-lossy",
            Self::Latin1 => "latin-1",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
            Self::Utf16 => "utf-16",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = TallyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-8-lossy" | "utf8-lossy" => Ok(Self::Utf8Lossy),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Self::Latin1),
            "utf-16le" | "utf-16-le" => Ok(Self::Utf16Le),
            "utf-16be" | "utf-16-be" => Ok(Self::Utf16Be),
            "utf-16" | "utf16" => Ok(Self::Utf16),
            _ => Err(TallyError::UnknownEncoding { name: s.to_owned() }),
        }
    }
}

/// Feed every line of the file at `path` to `consumer`, decoded with
/// `encoding`. Lines are terminated by `\n` or `\r\n`; the terminator is
/// not part of the line. The file handle is scoped to this call and closed
/// on every exit path.
///
/// # Errors
///
/// Returns [`TallyError::FileRead`] when the file cannot be opened or its
/// contents are not valid under `encoding`.
pub fn for_each_line<F>(path: &Path, encoding: Encoding, mut consumer: F) -> Result<()>
where
    F: FnMut(&str),
{
    match encoding {
        Encoding::Utf8 => stream_utf8_lines(path, &mut consumer),
        other => {
            let bytes = std::fs::read(path).map_err(|source| read_error(path, source))?;
            let text = decode(&bytes, other).map_err(|source| read_error(path, source))?;
            for line in text.lines() {
                consumer(line);
            }
            Ok(())
        }
    }
}

fn read_error(path: &Path, source: io::Error) -> TallyError {
    TallyError::FileRead { path: path.to_path_buf(), source }
}

/// Strict UTF-8 path: stream one line at a time instead of materialising
/// the whole file.
fn stream_utf8_lines<F>(path: &Path, consumer: &mut F) -> Result<()>
where
    F: FnMut(&str),
{
    let file = File::open(path).map_err(|source| read_error(path, source))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let mut is_first = true;

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source) => return Err(read_error(path, source)),
        }

        let mut content = line.as_str();
        if is_first {
            // Strip BOM (U+FEFF) only on the very first line if present.
            if let Some(rest) = content.strip_prefix('\u{feff}') {
                content = rest;
            }
            is_first = false;
        }
        if content.ends_with('\n') {
            content = &content[..content.len() - 1];
            if content.ends_with('\r') {
                content = &content[..content.len() - 1];
            }
        }
        consumer(content);
    }

    Ok(())
}

fn decode(bytes: &[u8], encoding: Encoding) -> io::Result<String> {
    match encoding {
        Encoding::Utf8 => {
            let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
            String::from_utf8(bytes.to_vec())
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
        }
        Encoding::Utf8Lossy => {
            let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        Encoding::Utf16Le => decode_utf16(bytes.strip_prefix(&[0xFF, 0xFE]).unwrap_or(bytes), u16::from_le_bytes),
        Encoding::Utf16Be => decode_utf16(bytes.strip_prefix(&[0xFE, 0xFF]).unwrap_or(bytes), u16::from_be_bytes),
        Encoding::Utf16 => {
            // BOM-sniffing variant; big-endian when no BOM is present.
            if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
                decode_utf16(rest, u16::from_le_bytes)
            } else if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
                decode_utf16(rest, u16::from_be_bytes)
            } else {
                decode_utf16(bytes, u16::from_be_bytes)
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> io::Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "odd byte count in UTF-16 stream"));
    }
    let units: Vec<u16> = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]])).collect();
    String::from_utf16(&units)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
