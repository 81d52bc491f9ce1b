//! The `.ls8` program image format.
//!
//! A plain text format, one byte per line:
//! - Each line carries a binary literal (up to 8 digits)
//! - `#` starts a comment, to end of line
//! - Blank and comment-only lines are ignored
//!
//! Successive bytes land at ascending addresses starting at 0.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;

/// A loaded program image.
#[derive(Debug, Clone)]
pub struct Image {
    /// The program bytes, in load order.
    pub bytes: Vec<u8>,
    /// Original source lines (for debugging).
    pub source_lines: Vec<String>,
}

impl Image {
    /// Create a new empty image.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            source_lines: Vec::new(),
        }
    }

    /// Append a byte.
    pub fn push(&mut self, byte: u8, source: &str) {
        self.bytes.push(byte);
        self.source_lines.push(source.to_string());
    }

    /// Number of program bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse image source text into bytes.
pub fn parse_image(source: &str) -> Result<Image, ImageError> {
    let mut image = Image::new();

    for (line_num, line) in source.lines().enumerate() {
        parse_line(line, line_num + 1, &mut image)?;
    }

    Ok(image)
}

/// Load an image file from disk.
///
/// A missing file is a clean error; no partial image is returned.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image, ImageError> {
    let file = std::fs::File::open(path.as_ref())
        .map_err(|e| ImageError::Io(e.to_string()))?;
    let reader = BufReader::new(file);

    let mut image = Image::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| ImageError::Io(e.to_string()))?;
        parse_line(&line, line_num + 1, &mut image)?;
    }

    Ok(image)
}

fn parse_line(line: &str, line_num: usize, image: &mut Image) -> Result<(), ImageError> {
    // Strip the comment, keep the first token
    let code = line.split('#').next().unwrap_or("").trim();
    if code.is_empty() {
        return Ok(());
    }

    if code.len() > 8 || !code.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(ImageError::Parse {
            line: line_num,
            message: format!("expected an 8-bit binary literal, found {:?}", code),
        });
    }

    let byte = u8::from_str_radix(code, 2).map_err(|e| ImageError::Parse {
        line: line_num,
        message: e.to_string(),
    })?;

    image.push(byte, line.trim());
    Ok(())
}

/// Save program bytes as an image file.
pub fn save_image<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), ImageError> {
    let mut file = std::fs::File::create(path.as_ref())
        .map_err(|e| ImageError::Io(e.to_string()))?;

    writeln!(file, "# LS-8 program image").map_err(|e| ImageError::Io(e.to_string()))?;
    writeln!(file, "# {} bytes", bytes.len()).map_err(|e| ImageError::Io(e.to_string()))?;
    writeln!(file).map_err(|e| ImageError::Io(e.to_string()))?;

    for (addr, byte) in bytes.iter().enumerate() {
        writeln!(file, "{:08b} # {:03}", byte, addr)
            .map_err(|e| ImageError::Io(e.to_string()))?;
    }

    Ok(())
}

/// Errors that can occur while reading or writing images.
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}
