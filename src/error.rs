use std::io;

use thiserror::Error;

/// Everything that can go wrong while converting a font.
///
/// The strict-validation variants carry the source name, 1-based line
/// number, and offending content so the caller can report exactly where a
/// malformed text font went wrong. None of these are recoverable mid-run: a
/// structurally invalid input cannot yield a valid 4096-byte font, so the
/// conversion is abandoned at the first failure.
#[derive(Debug, Error)]
pub enum FontError {
    /// The input file could not be opened for reading.
    #[error("can't read '{path}': {source}")]
    OpenInput {
        /// Path as given on the command line.
        path: String,
        /// Underlying system error.
        source: io::Error,
    },

    /// The output file could not be created for writing.
    #[error("can't write '{path}': {source}")]
    OpenOutput {
        /// Path as given on the command line.
        path: String,
        /// Underlying system error.
        source: io::Error,
    },

    /// A data line ended before 8 marker characters were read.
    #[error("{file} (Line {line}): expected 8 characters on line, got only {got}: '{text}'")]
    ShortLine {
        /// Name of the text input.
        file: String,
        /// 1-based physical line number.
        line: usize,
        /// Characters actually present on the line.
        got: usize,
        /// The offending line, terminator stripped.
        text: String,
    },

    /// A data line appeared after all 256 glyphs were already complete.
    #[error("{file} (Line {line}): more than 256 characters of data at: '{text}'")]
    ExcessData {
        /// Name of the text input.
        file: String,
        /// 1-based physical line number.
        line: usize,
        /// The offending line, terminator stripped.
        text: String,
    },

    /// The text input ended before all 256 glyphs were complete.
    #[error("input file was short: EOF while reading row {row} of chr# {chr} (0x{chr:02x})")]
    ShortFile {
        /// Scanline (0-15) that was being read when input ran out.
        row: usize,
        /// Glyph index (0-255) that was being read when input ran out.
        chr: usize,
    },

    /// An I/O failure on an already-open stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}
