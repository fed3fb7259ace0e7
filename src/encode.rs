//! Text to binary: pack an ASCII-art dump back into a `.FNT` file.

use std::io::{BufRead, Write};

use crate::error::FontError;
use crate::font::{self, FONT_CHARS, GLYPH_ROWS};

/// Packs an ASCII-art text font into its binary 4096-byte form.
///
/// `input` is consumed line by line. Blank lines and lines starting with
/// `#` are skipped. Every other line is a scanline: its first 8 characters
/// become one output byte (MSB first, `.` clear, anything else set), which
/// is written to `out` immediately.
///
/// `source_name` is the name reported in validation errors.
///
/// # Errors
///
/// The input is validated strictly; the first violation aborts the
/// conversion:
///
/// - [`FontError::ShortLine`] for a data line with fewer than 8 characters,
/// - [`FontError::ExcessData`] for a data line beyond the 256th glyph,
/// - [`FontError::ShortFile`] if input ends before 256 glyphs are complete,
/// - [`FontError::Io`] for read or write failures.
pub fn pack_font<R: BufRead, W: Write>(
    input: R,
    source_name: &str,
    mut out: W,
) -> Result<(), FontError> {
    let mut chr = 0;
    let mut row = 0;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;

        // Comment lines and stray blank lines carry no data.
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (byte, got) = font::parse_row(line.as_bytes());
        if got < 8 {
            return Err(FontError::ShortLine {
                file: source_name.to_owned(),
                line: lineno,
                got,
                text: line,
            });
        }
        if chr == FONT_CHARS {
            return Err(FontError::ExcessData {
                file: source_name.to_owned(),
                line: lineno,
                text: line,
            });
        }

        out.write_all(&[byte])?;

        row += 1;
        if row == GLYPH_ROWS {
            row = 0;
            chr += 1;
        }
    }

    if chr != FONT_CHARS || row != 0 {
        return Err(FontError::ShortFile { row, chr });
    }
    Ok(())
}
