//! Binary to text: dump a `.FNT` file as editable ASCII art.

use std::io::{Read, Write};

use crate::error::FontError;
use crate::font::{self, Glyph, FONT_CHARS, GLYPH_ROWS};

/// Dumps a binary 8x16 font as its ASCII-art text form.
///
/// Reads 4096 bytes from `input` and writes 256 glyph blocks to `out` in
/// index order: a `# character NN` comment line (with the character itself
/// quoted when the index is in the printable range `0x20..=0x7f`), then 16
/// rows of 8 `X`/`.` markers each.
///
/// An input shorter than 4096 bytes is not an error; the missing scanlines
/// read as zero, so the dump is always structurally complete.
///
/// # Errors
///
/// Returns [`FontError::Io`] if reading `input` or writing `out` fails.
pub fn dump_font<R: Read, W: Write>(mut input: R, mut out: W) -> Result<(), FontError> {
    for chr in 0..FONT_CHARS {
        write!(out, "# character {chr:02x}")?;
        if (0x20..=0x7f).contains(&chr) {
            #[allow(clippy::cast_possible_truncation)]
            let c = chr as u8 as char;
            write!(out, " '{c}'")?;
        }
        writeln!(out)?;

        let glyph = read_glyph(&mut input)?;
        for row in 0..GLYPH_ROWS {
            out.write_all(&font::render_row(glyph.scan[row]))?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Reads the next 16 scanline bytes, zero-filling past end of input.
fn read_glyph<R: Read>(input: &mut R) -> Result<Glyph, FontError> {
    let mut glyph = Glyph::default();
    let mut filled = 0;
    while filled < GLYPH_ROWS {
        let n = input.read(&mut glyph.scan[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(glyph)
}
