//! Fixed-layout font data model and the scanline bit logic shared by both
//! conversion directions.

/// Scanlines per glyph: every glyph is an 8x16 pixel cell.
pub const GLYPH_ROWS: usize = 16;

/// Glyphs per font, indexed `0x00..=0xff`.
pub const FONT_CHARS: usize = 256;

/// Total size of a binary font: 256 glyphs * 16 bytes, no header or footer.
pub const FONT_BYTES: usize = FONT_CHARS * GLYPH_ROWS;

/// Marker for a set bit in the text form.
pub const BIT_SET: u8 = b'X';

/// Marker for a clear bit in the text form.
pub const BIT_CLEAR: u8 = b'.';

/// One character's bitmap: 16 scanline bytes, MSB = leftmost pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    /// Scanlines top to bottom.
    pub scan: [u8; GLYPH_ROWS],
}

/// Renders one scanline byte as its 8-character text row, MSB first.
pub(crate) fn render_row(byte: u8) -> [u8; 8] {
    let mut out = [BIT_CLEAR; 8];
    let mut mask = 0x80u8;
    for cell in &mut out {
        if byte & mask != 0 {
            *cell = BIT_SET;
        }
        mask >>= 1;
    }
    out
}

/// Parses up to 8 leading characters of a text row into a scanline byte.
///
/// `.` leaves the bit clear; any other character sets it. Returns the byte
/// and the number of characters actually consumed, which is less than 8
/// when the line ends early. The caller decides whether a short row is an
/// error.
pub(crate) fn parse_row(line: &[u8]) -> (u8, usize) {
    let mut byte = 0x00u8;
    let mut mask = 0x80u8;
    let mut got = 0;
    for &c in line.iter().take(8) {
        if c != BIT_CLEAR {
            byte |= mask;
        }
        mask >>= 1;
        got += 1;
    }
    (byte, got)
}
