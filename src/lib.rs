//! Bidirectional codec between binary 8x16 console fonts and an editable
//! "ASCII art" text form.
//!
//! A `.FNT` file as used by MS-DOS and the Linux console is exactly 4096
//! bytes: 256 glyphs, 16 one-byte scanlines per glyph, most significant bit
//! on the left. The text form renders each glyph as a 16-line grid of `.`
//! (bit clear) and `X` (bit set) characters, preceded by a comment line
//! naming the glyph index, so a font can be edited in any text editor.
//!
//! # Usage
//! ## Dumping a binary font to text
//! ```no_run
//! # fn test() -> Result<(), fntdump::FontError> {
//! let binary = std::fs::File::open("console-8x16.fnt")?;
//! let mut text = Vec::new();
//! fntdump::dump_font(binary, &mut text)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Packing edited text back into a binary font
//! ```no_run
//! # fn test() -> Result<(), fntdump::FontError> {
//! let text = std::fs::File::open("console-8x16.txt")?;
//! let mut binary = Vec::new();
//! fntdump::pack_font(std::io::BufReader::new(text), "console-8x16.txt", &mut binary)?;
//! assert_eq!(binary.len(), fntdump::FONT_BYTES);
//! # Ok(())
//! # }
//! ```
//!
//! Packing validates the text strictly: every data line must carry exactly
//! 8 marker characters, and the input must contain exactly 256 * 16 data
//! lines. Any violation is returned as a [`FontError`] carrying the source
//! name, 1-based line number, and offending content.

#![deny(missing_docs)]
#![warn(clippy::pedantic)]

mod decode;
mod encode;
mod error;
mod font;

pub use decode::dump_font;
pub use encode::pack_font;
pub use error::FontError;
pub use font::{Glyph, BIT_CLEAR, BIT_SET, FONT_BYTES, FONT_CHARS, GLYPH_ROWS};

#[cfg(feature = "bin")]
mod cli;

#[cfg(feature = "bin")]
pub use cli::{run, Args, Mode};
