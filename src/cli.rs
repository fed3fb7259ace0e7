//! Command-line surface for the `fntdump` binary.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::decode::dump_font;
use crate::encode::pack_font;
use crate::error::FontError;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Edit a .FNT file's bitmap glyphs in a text editor",
    long_about = "Edit a .FNT file's bitmap glyphs in a text editor.\n\
        \n\
        Converts a .FNT file to/from an 'ASCII art' text file, allowing you\n\
        to edit font glyphs in any text editor (similar to XPMs). .FNT files\n\
        are used by MS-DOS and Linux as the console font bitmaps.\n\
        \n\
        The input filename selects the direction: a name containing '.fnt'\n\
        or '.FNT' is dumped to text, anything else is packed to binary.\n\
        \n\
        EXAMPLES\n\
        \x20   fntdump old-8x16.fnt old-8x16.txt\n\
        \x20   fntdump old-8x16.txt new-8x16.fnt\n\
        \x20   fntdump new-8x16.fnt - | more"
)]
pub struct Args {
    /// Path to the file to convert
    pub input: PathBuf,
    /// Path to write the result to, or '-' for standard output
    pub output: PathBuf,
}

/// Conversion direction, chosen from the input filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Binary `.FNT` input, text output.
    Dump,
    /// Text input, binary `.FNT` output.
    Pack,
}

impl Mode {
    /// Picks the direction for an input path.
    ///
    /// Any path whose name contains `.fnt` or `.FNT` is treated as binary
    /// input. This is a containment check, not a suffix check, so e.g.
    /// `old.fnt.bak` still dumps.
    #[must_use]
    pub fn for_input(path: &Path) -> Mode {
        let name = path.to_string_lossy();
        if name.contains(".fnt") || name.contains(".FNT") {
            Mode::Dump
        } else {
            Mode::Pack
        }
    }
}

/// Where converted output goes: a created file or the standard output.
enum Sink {
    Stdout(io::Stdout),
    File(BufWriter<File>),
}

impl Sink {
    fn open(path: &Path) -> Result<Sink, FontError> {
        if path.as_os_str() == "-" {
            return Ok(Sink::Stdout(io::stdout()));
        }
        let file = File::create(path).map_err(|source| FontError::OpenOutput {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Sink::File(BufWriter::new(file)))
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(out) => out.write(buf),
            Sink::File(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(out) => out.flush(),
            Sink::File(out) => out.flush(),
        }
    }
}

/// Runs one conversion: open input and output, dispatch on [`Mode`].
///
/// The sink is flushed on every path, including validation failures, so
/// bytes written before an error are never stranded in a buffer. The
/// standard-output sink is flushed but never closed here.
///
/// # Errors
///
/// Any [`FontError`]: unopenable input or output, an I/O failure mid-run,
/// or one of the strict-validation failures from [`pack_font`].
pub fn run(args: &Args) -> Result<(), FontError> {
    let input = File::open(&args.input).map_err(|source| FontError::OpenInput {
        path: args.input.display().to_string(),
        source,
    })?;
    let mut sink = Sink::open(&args.output)?;

    let result = match Mode::for_input(&args.input) {
        Mode::Dump => dump_font(BufReader::new(input), &mut sink),
        Mode::Pack => pack_font(
            BufReader::new(input),
            &args.input.display().to_string(),
            &mut sink,
        ),
    };

    let flushed = sink.flush();
    result?;
    flushed?;
    Ok(())
}
