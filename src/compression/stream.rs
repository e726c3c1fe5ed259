//! Read and write handles that default to the process's standard streams.
//!
//! A path of `None` or `"-"` selects standard input/output. File handles are
//! closed when dropped, on every exit path; the standard streams are never
//! closed.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Stdin, Stdout, Write};
use std::path::Path;

use log::debug;

use crate::compression::Result;

/// Path spelling that selects a standard stream.
pub const STANDARD_STREAM: &str = "-";

/// True when `path` selects standard input or output.
pub fn is_standard_stream(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new(STANDARD_STREAM))
}

/// A write handle: standard output or a buffered file.
#[derive(Debug)]
pub enum Output {
    Stdout(Stdout),
    File(BufWriter<File>),
}

impl Output {
    pub fn is_stdout(&self) -> bool {
        matches!(self, Output::Stdout(_))
    }

    /// Flush buffered output, reporting any error the drop would swallow.
    pub fn finish(mut self) -> Result<()> {
        self.flush()?;
        Ok(())
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(out) => out.write(buf),
            Output::File(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::File(out) => out.flush(),
        }
    }
}

/// A read handle: standard input or a buffered file.
#[derive(Debug)]
pub enum Input {
    Stdin(Stdin),
    File(BufReader<File>),
}

impl Input {
    pub fn is_stdin(&self) -> bool {
        matches!(self, Input::Stdin(_))
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(input) => input.read(buf),
            Input::File(input) => input.read(buf),
        }
    }
}

/// Open a write handle, creating or truncating the file at `path`.
pub fn open_output(path: Option<&Path>) -> Result<Output> {
    match path {
        Some(p) if !is_standard_stream(path) => {
            debug!("writing to {}", p.display());
            Ok(Output::File(BufWriter::new(File::create(p)?)))
        }
        _ => Ok(Output::Stdout(io::stdout())),
    }
}

/// Open a read handle on the file at `path`.
pub fn open_input(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(p) if !is_standard_stream(path) => {
            debug!("reading from {}", p.display());
            Ok(Input::File(BufReader::new(File::open(p)?)))
        }
        _ => Ok(Input::Stdin(io::stdin())),
    }
}
