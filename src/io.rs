//! Reading the instance and writing the result.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::{Output, Problem};

/// Reads the problem from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Problem> {
    match path {
        Some(path) => {
            log::debug!("reading input from {}", path.display());
            read_problem(BufReader::new(File::open(path)?))
        }
        None => {
            log::debug!("reading input from stdin");
            read_problem(io::stdin().lock())
        }
    }
}

pub fn read_problem<R: Read>(reader: R) -> Result<Problem> {
    Ok(serde_json::from_reader(reader)?)
}

/// Pretty JSON with two-space indentation, no trailing newline.
pub fn to_json(output: &Output) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Writes the output to `path`, or to stdout when no path is given. Both end
/// with a newline.
pub fn write_output(path: Option<&Path>, output: &Output) -> Result<()> {
    match path {
        Some(path) => {
            log::debug!("writing output to {}", path.display());
            write_json(BufWriter::new(File::create(path)?), output)
        }
        None => write_json(io::stdout().lock(), output),
    }
}

pub fn write_json<W: Write>(mut writer: W, output: &Output) -> Result<()> {
    let content = to_json(output)?;
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
