//! Utility to pretty-print flat XML from stdin to stdout.
//!
//! Useful when inspecting a dataset payload that has already been pulled
//! out of its envelope.

use std::{
    error,
    io::{self, Read, Write},
};

fn main() -> Result<(), Box<dyn error::Error>> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;

    let stdout = io::stdout().lock();
    let mut writer = io::BufWriter::new(stdout);
    writer.write_all(secom_content::format_xml(&input).as_bytes())?;

    Ok(())
}
