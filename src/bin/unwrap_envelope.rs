//! Utility to unwrap a SECOM get response from stdin and print the
//! pretty-printed dataset payload to stdout.
//!
//! Feed it the JSON body of a `GET /api/secom/v1/object` response.

use secom_content::{format_xml, DisplayChunks, GetResponse};
use std::{
    error,
    io::{self, Read, Write},
};

fn main() -> Result<(), Box<dyn error::Error>> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;

    let response = GetResponse::from_json(&input)?;
    let envelope = match response.data_response_object {
        Some(envelope) => envelope,
        None => {
            eprintln!("no data found");
            return Ok(());
        }
    };

    let raw = envelope.decode()?;
    let formatted = format_xml(&String::from_utf8_lossy(&raw));

    let stdout = io::stdout().lock();
    let mut writer = io::BufWriter::new(stdout);
    for chunk in DisplayChunks::bounded(&formatted) {
        writer.write_all(chunk.as_bytes())?;
    }

    Ok(())
}
