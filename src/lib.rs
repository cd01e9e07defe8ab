/*!

Decoding pipeline for SECOM dataset content, as served by maritime
Aids-to-Navigation (AtoN) services.

A SECOM get response wraps the actual S-100 dataset in an envelope: the
payload arrives base64 encoded, with exchange metadata flags describing
whether it is additionally gzip compressed or encrypted. This crate turns
that envelope back into the XML document it carries and re-emits it with
consistent indentation, ready for a text display.

## Quick Start

```rust
use secom_content::{format_xml, GetResponse};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let response = GetResponse::from_json(
    r#"{
        "dataResponseObject": {
            "data": "PHI+PHY+MTwvdj48L3I+",
            "exchangeMetadata": {
                "compressionFlag": false,
                "dataProtection": false
            }
        }
    }"#,
)?;

let envelope = response.data_response_object.unwrap();
let raw = envelope.decode()?;
let formatted = format_xml(&String::from_utf8_lossy(&raw));
assert_eq!(formatted, "<r>\n  <v>1</v>\n</r>\n");
# Ok(())
# }
```

## Protected payloads

Envelopes flagged with `dataProtection` require decryption, which no
deployed producer implements a scheme for. Rather than passing
ciphertext through as if it were XML, [`DataResponse::decode`] fails
with an [`UnsupportedProtection`](EnvelopeErrorKind::UnsupportedProtection)
error so the caller can tell the user the content is encrypted, not
broken.

## Driving a display

The [`view`] module holds the seams a UI plugs into: a
[`ContentGateway`](view::ContentGateway) for the content-retrieval
endpoint, a [`DisplaySurface`](view::DisplaySurface) for the text region
the output lands in, and a [`ContentViewer`](view::ContentViewer) that
runs the fetch, decode, and format steps per user action while making
sure a stale response never overwrites a newer request's result.

*/

mod envelope;
pub mod view;
mod xml;

pub use self::envelope::*;
pub use self::xml::*;
