//! Types for pretty-printing flat XML markup
//!
//! Dataset payloads arrive as a single unbroken line of XML. The
//! [`XmlFormatter`] splits the markup at tag boundaries and re-emits it
//! with two spaces of indentation per nesting level, inferred
//! syntactically from the tag patterns on each line. It is a line
//! splitter, not a validating parser: malformed documents are tolerated
//! and formatted on a best-effort basis.
//!
//! Formatting always consumes the whole document, so a tag is never
//! split by a buffer boundary. Bounding memory on the display side is
//! the job of [`DisplayChunks`], which slices the formatted text into
//! bounded chunks after the structural work is done.

mod chunks;
mod formatter;

pub use chunks::*;
pub use formatter::*;
