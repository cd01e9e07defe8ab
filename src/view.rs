//! Seams between the decoding pipeline and a content display
//!
//! A UI drives the pipeline through three pieces: a [`ContentGateway`]
//! implementation wrapping the service's content-retrieval endpoint, a
//! [`DisplaySurface`] implementation wrapping the text region the output
//! lands in, and a [`ContentViewer`] owning the surface and the request
//! bookkeeping. Viewers and gateways are plain values handed to the UI
//! layer explicitly; nothing in this module is a singleton.
//!
//! Requests are guarded by generation-counted tickets so that a response
//! arriving for a superseded request is discarded instead of overwriting
//! the newer request's result:
//!
//! ```
//! use secom_content::view::{ContentOutcome, ContentViewer, DisplaySurface};
//!
//! #[derive(Default)]
//! struct Panel(String);
//!
//! impl DisplaySurface for Panel {
//!     fn show(&mut self, text: &str) {
//!         self.0 = text.to_string();
//!     }
//! }
//!
//! let mut viewer = ContentViewer::new(Panel::default());
//! let stale = viewer.begin();
//! let current = viewer.begin();
//! assert!(!viewer.present(stale, &ContentOutcome::NoData));
//! assert!(viewer.present(current, &ContentOutcome::Content("<a/>\n".into())));
//! ```

mod gateway;
mod viewer;

pub use gateway::*;
pub use viewer::*;
