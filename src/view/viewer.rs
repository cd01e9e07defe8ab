use crate::{
    view::gateway::{ContentGateway, DatasetRef},
    xml::format_xml,
};
use tracing::{debug, warn};

/// Placeholder shown while a content request is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Message shown when no envelope record exists for the dataset
pub const NO_DATA_TEXT: &str = "No data found";

/// Display target for formatted content
///
/// The surface performs no further interpretation of the text it is
/// given; it is the text region of whatever widget hosts the output.
pub trait DisplaySurface {
    /// Replaces the surface contents with the given text
    fn show(&mut self, text: &str);
}

/// The terminal result of one content request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOutcome {
    /// Formatted dataset content, ready for display
    Content(String),
    /// The request succeeded but no envelope record exists
    NoData,
    /// A terminal failure, folded into one human-readable message
    Failed(String),
}

impl ContentOutcome {
    /// The text a display surface should show for this outcome
    pub fn text(&self) -> &str {
        match self {
            ContentOutcome::Content(text) => text,
            ContentOutcome::NoData => NO_DATA_TEXT,
            ContentOutcome::Failed(message) => message,
        }
    }
}

/// Ticket identifying one content request against a viewer
///
/// Dropping the ticket abandons the request; the next [`present`]
/// carrying a newer ticket proceeds as usual.
///
/// [`present`]: ContentViewer::present
#[derive(Debug)]
#[must_use = "a request that is never presented leaves the loading text on screen"]
pub struct RequestTicket {
    generation: u64,
}

/// Owns a display surface and serializes content requests onto it
///
/// Each call to [`begin`](Self::begin) supersedes every request before
/// it. Outcomes presented with a superseded ticket are discarded without
/// touching the surface, so a slow response can never overwrite the
/// result of a request issued after it.
#[derive(Debug)]
pub struct ContentViewer<D> {
    display: D,
    generation: u64,
}

impl<D: DisplaySurface> ContentViewer<D> {
    /// Creates a viewer around the given display surface
    pub fn new(display: D) -> Self {
        ContentViewer {
            display,
            generation: 0,
        }
    }

    /// Marks the start of a new content request
    ///
    /// Shows the loading placeholder and returns the ticket the
    /// eventual outcome must be presented with.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        debug!(generation = self.generation, "content request started");
        self.display.show(LOADING_TEXT);
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Presents a request's outcome, unless the request was superseded
    ///
    /// Returns whether the outcome reached the surface.
    pub fn present(&mut self, ticket: RequestTicket, outcome: &ContentOutcome) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale content response"
            );
            return false;
        }

        self.display.show(outcome.text());
        true
    }

    /// Returns a reference to the display surface
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Consumes the viewer, returning the display surface
    pub fn into_display(self) -> D {
        self.display
    }
}

/// Runs the full pipeline for one user-initiated content view
///
/// Fetches the dataset's envelope through the gateway, decodes and
/// formats the payload, and presents the outcome on the viewer. Every
/// terminal failure is folded into a single human-readable message; no
/// failure is retried, since all of them are data-shape failures rather
/// than transient I/O. Returns whether the outcome reached the surface.
pub fn view_content<G, D>(
    gateway: &G,
    viewer: &mut ContentViewer<D>,
    reference: &DatasetRef,
) -> bool
where
    G: ContentGateway,
    D: DisplaySurface,
{
    let ticket = viewer.begin();
    let outcome = fetch_outcome(gateway, reference);
    viewer.present(ticket, &outcome)
}

/// Resolves one content request to its terminal outcome
pub fn fetch_outcome<G>(gateway: &G, reference: &DatasetRef) -> ContentOutcome
where
    G: ContentGateway,
{
    match gateway.fetch(reference) {
        Ok(Some(envelope)) => match envelope.decode() {
            Ok(raw) => ContentOutcome::Content(format_xml(&String::from_utf8_lossy(&raw))),
            Err(err) => {
                warn!(%reference, error = %err, "unable to decode dataset content");
                ContentOutcome::Failed(err.to_string())
            }
        },
        Ok(None) => ContentOutcome::NoData,
        Err(err) => {
            warn!(%reference, error = %err, "content retrieval failed");
            ContentOutcome::Failed(err.to_string())
        }
    }
}
