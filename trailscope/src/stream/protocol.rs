//! Inbound frame parsing.
//!
//! Each frame is a JSON object of the form
//! `{"type":"pos","x":10,"y":-5,"w":2.34}`. Only frames whose `type` tag is
//! the position-report kind and whose three numeric fields are all present
//! and well-formed become samples. Everything else — parse failures, other
//! message kinds, missing or non-numeric fields — is ordinary noise, not a
//! fault: parsing returns `None` and the caller discards the frame.

use serde::Deserialize;
use tracing::trace;

use crate::state::Sample;

/// The `type` tag identifying a position report.
pub const POSITION_FRAME_KIND: &str = "pos";

/// Raw frame shape, before validation.
///
/// The numeric fields are optional so a missing field deserializes rather
/// than erroring; a present-but-non-numeric field still fails the whole
/// parse, which is the rejection we want. Unknown extra fields are ignored.
#[derive(Debug, Deserialize)]
struct Frame {
    #[serde(rename = "type")]
    kind: String,
    x: Option<f64>,
    y: Option<f64>,
    w: Option<f64>,
}

/// Parse a single inbound frame into a sample.
///
/// Returns `None` for anything that is not a complete position report.
pub fn parse_frame(text: &str) -> Option<Sample> {
    let frame: Frame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(error) => {
            trace!(%error, "Discarding malformed frame");
            return None;
        }
    };

    if frame.kind != POSITION_FRAME_KIND {
        trace!(kind = %frame.kind, "Discarding frame of unrecognized kind");
        return None;
    }

    match (frame.x, frame.y, frame.w) {
        (Some(x), Some(y), Some(w)) => Some(Sample::new(x, y, w)),
        _ => {
            trace!("Discarding position frame with missing fields");
            None
        }
    }
}
