// The read -> classify/transform -> write loop.
//
// Running: read one record, hand it to the engine, write it unless dropped.
// A clean end of stream ends the loop with the run summary; the first read or
// write error ends it with that error. Record N+1 is not read until record N
// has been written or dropped.

use crate::error::Result;
use crate::event::{EventReader, EventWriter};
use crate::remap::keynames::{get_event_type_name, get_key_name, get_value_name};
use crate::remap::{Action, RemapEngine};
use std::io::{Read, Write};
use tracing::trace;

/// Per-run record counters, logged when the stream ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub read: u64,
    pub passed: u64,
    pub remapped: u64,
    pub dropped: u64,
}

impl RunSummary {
    pub fn written(&self) -> u64 {
        self.passed + self.remapped
    }
}

/// Runs the filter until the reader reaches end of stream or an error occurs.
pub fn run<R: Read, W: Write>(
    reader: &mut EventReader<R>,
    writer: &mut EventWriter<W>,
    engine: &mut RemapEngine,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    while let Some(mut ev) = reader.read_event()? {
        summary.read += 1;
        let action = engine.process(&mut ev);

        trace!(
            type_ = get_event_type_name(ev.type_),
            code = ev.code,
            value = get_value_name(ev.value),
            ?action,
            "event"
        );

        match action {
            Action::Drop => {
                summary.dropped += 1;
                continue;
            }
            Action::Pass => summary.passed += 1,
            Action::Remap { from, to } => {
                summary.remapped += 1;
                trace!(from = get_key_name(from), to = get_key_name(to), "remapped");
            }
        }

        writer.write_event(&ev)?;
    }

    Ok(summary)
}
