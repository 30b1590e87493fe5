// fuzz/fuzz_targets/fuzz_remap_engine.rs
#![no_main]

use capsremap::config::default_table;
use capsremap::event::{encode, EventReader, EventWriter, EVENT_SIZE};
use capsremap::pipeline;
use capsremap::remap::{HeldLayer, RemapEngine};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use std::time::Duration;

// Treats the input as a raw event stream, including a possible partial tail.
fuzz_target!(|data: &[u8]| {
    let layer = HeldLayer {
        key: 58, // KEY_CAPSLOCK
        table: [(35, 105), (36, 108), (37, 103), (38, 106)].into_iter().collect(),
    };
    let mut engine = RemapEngine::new(default_table()).with_layer(layer, Duration::from_millis(20));
    let mut reader = EventReader::new(Cursor::new(data));
    let mut writer = EventWriter::new(Vec::with_capacity(data.len()));

    let result = pipeline::run(&mut reader, &mut writer, &mut engine);
    let written = writer.into_inner();

    // Output is always whole records and never grows the stream.
    assert_eq!(written.len() % EVENT_SIZE, 0);
    assert!(written.len() <= data.len());
    assert_eq!(result.is_ok(), data.len() % EVENT_SIZE == 0);
    if let Ok(summary) = result {
        assert_eq!(summary.written() as usize * EVENT_SIZE, written.len());
    }

    // Timestamps pass through untouched. The first record, unless it is a
    // dropped scan echo, is the first one written; its timeval prefix
    // (everything before type/code/value) must match.
    if let (Some(first_in), Some(first_out)) = (data.get(..EVENT_SIZE), written.get(..EVENT_SIZE)) {
        let mut buf = [0u8; EVENT_SIZE];
        buf.copy_from_slice(first_in);
        let ev = capsremap::event::decode(&buf);
        if !capsremap::event::is_scan_code_echo(&ev) {
            let time_len = EVENT_SIZE - 8;
            assert_eq!(&encode(&ev)[..time_len], &first_out[..time_len]);
        }
    }
});
