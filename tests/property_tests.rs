//! Property-based tests for the remap pipeline using proptest.

use capsremap::config::default_table;
use capsremap::event::{EventReader, EventWriter};
use capsremap::pipeline;
use capsremap::remap::{HeldLayer, RemapEngine, RemapTable};
use input_linux_sys::{input_event, EV_ABS, EV_KEY, EV_MSC, EV_REL, EV_SYN, MSC_SCAN};
use proptest::prelude::*;
use std::io::Cursor;
use std::time::Duration;

// Use the dev-dependency crate for helpers
use test_helpers::*;

// --- Test Constants ---
const MAX_EVENTS: usize = 200;
const MAX_TIME_DELTA_US: u64 = 100_000;

/// Strategy for one event's (time delta, type, code, value). Types are biased
/// towards the ones the engine treats specially; codes are drawn from a small
/// range so they often hit the remap table.
fn arb_event_data() -> impl Strategy<Value = (u64, u16, u16, i32)> {
    let type_ = prop_oneof![
        4 => Just(EV_KEY as u16),
        2 => Just(EV_SYN as u16),
        2 => Just(EV_MSC as u16),
        1 => Just(EV_REL as u16),
        1 => Just(EV_ABS as u16),
        1 => 0u16..0x20,
    ];
    let code = prop_oneof![
        2 => Just(KEY_CAPSLOCK),
        2 => Just(KEY_RIGHTALT),
        1 => Just(MSC_SCAN as u16),
        3 => 0u16..128,
    ];
    (0..=MAX_TIME_DELTA_US, type_, code, -1i32..3)
}

/// Event sequences with non-decreasing timestamps.
fn arb_events() -> impl Strategy<Value = Vec<input_event>> {
    prop::collection::vec(arb_event_data(), 0..=MAX_EVENTS).prop_map(|data| {
        let mut now = 0u64;
        data.into_iter()
            .map(|(delta, type_, code, value)| {
                now += delta;
                raw_ev(now, type_, code, value)
            })
            .collect()
    })
}

fn arb_table() -> impl Strategy<Value = RemapTable> {
    prop::collection::btree_map(0u16..128, 0u16..128, 0..8)
        .prop_map(|rules| rules.into_iter().collect())
}

fn is_scan_echo(ev: &input_event) -> bool {
    ev.type_ == EV_MSC as u16 && ev.code == MSC_SCAN as u16
}

fn is_remappable_class(ev: &input_event) -> bool {
    [EV_KEY, EV_REL, EV_ABS].contains(&i32::from(ev.type_))
}

/// Runs the full read/engine/write pipeline over an in-memory byte stream.
fn filter(events: &[input_event], engine: &mut RemapEngine) -> Vec<input_event> {
    let mut reader = EventReader::new(Cursor::new(events_to_bytes(events)));
    let mut writer = EventWriter::new(Vec::new());
    pipeline::run(&mut reader, &mut writer, engine).expect("in-memory run failed");
    bytes_to_events(&writer.into_inner())
}

proptest! {
    /// Records outside key/rel/abs that are not scan echoes come out byte-identical,
    /// and scan echoes never come out at all.
    #[test]
    fn prop_passthrough_and_scan_suppression(events in arb_events(), table in arb_table()) {
        let mut engine = RemapEngine::new(table);
        let out = filter(&events, &mut engine);

        let expected: Vec<Vec<u8>> = events
            .iter()
            .filter(|ev| !is_scan_echo(ev) && !is_remappable_class(ev))
            .map(event_bytes)
            .collect();
        let actual: Vec<Vec<u8>> = out
            .iter()
            .filter(|ev| !is_remappable_class(ev))
            .map(event_bytes)
            .collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(!out.iter().any(is_scan_echo));
    }

    /// With a static table, each key record's code becomes `table[code]` (or stays),
    /// every other field is untouched, and the output is the input minus the scan
    /// echoes, in the same order.
    #[test]
    fn prop_static_remap_preserves_order(events in arb_events(), table in arb_table()) {
        let mut engine = RemapEngine::new(table.clone());
        let out = filter(&events, &mut engine);

        let kept: Vec<&input_event> = events.iter().filter(|ev| !is_scan_echo(ev)).collect();
        prop_assert_eq!(out.len(), kept.len());

        for (input, output) in kept.iter().zip(&out) {
            let expected_code = if input.type_ == EV_KEY as u16 {
                table.get(input.code).unwrap_or(input.code)
            } else {
                input.code
            };
            prop_assert_eq!(output.code, expected_code);
            prop_assert_eq!(output.type_, input.type_);
            prop_assert_eq!(output.value, input.value);
            prop_assert_eq!(output.time.tv_sec, input.time.tv_sec);
            prop_assert_eq!(output.time.tv_usec, input.time.tv_usec);
        }
    }

    /// Even with a held layer the output stays a same-order subsequence of the
    /// input; only key codes may differ.
    #[test]
    fn prop_layer_only_rewrites_key_codes(
        events in arb_events(),
        layer_table in arb_table(),
        delay_ms in 0u64..50,
    ) {
        let layer = HeldLayer { key: KEY_CAPSLOCK, table: layer_table };
        let mut engine = RemapEngine::new(default_table())
            .with_layer(layer, Duration::from_millis(delay_ms));
        let out = filter(&events, &mut engine);

        let kept: Vec<&input_event> = events.iter().filter(|ev| !is_scan_echo(ev)).collect();
        prop_assert_eq!(out.len(), kept.len());
        for (input, output) in kept.iter().zip(&out) {
            prop_assert_eq!(output.type_, input.type_);
            prop_assert_eq!(output.value, input.value);
            prop_assert_eq!(output.time.tv_usec, input.time.tv_usec);
            if input.type_ != EV_KEY as u16 {
                prop_assert_eq!(output.code, input.code);
            }
        }
    }

    /// Every press that was rewritten is released under the same code.
    #[test]
    fn prop_release_matches_press(
        holds in prop::collection::vec((prop_oneof![Just(KEY_H), Just(KEY_A)], 0u64..60_000), 1..40),
    ) {
        let layer = HeldLayer {
            key: KEY_CAPSLOCK,
            table: [(KEY_H, KEY_LEFT)].into_iter().collect(),
        };
        let mut engine = RemapEngine::new(default_table())
            .with_layer(layer, Duration::from_millis(20));

        // Caps goes down, then keys are tapped; caps is released halfway.
        let mut events = vec![key_ev(0, KEY_CAPSLOCK, 1)];
        let mut now = 0;
        for (i, (code, gap)) in holds.iter().enumerate() {
            now += gap;
            events.push(key_ev(now, *code, 1));
            if i == holds.len() / 2 {
                events.push(key_ev(now, KEY_CAPSLOCK, 0));
            }
            now += 1;
            events.push(key_ev(now, *code, 0));
        }

        let out = filter(&events, &mut engine);
        let mut down: Option<u16> = None;
        for ev in out.iter().filter(|ev| ev.code != KEY_LEFTCTRL) {
            match ev.value {
                1 => down = Some(ev.code),
                0 => {
                    prop_assert_eq!(Some(ev.code), down);
                    down = None;
                }
                _ => {}
            }
        }
    }
}

#[test]
fn partial_trailing_bytes_never_produce_output() {
    let bytes = events_to_bytes(&[syn_ev(0)]);
    for cut in 1..EVENT_SIZE {
        let truncated = bytes[..cut].to_vec();
        let mut reader = EventReader::new(Cursor::new(truncated));
        let mut writer = EventWriter::new(Vec::new());
        let mut engine = RemapEngine::new(default_table());
        assert!(pipeline::run(&mut reader, &mut writer, &mut engine).is_err());
        assert!(writer.into_inner().is_empty());
    }
}
