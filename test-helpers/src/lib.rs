//! Common helper functions for tests and benchmarks.
use input_linux_sys::{input_event, timeval, EV_KEY, EV_MSC, EV_REL, EV_SYN, MSC_SCAN};
use std::mem::size_of;

// --- Constants ---
pub const KEY_A: u16 = 30;
pub const KEY_H: u16 = 35;
pub const KEY_LEFTCTRL: u16 = 29;
pub const KEY_CAPSLOCK: u16 = 58;
pub const KEY_RIGHTALT: u16 = 100;
pub const KEY_LEFT: u16 = 105;
pub const REL_X: u16 = 0;
pub const EVENT_SIZE: usize = size_of::<input_event>();

// --- Event Creation Helpers ---

fn timeval_us(ts_us: u64) -> timeval {
    timeval {
        tv_sec: (ts_us / 1_000_000) as i64,
        tv_usec: (ts_us % 1_000_000) as i64,
    }
}

/// Creates an input_event of any type with a specific microsecond timestamp.
pub fn raw_ev(ts_us: u64, type_: u16, code: u16, value: i32) -> input_event {
    input_event {
        time: timeval_us(ts_us),
        type_,
        code,
        value,
    }
}

/// Creates an EV_KEY input_event with a specific microsecond timestamp.
pub fn key_ev(ts_us: u64, code: u16, value: i32) -> input_event {
    raw_ev(ts_us, EV_KEY as u16, code, value)
}

/// Creates an EV_SYN/SYN_REPORT input_event.
pub fn syn_ev(ts_us: u64) -> input_event {
    raw_ev(ts_us, EV_SYN as u16, 0, 0)
}

/// Creates the EV_MSC/MSC_SCAN echo a keyboard sends before a key event.
pub fn scan_ev(ts_us: u64, scancode: i32) -> input_event {
    raw_ev(ts_us, EV_MSC as u16, MSC_SCAN as u16, scancode)
}

/// Creates an EV_REL/REL_X pointer motion event.
pub fn rel_ev(ts_us: u64, delta: i32) -> input_event {
    raw_ev(ts_us, EV_REL as u16, REL_X, delta)
}

// --- Byte Helpers ---

/// Native byte representation of a single event.
pub fn event_bytes(ev: &input_event) -> Vec<u8> {
    // Safety: input_event is POD and `ev` points to a valid value.
    unsafe { std::slice::from_raw_parts(ev as *const _ as *const u8, EVENT_SIZE) }.to_vec()
}

/// Serializes events into the byte stream a device reader would produce.
pub fn events_to_bytes(events: &[input_event]) -> Vec<u8> {
    events.iter().flat_map(event_bytes).collect()
}

/// Splits a byte stream back into events. Trailing partial bytes are ignored.
pub fn bytes_to_events(bytes: &[u8]) -> Vec<input_event> {
    bytes
        .chunks_exact(EVENT_SIZE)
        // Safety: every chunk holds exactly one input_event worth of bytes.
        .map(|chunk| unsafe { std::ptr::read_unaligned(chunk.as_ptr() as *const input_event) })
        .collect()
}
