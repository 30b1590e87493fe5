// The remap engine decides, for each record, whether it is dropped, passed
// through verbatim, or forwarded with a rewritten key code.

pub mod keynames;

use crate::event::{self, is_axis_event, is_key_event, is_scan_code_echo};
use input_linux_sys::input_event;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

const KEY_RELEASE: i32 = 0;
const KEY_PRESS: i32 = 1;

/// A static `source code -> target code` mapping fixed at start-up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemapTable {
    rules: BTreeMap<u16, u16>,
}

impl RemapTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, source: u16) -> Option<u16> {
        self.rules.get(&source).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in ascending source-code order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.rules.iter().map(|(s, t)| (*s, *t))
    }
}

impl FromIterator<(u16, u16)> for RemapTable {
    fn from_iter<I: IntoIterator<Item = (u16, u16)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// A second table consulted for key presses while `key` is held down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeldLayer {
    pub key: u16,
    pub table: RemapTable,
}

/// Whether the layer key is currently down, and since when (event time, µs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    Idle,
    Held { key: u16, since_us: u64 },
}

/// Outcome of processing one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Do not forward the record.
    Drop,
    /// Forward the record unchanged.
    Pass,
    /// The record's code was rewritten in place; forward it.
    Remap { from: u16, to: u16 },
}

impl Action {
    #[inline]
    pub fn forwards(self) -> bool {
        !matches!(self, Action::Drop)
    }
}

#[derive(Debug)]
pub struct RemapEngine {
    table: RemapTable,
    layer: Option<HeldLayer>,
    /// Minimum time the layer key must be held before the layer engages.
    delay: Duration,
    state: KeyState,
    // Code emitted for each physically pressed key whose press was remapped.
    // Repeats and the release reuse it even if the layer changed meanwhile.
    pressed: HashMap<u16, u16>,
}

impl RemapEngine {
    /// Creates an engine with only a static table.
    #[must_use]
    pub fn new(table: RemapTable) -> Self {
        RemapEngine {
            table,
            layer: None,
            delay: Duration::ZERO,
            state: KeyState::Idle,
            pressed: HashMap::new(),
        }
    }

    /// Adds a held layer which engages once its key has been down for `delay`.
    #[must_use]
    pub fn with_layer(mut self, layer: HeldLayer, delay: Duration) -> Self {
        self.layer = Some(layer);
        self.delay = delay;
        self
    }

    pub fn layer(&self) -> Option<&HeldLayer> {
        self.layer.as_ref()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> KeyState {
        self.state
    }

    /// Classifies one record and rewrites its code in place when a rule applies.
    ///
    /// Checks run in a fixed order: scan-code echoes are dropped first, then
    /// every non-key record passes untouched, then key records are looked up.
    /// `time` and `value` are never modified.
    pub fn process(&mut self, ev: &mut input_event) -> Action {
        if is_scan_code_echo(ev) {
            return Action::Drop;
        }
        // Axis motion has no remap policy.
        if is_axis_event(ev) {
            return Action::Pass;
        }
        if !is_key_event(ev) {
            return Action::Pass;
        }

        let code = ev.code;
        // Only the held layer looks at time.
        let now_us = self
            .layer
            .as_ref()
            .and_then(|_| event::event_microseconds(ev));
        self.track_layer_key(code, ev.value, now_us);

        let target = match ev.value {
            KEY_PRESS => {
                let target = self.lookup_press(code, now_us);
                match target {
                    Some(t) => self.pressed.insert(code, t),
                    None => self.pressed.remove(&code),
                };
                target
            }
            KEY_RELEASE => self
                .pressed
                .remove(&code)
                .or_else(|| self.table.get(code)),
            _ => self
                .pressed
                .get(&code)
                .copied()
                .or_else(|| self.table.get(code)),
        };

        match target {
            Some(to) if to != code => {
                ev.code = to;
                Action::Remap { from: code, to }
            }
            _ => Action::Pass,
        }
    }

    fn track_layer_key(&mut self, code: u16, value: i32, now_us: Option<u64>) {
        let Some(layer) = &self.layer else {
            return;
        };
        if code != layer.key {
            return;
        }
        self.state = match (self.state, value) {
            (_, KEY_RELEASE) => KeyState::Idle,
            // A press without a usable timestamp never engages the layer.
            (KeyState::Idle, _) => match now_us {
                Some(since_us) => KeyState::Held {
                    key: code,
                    since_us,
                },
                None => KeyState::Idle,
            },
            (held, _) => held,
        };
    }

    fn lookup_press(&self, code: u16, now_us: Option<u64>) -> Option<u16> {
        if let (Some(layer), KeyState::Held { since_us, .. }) = (&self.layer, self.state) {
            // A timestamp earlier than the layer key's press never counts as held.
            let engaged = now_us
                .and_then(|now| now.checked_sub(since_us))
                .is_some_and(|held_us| Duration::from_micros(held_us) >= self.delay);
            if engaged {
                if let Some(target) = layer.table.get(code) {
                    return Some(target);
                }
            }
        }
        self.table.get(code)
    }
}
