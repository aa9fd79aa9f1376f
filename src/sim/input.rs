//! Keyboard input
//!
//! Movement is level-triggered: held keys live in [`InputState`] and are
//! polled every tick. Fire is edge-triggered: a key-down event shoots once and
//! is never stored.

use std::collections::VecDeque;

/// Vertical movement keys tracked while held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Up,
    Down,
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Move(MoveKey),
    Fire,
    /// Any key without a binding
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::Move(MoveKey::Up),
            "ArrowDown" => Key::Move(MoveKey::Down),
            " " => Key::Fire,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// A discrete key event from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: KeyEventKind,
    pub key: Key,
}

impl InputEvent {
    pub const fn down(key: Key) -> Self {
        Self {
            kind: KeyEventKind::Down,
            key,
        }
    }

    pub const fn up(key: Key) -> Self {
        Self {
            kind: KeyEventKind::Up,
            key,
        }
    }
}

/// Set of currently held movement keys, in press order
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: Vec<MoveKey>,
}

impl InputState {
    pub fn new() -> Self {
        Self { held: Vec::new() }
    }

    /// Mark a key held. Returns false if it already was.
    pub fn press(&mut self, key: MoveKey) -> bool {
        if self.held.contains(&key) {
            return false;
        }
        self.held.push(key);
        true
    }

    /// Mark a key released. Returns false if it wasn't held.
    pub fn release(&mut self, key: MoveKey) -> bool {
        match self.held.iter().position(|k| *k == key) {
            Some(i) => {
                self.held.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        self.held.contains(&key)
    }

    /// Held keys in press order
    pub fn held(&self) -> &[MoveKey] {
        &self.held
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// FIFO of events collected between frames.
///
/// Platform callbacks push; the frame callback drains before `update`, so
/// events never interleave with a running update/draw.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all pending events in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }
}
