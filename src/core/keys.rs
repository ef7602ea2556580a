//! Single keypress input and the key dispatch table.
//!
//! # Public API
//! - [`Key`]: The keys the loop distinguishes
//! - [`KeyReader`]: Blocking single-key source
//! - [`TerminalKeys`]: Raw-mode terminal reader with SIGINT reported as a key
//! - [`Action`]: What a key asks the loop to do

use crate::core::error::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const INTERRUPT_POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    /// Ctrl-C or a delivered SIGINT
    Interrupt,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Key::Interrupt
            }
            KeyCode::Char(_)
                if event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Key::Other
            }
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Blocking source of single keypresses
pub trait KeyReader {
    fn read_key(&mut self) -> Result<Key>;
}

/// Reads keys from the controlling terminal.
///
/// Raw mode is held only while waiting for a key, so frames are printed with
/// normal newline translation.
pub struct TerminalKeys {
    interrupted: Arc<AtomicBool>,
}

impl TerminalKeys {
    pub fn new() -> Result<Self> {
        let interrupted = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupted))?;
        Ok(Self { interrupted })
    }
}

impl KeyReader for TerminalKeys {
    fn read_key(&mut self) -> Result<Key> {
        let _raw = RawMode::enable()?;
        loop {
            if self.interrupted.swap(false, Ordering::Relaxed) {
                return Ok(Key::Interrupt);
            }
            if !event::poll(INTERRUPT_POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Key::from(key));
                }
            }
        }
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Loop command bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Top,
    Bottom,
    Middle,
    Down,
    Up,
    Open,
    ToggleDiff,
    ToggleStage,
    Quit,
}

impl Action {
    /// Key dispatch table; unbound keys map to `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('g') | Key::Char('H') => Some(Action::Top),
            Key::Char('G') | Key::Char('L') => Some(Action::Bottom),
            Key::Char('M') => Some(Action::Middle),
            Key::Char('j') => Some(Action::Down),
            Key::Char('k') => Some(Action::Up),
            Key::Char('o') => Some(Action::Open),
            Key::Char('d') => Some(Action::ToggleDiff),
            Key::Char(' ') | Key::Enter => Some(Action::ToggleStage),
            Key::Char('q') | Key::Escape | Key::Interrupt => Some(Action::Quit),
            _ => None,
        }
    }
}
