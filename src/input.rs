//! Key-press canonicalization and scoped handler dispatch.
//!
//! A raw key press is folded into a canonical combo string — active
//! modifiers in the fixed order shift, alt, ctrl, then the key token,
//! joined by `+` (e.g. `"shift+ctrl+k"`). Handlers are registered per
//! focus scope under `[scope, combo]` in a [`KeyedStore`], so tearing down
//! a scope's last handler also prunes the scope entry itself.

use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::keyed_store::KeyedStore;

/// A raw key-press as reported by the host input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

/// Selects how the key-identity component of a combo string is derived.
///
/// `Insensitive` folds character keys to lowercase so a binding fires
/// regardless of shift-produced case; `Sensitive` keeps the literal
/// character. A caller picks one mode per dispatcher and must register
/// combos written in that same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCaseMode {
    #[default]
    Insensitive,
    Sensitive,
}

fn key_token(code: KeyCode, mode: KeyCaseMode) -> String {
    match code {
        KeyCode::Char(c) => match mode {
            KeyCaseMode::Insensitive => c.to_ascii_lowercase().to_string(),
            KeyCaseMode::Sensitive => c.to_string(),
        },
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        other => format!("{:?}", other).to_ascii_lowercase(),
    }
}

/// Canonical combo string for a key press. Only active modifiers are
/// emitted, always in shift, alt, ctrl order regardless of the order the
/// host reported them.
pub fn canonical_combo(press: &KeyPress, mode: KeyCaseMode) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);
    if press.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("shift".to_string());
    }
    if press.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt".to_string());
    }
    if press.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl".to_string());
    }
    parts.push(key_token(press.code, mode));
    parts.join("+")
}

/// What became of a dispatched key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A registered handler ran.
    Handled,
    /// The active scope has no handler for this combo; the event was
    /// consumed by the documented no-op.
    Unhandled,
    /// No window holds input focus; the event was dropped. Desktop-level
    /// key handling is a known gap.
    Dropped,
}

type KeyHandler = Box<dyn Fn(&KeyPress)>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum HandlerKey<W: Copy + Eq + Ord> {
    Scope(W),
    Combo(String),
}

/// Routes key presses to handlers registered per focus scope.
pub struct InputDispatcher<W: Copy + Eq + Ord> {
    handlers: KeyedStore<HandlerKey<W>, KeyHandler>,
    mode: KeyCaseMode,
}

impl<W: Copy + Eq + Ord> fmt::Debug for InputDispatcher<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputDispatcher")
            .field("registered", &self.handlers.len())
            .field("mode", &self.mode)
            .finish()
    }
}

impl<W: Copy + Eq + Ord> Default for InputDispatcher<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Copy + Eq + Ord> InputDispatcher<W> {
    pub fn new() -> Self {
        Self::with_mode(KeyCaseMode::default())
    }

    pub fn with_mode(mode: KeyCaseMode) -> Self {
        Self {
            handlers: KeyedStore::new(),
            mode,
        }
    }

    pub fn mode(&self) -> KeyCaseMode {
        self.mode
    }

    /// Register `handler` for `combo` within `scope`. The combo string must
    /// already be canonical for this dispatcher's mode (see
    /// [`canonical_combo`]). A second registration for the same pair
    /// replaces the first.
    pub fn register<F>(&mut self, scope: W, combo: impl Into<String>, handler: F)
    where
        F: Fn(&KeyPress) + 'static,
    {
        self.handlers.set(
            &[HandlerKey::Scope(scope), HandlerKey::Combo(combo.into())],
            Box::new(handler),
        );
    }

    /// Remove the handler for `combo` within `scope`. Also drops the scope
    /// entry when this was its last handler. Unknown pairs are a no-op.
    pub fn unregister(&mut self, scope: W, combo: &str) {
        self.handlers.remove(&[
            HandlerKey::Scope(scope),
            HandlerKey::Combo(combo.to_string()),
        ]);
    }

    /// Number of handlers currently registered across all scopes.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Canonicalize `press` and invoke the handler registered for the
    /// active scope, if any.
    pub fn dispatch(&self, active: Option<W>, press: &KeyPress) -> DispatchOutcome {
        let Some(scope) = active else {
            tracing::trace!("key press dropped: no active window");
            return DispatchOutcome::Dropped;
        };
        let combo = canonical_combo(press, self.mode);
        match self
            .handlers
            .value(&[HandlerKey::Scope(scope), HandlerKey::Combo(combo)])
        {
            Some(handler) => {
                handler(press);
                DispatchOutcome::Handled
            }
            None => DispatchOutcome::Unhandled,
        }
    }
}
