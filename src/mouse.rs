//! Mouse bindings.

use crate::command::Command;
use crate::keys::ModifierSet;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A pointer button, `Button1` (left) through `Button9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Button(u8);

impl Button {
    pub const LEFT: Button = Button(1);
    pub const MIDDLE: Button = Button(2);
    pub const RIGHT: Button = Button(3);

    /// `n` must be in `1..=9`.
    pub fn new(n: u8) -> Option<Self> {
        (1..=9).contains(&n).then_some(Button(n))
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Button{}", self.0)
    }
}

/// Parse `"Button1"`, `"button3"` or a bare `"2"`.
fn parse_button(s: &str) -> Option<Button> {
    let s = s.trim();
    let digits = match s.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("button") => &s[6..],
        _ => s,
    };
    digits.parse().ok().and_then(Button::new)
}

impl Serialize for Button {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Button {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_button(&s).ok_or_else(|| DeError::custom(format!("invalid button: {:?}", s)))
    }
}

/// A mouse binding.
///
/// ```json
/// { "type": "Drag", "mods": ["mod4"], "button": "Button1",
///   "command": "SetPositionFloating", "start": "GetPosition" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MouseAction {
    /// Press-and-move.  `start` runs once when the drag begins, `command`
    /// on every motion event.
    Drag {
        mods: ModifierSet,
        button: Button,
        command: Command,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<Command>,
    },
    /// Press without a drag.
    Click {
        mods: ModifierSet,
        button: Button,
        command: Command,
    },
}

impl MouseAction {
    pub fn mods(&self) -> &ModifierSet {
        match self {
            MouseAction::Drag { mods, .. } | MouseAction::Click { mods, .. } => mods,
        }
    }

    pub fn button(&self) -> Button {
        match self {
            MouseAction::Drag { button, .. } | MouseAction::Click { button, .. } => *button,
        }
    }

    pub fn command(&self) -> &Command {
        match self {
            MouseAction::Drag { command, .. } | MouseAction::Click { command, .. } => command,
        }
    }

    pub fn start(&self) -> Option<&Command> {
        match self {
            MouseAction::Drag { start, .. } => start.as_ref(),
            MouseAction::Click { .. } => None,
        }
    }

    /// Every command this binding can run, start command first.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.start().into_iter().chain(std::iter::once(self.command()))
    }
}
