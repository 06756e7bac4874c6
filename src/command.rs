//! Commands and types used throughout tilerc.
//!
//! This module defines the action vocabulary that key and mouse bindings
//! refer to: [`Command`] names every host action a binding can trigger, and
//! [`Direction`] parameterises the directional layout actions.
//!
//! Commands are late-bound: the configuration only *names* them, and a
//! [`Host`](crate::traits::Host) resolves each variant against its own
//! implementation when the binding fires.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Direction for focus, shuffle and grow actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Lowercase name, as written in configs and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The vi motion key bound to this direction in the reference keymap.
    pub fn vi_key(self) -> &'static str {
        match self {
            Direction::Left => "h",
            Direction::Right => "l",
            Direction::Up => "k",
            Direction::Down => "j",
        }
    }

    const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    /// Accepts the name in any case or the vi key, so a command can be
    /// written as `{"Focus": "h"}` next to the `mod4+h` chord it sits on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| s.eq_ignore_ascii_case(d.as_str()) || s.eq_ignore_ascii_case(d.vi_key()))
            .ok_or_else(|| format!("invalid direction: {:?}", s))
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?.parse().map_err(DeError::custom)
    }
}

/// Every host action a binding can name.
///
/// On the wire commands use serde's externally tagged form: unit variants
/// are plain strings (`"NextLayout"`), the rest are single-key objects
/// (`{"Spawn": "tilix"}`, `{"Focus": "left"}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move focus to the neighbouring window in `direction`.
    Focus(Direction),
    /// Move focus to the next window in the layout's order.
    FocusNext,
    /// Swap the focused window with its neighbour in `direction`.
    ///
    /// Shuffling past the edge of a column layout opens a new column.
    Shuffle(Direction),
    /// Grow the focused window towards `direction`.
    ///
    /// At a screen edge growing towards the edge shrinks the window instead.
    Grow(Direction),
    /// Reset all window sizes in the current layout.
    Normalize,
    /// Toggle between split and unsplit sides of a stack.
    ToggleSplit,
    /// Run a shell command line.
    Spawn(String),
    /// Open the bar's command prompt.
    SpawnPrompt,
    /// Cycle to the next layout in declaration order.
    NextLayout,
    /// Close the focused window.
    KillWindow,
    /// Restart the window manager, re-reading the configuration.
    Restart,
    /// Shut the window manager down.
    Shutdown,
    /// Show the named group on the current screen.
    SwitchToGroup(String),
    /// Send the focused window to the named group.
    MoveWindowToGroup(String),
    /// Move a floating window while dragging.
    SetPositionFloating,
    /// Capture the window position at the start of a drag.
    GetPosition,
    /// Resize a floating window while dragging.
    SetSizeFloating,
    /// Capture the window size at the start of a drag.
    GetSize,
    /// Raise the clicked window above its siblings.
    BringToFront,
}

impl Command {
    /// The group name this command targets, if it is a group command.
    pub fn target_group(&self) -> Option<&str> {
        match self {
            Command::SwitchToGroup(name) | Command::MoveWindowToGroup(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Focus(dir) => write!(f, "focus {}", dir),
            Command::FocusNext => write!(f, "focus next"),
            Command::Shuffle(dir) => write!(f, "shuffle {}", dir),
            Command::Grow(dir) => write!(f, "grow {}", dir),
            Command::Normalize => write!(f, "normalize"),
            Command::ToggleSplit => write!(f, "toggle split"),
            Command::Spawn(cmd) => write!(f, "spawn {:?}", cmd),
            Command::SpawnPrompt => write!(f, "spawn prompt"),
            Command::NextLayout => write!(f, "next layout"),
            Command::KillWindow => write!(f, "kill window"),
            Command::Restart => write!(f, "restart"),
            Command::Shutdown => write!(f, "shutdown"),
            Command::SwitchToGroup(name) => write!(f, "switch to group {:?}", name),
            Command::MoveWindowToGroup(name) => write!(f, "move window to group {:?}", name),
            Command::SetPositionFloating => write!(f, "set position floating"),
            Command::GetPosition => write!(f, "get position"),
            Command::SetSizeFloating => write!(f, "set size floating"),
            Command::GetSize => write!(f, "get size"),
            Command::BringToFront => write!(f, "bring to front"),
        }
    }
}
