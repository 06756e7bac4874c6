//! Floating-window match rules.
//!
//! The host floats any newly mapped window that matches one of the rules.
//! The effective list is the host defaults followed by the user's rules;
//! which rule wins when several match is the host's business.

use serde::{Deserialize, Serialize};

/// A predicate on a window's properties.
///
/// ```json
/// {"wm_class": "ssh-askpass"}
/// {"title": "pinentry"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Match {
    /// Any of the window's `WM_CLASS` strings equals this.
    WmClass(String),
    /// The window title equals this.
    Title(String),
    /// The EWMH window type equals this (`"dialog"`, `"splash"`, ...).
    WmType(String),
    /// The window's size hints pin its size.
    FixedSize,
    /// The window's size hints pin its aspect ratio.
    FixedRatio,
}

/// The window properties a [`Match`] looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProps {
    pub wm_class: Vec<String>,
    pub title: String,
    pub wm_type: Option<String>,
    pub fixed_size: bool,
    pub fixed_ratio: bool,
}

impl Match {
    pub fn matches(&self, window: &WindowProps) -> bool {
        match self {
            Match::WmClass(class) => window.wm_class.iter().any(|c| c == class),
            Match::Title(title) => &window.title == title,
            Match::WmType(ty) => window.wm_type.as_deref() == Some(ty.as_str()),
            Match::FixedSize => window.fixed_size,
            Match::FixedRatio => window.fixed_ratio,
        }
    }
}

/// The host's built-in float rules: transient window types, common dialog
/// classes, and windows whose size hints forbid resizing.
pub fn default_float_rules() -> Vec<Match> {
    let types = ["utility", "notification", "toolbar", "splash", "dialog"];
    let classes = [
        "file_progress",
        "confirm",
        "dialog",
        "download",
        "error",
        "notification",
        "splash",
        "toolbar",
    ];
    types
        .iter()
        .map(|t| Match::WmType((*t).to_string()))
        .chain(classes.iter().map(|c| Match::WmClass((*c).to_string())))
        .chain([Match::FixedSize, Match::FixedRatio])
        .collect()
}

/// Defaults followed by `additional`, in that order, nothing removed.
pub fn effective_float_rules(additional: &[Match]) -> Vec<Match> {
    let mut rules = default_float_rules();
    rules.extend_from_slice(additional);
    rules
}

/// Whether any rule in `rules` floats `window`.
pub fn should_float(rules: &[Match], window: &WindowProps) -> bool {
    rules.iter().any(|r| r.matches(window))
}
