//! Scalar behaviour flags passed straight to the host.

use serde::{Deserialize, Serialize};

/// How the host reacts when a client asks to be focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnActivation {
    /// Focus only if the window is on the current group.
    Smart,
    /// Always focus, switching groups if needed.
    Focus,
    /// Mark the window urgent instead of focusing it.
    Urgent,
    /// Ignore the request.
    Never,
}

/// Host behaviour switches.
///
/// Every field is optional in a config file; missing ones take the values
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Focus follows the pointer.  Default: `true`.
    pub follow_mouse_focus: bool,
    /// Raise floating windows when clicked.  Default: `false`.
    pub bring_front_click: bool,
    /// Warp the pointer to the focused window.  Default: `false`.
    pub cursor_warp: bool,
    /// Let clients request fullscreen.  Default: `true`.
    pub auto_fullscreen: bool,
    /// Default: [`FocusOnActivation::Smart`].
    pub focus_on_window_activation: FocusOnActivation,
    /// Re-read the screen layout when outputs change.  Default: `true`.
    pub reconfigure_screens: bool,
    /// Let clients minimize themselves on focus loss.  Default: `true`.
    pub auto_minimize: bool,
    /// Name advertised through `_NET_WM_NAME`.
    ///
    /// Defaults to `"LG3D"`, which Java toolkits recognise as a
    /// non-reparenting window manager.
    pub wmname: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wmname: "LG3D".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_uses_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.wmname, "LG3D");
        assert!(s.follow_mouse_focus);
        assert!(!s.cursor_warp);
    }

    #[test]
    fn partial_override() {
        let s: Settings =
            serde_json::from_str(r#"{"cursor_warp":true,"focus_on_window_activation":"urgent"}"#)
                .unwrap();
        assert!(s.cursor_warp);
        assert_eq!(s.focus_on_window_activation, FocusOnActivation::Urgent);
        assert!(s.auto_fullscreen);
    }

    #[test]
    fn bad_activation_policy_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"focus_on_window_activation":"sometimes"}"#).is_err());
    }
}
