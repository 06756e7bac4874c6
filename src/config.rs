//! The configuration document.
//!
//! A [`Config`] is what the user writes: a JSON file (or a value built in
//! Rust) whose sections are all optional.  [`Config::resolve`] turns it into
//! the [`Document`] the host loads: group keys appended, host float rules
//! prepended, every palette reference and group name checked.  Resolution is
//! pure; the autostart list is only *run* by
//! [`run_autostart`](crate::autostart::run_autostart).
//!
//! # Example
//!
//! ```json
//! {
//!   "modkey": "mod4",
//!   "terminal": "alacritty",
//!   "groups": ["web", "code", {"name": "chat"}],
//!   "colors": [["#000000", "#000000"], ["#ffffff", "#ffffff"]],
//!   "layouts": [{"kind": "Max"}],
//!   "float_rules": [{"title": "pinentry"}],
//!   "settings": {"cursor_warp": true},
//!   "autostart": ["setxkbmap us"]
//! }
//! ```

use crate::bar::Screen;
use crate::defaults;
use crate::group::{self, Group};
use crate::keys::{build_key_table, duplicate_chords, Key, Modifier};
use crate::layout::LayoutSpec;
use crate::mouse::MouseAction;
use crate::palette::{Palette, PaletteError};
use crate::params::Params;
use crate::rules::{effective_float_rules, Match};
use crate::settings::Settings;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The document as written.
///
/// Every field is optional: a minimal `{}` file is valid and each section
/// falls back to the reference values in [`defaults`].  `keys` and `mouse`
/// stay `None` until resolved so that their defaults pick up the
/// configured `modkey` and `terminal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Modifier used by the generated group keys and the default bindings.
    pub modkey: Modifier,
    /// Command line the default "launch terminal" key spawns.
    pub terminal: String,
    /// Hand-written key bindings.  Group keys are appended on resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<Key>>,
    pub groups: Vec<Group>,
    pub colors: Palette,
    pub layouts: Vec<LayoutSpec>,
    pub screens: Vec<Screen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse: Option<Vec<MouseAction>>,
    /// Float rules added after the host defaults.
    pub float_rules: Vec<Match>,
    pub settings: Settings,
    /// Shell lines run once by the autostart step.
    pub autostart: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modkey: defaults::MODKEY,
            terminal: defaults::TERMINAL.into(),
            keys: None,
            groups: defaults::groups(),
            colors: defaults::palette(),
            layouts: defaults::layouts(),
            screens: defaults::screens(),
            mouse: None,
            float_rules: defaults::float_rules(),
            settings: Settings::default(),
            autostart: defaults::autostart(),
        }
    }
}

/// The resolved document handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub modkey: Modifier,
    /// Base keys followed by the generated group keys.
    pub keys: Vec<Key>,
    pub groups: Vec<Group>,
    pub colors: Palette,
    pub layouts: Vec<LayoutSpec>,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseAction>,
    /// Host default rules followed by the configured ones.
    pub float_rules: Vec<Match>,
    pub settings: Settings,
    pub autostart: Vec<String>,
}

/// Error from loading or resolving a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {location}: {source}")]
    Parse {
        location: String,
        source: serde_json::Error,
    },
    #[error("{location}: {source}")]
    Palette {
        location: String,
        source: PaletteError,
    },
    #[error("{location}: unknown group {name:?}")]
    UnknownGroup { location: String, name: String },
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    /// Load `path`, or the reference defaults if no file exists there.
    ///
    /// Only a missing file falls back; an unreadable or malformed file is
    /// still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse configuration from JSON text.  `location` names the source in
    /// error messages.
    pub fn parse(json: &str, location: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            location: location.to_string(),
            source,
        })
    }

    /// The hand-written keys, or the reference keys for this modkey and
    /// terminal.
    pub fn base_keys(&self) -> Vec<Key> {
        match &self.keys {
            Some(keys) => keys.clone(),
            None => defaults::keys(self.modkey, &self.terminal),
        }
    }

    pub fn mouse_actions(&self) -> Vec<MouseAction> {
        match &self.mouse {
            Some(mouse) => mouse.clone(),
            None => defaults::mouse(self.modkey),
        }
    }

    /// Build the [`Document`].
    ///
    /// Fails on a palette index past the end of `colors` or a group command
    /// naming an undeclared group.  Duplicate key chords are only logged:
    /// the later binding shadows the earlier one.
    pub fn resolve(&self) -> Result<Document, ConfigError> {
        let keys = build_key_table(&self.base_keys(), &self.groups, self.modkey);
        for (earlier, later) in duplicate_chords(&keys) {
            warn!("keys[{}] ({}) shadows keys[{}] ({})", later, keys[later], earlier, keys[earlier]);
        }

        let mouse = self.mouse_actions();
        self.check_group_targets(&keys, &mouse)?;
        self.check_palette_refs()?;

        let float_rules = effective_float_rules(&self.float_rules);
        debug!(
            "{} float rules ({} configured)",
            float_rules.len(),
            self.float_rules.len()
        );

        info!(
            "resolved {} keys, {} groups, {} layouts, {} screens",
            keys.len(),
            self.groups.len(),
            self.layouts.len(),
            self.screens.len()
        );

        Ok(Document {
            modkey: self.modkey,
            keys,
            groups: self.groups.clone(),
            colors: self.colors.clone(),
            layouts: self.layouts.clone(),
            screens: self.screens.clone(),
            mouse,
            float_rules,
            settings: self.settings.clone(),
            autostart: self.autostart.clone(),
        })
    }

    fn check_group_targets(&self, keys: &[Key], mouse: &[MouseAction]) -> Result<(), ConfigError> {
        let key_commands = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (format!("keys[{}]", i), &k.command));
        let mouse_commands = mouse.iter().enumerate().flat_map(|(i, m)| {
            m.commands().map(move |c| (format!("mouse[{}]", i), c))
        });
        for (location, command) in key_commands.chain(mouse_commands) {
            if let Some(name) = command.target_group() {
                if !group::contains(&self.groups, name) {
                    return Err(ConfigError::UnknownGroup {
                        location,
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_palette_refs(&self) -> Result<(), ConfigError> {
        for (i, layout) in self.layouts.iter().enumerate() {
            check_params(&self.colors, &layout.params, &format!("layouts[{}]", i))?;
        }
        for (s, screen) in self.screens.iter().enumerate() {
            let bars = [("top", &screen.top), ("bottom", &screen.bottom)];
            for (edge, bar) in bars {
                let Some(bar) = bar else { continue };
                for (w, widget) in bar.widgets.iter().enumerate() {
                    let location = format!("screens[{}].{}.widgets[{}]", s, edge, w);
                    check_params(&self.colors, &widget.params, &location)?;
                }
            }
        }
        Ok(())
    }
}

fn check_params(palette: &Palette, params: &Params, location: &str) -> Result<(), ConfigError> {
    for (name, r) in params.palette_refs() {
        palette.check(r).map_err(|source| ConfigError::Palette {
            location: format!("{}.{}", location, name),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::{Bar, Widget, WidgetKind};
    use crate::command::Command;
    use crate::layout::LayoutKind;
    use crate::palette::{ColorPair, PaletteRef};
    use crate::rules::default_float_rules;
    use std::io::Write;

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.modkey, Modifier::Mod4);
        assert_eq!(cfg.terminal, "tilix");
        assert_eq!(cfg.groups.len(), 7);
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "groups": ["a"], "future_section": { "key": 42 } }"#;
        // Should not fail; unknown keys are silently ignored.
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.groups, vec![Group::new("a")]);
    }

    #[test]
    fn reference_document_resolves() {
        let doc = Config::default().resolve().unwrap();
        assert_eq!(doc.keys.len(), 24 + 14);
        assert_eq!(doc.mouse.len(), 3);
        assert_eq!(doc.float_rules.len(), default_float_rules().len() + 6);
        assert_eq!(doc.autostart.len(), 3);
        assert_eq!(doc.settings.wmname, "LG3D");
    }

    #[test]
    fn default_keys_follow_modkey_and_terminal() {
        let cfg = Config::parse(r#"{"modkey":"alt","terminal":"xterm","groups":["x"]}"#, "test").unwrap();
        let doc = cfg.resolve().unwrap();
        assert!(doc.keys.iter().all(|k| k.mods.contains(&Modifier::Mod1)));
        assert!(doc.keys.iter().any(|k| k.command == Command::Spawn("xterm".into())));
        assert!(doc.mouse.iter().all(|m| m.mods().contains(&Modifier::Mod1)));
    }

    #[test]
    fn group_keys_appended_after_configured_keys() {
        let cfg = Config::parse(
            r#"{
                "keys": [{"mods":["mod4"],"key":"Tab","command":"NextLayout"}],
                "groups": ["a", "b", "c"]
            }"#,
            "test",
        )
        .unwrap();
        let doc = cfg.resolve().unwrap();
        assert_eq!(doc.keys.len(), 1 + 6);
        assert_eq!(doc.keys[0].command, Command::NextLayout);
        let keys: Vec<&str> = doc.keys[1..].iter().map(|k| k.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "1", "2", "2", "3", "3"]);
        assert_eq!(doc.keys[5].command, Command::SwitchToGroup("c".into()));
    }

    #[test]
    fn float_rules_appended_to_defaults() {
        let cfg = Config::parse(r#"{"float_rules":[{"title":"pinentry"}]}"#, "test").unwrap();
        let doc = cfg.resolve().unwrap();
        let defaults = default_float_rules();
        assert_eq!(doc.float_rules.len(), defaults.len() + 1);
        assert_eq!(doc.float_rules.last(), Some(&Match::Title("pinentry".into())));
    }

    #[test]
    fn palette_index_equal_to_length_rejected() {
        let mut cfg = Config::default();
        cfg.colors = Palette::new(vec![ColorPair::solid("#000"), ColorPair::solid("#fff")]);
        cfg.screens = vec![];
        cfg.layouts = vec![LayoutSpec::with_params(
            LayoutKind::Columns,
            Params::new().color("border_focus", PaletteRef::foreground(2)),
        )];
        match cfg.resolve() {
            Err(ConfigError::Palette { location, source }) => {
                assert_eq!(location, "layouts[0].border_focus");
                assert_eq!(source, PaletteError::OutOfRange { index: 2, len: 2 });
            }
            other => panic!("expected palette error, got {:?}", other),
        }
    }

    #[test]
    fn widget_palette_error_names_the_widget() {
        let mut cfg = Config::default();
        cfg.layouts = vec![];
        let bar = Bar::new(
            vec![
                Widget::new(WidgetKind::Spacer, Params::new()),
                Widget::new(WidgetKind::Clock, Params::new().color("foreground", PaletteRef::pair(6))),
            ],
            30,
        );
        cfg.screens = vec![Screen { top: None, bottom: Some(bar) }];
        let err = cfg.resolve().unwrap_err();
        assert_eq!(
            err.to_string(),
            "screens[0].bottom.widgets[1].foreground: palette index 6 out of range (palette has 6 entries)"
        );
    }

    #[test]
    fn unknown_group_in_keys_rejected() {
        let cfg = Config::parse(
            r#"{
                "groups": ["web"],
                "keys": [{"mods":["mod4"],"key":"m","command":{"SwitchToGroup":"mail"}}]
            }"#,
            "test",
        )
        .unwrap();
        match cfg.resolve() {
            Err(ConfigError::UnknownGroup { location, name }) => {
                assert_eq!(location, "keys[0]");
                assert_eq!(name, "mail");
            }
            other => panic!("expected unknown group, got {:?}", other),
        }
    }

    #[test]
    fn unknown_group_in_mouse_rejected() {
        let cfg = Config::parse(
            r#"{
                "groups": ["web"],
                "mouse": [{"type":"Click","mods":[],"button":"Button2","command":{"MoveWindowToGroup":"gone"}}]
            }"#,
            "test",
        )
        .unwrap();
        assert!(matches!(
            cfg.resolve(),
            Err(ConfigError::UnknownGroup { ref location, .. }) if location == "mouse[0]"
        ));
    }

    #[test]
    fn duplicate_keys_are_not_errors() {
        let cfg = Config::parse(
            r#"{
                "groups": [],
                "keys": [
                    {"mods":["mod4"],"key":"m","command":{"Spawn":"rofi"}},
                    {"mods":["mod4"],"key":"m","command":{"Spawn":"dmenu_run"}}
                ]
            }"#,
            "test",
        )
        .unwrap();
        let doc = cfg.resolve().unwrap();
        assert_eq!(doc.keys.len(), 2);
    }

    #[test]
    fn resolving_twice_is_identical() {
        let cfg = Config::default();
        let a = cfg.resolve().unwrap();
        let b = cfg.resolve().unwrap();
        assert_eq!(a.keys, b.keys);
        assert_eq!(a.float_rules, b.float_rules);
        assert_eq!(
            serde_json::to_string(&a.keys).unwrap(),
            serde_json::to_string(&b.keys).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&a.float_rules).unwrap(),
            serde_json::to_string(&b.float_rules).unwrap()
        );
    }

    #[test]
    fn reloading_same_file_is_identical() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let first = Config::load(file.path()).unwrap().resolve().unwrap();
        let second = Config::load(file.path()).unwrap().resolve().unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
        assert_eq!(first, Config::default().resolve().unwrap());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().starts_with("failed to read "));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"groups": 5}"#).unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_or_default(&dir.path().join("config.json")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn malformed_default_file_is_not_replaced_by_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"groups": 5}"#).unwrap();
        let err = Config::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unreadable_default_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
