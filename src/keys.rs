//! Keyboard bindings and the keybinding table builder.
//!
//! The final table handed to the host is the hand-written base list followed
//! by two generated bindings per group (see [`group_keys`]).  Nothing here
//! rejects duplicate chords: the host lets a later binding shadow an earlier
//! one, and [`duplicate_chords`] only reports them.

use crate::command::Command;
use crate::group::Group;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A keyboard modifier as named by X11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Shift,
    Lock,
    Control,
    Mod1,
    Mod2,
    Mod3,
    Mod4,
    Mod5,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modifier::Shift => "shift",
            Modifier::Lock => "lock",
            Modifier::Control => "control",
            Modifier::Mod1 => "mod1",
            Modifier::Mod2 => "mod2",
            Modifier::Mod3 => "mod3",
            Modifier::Mod4 => "mod4",
            Modifier::Mod5 => "mod5",
        };
        f.write_str(name)
    }
}

/// Parse a modifier name (case-insensitive).  `super`/`win` alias `mod4`,
/// `alt` aliases `mod1`, `ctrl` aliases `control`.
fn parse_modifier(s: &str) -> Option<Modifier> {
    match s.trim().to_lowercase().as_str() {
        "shift" => Some(Modifier::Shift),
        "lock" | "capslock" => Some(Modifier::Lock),
        "control" | "ctrl" => Some(Modifier::Control),
        "mod1" | "alt" => Some(Modifier::Mod1),
        "mod2" => Some(Modifier::Mod2),
        "mod3" => Some(Modifier::Mod3),
        "mod4" | "super" | "win" => Some(Modifier::Mod4),
        "mod5" => Some(Modifier::Mod5),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Modifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_modifier(&s).ok_or_else(|| DeError::custom(format!("invalid modifier: {:?}", s)))
    }
}

/// A set of modifiers.  Ordered so that equal sets compare and serialize
/// identically regardless of how they were written.
pub type ModifierSet = BTreeSet<Modifier>;

/// Build a [`ModifierSet`] from any list of modifiers.
pub fn mods(list: impl IntoIterator<Item = Modifier>) -> ModifierSet {
    list.into_iter().collect()
}

/// One keyboard binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// Modifiers that must be held.
    pub mods: ModifierSet,
    /// Key symbol, e.g. `"h"`, `"Return"`, `"10"`.
    pub key: String,
    /// Action to run.
    pub command: Command,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Key {
    pub fn new(
        mods: impl IntoIterator<Item = Modifier>,
        key: impl Into<String>,
        command: Command,
    ) -> Self {
        Self {
            mods: mods.into_iter().collect(),
            key: key.into(),
            command,
            desc: None,
        }
    }

    /// Attach a description.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Whether this binding fires for `mods` + `key`.
    ///
    /// Key symbols compare case-sensitively, as X keysym names do.
    pub fn matches(&self, mods: &ModifierSet, key: &str) -> bool {
        &self.mods == mods && self.key == key
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.mods {
            write!(f, "{}+", m)?;
        }
        write!(f, "{} -> {}", self.key, self.command)?;
        if let Some(desc) = &self.desc {
            write!(f, " ({})", desc)?;
        }
        Ok(())
    }
}

/// Generate the two number-key bindings for every group.
///
/// Group `i` (0-based) is bound to the key symbol `i + 1`:
/// `modkey + n` shows the group, `modkey + shift + n` sends the focused
/// window there.  Past nine groups the key symbols simply become `"10"`,
/// `"11"`, and so on.
pub fn group_keys(groups: &[Group], modkey: Modifier) -> Vec<Key> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(i, group)| {
            let actual_key = (i + 1).to_string();
            [
                Key::new([modkey], actual_key.clone(), Command::SwitchToGroup(group.name.clone())),
                Key::new(
                    [modkey, Modifier::Shift],
                    actual_key,
                    Command::MoveWindowToGroup(group.name.clone()),
                ),
            ]
        })
        .collect()
}

/// Produce the final key table: `base` followed by [`group_keys`].
pub fn build_key_table(base: &[Key], groups: &[Group], modkey: Modifier) -> Vec<Key> {
    let mut keys = base.to_vec();
    keys.extend(group_keys(groups, modkey));
    keys
}

/// Pairs of `(earlier, later)` indices whose chords collide.
///
/// With three bindings on the same chord this reports `(0, 1)` and `(1, 2)`:
/// each binding against the one it shadows.
pub fn duplicate_chords(keys: &[Key]) -> Vec<(usize, usize)> {
    let mut last_seen: HashMap<(&ModifierSet, &str), usize> = HashMap::new();
    let mut dups = Vec::new();
    for (i, k) in keys.iter().enumerate() {
        if let Some(prev) = last_seen.insert((&k.mods, k.key.as_str()), i) {
            dups.push((prev, i));
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Direction;

    fn groups(n: usize) -> Vec<Group> {
        (0..n).map(|i| Group::new(format!("g{}", i))).collect()
    }

    #[test]
    fn modifier_aliases() {
        let m: Vec<Modifier> = serde_json::from_str(r#"["Mod4","super","ctrl","alt","SHIFT"]"#).unwrap();
        assert_eq!(
            m,
            vec![Modifier::Mod4, Modifier::Mod4, Modifier::Control, Modifier::Mod1, Modifier::Shift]
        );
        assert!(serde_json::from_str::<Modifier>(r#""hyper""#).is_err());
    }

    #[test]
    fn modifier_set_ignores_order_and_repeats() {
        let a: Key = serde_json::from_str(
            r#"{"mods":["shift","mod4"],"key":"h","command":{"Shuffle":"left"}}"#,
        )
        .unwrap();
        let b = Key::new([Modifier::Mod4, Modifier::Shift, Modifier::Mod4], "h", Command::Shuffle(Direction::Left));
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a.mods).unwrap(), r#"["shift","mod4"]"#);
    }

    #[test]
    fn description_optional() {
        let k: Key = serde_json::from_str(r#"{"mods":[],"key":"x","command":"Restart"}"#).unwrap();
        assert_eq!(k.desc, None);
        let json = serde_json::to_string(&k).unwrap();
        assert!(!json.contains("desc"));
    }

    #[test]
    fn n_groups_add_two_n_keys_in_order() {
        let gs = groups(7);
        let base = vec![Key::new([Modifier::Mod4], "w", Command::KillWindow)];
        let table = build_key_table(&base, &gs, Modifier::Mod4);
        assert_eq!(table.len(), base.len() + 14);
        assert_eq!(table[0], base[0]);
        for (i, g) in gs.iter().enumerate() {
            let switch = &table[1 + 2 * i];
            let send = &table[2 + 2 * i];
            assert_eq!(switch.key, (i + 1).to_string());
            assert_eq!(switch.mods, mods([Modifier::Mod4]));
            assert_eq!(switch.command, Command::SwitchToGroup(g.name.clone()));
            assert_eq!(send.key, (i + 1).to_string());
            assert_eq!(send.mods, mods([Modifier::Mod4, Modifier::Shift]));
            assert_eq!(send.command, Command::MoveWindowToGroup(g.name.clone()));
        }
    }

    #[test]
    fn more_than_nine_groups_use_multi_digit_keys() {
        let table = group_keys(&groups(12), Modifier::Mod1);
        assert_eq!(table.len(), 24);
        assert_eq!(table[18].key, "10");
        assert_eq!(table[22].key, "12");
        assert_eq!(table[23].command, Command::MoveWindowToGroup("g11".into()));
    }

    #[test]
    fn no_groups_leaves_base_untouched() {
        let base = vec![Key::new([Modifier::Mod4], "Tab", Command::NextLayout)];
        assert_eq!(build_key_table(&base, &[], Modifier::Mod4), base);
    }

    #[test]
    fn duplicates_reported_against_the_binding_they_shadow() {
        let keys = vec![
            Key::new([Modifier::Mod4], "m", Command::Spawn("rofi".into())),
            Key::new([Modifier::Mod4], "n", Command::Normalize),
            Key::new([Modifier::Mod4], "m", Command::Spawn("dmenu".into())),
            Key::new([Modifier::Mod4, Modifier::Shift], "m", Command::Restart),
            Key::new([Modifier::Mod4], "m", Command::Shutdown),
        ];
        assert_eq!(duplicate_chords(&keys), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn key_display() {
        let k = Key::new([Modifier::Mod4, Modifier::Control], "r", Command::Restart).desc("Restart");
        assert_eq!(k.to_string(), "control+mod4+r -> restart (Restart)");
    }
}
