//! Groups (workspaces).
//!
//! A group's name doubles as its display label and as the identifier that
//! [`Command::SwitchToGroup`](crate::command::Command::SwitchToGroup) and
//! [`Command::MoveWindowToGroup`](crate::command::Command::MoveWindowToGroup)
//! target.  Its position in the declared list decides the number key bound
//! to it.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A named workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Accepts either `"name"` or `{"name": "name"}`.
impl<'de> Deserialize<'de> for Group {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = Group;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "group name string or object {{name}}")
            }
            fn visit_str<E>(self, s: &str) -> Result<Group, E>
            where
                E: DeError,
            {
                Ok(Group::new(s))
            }
            fn visit_map<A>(self, mut map: A) -> Result<Group, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut name = None;
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "name" => name = Some(map.next_value::<String>()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(Group::new(name.ok_or_else(|| DeError::missing_field("name"))?))
            }
        }
        deserializer.deserialize_any(V)
    }
}

/// Whether `name` is declared in `groups`.
pub fn contains(groups: &[Group], name: &str) -> bool {
    groups.iter().any(|g| g.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_from_plain_string() {
        let g: Group = serde_json::from_str(r#""web""#).unwrap();
        assert_eq!(g, Group::new("web"));
    }

    #[test]
    fn group_from_object() {
        let g: Group = serde_json::from_str(r#"{"name":"mail","label":"ignored"}"#).unwrap();
        assert_eq!(g.name, "mail");
    }

    #[test]
    fn group_object_without_name_rejected() {
        assert!(serde_json::from_str::<Group>(r#"{"label":"x"}"#).is_err());
    }

    #[test]
    fn icon_names_survive_round_trip() {
        let g = Group::new("\u{f268} ");
        let json = serde_json::to_string(&g).unwrap();
        let back: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn contains_matches_exact_name() {
        let groups = vec![Group::new("a"), Group::new("b")];
        assert!(contains(&groups, "b"));
        assert!(!contains(&groups, "B"));
    }
}
