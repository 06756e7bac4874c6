//! Option maps for layouts and widgets.
//!
//! Parameters are opaque to tilerc: they are forwarded to the host as
//! written.  The one thing this crate looks inside them for is
//! [`PaletteRef`]s, so that every color index can be checked against the
//! palette at load time.

use crate::palette::PaletteRef;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single option value.
///
/// Untagged on the wire: `true`, `25`, `0.9`, `{"palette": 2}`, `"line"`.
/// Anything else (lists, `null`, other objects) lands in [`Other`](Self::Other)
/// and is forwarded unchanged.  Variant order matters: a `{"palette": n}`
/// object must be tried before the catch-all so its index is still checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    #[serde(deserialize_with = "palette_object")]
    Palette(PaletteRef),
    Text(String),
    Other(serde_json::Value),
}

/// Only the object form is a palette reference; `[2]` stays an opaque list.
fn palette_object<'de, D>(deserializer: D) -> Result<PaletteRef, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Object(_) => {
            PaletteRef::deserialize(value).map_err(DeError::custom)
        }
        _ => Err(DeError::custom("palette reference must be an object")),
    }
}

/// Name → value option map, kept sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(self, name: &str, value: bool) -> Self {
        self.with(name, ParamValue::Bool(value))
    }

    pub fn int(self, name: &str, value: i64) -> Self {
        self.with(name, ParamValue::Int(value))
    }

    pub fn float(self, name: &str, value: f64) -> Self {
        self.with(name, ParamValue::Float(value))
    }

    pub fn color(self, name: &str, value: PaletteRef) -> Self {
        self.with(name, ParamValue::Palette(value))
    }

    pub fn text(self, name: &str, value: impl Into<String>) -> Self {
        self.with(name, ParamValue::Text(value.into()))
    }

    pub fn with(mut self, name: &str, value: ParamValue) -> Self {
        self.0.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every palette reference in the map, with the option it belongs to.
    pub fn palette_refs(&self) -> impl Iterator<Item = (&str, PaletteRef)> {
        self.iter().filter_map(|(k, v)| match v {
            ParamValue::Palette(r) => Some((k, *r)),
            _ => None,
        })
    }
}
