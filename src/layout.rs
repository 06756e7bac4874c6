//! Layout selections.
//!
//! Each [`LayoutSpec`] names one of the host's tiling algorithms plus its
//! options.  The declared order is the order the host cycles through on
//! [`Command::NextLayout`](crate::command::Command::NextLayout).

use crate::params::Params;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The host's layout algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    Columns,
    Max,
    Stack,
    Bsp,
    Matrix,
    MonadTall,
    MonadWide,
    RatioTile,
    Tile,
    TreeTab,
    VerticalTile,
    Zoomy,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One entry in the layout cycle.
///
/// ```json
/// { "kind": "Columns", "params": { "border_width": 1, "margin": 20 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub kind: LayoutKind,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl LayoutSpec {
    pub fn new(kind: LayoutKind) -> Self {
        Self { kind, params: Params::new() }
    }

    pub fn with_params(kind: LayoutKind, params: Params) -> Self {
        Self { kind, params }
    }
}

/// The layout the host will switch to after `current` on
/// [`NextLayout`](crate::command::Command::NextLayout), wrapping around.
///
/// Returns `None` for an empty list.
pub fn next_index(layouts: &[LayoutSpec], current: usize) -> Option<usize> {
    if layouts.is_empty() {
        None
    } else {
        Some((current + 1) % layouts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteRef;
    use crate::params::ParamValue;

    #[test]
    fn bare_layout_needs_no_params() {
        let l: LayoutSpec = serde_json::from_str(r#"{"kind":"Max"}"#).unwrap();
        assert_eq!(l, LayoutSpec::new(LayoutKind::Max));
        assert_eq!(serde_json::to_string(&l).unwrap(), r#"{"kind":"Max"}"#);
    }

    #[test]
    fn layout_params_carry_palette_refs() {
        let l: LayoutSpec = serde_json::from_str(
            r#"{"kind":"Columns","params":{"border_width":1,"border_focus":{"palette":1,"channel":"fg"}}}"#,
        )
        .unwrap();
        assert_eq!(l.kind, LayoutKind::Columns);
        assert_eq!(l.params.get("border_width"), Some(&ParamValue::Int(1)));
        assert_eq!(
            l.params.palette_refs().collect::<Vec<_>>(),
            vec![("border_focus", PaletteRef::foreground(1))]
        );
    }

    #[test]
    fn unknown_layout_rejected() {
        assert!(serde_json::from_str::<LayoutSpec>(r#"{"kind":"Spiral"}"#).is_err());
    }

    #[test]
    fn cycle_wraps_in_declaration_order() {
        let ls = vec![
            LayoutSpec::new(LayoutKind::Columns),
            LayoutSpec::new(LayoutKind::Max),
            LayoutSpec::new(LayoutKind::Bsp),
        ];
        assert_eq!(next_index(&ls, 0), Some(1));
        assert_eq!(next_index(&ls, 1), Some(2));
        assert_eq!(next_index(&ls, 2), Some(0));
        assert_eq!(next_index(&[], 0), None);
    }
}
