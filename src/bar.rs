//! Screens, status bars and bar widgets.
//!
//! A [`Screen`] owns at most one bar per edge; a [`Bar`] owns its widgets in
//! declaration order, which is also the left-to-right render order.  Widget
//! options are forwarded to the host untouched.

use crate::params::Params;
use serde::{Deserialize, Serialize};

/// Widget types the host knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    TextBox,
    GroupBox,
    Spacer,
    Systray,
    Volume,
    Clock,
    Prompt,
    WindowName,
    CurrentLayout,
    Battery,
}

/// A bar widget and its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub kind: WidgetKind,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl Widget {
    pub fn new(kind: WidgetKind, params: Params) -> Self {
        Self { kind, params }
    }
}

fn default_opacity() -> f64 {
    1.0
}

/// A status bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Widgets, rendered left to right in this order.
    pub widgets: Vec<Widget>,
    /// Height in pixels.
    pub size: u32,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Bar {
    pub fn new(widgets: Vec<Widget>, size: u32) -> Self {
        Self {
            widgets,
            size,
            opacity: default_opacity(),
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Widget kinds in render order.
    pub fn kinds(&self) -> Vec<WidgetKind> {
        self.widgets.iter().map(|w| w.kind).collect()
    }
}

/// One physical or virtual display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Bar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Bar>,
}

impl Screen {
    pub fn with_top(bar: Bar) -> Self {
        Self {
            top: Some(bar),
            bottom: None,
        }
    }

    /// Bars on this screen, top first.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.top.iter().chain(self.bottom.iter())
    }

    /// Every widget on this screen, in bar order then render order.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.bars().flat_map(|b| b.widgets.iter())
    }
}
